//! Unique test data generation.

use uuid::Uuid;

/// A unique string with the given prefix, for test isolation.
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_unique_and_prefixed() {
        let a = unique_str("content");
        let b = unique_str("content");
        assert_ne!(a, b);
        assert!(a.starts_with("content-"));
    }
}
