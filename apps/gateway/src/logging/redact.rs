//! Redaction of secret material from log output.
//!
//! Capability tokens travel in query strings (media elements cannot set
//! headers), so anything that logs a query string must pass it through
//! [`redact`] first.

use once_cell::sync::Lazy;
use regex::Regex;

// Signed token: two base64url segments joined by '.'.
static SIGNED_TOKEN: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}").unwrap()
});

// Long opaque runs (keys, raw MACs) that have no business in logs.
static OPAQUE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9+/_-]{32,}={0,2}\b").unwrap()
});

/// Replace token-like substrings with `[REDACTED]`. Signed tokens are
/// matched first so their segments are not half-matched by the opaque rule.
pub fn redact(input: &str) -> String {
    let pass = SIGNED_TOKEN.replace_all(input, "[REDACTED]");
    OPAQUE_TOKEN.replace_all(&pass, "[REDACTED]").into_owned()
}
