//! Shared helpers for gateway tests.
//!
//! Kept free of `gateway` types so assertions exercise the wire contract,
//! not internal structs.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;

pub use problem_details::assert_problem_details;
pub use unique_helpers::unique_str;
