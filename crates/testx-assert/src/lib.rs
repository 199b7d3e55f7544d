#![deny(missing_docs)]
#![doc = "Test assertion helpers: errors, panics, float tolerance and short runs."]

/// Run configuration shared by the helpers.
pub mod config;
/// Error message comparison and pattern matching.
pub mod errors;
/// Floating point tolerance checks.
pub mod float;
/// Panic interception and payload capture.
pub mod recover;
/// Short-mode test skipping.
pub mod skip;

pub use config::TestConfig;
pub use errors::{
    compile_pattern, error_equals, error_matches, error_matches_pattern, errors_equal,
};
pub use float::almost_equal;
pub use recover::{captured, panicked, run, Outcome, Payload};
pub use skip::skip_if_short;
pub use testx_core::errors::{ErrorInfo, TestxError};
