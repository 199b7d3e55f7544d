//! Every helper takes the error as `Option<&dyn Display>`: `None` is the absent
//! error and the `Display` output is the message being compared.

use std::fmt::Display;

use regex::Regex;
use testx_core::errors::{ErrorInfo, TestxError};

/// Compiles `source` into a regular expression.
pub fn compile_pattern(source: &str) -> Result<Regex, TestxError> {
    Regex::new(source).map_err(|err| {
        TestxError::Pattern(
            ErrorInfo::new("invalid-pattern", err.to_string()).with_context("source", source),
        )
    })
}

/// Returns true if both errors are absent, both are the same object, or both
/// are present with identical messages.
pub fn errors_equal(lhs: Option<&dyn Display>, rhs: Option<&dyn Display>) -> bool {
    match (lhs, rhs) {
        (None, None) => true,
        (Some(lhs), Some(rhs)) => {
            std::ptr::eq(
                lhs as *const dyn Display as *const (),
                rhs as *const dyn Display as *const (),
            ) || lhs.to_string() == rhs.to_string()
        }
        _ => false,
    }
}

/// Returns true if `err` is present and its message is exactly `text`.
pub fn error_equals(err: Option<&dyn Display>, text: &str) -> bool {
    err.is_some_and(|err| err.to_string() == text)
}

/// Returns true if `err` is present and its message matches the pattern `source`.
///
/// # Panics
///
/// Panics if `source` is not a valid regular expression, whether or not `err`
/// is present. A malformed pattern is a broken test, not a failed match.
#[track_caller]
pub fn error_matches(err: Option<&dyn Display>, source: &str) -> bool {
    let pattern = match compile_pattern(source) {
        Ok(pattern) => pattern,
        Err(compile_err) => panic!("{compile_err}"),
    };
    error_matches_pattern(err, Some(&pattern))
}

/// Returns true if `err` is present and its message matches `pattern`.
///
/// # Panics
///
/// Panics if `pattern` is `None`, whether or not `err` is present.
#[track_caller]
pub fn error_matches_pattern(err: Option<&dyn Display>, pattern: Option<&Regex>) -> bool {
    let Some(pattern) = pattern else {
        panic!("error_matches_pattern called without a compiled pattern");
    };
    err.is_some_and(|err| pattern.is_match(&err.to_string()))
}
