#![deny(missing_docs)]
#![doc = "Shared error types for the testx assertion helpers."]

pub mod errors;

pub use errors::{ErrorInfo, TestxError};
