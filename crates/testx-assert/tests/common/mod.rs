#![allow(dead_code)]

use std::io;

use thiserror::Error;

/// Error whose message is fixed at construction.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SampleError(pub String);

pub fn make_error(message: &str) -> SampleError {
    SampleError(message.to_string())
}

pub fn io_error(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, message.to_string())
}
