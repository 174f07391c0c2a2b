//! Error types for paste-clean operations.
//!
//! The normalization passes themselves are infallible. Errors only come from
//! host-side entry points: serialization into a writer and builders that
//! validate the nodes they are handed.

use thiserror::Error;

/// Errors that can occur while driving the normalization passes.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Expected an element node, got {0}")]
    NotAnElement(String),
}

pub type Result<T> = std::result::Result<T, Error>;
