// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Validation failure for a candidate profile document.
///
/// Raised synchronously by the write path; never recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent or null. The payload is the camelCase
    /// wire path of the field, e.g. `basicInfo.age`.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The candidate could not be decoded: a value of the wrong type
    /// (a string where a number is expected) or an enum value outside
    /// its allowed set.
    #[error("malformed profile document: {0}")]
    Malformed(String),
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, AppError>;
