//! Error type definitions.
//!
//! This module defines the error types and outcome kinds used throughout the application.

use log::SetLoggerError;
use serde::{Serialize, Serializer};
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Reasons a raw string is rejected as a URL.
///
/// This is the only failure the scoring pipeline knows about. `Analyzer::analyze`
/// converts it into an invalid `AnalysisResult` instead of returning it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty or whitespace only.
    #[error("Invalid URL: input is empty.")]
    Empty,

    /// Input is not an absolute URL.
    #[error("Invalid URL format: {reason}")]
    Malformed {
        /// Parser diagnostic
        reason: String,
    },

    /// Scheme is not in the configured allow-list.
    #[error("Invalid protocol '{scheme}'. Only {allowed} are allowed.")]
    UnsupportedScheme {
        /// Scheme found in the input
        scheme: String,
        /// Human-readable allow-list, e.g. "http, https"
        allowed: String,
    },

    /// URL parsed but carries no host.
    #[error("Invalid URL: Missing domain.")]
    MissingHost,
}

impl Serialize for ParseError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Configuration validation error with field-specific context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid configuration for '{field}': {message}")]
pub struct ConfigValidationError {
    /// Name of the offending configuration field
    pub field: &'static str,
    /// What is wrong and what is expected
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Outcome of processing a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum OutcomeType {
    /// URL parsed and was scored
    Valid,
    /// URL failed to parse or used a disallowed scheme
    Invalid,
    /// URL matched the blocklist
    Blocked,
}

impl std::fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OutcomeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeType::Valid => "Valid",
            OutcomeType::Invalid => "Invalid",
            OutcomeType::Blocked => "Blocked",
        }
    }
}
