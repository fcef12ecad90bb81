//! Error types for the assessing core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while resolving exemption phases
//! or loading the exemption calendar.

use thiserror::Error;

/// The main error type for the assessing core.
///
/// Tax value formatting never produces one of these; malformed figures are
/// rendered as `"N/A"` instead.
///
/// # Example
///
/// ```
/// use assessing_core::error::AssessmentError;
///
/// let error = AssessmentError::UnknownExemptionType {
///     value: "senior".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown exemption type: senior");
/// ```
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The date anchors configured for an exemption type are unusable.
    #[error("Invalid calendar for {exemption_type} exemption: {message}")]
    InvalidCalendar {
        /// The exemption type whose anchors are invalid.
        exemption_type: String,
        /// A description of what made the anchors invalid.
        message: String,
    },

    /// An exemption type string did not name a known exemption.
    #[error("Unknown exemption type: {value}")]
    UnknownExemptionType {
        /// The unrecognized value.
        value: String,
    },

    /// An argument passed to the phase resolver was outside its domain.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The argument that was invalid.
        field: String,
        /// A description of what made the argument invalid.
        message: String,
    },
}

/// A type alias for Results that return AssessmentError.
pub type AssessmentResult<T> = Result<T, AssessmentError>;
