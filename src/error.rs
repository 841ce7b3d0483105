//! Error types for signal construction, parsing and spectral analysis

use std::fmt;
use thiserror::Error;

/// Errors raised by the signal data model and its text codec
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    /// Text did not match the signal grammar
    #[error("invalid input syntax for signal: \"{input}\". {reason} (at position {position})")]
    Syntax {
        /// The full text that was being decoded
        input: String,
        /// Byte offset where the offending token starts
        position: usize,
        /// What went wrong
        reason: SyntaxReason,
    },

    /// A signal needs at least one sample
    #[error("signal must contain at least one sample")]
    InvalidLength,

    /// Sample index outside `[0, len)`
    #[error("sample index {index} out of range for signal of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Duration is NaN or infinite
    #[error("signal duration must be finite, got {0}")]
    NonFiniteDuration(f64),
}

/// Classified reason for a decode failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxReason {
    /// No floating-point literal at the start of the text
    MissingDuration,

    /// No `[` followed by a first sample after the duration
    MissingOpenBracket,

    /// The sample list is not closed by `]`
    MissingCloseBracket { found: Option<char> },

    /// Non-blank text after the closing `]`
    TrailingContent { found: char },
}

impl fmt::Display for SyntaxReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxReason::MissingDuration => write!(f, "Duration must be specified first"),
            SyntaxReason::MissingOpenBracket => {
                write!(f, "Signal must be comma separated within []")
            }
            SyntaxReason::MissingCloseBracket { found: Some(c) } => {
                write!(f, "Signal must end with ]. Instead got {}", c)
            }
            SyntaxReason::MissingCloseBracket { found: None } => {
                write!(f, "Signal must end with ]. Instead got end of input")
            }
            SyntaxReason::TrailingContent { found } => {
                write!(f, "Signal must end with ]. Instead got trailing {}", found)
            }
        }
    }
}

/// Errors raised by the bundled Fourier transform backends
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The transform was asked to process zero samples
    #[error("cannot transform an empty sample sequence")]
    EmptyInput,
}
