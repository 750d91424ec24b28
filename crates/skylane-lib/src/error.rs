use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Skylane library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// An unreachable itinerary is not represented here: "no route" is a
/// legitimate query outcome and is modeled by [`crate::path::PathOutcome`]
/// instead of an error variant.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an airport code is not three ASCII letters.
    #[error("invalid airport code: {code:?} (expected three ASCII letters)")]
    InvalidAirportCode { code: String },

    /// Raised when the same airport code appears twice during registry load.
    #[error("duplicate airport code encountered: {code}")]
    DuplicateAirport { code: String },

    /// Raised when a route carries a non-positive or non-finite weight.
    #[error("invalid weight {weight} on route {origin} -> {destination}")]
    InvalidWeight {
        origin: String,
        destination: String,
        weight: f64,
    },

    /// Raised when a route record is structurally malformed.
    #[error("invalid route {origin} -> {destination}: {message}")]
    InvalidRoute {
        origin: String,
        destination: String,
        message: String,
    },

    /// Raised when a route or query references a code that is not known.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when a dataset file cannot be parsed.
    #[error("failed to read dataset {path}: {message}")]
    Dataset { path: PathBuf, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Construct an [`Error::UnknownAirport`] without suggestions.
    pub fn unknown_airport(code: impl Into<String>) -> Self {
        Error::UnknownAirport {
            code: code.into(),
            suggestions: Vec::new(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
