use thiserror::Error;

/// Errors raised at the fallible edges of the crate.
///
/// Class resolution and merging never fail; these come from parsing
/// breakpoint names, option values, width tables and JSON configuration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown breakpoint `{0}`")]
    UnknownBreakpoint(String),

    #[error("invalid {kind} value `{value}`")]
    InvalidOption { kind: &'static str, value: String },

    #[error("screen widths must be strictly increasing, got {0:?}")]
    UnorderedWidths([f64; 5]),

    #[cfg(feature = "serde")]
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
