//! Content domain: data-driven locomotion tuning loaded from RON files.

mod loader;
#[cfg(test)]
mod tests;

pub use loader::{DEFAULT_TUNING_PATH, load_tuning, parse_tuning};

/// Failure to produce a usable [`LocomotionTuning`](crate::locomotion::LocomotionTuning).
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("invalid tuning field '{field}': {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
