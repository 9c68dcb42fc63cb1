// core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitnessError {
    /// Frame-kilden kunne ikke åpnes/leses ved start av økten (fatalt for økten).
    #[error("frame source unavailable: {0}")]
    FrameSource(String),

    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid frame {index}: {reason}")]
    InvalidFrame { index: u64, reason: String },

    #[error("frame {index} arrived after frame {previous}")]
    OutOfOrderFrame { index: u64, previous: u64 },

    #[error("unknown test type: {0}")]
    UnknownExercise(String),

    #[error("unknown gender: {0}")]
    UnknownGender(String),
}

impl FitnessError {
    /// Konverter serde_path_to_error-feil til Parse med sti.
    pub fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        FitnessError::Parse {
            path: err.path().to_string(),
            message: err.inner().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FitnessError>;
