//! Error types for the quiz engine.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors surfaced by session and game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("unknown word set '{key}'")]
    UnknownWordSet { key: String },

    #[error("word set '{key}' has no words")]
    EmptyWordSet { key: String },

    #[error("question {position} is out of range (session has {length})")]
    OutOfRange { position: usize, length: usize },

    #[error("current question has already been answered")]
    AlreadyAnswered,

    #[error("current question has not been answered yet")]
    Unanswered,

    #[error("no game in progress")]
    NotPlaying,

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl QuizError {
    /// True for the failures that reject a session start (bad or missing word set).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::UnknownWordSet { .. } | Self::EmptyWordSet { .. }
        )
    }
}
