use serde::{Deserialize, Serialize};

/// Machine-readable rejection code carried in the move response body.
/// Dispatch happens on this field, never on the human-readable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveErrorCode {
    WipLimitExceeded,
    Generic,
}

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("WIP limit exceeded: {0}")]
    WipLimitExceeded(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("a drag gesture is already in progress")]
    DragInProgress,

    #[error("board invariant violated: {0}")]
    InvariantViolation(String),
}

impl BoardError {
    /// True for the distinguished, user-facing WIP rejection; false for
    /// everything that should surface as a generic failure.
    pub fn is_wip_rejection(&self) -> bool {
        matches!(self, BoardError::WipLimitExceeded(_))
    }
}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        BoardError::Transport(err.to_string())
    }
}
