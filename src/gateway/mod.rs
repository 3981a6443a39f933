pub mod http;

use serde::{Deserialize, Serialize};

use crate::domain::{Board, BoardError, Card, MoveErrorCode};

pub use http::HttpGateway;

/// Wire payload for the one mutating call this subsystem issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from_column: i64,
    pub to_column: i64,
    pub new_position: usize,
}

/// Structured rejection body. The `code` field is the dispatch
/// mechanism; the message is display-only and must never be parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRejection {
    pub code: MoveErrorCode,
    pub message: String,
}

impl MoveRejection {
    pub fn into_error(self) -> BoardError {
        match self.code {
            MoveErrorCode::WipLimitExceeded => BoardError::WipLimitExceeded(self.message),
            MoveErrorCode::Generic => BoardError::Transport(self.message),
        }
    }
}

/// The only surface through which the engine reads or mutates board
/// state on the server.
pub trait BoardGateway {
    /// Full snapshot of columns with nested, ordered cards. Called on
    /// initial load and after every reconciliation, success or failure.
    fn fetch_board(&self) -> impl std::future::Future<Output = Result<Board, BoardError>> + Send;

    /// Relocates one card. The server is the authority on WIP-limit
    /// admissibility; rejection arrives as a structured error.
    fn move_card(
        &self,
        card_id: i64,
        request: &MoveRequest,
    ) -> impl std::future::Future<Output = Result<Card, BoardError>> + Send;
}
