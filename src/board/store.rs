use crate::domain::{Board, BoardError};

/// Single owned container for the cached board. The reconciliation
/// controller is the sole writer (`commit` is crate-private); everyone
/// else reads snapshots. The generation counter lets late callbacks
/// detect that the state they captured is no longer current.
#[derive(Debug, Default)]
pub struct BoardStore {
    board: Board,
    generation: u64,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Publishes a new board state. Rejects (and, in debug builds,
    /// asserts on) a state that violates the structural invariants: a
    /// duplicated or orphaned card here is a programming error, never
    /// something to tolerate silently.
    pub(crate) fn commit(&mut self, board: Board) -> Result<u64, BoardError> {
        if let Err(err) = board.verify_invariants() {
            debug_assert!(false, "refusing to commit inconsistent board: {err}");
            tracing::error!(error = %err, "refusing to commit inconsistent board");
            return Err(err);
        }
        self.board = board;
        self.generation += 1;
        Ok(self.generation)
    }
}
