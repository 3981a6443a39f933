use std::sync::{Arc, Mutex};

use board_engine::board::{apply_move, MoveInstruction, MoveOutcome};
use board_engine::domain::{Board, BoardError, Card, Column};
use board_engine::gateway::{BoardGateway, MoveRequest};

pub fn card(id: i64, column_id: i64, position: usize) -> Card {
    Card {
        id,
        column_id,
        title: format!("card-{}", id),
        description: String::new(),
        story_points: 0,
        assignee: None,
        approver: None,
        tags: vec![],
        region: None,
        position,
        created_at: None,
        updated_at: None,
    }
}

pub fn column(id: i64, wip_limit: Option<u32>, cards: Vec<Card>) -> Column {
    let cards_count = cards.len();
    Column {
        id,
        title: format!("column-{}", id),
        color: "#FFFFFF".into(),
        wip_limit,
        cards,
        cards_count,
    }
}

/// Authoritative server-side state behind the fake gateway. Tests hold
/// a handle to it so they can inject failures and concurrent edits
/// between the optimistic apply and the reconciliation.
pub struct ServerState {
    pub board: Board,
    pub fetch_calls: usize,
    pub move_calls: usize,
    pub fail_moves: bool,
}

/// In-memory [`BoardGateway`] enforcing WIP limits the way the real
/// server does: the client's optimistic state may be provisionally
/// wrong and gets corrected through rejection.
#[derive(Clone)]
pub struct FakeGateway {
    pub state: Arc<Mutex<ServerState>>,
}

/// Installs the test log subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

impl FakeGateway {
    pub fn new(board: Board) -> Self {
        init_tracing();
        Self {
            state: Arc::new(Mutex::new(ServerState {
                board,
                fetch_calls: 0,
                move_calls: 0,
                fail_moves: false,
            })),
        }
    }

    pub fn snapshot(&self) -> Board {
        self.state.lock().unwrap().board.clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.state.lock().unwrap().fetch_calls
    }

    pub fn move_calls(&self) -> usize {
        self.state.lock().unwrap().move_calls
    }

    pub fn set_fail_moves(&self, fail: bool) {
        self.state.lock().unwrap().fail_moves = fail;
    }

    /// Simulates an edit landing from another client.
    pub fn edit_board(&self, edit: impl FnOnce(&mut Board)) {
        let mut state = self.state.lock().unwrap();
        edit(&mut state.board);
        state.board.normalize();
    }
}

impl BoardGateway for FakeGateway {
    async fn fetch_board(&self) -> Result<Board, BoardError> {
        let mut state = self.state.lock().unwrap();
        state.fetch_calls += 1;
        Ok(state.board.clone())
    }

    async fn move_card(&self, card_id: i64, request: &MoveRequest) -> Result<Card, BoardError> {
        let mut state = self.state.lock().unwrap();
        state.move_calls += 1;

        if state.fail_moves {
            return Err(BoardError::Transport("injected network failure".into()));
        }

        let Some((current_column, _)) = state.board.locate_card(card_id) else {
            return Err(BoardError::NotFound(format!("card {}", card_id)));
        };

        if request.to_column != current_column {
            let dest = state
                .board
                .column(request.to_column)
                .ok_or_else(|| BoardError::NotFound(format!("column {}", request.to_column)))?;
            if dest.at_wip_limit() {
                return Err(BoardError::WipLimitExceeded(format!(
                    "column '{}' allows at most {} cards",
                    dest.title,
                    dest.wip_limit.unwrap_or(0)
                )));
            }
        }

        let instruction = MoveInstruction {
            card_id,
            source_column_id: current_column,
            dest_column_id: request.to_column,
            dest_index: request.new_position,
        };
        if let MoveOutcome::Applied(next) = apply_move(&state.board, &instruction) {
            state.board = next;
        }

        state
            .board
            .column(request.to_column)
            .and_then(|c| c.cards.iter().find(|c| c.id == card_id))
            .cloned()
            .ok_or_else(|| BoardError::NotFound(format!("card {}", card_id)))
    }
}
