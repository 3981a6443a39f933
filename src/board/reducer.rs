use crate::domain::Board;

/// A fully resolved move: swimlane-qualified drop targets must already
/// have been mapped to a real column id and an index within the full
/// column sequence (see [`crate::board::filter::resolve_drop_index`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInstruction {
    pub card_id: i64,
    pub source_column_id: i64,
    pub dest_column_id: i64,
    pub dest_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The candidate next board state. Computed, not committed: the
    /// store's owner decides whether to publish it.
    Applied(Board),
    /// Nothing to do: the card is gone (concurrent deletion), the
    /// destination column is unknown, or the drop is an identity move.
    Noop,
}

/// Pure optimistic move reducer. Total over well-formed input: it never
/// panics for structurally valid instructions and never produces a
/// state violating the uniqueness or density invariants.
pub fn apply_move(board: &Board, mv: &MoveInstruction) -> MoveOutcome {
    let Some(source) = board.column(mv.source_column_id) else {
        return MoveOutcome::Noop;
    };
    let Some(source_index) = source.cards.iter().position(|c| c.id == mv.card_id) else {
        // The card was removed underneath us, e.g. by a concurrent
        // deletion. Treat as a no-op rather than an error.
        return MoveOutcome::Noop;
    };
    if board.column(mv.dest_column_id).is_none() {
        return MoveOutcome::Noop;
    }

    let same_column = mv.source_column_id == mv.dest_column_id;
    if same_column {
        let len_after_removal = source.cards.len() - 1;
        let clamped = mv.dest_index.min(len_after_removal);
        if clamped == source_index {
            return MoveOutcome::Noop;
        }
    }

    let mut next = board.clone();

    let card = match next.column_mut(mv.source_column_id) {
        Some(source) => {
            let card = source.cards.remove(source_index);
            source.recount();
            card
        }
        None => return MoveOutcome::Noop,
    };

    match next.column_mut(mv.dest_column_id) {
        Some(dest) => {
            let clamped = mv.dest_index.min(dest.cards.len());
            dest.cards.insert(clamped, card);
            dest.recount();
        }
        None => return MoveOutcome::Noop,
    }

    debug_assert!(
        next.verify_invariants().is_ok(),
        "move reducer produced an inconsistent board"
    );

    MoveOutcome::Applied(next)
}
