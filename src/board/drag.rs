use crate::board::filter::Lane;
use crate::domain::BoardError;

/// Ephemeral record of one drag gesture, created by
/// [`DragTracker::begin`] and discarded on every exit path: drop,
/// cancel, or reconciliation failure.
#[derive(Debug, Clone, Copy)]
pub struct DragContext {
    pub token: u64,
    pub card_id: i64,
    pub source_column_id: i64,
    pub source_lane: Lane,
    pub source_index: usize,
}

/// Tracks whether a drag gesture is in flight so background refreshes
/// can be suppressed for its duration. One instance per board view,
/// process-local, never persisted.
#[derive(Debug, Default)]
pub struct DragTracker {
    active: Option<u64>,
    next_token: u64,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session. Rejected while another gesture is active: a
    /// new drag may not begin before the previous one has ended.
    pub fn begin(
        &mut self,
        card_id: i64,
        source_column_id: i64,
        source_lane: Lane,
        source_index: usize,
    ) -> Result<DragContext, BoardError> {
        if self.active.is_some() {
            return Err(BoardError::DragInProgress);
        }
        self.next_token += 1;
        let token = self.next_token;
        self.active = Some(token);
        Ok(DragContext {
            token,
            card_id,
            source_column_id,
            source_lane,
            source_index,
        })
    }

    /// Ends the session identified by `token`. A stale token (an
    /// already-ended gesture) is ignored and reported as `false`.
    pub fn end(&mut self, token: u64) -> bool {
        if self.active == Some(token) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// True if `token` belongs to the most recently issued session,
    /// whether or not it is still active. Completions carrying an
    /// older token must not overwrite current state.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.next_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_rejected_while_active() {
        let mut tracker = DragTracker::new();
        let ctx = tracker.begin(1, 1, Lane::Matching, 0).unwrap();
        assert!(tracker.is_dragging());

        let err = tracker.begin(2, 1, Lane::Matching, 1).unwrap_err();
        assert!(matches!(err, BoardError::DragInProgress));

        assert!(tracker.end(ctx.token));
        assert!(!tracker.is_dragging());
        assert!(tracker.begin(2, 1, Lane::Matching, 1).is_ok());
    }

    #[test]
    fn test_end_with_stale_token_is_ignored() {
        let mut tracker = DragTracker::new();
        let first = tracker.begin(1, 1, Lane::Matching, 0).unwrap();
        assert!(tracker.end(first.token));

        let second = tracker.begin(2, 1, Lane::Matching, 0).unwrap();
        // ending the old gesture again must not tear down the new one
        assert!(!tracker.end(first.token));
        assert!(tracker.is_dragging());
        assert!(tracker.end(second.token));
    }

    #[test]
    fn test_tokens_are_monotonic() {
        let mut tracker = DragTracker::new();
        let a = tracker.begin(1, 1, Lane::Matching, 0).unwrap();
        tracker.end(a.token);
        let b = tracker.begin(1, 1, Lane::Matching, 0).unwrap();
        assert!(b.token > a.token);
        assert!(tracker.is_current(b.token));
        assert!(!tracker.is_current(a.token));
    }
}
