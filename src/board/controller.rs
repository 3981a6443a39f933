use std::time::Duration;

use crate::board::drag::{DragContext, DragTracker};
use crate::board::filter::{partition, resolve_drop_index, FilterState, Lane, Swimlanes};
use crate::board::reducer::{apply_move, MoveInstruction, MoveOutcome};
use crate::board::store::BoardStore;
use crate::config::Config;
use crate::domain::{Board, BoardError};
use crate::gateway::{BoardGateway, MoveRequest};

/// A swimlane-qualified drop position, as reported by the view layer.
#[derive(Debug, Clone, Copy)]
pub struct DropTarget {
    pub column_id: i64,
    pub lane: Lane,
    pub lane_index: usize,
}

/// An optimistically applied move awaiting server confirmation.
/// Produced by [`ReconcileController::drop_card`] and consumed by
/// [`ReconcileController::reconcile`].
#[derive(Debug)]
pub struct PendingMove {
    token: u64,
    card_id: i64,
    request: MoveRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackReason {
    /// The destination column's WIP limit would be violated. Distinct,
    /// user-facing, non-fatal.
    WipLimit { message: String },
    /// Network or server failure unrelated to business rules.
    Failure { message: String },
}

impl RollbackReason {
    pub fn user_message(&self) -> String {
        match self {
            RollbackReason::WipLimit { message } => {
                format!("Move rejected, WIP limit reached: {}", message)
            }
            RollbackReason::Failure { .. } => {
                "Could not move the card. The board has been restored.".into()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Identity drop or a card that vanished underneath the gesture.
    /// No state changed that needs surfacing.
    NoOp,
    /// The server accepted the move; the cached board is in sync.
    Reconciled,
    /// The server rejected the move; the authoritative snapshot has
    /// been restored (or its restoration is deferred behind an active
    /// drag).
    RolledBack(RollbackReason),
}

/// Owner of the cached board and sole writer to it. Drives each drag
/// gesture through `idle → dragging → optimistically-applied →
/// {reconciled | rolled-back} → idle` and keeps the cache consistent
/// with the server across rejections, timeouts and concurrent edits.
pub struct ReconcileController<G> {
    gateway: G,
    store: BoardStore,
    tracker: DragTracker,
    filter: FilterState,
    pending_refresh: bool,
    move_timeout: Duration,
}

impl<G: BoardGateway> ReconcileController<G> {
    pub fn new(gateway: G, config: &Config) -> Self {
        Self {
            gateway,
            store: BoardStore::new(),
            tracker: DragTracker::new(),
            filter: FilterState::All,
            pending_refresh: false,
            move_timeout: Duration::from_secs(config.move_timeout_secs),
        }
    }

    pub fn board(&self) -> &Board {
        self.store.board()
    }

    pub fn generation(&self) -> u64 {
        self.store.generation()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn filter(&self) -> FilterState {
        self.filter
    }

    /// Selecting a filter only changes how columns project into
    /// swimlanes; card and column data are untouched.
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    /// Pure projection of one column into its two swimlanes under the
    /// current filter. Re-derived from the canonical sequence on every
    /// call; the split is never stored.
    pub fn swimlanes(&self, column_id: i64) -> Option<Swimlanes<'_>> {
        self.store
            .board()
            .column(column_id)
            .map(|column| partition(&column.cards, self.filter))
    }

    /// Initial load of the authoritative snapshot.
    pub async fn load(&mut self) -> Result<(), BoardError> {
        let mut board = self.gateway.fetch_board().await?;
        board.normalize();
        self.store.commit(board)?;
        Ok(())
    }

    /// Replaces the cache with a fresh authoritative snapshot. While a
    /// drag is active the request is deferred instead of applied, so
    /// the card the user is holding is never reset mid-gesture; the
    /// deferred refresh runs when the gesture ends. Returns whether a
    /// snapshot was actually applied.
    pub async fn refresh(&mut self) -> Result<bool, BoardError> {
        if self.tracker.is_dragging() {
            tracing::debug!("refresh deferred: drag in progress");
            self.pending_refresh = true;
            return Ok(false);
        }
        self.pending_refresh = false;
        let mut board = self.gateway.fetch_board().await?;
        board.normalize();
        self.store.commit(board)?;
        Ok(true)
    }

    pub fn has_pending_refresh(&self) -> bool {
        self.pending_refresh
    }

    /// Starts a drag gesture for a card currently on the board.
    pub fn begin_drag(&mut self, card_id: i64) -> Result<DragContext, BoardError> {
        let (source_column_id, source_index) = self
            .store
            .board()
            .locate_card(card_id)
            .ok_or_else(|| BoardError::NotFound(format!("card {}", card_id)))?;

        let source_lane = match self.store.board().column(source_column_id) {
            Some(column) if self.filter.matches(&column.cards[source_index]) => Lane::Matching,
            _ => Lane::NonMatching,
        };

        self.tracker
            .begin(card_id, source_column_id, source_lane, source_index)
    }

    /// A drop outside any valid target: immediate session end, no
    /// network call, no state change. A refresh deferred during the
    /// gesture runs now.
    pub async fn cancel_drag(&mut self, ctx: DragContext) -> Result<(), BoardError> {
        self.tracker.end(ctx.token);
        self.flush_deferred_refresh().await?;
        Ok(())
    }

    /// Optimistic phase of a drop. Resolves the swimlane target to a
    /// column-global index, applies the move reducer and publishes the
    /// candidate state immediately, without waiting for the server.
    /// Ends the drag session on every path. Returns the pending move
    /// to hand to [`reconcile`](Self::reconcile), or `None` when the
    /// drop was a no-op and no request needs to go out.
    pub fn drop_card(
        &mut self,
        ctx: DragContext,
        target: DropTarget,
    ) -> Result<Option<PendingMove>, BoardError> {
        self.tracker.end(ctx.token);

        let Some(dest_column) = self.store.board().column(target.column_id) else {
            return Ok(None);
        };
        let dest_index =
            resolve_drop_index(&dest_column.cards, self.filter, target.lane, target.lane_index);

        let instruction = MoveInstruction {
            card_id: ctx.card_id,
            source_column_id: ctx.source_column_id,
            dest_column_id: target.column_id,
            dest_index,
        };

        match apply_move(self.store.board(), &instruction) {
            MoveOutcome::Noop => Ok(None),
            MoveOutcome::Applied(next) => {
                self.store.commit(next)?;
                tracing::info!(
                    card_id = ctx.card_id,
                    from_column = ctx.source_column_id,
                    to_column = target.column_id,
                    position = dest_index,
                    "optimistic move applied"
                );
                Ok(Some(PendingMove {
                    token: ctx.token,
                    card_id: ctx.card_id,
                    request: MoveRequest {
                        from_column: ctx.source_column_id,
                        to_column: target.column_id,
                        new_position: dest_index,
                    },
                }))
            }
        }
    }

    /// Reconciliation phase: issues the move to the server and settles
    /// the gesture. Applied against whatever the current local state is
    /// at resolution time, never a snapshot captured at request time;
    /// a resolution arriving after a newer gesture has begun re-fetches
    /// rather than overwriting.
    pub async fn reconcile(&mut self, pending: PendingMove) -> Result<DropOutcome, BoardError> {
        if !self.tracker.is_current(pending.token) {
            tracing::debug!(
                card_id = pending.card_id,
                "reconciling behind a newer gesture"
            );
        }

        let result = match tokio::time::timeout(
            self.move_timeout,
            self.gateway.move_card(pending.card_id, &pending.request),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(BoardError::Transport("move request timed out".into())),
        };

        match result {
            Ok(_card) => {
                tracing::info!(card_id = pending.card_id, "move confirmed by server");
                // Optimistic positions are already right; a targeted
                // re-fetch syncs counts and any concurrent edits.
                self.refresh().await?;
                Ok(DropOutcome::Reconciled)
            }
            Err(BoardError::NotFound(detail)) => {
                // The card was deleted while the request was in flight.
                // Not a user-facing error; just resync.
                tracing::info!(card_id = pending.card_id, %detail, "moved card no longer exists");
                self.refresh().await?;
                Ok(DropOutcome::NoOp)
            }
            Err(BoardError::WipLimitExceeded(message)) => {
                self.rollback(pending.card_id).await?;
                Ok(DropOutcome::RolledBack(RollbackReason::WipLimit {
                    message,
                }))
            }
            Err(err) => {
                self.rollback(pending.card_id).await?;
                Ok(DropOutcome::RolledBack(RollbackReason::Failure {
                    message: err.to_string(),
                }))
            }
        }
    }

    /// Convenience wrapper running a full gesture end to end.
    pub async fn perform_move(
        &mut self,
        card_id: i64,
        target: DropTarget,
    ) -> Result<DropOutcome, BoardError> {
        let ctx = self.begin_drag(card_id)?;
        match self.drop_card(ctx, target)? {
            Some(pending) => self.reconcile(pending).await,
            None => {
                self.flush_deferred_refresh().await?;
                Ok(DropOutcome::NoOp)
            }
        }
    }

    /// Discards the optimistic overlay by restoring the latest
    /// authoritative snapshot. External edits may have landed since the
    /// gesture began, so the restored state is whatever the server says
    /// now, not the pre-move cache.
    async fn rollback(&mut self, card_id: i64) -> Result<(), BoardError> {
        tracing::warn!(card_id, "move rejected, restoring authoritative board");
        self.refresh().await?;
        Ok(())
    }

    async fn flush_deferred_refresh(&mut self) -> Result<(), BoardError> {
        if self.pending_refresh && !self.tracker.is_dragging() {
            self.refresh().await?;
        }
        Ok(())
    }
}
