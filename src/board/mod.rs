pub mod controller;
pub mod drag;
pub mod filter;
pub mod reducer;
pub mod store;

pub use controller::{DropOutcome, DropTarget, PendingMove, ReconcileController, RollbackReason};
pub use drag::{DragContext, DragTracker};
pub use filter::{partition, resolve_drop_index, FilterState, Lane, Swimlanes};
pub use reducer::{apply_move, MoveInstruction, MoveOutcome};
pub use store::BoardStore;
