//! Client-side reconciliation engine for a Kanban ticket board.
//!
//! The engine owns a cached copy of the server's board, projects each
//! column into swimlanes under a region filter, applies drag-and-drop
//! moves optimistically, and reconciles the result against the
//! authoritative server response, rolling back when a move is rejected
//! (for example on a WIP-limit violation).

pub mod board;
pub mod config;
pub mod domain;
pub mod gateway;

pub use board::{
    DragContext, DropOutcome, DropTarget, FilterState, Lane, ReconcileController, RollbackReason,
};
pub use config::Config;
pub use domain::{Board, BoardError, Card, Column, Region};
pub use gateway::{BoardGateway, HttpGateway, MoveRequest};
