pub mod card;
pub mod column;
pub mod error;
pub mod region;

pub use card::{Card, UserRef, MAX_TAGS};
pub use column::{Board, Column};
pub use error::{BoardError, MoveErrorCode};
pub use region::Region;
