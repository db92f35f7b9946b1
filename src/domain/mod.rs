//! Domain module
//!
//! Core domain types shared across the lending core.

pub mod clock;
pub mod error;
pub mod events;
pub mod ids;
pub mod version;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::TransitionError;
pub use events::{BookDuplicateHoldFound, PatronEvent};
pub use ids::{BookId, BookType, LibraryBranchId, PatronId};
pub use version::Version;
