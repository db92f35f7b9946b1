//! lending_core
//!
//! Domain core for tracking the lending state of library books. A book
//! moves between available, on hold and checked out in reaction to patron
//! events; the aggregate enforces the transition rules and carries a
//! version for optimistic concurrency, while persistence and event
//! delivery stay behind the [`repository`] and [`publisher`] seams.

pub mod aggregate;
pub mod domain;
pub mod handlers;
pub mod publisher;
pub mod repository;

pub use aggregate::{Book, BookState};
pub use domain::{
    BookDuplicateHoldFound, BookId, BookType, Clock, FixedClock, LibraryBranchId, PatronEvent,
    PatronId, SystemClock, TransitionError, Version,
};
pub use handlers::{HandleError, PatronEventsHandler};
pub use publisher::{CapturingEventPublisher, DomainEventPublisher, LoggingEventPublisher};
pub use repository::{BookRepository, ConflictError, InMemoryBookRepository};
