//! Aggregate module
//!
//! The book aggregate root and its state machine.

pub mod book;
pub mod book_state;

pub use book::Book;
pub use book_state::BookState;
