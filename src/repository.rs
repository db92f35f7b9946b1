//! Book repository
//!
//! Abstract persistence contract for the book aggregate, with an in-memory
//! reference implementation. Serialization of concurrent writers to the
//! same book is enforced here via the aggregate version: a save must carry
//! exactly one transition on top of the stored version, anything else is a
//! conflict that the caller resolves by reloading and replaying.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use crate::aggregate::Book;
use crate::domain::{BookId, Version};

/// Version mismatch detected at save time.
///
/// Transient by nature: the correct response is to reload the book and
/// replay the triggering event against the fresh state, since legality may
/// come out differently there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("version conflict on book {book_id}: stored {current}, attempted {attempted}")]
pub struct ConflictError {
    pub book_id: BookId,
    pub current: Version,
    pub attempted: Version,
}

/// Storage contract for book aggregates.
///
/// A lookup miss is not an error: the book simply does not exist in this
/// bounded context and callers treat it as "nothing to do".
pub trait BookRepository: Send + Sync {
    /// Look up a book by id.
    fn find_by(&self, book_id: BookId) -> Option<Book>;

    /// Persist a book, conditioned on its version.
    ///
    /// For an existing book the incoming version must be exactly one ahead
    /// of the stored one; a book not yet stored is inserted as-is.
    fn save(&self, book: Book) -> Result<(), ConflictError>;
}

/// In-memory [`BookRepository`] with optimistic concurrency checks.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Mutex<HashMap<BookId, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn find_by(&self, book_id: BookId) -> Option<Book> {
        let books = self.books.lock().expect("book store mutex poisoned");
        books.get(&book_id).cloned()
    }

    fn save(&self, book: Book) -> Result<(), ConflictError> {
        let mut books = self.books.lock().expect("book store mutex poisoned");

        if let Some(stored) = books.get(&book.book_id()) {
            if book.version() != stored.version().next() {
                return Err(ConflictError {
                    book_id: book.book_id(),
                    current: stored.version(),
                    attempted: book.version(),
                });
            }
        }

        books.insert(book.book_id(), book);
        Ok(())
    }
}
