//! Book aggregate
//!
//! Aggregate root for a single book in the lending system. The book owns
//! its identity, its type, exactly one current [`BookState`] and its
//! [`Version`]; all state changes are mediated through it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{BookId, BookType, LibraryBranchId, PatronId, TransitionError, Version};

use super::BookState;

/// A book, the unit of consistency in the lending core.
///
/// Every mutating operation delegates the legality check to the current
/// state's pure transition and, only when it succeeds, swaps in the
/// returned state and advances the version by exactly one. A rejected
/// transition leaves both state and version untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    book_id: BookId,
    book_type: BookType,
    state: BookState,
    version: Version,
}

impl Book {
    /// Create a new book, available at `branch`, at [`Version::zero`].
    pub fn new(book_id: BookId, book_type: BookType, branch: LibraryBranchId) -> Self {
        Self {
            book_id,
            book_type,
            state: BookState::Available { branch },
            version: Version::zero(),
        }
    }

    /// Rehydrate a book from an already-known state and version, e.g. when
    /// loading from storage or converting a legacy representation.
    pub fn from_state(
        book_id: BookId,
        book_type: BookType,
        state: BookState,
        version: Version,
    ) -> Self {
        Self {
            book_id,
            book_type,
            state,
            version,
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Place this book on hold for `patron` at `branch` until `hold_till`.
    pub fn place_on_hold(
        &mut self,
        patron: PatronId,
        branch: LibraryBranchId,
        hold_till: DateTime<Utc>,
    ) -> Result<(), TransitionError> {
        let next = self.state.place_on_hold(patron, branch, hold_till)?;
        self.commit(next);
        Ok(())
    }

    /// Check this book out to `patron` at `branch`.
    pub fn checkout(
        &mut self,
        patron: PatronId,
        branch: LibraryBranchId,
    ) -> Result<(), TransitionError> {
        let next = self.state.checkout(patron, branch)?;
        self.commit(next);
        Ok(())
    }

    /// Return this book to `branch`.
    pub fn return_book(&mut self, branch: LibraryBranchId) -> Result<(), TransitionError> {
        let next = self.state.return_book(branch)?;
        self.commit(next);
        Ok(())
    }

    /// Cancel the current hold.
    pub fn cancel_hold(&mut self) -> Result<(), TransitionError> {
        let next = self.state.cancel_hold()?;
        self.commit(next);
        Ok(())
    }

    /// Expire the current hold if `now` is past its deadline.
    ///
    /// A hold that has not run out yet is a no-op: same state, same
    /// version. Only an actual change advances the version.
    pub fn expire_hold(&mut self, now: DateTime<Utc>) -> Result<(), TransitionError> {
        let next = self.state.expire_hold(now)?;
        if next != self.state {
            self.commit(next);
        }
        Ok(())
    }

    fn commit(&mut self, next: BookState) {
        self.state = next;
        self.version = self.version.next();
    }

    // =========================================================================
    // Query predicates
    // =========================================================================

    pub fn can_be_checked_out_by(&self, patron: PatronId) -> bool {
        self.state.can_be_checked_out_by(patron)
    }

    pub fn can_be_put_on_hold(&self, patron: PatronId) -> bool {
        self.state.can_be_put_on_hold(patron)
    }

    pub fn can_be_returned(&self) -> bool {
        self.state.can_be_returned()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn book_type(&self) -> BookType {
        self.book_type
    }

    pub fn state(&self) -> &BookState {
        &self.state
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn current_branch(&self) -> LibraryBranchId {
        self.state.current_branch()
    }

    pub fn current_patron(&self) -> Option<PatronId> {
        self.state.current_patron()
    }
}
