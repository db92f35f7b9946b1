//! Patron events handler
//!
//! Bridges inbound patron events to book operations, one event at a time.
//! Each event is handled independently: look the book up, apply exactly one
//! rule, persist on success. A lookup miss means the book does not exist in
//! this bounded context and is treated as "nothing to do".

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::aggregate::{Book, BookState};
use crate::domain::{
    BookDuplicateHoldFound, BookId, Clock, LibraryBranchId, PatronEvent, PatronId, TransitionError,
};
use crate::publisher::DomainEventPublisher;
use crate::repository::{BookRepository, ConflictError};

/// Failure while handling a single patron event.
///
/// Transition rejections are propagated untouched; whether the delivery
/// layer retries, discards, or dead-letters the event is its own concern.
/// A conflict means the book changed underneath us and the whole handle
/// step should be replayed against the fresh state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),
}

/// Consumes patron events and drives the book aggregate accordingly.
pub struct PatronEventsHandler {
    repository: Arc<dyn BookRepository>,
    publisher: Arc<dyn DomainEventPublisher>,
    clock: Arc<dyn Clock>,
}

impl PatronEventsHandler {
    pub fn new(
        repository: Arc<dyn BookRepository>,
        publisher: Arc<dyn DomainEventPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            publisher,
            clock,
        }
    }

    /// Handle one inbound event.
    pub fn handle(&self, event: &PatronEvent) -> Result<(), HandleError> {
        match *event {
            PatronEvent::BookPlacedOnHold {
                patron_id,
                book_id,
                library_branch_id,
                hold_till,
                ..
            } => self.book_placed_on_hold(book_id, patron_id, library_branch_id, hold_till),
            PatronEvent::BookCheckedOut {
                patron_id,
                book_id,
                library_branch_id,
                ..
            } => self.book_checked_out(book_id, patron_id, library_branch_id),
            PatronEvent::BookHoldExpired { book_id, .. } => self.book_hold_expired(book_id),
            PatronEvent::BookHoldCanceled { book_id, .. } => self.book_hold_canceled(book_id),
            PatronEvent::BookReturned {
                book_id,
                library_branch_id,
                ..
            } => self.book_returned(book_id, library_branch_id),
        }
    }

    fn book_placed_on_hold(
        &self,
        book_id: BookId,
        patron_id: PatronId,
        branch_id: LibraryBranchId,
        hold_till: DateTime<Utc>,
    ) -> Result<(), HandleError> {
        let Some(mut book) = self.find(book_id) else {
            return Ok(());
        };

        // The duplicate check happens here rather than inside the state:
        // the state's rejection is a generic "already on hold" and no
        // longer knows which two patrons are in conflict.
        if let BookState::OnHold { patron: holder, .. } = *book.state() {
            if holder != patron_id {
                tracing::warn!(
                    %book_id,
                    held_by = %holder,
                    requested_by = %patron_id,
                    "duplicate hold requested"
                );
                self.publisher.publish(BookDuplicateHoldFound {
                    when: self.clock.now(),
                    held_by: holder,
                    requested_by: patron_id,
                    library_branch_id: branch_id,
                    book_id,
                });
            }
            // A repeat request from the current holder is ignored as a
            // replay. TODO: confirm with product whether a same-patron
            // re-hold should raise a duplicate-submission signal instead.
            return Ok(());
        }

        book.place_on_hold(patron_id, branch_id, hold_till)?;
        self.save(book)
    }

    fn book_checked_out(
        &self,
        book_id: BookId,
        patron_id: PatronId,
        branch_id: LibraryBranchId,
    ) -> Result<(), HandleError> {
        let Some(mut book) = self.find(book_id) else {
            return Ok(());
        };

        book.checkout(patron_id, branch_id)?;
        self.save(book)
    }

    fn book_hold_expired(&self, book_id: BookId) -> Result<(), HandleError> {
        let Some(mut book) = self.find(book_id) else {
            return Ok(());
        };

        let before = book.version();
        book.expire_hold(self.clock.now())?;

        // A hold that has not run out yet leaves the book untouched, and
        // an untouched book is not saved.
        if book.version() == before {
            return Ok(());
        }
        self.save(book)
    }

    fn book_hold_canceled(&self, book_id: BookId) -> Result<(), HandleError> {
        let Some(mut book) = self.find(book_id) else {
            return Ok(());
        };

        book.cancel_hold()?;
        self.save(book)
    }

    fn book_returned(
        &self,
        book_id: BookId,
        branch_id: LibraryBranchId,
    ) -> Result<(), HandleError> {
        let Some(mut book) = self.find(book_id) else {
            return Ok(());
        };

        book.return_book(branch_id)?;
        self.save(book)
    }

    fn find(&self, book_id: BookId) -> Option<Book> {
        let book = self.repository.find_by(book_id);
        if book.is_none() {
            tracing::debug!(%book_id, "book not known to the lending context, ignoring event");
        }
        book
    }

    fn save(&self, book: Book) -> Result<(), HandleError> {
        self.repository.save(book)?;
        Ok(())
    }
}
