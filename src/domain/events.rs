//! Domain events
//!
//! Events are immutable facts about patron actions. Inbound events are
//! produced by an external source and consumed here, one at a time; the
//! only outbound event is the duplicate-hold notification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{BookId, LibraryBranchId, PatronId};

/// Patron actions delivered to the lending core.
///
/// A closed set: dispatch is an explicit match, not runtime listener
/// registration. Every variant carries the affected book id and the
/// timestamp of the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PatronEvent {
    /// A patron requested a hold on a book.
    BookPlacedOnHold {
        when: DateTime<Utc>,
        patron_id: PatronId,
        book_id: BookId,
        library_branch_id: LibraryBranchId,
        hold_till: DateTime<Utc>,
    },

    /// A patron checked out a book.
    BookCheckedOut {
        when: DateTime<Utc>,
        patron_id: PatronId,
        book_id: BookId,
        library_branch_id: LibraryBranchId,
    },

    /// A hold on a book ran out.
    BookHoldExpired {
        when: DateTime<Utc>,
        book_id: BookId,
    },

    /// A hold on a book was canceled.
    BookHoldCanceled {
        when: DateTime<Utc>,
        book_id: BookId,
    },

    /// A book was returned to a branch.
    BookReturned {
        when: DateTime<Utc>,
        book_id: BookId,
        library_branch_id: LibraryBranchId,
    },
}

impl PatronEvent {
    /// Get the event type as a string.
    pub fn event_type(&self) -> &'static str {
        match self {
            PatronEvent::BookPlacedOnHold { .. } => "BookPlacedOnHold",
            PatronEvent::BookCheckedOut { .. } => "BookCheckedOut",
            PatronEvent::BookHoldExpired { .. } => "BookHoldExpired",
            PatronEvent::BookHoldCanceled { .. } => "BookHoldCanceled",
            PatronEvent::BookReturned { .. } => "BookReturned",
        }
    }

    /// Get the book this event relates to.
    pub fn book_id(&self) -> BookId {
        match self {
            PatronEvent::BookPlacedOnHold { book_id, .. } => *book_id,
            PatronEvent::BookCheckedOut { book_id, .. } => *book_id,
            PatronEvent::BookHoldExpired { book_id, .. } => *book_id,
            PatronEvent::BookHoldCanceled { book_id, .. } => *book_id,
            PatronEvent::BookReturned { book_id, .. } => *book_id,
        }
    }

    /// When the patron action happened.
    pub fn when(&self) -> DateTime<Utc> {
        match self {
            PatronEvent::BookPlacedOnHold { when, .. } => *when,
            PatronEvent::BookCheckedOut { when, .. } => *when,
            PatronEvent::BookHoldExpired { when, .. } => *when,
            PatronEvent::BookHoldCanceled { when, .. } => *when,
            PatronEvent::BookReturned { when, .. } => *when,
        }
    }
}

/// Notification raised when a hold is requested for a book that is already
/// held by a different patron.
///
/// Carries both sides of the conflict: `held_by` is the patron whose hold is
/// still in force, `requested_by` the patron whose request was turned away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDuplicateHoldFound {
    pub when: DateTime<Utc>,
    pub held_by: PatronId,
    pub requested_by: PatronId,
    pub library_branch_id: LibraryBranchId,
    pub book_id: BookId,
}
