//! Book lending state
//!
//! The closed set of states a book moves through, with the business rules
//! that govern each transition.
//!
//! Valid transitions:
//! - Available -> OnHold (place_on_hold)
//! - Available -> CheckedOut (checkout)
//! - OnHold -> CheckedOut (checkout, only by the holding patron)
//! - OnHold -> Available (cancel_hold, or expire_hold once past hold_till)
//! - CheckedOut -> Available (return_book)
//!
//! Transitions are pure: they take the current state and the request inputs
//! and return either the next state or a [`TransitionError`] naming the rule
//! that fired. The owning [`Book`](super::Book) aggregate is the only
//! mutable cell; it swaps in the returned state and bumps its version.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{LibraryBranchId, PatronId, TransitionError};

/// Current lending state of a book.
///
/// At most one patron is associated with a book at any time: `Available`
/// has none, `OnHold` and `CheckedOut` have exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookState {
    /// On the shelf at a branch, free to be held or checked out.
    Available { branch: LibraryBranchId },

    /// Reserved for one patron until `hold_till`.
    OnHold {
        branch: LibraryBranchId,
        patron: PatronId,
        hold_till: DateTime<Utc>,
    },

    /// Lent out to one patron from a branch.
    CheckedOut {
        branch: LibraryBranchId,
        patron: PatronId,
    },
}

impl BookState {
    // =========================================================================
    // Transitions
    // =========================================================================

    /// Place a hold for `patron` at `branch` until `hold_till`.
    ///
    /// Only an available book can be held. A book already on hold is
    /// rejected regardless of who asks; telling apart a duplicate request
    /// from a conflicting one is the caller's job, since only the caller
    /// still knows the requesting patron next to the current holder.
    pub fn place_on_hold(
        &self,
        patron: PatronId,
        branch: LibraryBranchId,
        hold_till: DateTime<Utc>,
    ) -> Result<BookState, TransitionError> {
        match self {
            BookState::Available { .. } => Ok(BookState::OnHold {
                branch,
                patron,
                hold_till,
            }),
            BookState::OnHold { .. } => Err(TransitionError::AlreadyOnHold),
            BookState::CheckedOut { .. } => Err(TransitionError::HoldOnCheckedOut),
        }
    }

    /// Check the book out to `patron` at `branch`.
    ///
    /// From `OnHold` only the holding patron may check out, and the
    /// checkout happens at the incoming branch, not necessarily where the
    /// hold was placed.
    pub fn checkout(
        &self,
        patron: PatronId,
        branch: LibraryBranchId,
    ) -> Result<BookState, TransitionError> {
        match self {
            BookState::Available { .. } => Ok(BookState::CheckedOut { branch, patron }),
            BookState::OnHold { patron: holder, .. } => {
                if *holder != patron {
                    return Err(TransitionError::HeldByAnotherPatron);
                }
                Ok(BookState::CheckedOut { branch, patron })
            }
            BookState::CheckedOut { .. } => Err(TransitionError::AlreadyCheckedOut),
        }
    }

    /// Return the book to `branch`.
    pub fn return_book(&self, branch: LibraryBranchId) -> Result<BookState, TransitionError> {
        match self {
            BookState::CheckedOut { .. } => Ok(BookState::Available { branch }),
            BookState::Available { .. } | BookState::OnHold { .. } => {
                Err(TransitionError::NothingToReturn)
            }
        }
    }

    /// Cancel the current hold, making the book available again at the
    /// branch where the hold was placed.
    pub fn cancel_hold(&self) -> Result<BookState, TransitionError> {
        match self {
            BookState::OnHold { branch, .. } => Ok(BookState::Available { branch: *branch }),
            BookState::Available { .. } | BookState::CheckedOut { .. } => {
                Err(TransitionError::NoHoldToCancel)
            }
        }
    }

    /// Expire the current hold if `now` is strictly after `hold_till`.
    ///
    /// A hold that has not run out yet survives: the same state comes back
    /// unchanged. Calling this on a book with no hold is a caller error,
    /// not a timing race, so it is rejected rather than ignored.
    pub fn expire_hold(&self, now: DateTime<Utc>) -> Result<BookState, TransitionError> {
        match self {
            BookState::OnHold {
                branch, hold_till, ..
            } => {
                if now > *hold_till {
                    Ok(BookState::Available { branch: *branch })
                } else {
                    Ok(self.clone())
                }
            }
            BookState::Available { .. } | BookState::CheckedOut { .. } => {
                Err(TransitionError::NoHoldToExpire)
            }
        }
    }

    // =========================================================================
    // Query predicates
    // =========================================================================
    // Mirrors of the transitions above, with no side effects. Keep them in
    // lock-step with the transitions when extending either.

    /// Whether `patron` could check this book out right now.
    pub fn can_be_checked_out_by(&self, patron: PatronId) -> bool {
        match self {
            BookState::Available { .. } => true,
            BookState::OnHold { patron: holder, .. } => *holder == patron,
            BookState::CheckedOut { .. } => false,
        }
    }

    /// Whether a hold could be placed right now. Unconditionally true for
    /// an available book and false otherwise, whoever asks.
    pub fn can_be_put_on_hold(&self, _patron: PatronId) -> bool {
        matches!(self, BookState::Available { .. })
    }

    /// Whether the book could be returned right now.
    pub fn can_be_returned(&self) -> bool {
        matches!(self, BookState::CheckedOut { .. })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Name of the current state.
    pub fn name(&self) -> &'static str {
        match self {
            BookState::Available { .. } => "AVAILABLE",
            BookState::OnHold { .. } => "ON_HOLD",
            BookState::CheckedOut { .. } => "CHECKED_OUT",
        }
    }

    /// Branch where the book currently resides.
    pub fn current_branch(&self) -> LibraryBranchId {
        match self {
            BookState::Available { branch }
            | BookState::OnHold { branch, .. }
            | BookState::CheckedOut { branch, .. } => *branch,
        }
    }

    /// Patron currently associated with the book, if any.
    pub fn current_patron(&self) -> Option<PatronId> {
        match self {
            BookState::Available { .. } => None,
            BookState::OnHold { patron, .. } | BookState::CheckedOut { patron, .. } => {
                Some(*patron)
            }
        }
    }

    /// Expiry of the current hold, if the book is on hold.
    pub fn hold_till(&self) -> Option<DateTime<Utc>> {
        match self {
            BookState::OnHold { hold_till, .. } => Some(*hold_till),
            _ => None,
        }
    }
}
