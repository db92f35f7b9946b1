//! Domain error types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Business-rule rejection of a requested state transition.
///
/// Each variant identifies the rule that fired. A rejection is deterministic:
/// retrying the same transition against the same state fails the same way.
/// Rejections are never swallowed inside the aggregate; the caller decides
/// whether to surface, log, or drop them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// A hold was requested but the book is already on hold.
    #[error("book is already on hold")]
    AlreadyOnHold,

    /// A hold was requested for a checked-out book.
    #[error("cannot place a hold on a checked out book")]
    HoldOnCheckedOut,

    /// A checkout was requested by someone other than the holding patron.
    #[error("only the patron who placed the hold can check out the book")]
    HeldByAnotherPatron,

    /// A checkout was requested but the book is already checked out.
    #[error("book is already checked out")]
    AlreadyCheckedOut,

    /// A return was requested but the book is not checked out.
    #[error("cannot return a book that is not checked out")]
    NothingToReturn,

    /// A hold cancellation was requested but no hold exists.
    #[error("no hold to cancel")]
    NoHoldToCancel,

    /// A hold expiry was requested but no hold exists.
    #[error("no hold to expire")]
    NoHoldToExpire,
}

impl TransitionError {
    /// Stable tag naming the rule that fired, for logs and event payloads.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::AlreadyOnHold => "already_on_hold",
            Self::HoldOnCheckedOut => "hold_on_checked_out",
            Self::HeldByAnotherPatron => "held_by_another_patron",
            Self::AlreadyCheckedOut => "already_checked_out",
            Self::NothingToReturn => "nothing_to_return",
            Self::NoHoldToCancel => "no_hold_to_cancel",
            Self::NoHoldToExpire => "no_hold_to_expire",
        }
    }
}
