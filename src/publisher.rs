//! Domain event publisher
//!
//! Outbound seam for the duplicate-hold notification. Publishing is
//! fire-and-forget; delivery guarantees belong to the collaborator behind
//! the trait.

use std::sync::Mutex;

use crate::domain::BookDuplicateHoldFound;

/// Outbound publisher contract.
pub trait DomainEventPublisher: Send + Sync {
    fn publish(&self, event: BookDuplicateHoldFound);
}

/// Publisher that emits events through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingEventPublisher;

impl DomainEventPublisher for LoggingEventPublisher {
    fn publish(&self, event: BookDuplicateHoldFound) {
        tracing::info!(
            book_id = %event.book_id,
            held_by = %event.held_by,
            requested_by = %event.requested_by,
            library_branch_id = %event.library_branch_id,
            "duplicate hold found"
        );
    }
}

/// Publisher that records every event, for assertions in tests.
#[derive(Debug, Default)]
pub struct CapturingEventPublisher {
    events: Mutex<Vec<BookDuplicateHoldFound>>,
}

impl CapturingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far, in order.
    pub fn published(&self) -> Vec<BookDuplicateHoldFound> {
        self.events.lock().expect("publisher mutex poisoned").clone()
    }
}

impl DomainEventPublisher for CapturingEventPublisher {
    fn publish(&self, event: BookDuplicateHoldFound) {
        self.events
            .lock()
            .expect("publisher mutex poisoned")
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookId, LibraryBranchId, PatronId};
    use chrono::Utc;

    #[test]
    fn test_capturing_publisher_records_in_order() {
        let publisher = CapturingEventPublisher::new();
        assert!(publisher.published().is_empty());

        let first = BookDuplicateHoldFound {
            when: Utc::now(),
            held_by: PatronId::random(),
            requested_by: PatronId::random(),
            library_branch_id: LibraryBranchId::random(),
            book_id: BookId::random(),
        };
        let second = BookDuplicateHoldFound {
            book_id: BookId::random(),
            ..first.clone()
        };

        publisher.publish(first.clone());
        publisher.publish(second.clone());

        assert_eq!(publisher.published(), vec![first, second]);
    }
}
