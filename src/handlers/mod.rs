//! Event handlers module
//!
//! Handlers bridge inbound domain events to aggregate operations.

mod patron_events;


pub use patron_events::{HandleError, PatronEventsHandler};
