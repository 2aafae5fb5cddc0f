//! Service layer for the scheduling business logic.
//!
//! Services operate on the in-memory model and orchestrate repository
//! access; the algorithms themselves are pure functions.

pub mod slot_finder;

pub use slot_finder::{collect_available_slots, find_available_slots, first_open_slot};
