//! Roster storage module.
//!
//! This module provides the Repository pattern around the roster: read
//! access to the photographer list and append-only access to the computed
//! schedule results, with swappable backends behind a trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (pas-scheduler CLI)                   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services::slot_finder)                   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  RosterRepository Trait - Abstract Interface             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The in-memory `LocalRepository` is the only backend; the factory keeps
//! the selection seam so another backend can be added without touching
//! callers.

pub mod checksum;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use checksum::calculate_checksum;
pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, RepositoryError, RepositoryResult, RosterRepository,
};
