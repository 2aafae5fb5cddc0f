//! Repository trait for roster storage.
//!
//! The trait is the boundary between the slot-finding service and whatever
//! holds the roster: read access to photographers, append-only access to
//! computed schedules. Implementations must be `Send + Sync` to work with
//! async Rust.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{Photographer, PhotographerId, Roster, Schedule};

/// Repository trait for roster operations.
///
/// Mutation is limited to replacing the stored roster (the loader hand-off)
/// and appending schedule results; photographers and their intervals are
/// never edited in place.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Replace the held roster and clear previously accumulated schedules.
    ///
    /// # Arguments
    /// * `roster` - Parsed roster to store
    async fn store_roster(&self, roster: Roster) -> RepositoryResult<()>;

    /// List all photographers in roster order.
    async fn list_photographers(&self) -> RepositoryResult<Vec<Photographer>>;

    /// Fetch a single photographer by id.
    ///
    /// # Returns
    /// * `Ok(Photographer)` - The photographer
    /// * `Err(RepositoryError::NotFound)` - If no such photographer exists
    async fn get_photographer(&self, id: &PhotographerId) -> RepositoryResult<Photographer>;

    /// Append one computed schedule result.
    async fn append_schedule(&self, schedule: Schedule) -> RepositoryResult<()>;

    /// List accumulated schedule results in append order.
    async fn list_schedules(&self) -> RepositoryResult<Vec<Schedule>>;

    /// Liveness probe.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
