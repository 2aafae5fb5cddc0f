//! In-memory roster repository.
//!
//! Backs tests and single-shot CLI runs. State lives behind a `RwLock`;
//! reads clone out of the lock so callers never hold it.

use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;

use crate::api::{Photographer, PhotographerId, Roster, Schedule};
use crate::db::repository::{
    ErrorContext, RepositoryError, RepositoryResult, RosterRepository,
};

#[derive(Debug, Default)]
struct LocalState {
    photographers: Vec<Photographer>,
    schedules: Vec<Schedule>,
}

/// In-memory implementation of `RosterRepository`.
#[derive(Debug, Default)]
pub struct LocalRepository {
    state: RwLock<LocalState>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RosterRepository for LocalRepository {
    async fn store_roster(&self, roster: Roster) -> RepositoryResult<()> {
        let mut state = self.state.write();
        debug!(
            "storing roster with {} photographers (checksum {})",
            roster.photographers.len(),
            roster.checksum
        );
        state.photographers = roster.photographers;
        state.schedules.clear();
        Ok(())
    }

    async fn list_photographers(&self) -> RepositoryResult<Vec<Photographer>> {
        Ok(self.state.read().photographers.clone())
    }

    async fn get_photographer(&self, id: &PhotographerId) -> RepositoryResult<Photographer> {
        self.state
            .read()
            .photographers
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    "photographer not in roster",
                    ErrorContext::new("get_photographer")
                        .with_entity("photographer")
                        .with_entity_id(id),
                )
            })
    }

    async fn append_schedule(&self, schedule: Schedule) -> RepositoryResult<()> {
        self.state.write().schedules.push(schedule);
        Ok(())
    }

    async fn list_schedules(&self) -> RepositoryResult<Vec<Schedule>> {
        Ok(self.state.read().schedules.clone())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
