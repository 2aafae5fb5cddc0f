//! Repository factory for dependency injection.
//!
//! Centralizes repository construction so callers depend on the trait, not
//! a concrete backend.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{RepositoryError, RepositoryResult, RosterRepository};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `ROSTER_REPOSITORY` environment
    /// variable. Unset defaults to Local; an unrecognized value is a
    /// configuration error.
    pub fn from_env() -> RepositoryResult<Self> {
        match std::env::var("ROSTER_REPOSITORY") {
            Ok(val) => val.parse().map_err(RepositoryError::configuration),
            Err(_) => Ok(Self::Local),
        }
    }
}

/// Repository factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    pub fn create(repo_type: RepositoryType) -> Arc<dyn RosterRepository> {
        match repo_type {
            RepositoryType::Local => Self::create_local(),
        }
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn RosterRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a repository from environment configuration.
    pub fn from_env() -> RepositoryResult<Arc<dyn RosterRepository>> {
        Ok(Self::create(RepositoryType::from_env()?))
    }
}
