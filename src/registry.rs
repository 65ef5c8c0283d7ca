//! Registry of independent matches for hosting more than one at a time.

use crate::config::GameConfig;
use crate::controller::MatchController;
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a match.
pub type MatchId = String;

/// Registry failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RegistryError {
    /// A match with this id already exists.
    #[display("Match {} already exists", id)]
    DuplicateMatch {
        /// Offending id.
        id: MatchId,
    },
    /// No match with this id.
    #[display("Match {} not found", id)]
    UnknownMatch {
        /// Requested id.
        id: MatchId,
    },
    /// A thread panicked while holding a lock.
    #[display("Registry lock poisoned")]
    LockPoisoned,
}

/// Holds each match behind its own lock.
///
/// Moves on one match are serialized by that match's mutex; different
/// matches never block each other beyond the brief map lookup.
#[derive(Debug, Clone, Default)]
pub struct MatchRegistry {
    matches: Arc<Mutex<HashMap<MatchId, Arc<Mutex<MatchController>>>>>,
}

impl MatchRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating match registry");
        Self::default()
    }

    fn lock_map(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<MatchId, Arc<Mutex<MatchController>>>>, RegistryError> {
        self.matches.lock().map_err(|_| RegistryError::LockPoisoned)
    }

    /// Creates a new match from a configuration.
    #[instrument(skip(self, config))]
    pub fn create(&self, id: MatchId, config: &GameConfig) -> Result<MatchId, RegistryError> {
        let mut matches = self.lock_map()?;
        if matches.contains_key(&id) {
            warn!(match_id = %id, "Match already exists");
            return Err(RegistryError::DuplicateMatch { id });
        }
        let controller = MatchController::from_config(config);
        matches.insert(id.clone(), Arc::new(Mutex::new(controller)));
        info!(match_id = %id, "Created new match");
        Ok(id)
    }

    /// Runs `f` on a match while holding that match's lock.
    #[instrument(skip(self, f))]
    pub fn with_match<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut MatchController) -> R,
    ) -> Result<R, RegistryError> {
        let slot = {
            let matches = self.lock_map()?;
            matches
                .get(id)
                .cloned()
                .ok_or_else(|| RegistryError::UnknownMatch { id: id.to_string() })?
        };
        let mut controller = slot.lock().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(f(&mut controller))
    }

    /// Removes a match.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Result<(), RegistryError> {
        let mut matches = self.lock_map()?;
        match matches.remove(id) {
            Some(_) => {
                debug!(match_id = id, "Match removed");
                Ok(())
            }
            None => Err(RegistryError::UnknownMatch { id: id.to_string() }),
        }
    }

    /// Lists all match ids, sorted.
    #[instrument(skip(self))]
    pub fn ids(&self) -> Result<Vec<MatchId>, RegistryError> {
        let matches = self.lock_map()?;
        let mut ids: Vec<_> = matches.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed matches");
        Ok(ids)
    }
}
