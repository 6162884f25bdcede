//! In-memory snapshot repository implementation.

use std::sync::RwLock;

use clicker_core::GameState;

use crate::repository::{RepositoryError, Result, SnapshotRepository};

/// Holds at most one snapshot in memory.
///
/// Loaded states come back without their upgrade catalog, matching what the
/// file repository produces after deserializing.
#[derive(Default)]
pub struct InMemorySnapshotRepository {
    snapshot: RwLock<Option<String>>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot
            .read()
            .map(|snapshot| snapshot.is_some())
            .unwrap_or(false)
    }
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn save(&self, state: &GameState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        let mut snapshot = self
            .snapshot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *snapshot = Some(json);
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>> {
        let snapshot = self
            .snapshot
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        match snapshot.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }
}
