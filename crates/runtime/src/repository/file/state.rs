//! File-based SnapshotRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clicker_core::GameState;

use crate::repository::{RepositoryError, Result, SnapshotRepository};

/// Stores the whole game state as pretty-printed JSON in a single file.
///
/// Saves go through a sibling `.tmp` file and an atomic rename, so a crash
/// mid-write leaves the previous snapshot intact.
pub struct FileSnapshotRepository {
    path: PathBuf,
}

impl FileSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn save(&self, state: &GameState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(state)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved snapshot to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let state: GameState = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::CorruptedData(format!("{}: {e}", self.path.display())))?;

        tracing::debug!("Loaded snapshot from {}", self.path.display());
        Ok(Some(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clicker_core::upgrades::STRONGER_PICKAXE;
    use clicker_core::Scenario;
    use tempfile::TempDir;

    #[test]
    fn load_without_save_is_none() {
        let dir = TempDir::new().unwrap();
        let repo = FileSnapshotRepository::new(dir.path().join("savegame.json"));
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_restores_levels_and_flags() {
        let dir = TempDir::new().unwrap();
        let repo = FileSnapshotRepository::new(dir.path().join("saves").join("savegame.json"));

        let mut state = GameState::new();
        state.apply_scenario(Scenario::Mid);
        repo.save(&state).unwrap();

        let mut loaded = repo.load().unwrap().unwrap();
        assert!(loaded.upgrades().catalog_is_empty());
        loaded.register_catalog();

        assert_eq!(loaded, state);
        assert_eq!(loaded.upgrade_level(STRONGER_PICKAXE), 4);
        assert!(!repo.temp_path().exists());
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let repo = FileSnapshotRepository::new(dir.path().join("savegame.json"));

        let mut state = GameState::new();
        state.apply_scenario(Scenario::EndGameReady);
        repo.save(&state).unwrap();
        repo.save(&GameState::new()).unwrap();

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded.player().dust, 0);
    }

    #[test]
    fn garbage_file_is_corrupted_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("savegame.json");
        fs::write(&path, "{ not a snapshot").unwrap();

        let err = FileSnapshotRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, RepositoryError::CorruptedData(_)));
    }
}
