//! Append-only event log stored as newline-delimited JSON.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clicker_core::Event;

use crate::repository::record::EventRecord;
use crate::repository::{EventStore, RepositoryError, Result};

/// File-backed [`EventStore`].
///
/// Each event occupies one line:
/// ```text
/// {"type":"Click","data":{...}}
/// {"type":"UpgradePurchased","data":{...}}
/// ```
/// A missing file is an empty history. Every append opens the file in append
/// mode, writes the line and closes it again, so the log on disk is always
/// complete up to the last successful save.
pub struct FileEventStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileEventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventStore for FileEventStore {
    fn save_event(&self, event: &Event) -> Result<()> {
        let line = EventRecord::to_line(event)?;

        let _guard = self.lock.lock().map_err(|_| RepositoryError::LockPoisoned)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // One write per record so a failure never leaves a line without its newline.
        file.write_all(format!("{line}\n").as_bytes())?;

        tracing::trace!(kind = %event.kind(), path = %self.path.display(), "appended event");
        Ok(())
    }

    fn load_events(&self) -> Result<Vec<Event>> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::LockPoisoned)?;

        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == IoErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no event log yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut events = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let event = EventRecord::from_line(&line).map_err(|err| match err {
                RepositoryError::Json(json) => {
                    RepositoryError::CorruptedData(format!("line {}: {json}", index + 1))
                }
                other => other,
            })?;
            events.push(event);
        }

        tracing::debug!(
            count = events.len(),
            path = %self.path.display(),
            "loaded event log"
        );
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clicker_core::{ClickEvent, EventKind, UpgradePurchasedEvent};
    use tempfile::TempDir;

    fn click(before: u64) -> Event {
        Event::Click(ClickEvent {
            damage_dealt: 1,
            dust_gained: 1,
            rock_health_before: before,
            rock_health_after: before - 1,
            player_dust_before: 0,
            player_dust_after: 1,
        })
    }

    #[test]
    fn missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        let store = FileEventStore::new(dir.path().join("events.log"));
        assert!(store.load_events().unwrap().is_empty());
    }

    #[test]
    fn events_come_back_in_append_order() {
        let dir = TempDir::new().unwrap();
        let store = FileEventStore::new(dir.path().join("nested").join("events.log"));

        let purchase = Event::UpgradePurchased(UpgradePurchasedEvent {
            upgrade_id: "stronger_pickaxe".into(),
            new_level: 1,
            old_dust: 10,
            new_dust: 0,
        });
        store.save_event(&click(10)).unwrap();
        store.save_event(&purchase).unwrap();
        store.save_event(&click(9)).unwrap();

        let events = store.load_events().unwrap();
        assert_eq!(events, vec![click(10), purchase, click(9)]);

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw.lines().count(), 3);
    }

    #[test]
    fn every_record_is_newline_terminated() {
        let dir = TempDir::new().unwrap();
        let store = FileEventStore::new(dir.path().join("events.log"));

        for health in (5..=10).rev() {
            store.save_event(&click(health)).unwrap();
            let raw = fs::read_to_string(store.path()).unwrap();
            assert!(raw.ends_with('\n'));
            assert_eq!(raw.matches('\n').count(), (11 - health) as usize);
        }
        assert_eq!(store.load_events().unwrap().len(), 6);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.log");
        let line = EventRecord::to_line(&click(5)).unwrap();
        fs::write(&path, format!("{line}\n\n   \n{line}\n")).unwrap();

        let events = FileEventStore::new(&path).load_events().unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn unknown_type_fails_whole_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.log");
        let line = EventRecord::to_line(&click(5)).unwrap();
        fs::write(&path, format!("{line}\n{{\"type\":\"RockExploded\",\"data\":{{}}}}\n")).unwrap();

        let err = FileEventStore::new(&path).load_events().unwrap_err();
        assert!(matches!(err, RepositoryError::UnknownEventType(ref tag) if tag == "RockExploded"));
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.log");
        let line = EventRecord::to_line(&click(5)).unwrap();
        fs::write(&path, format!("{line}\nnot json\n")).unwrap();

        let err = FileEventStore::new(&path).load_events().unwrap_err();
        match err {
            RepositoryError::CorruptedData(message) => assert!(message.starts_with("line 2")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn legacy_records_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.log");
        fs::write(
            &path,
            "{\"type\":\"DamageUpgraded\",\"data\":{\"old_damage\":1,\"new_damage\":2,\"old_dust\":10,\"new_dust\":0}}\n",
        )
        .unwrap();

        let events = FileEventStore::new(&path).load_events().unwrap();
        assert_eq!(events[0].kind(), EventKind::DamageUpgraded);
    }
}
