//! Runtime configuration structures and loaders.
use std::env;
use std::path::{Path, PathBuf};

use clicker_core::GameConfig;

/// Where the session keeps its files and how it behaves.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub data_dir: PathBuf,
    /// Event log file name, relative to `data_dir` unless absolute.
    pub event_log: PathBuf,
    /// Snapshot file name, relative to `data_dir` unless absolute.
    pub snapshot: PathBuf,
    pub persist_events: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            data_dir: default_data_dir(),
            event_log: PathBuf::from("events.log"),
            snapshot: PathBuf::from("savegame.json"),
            persist_events: true,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLICKER_DATA_DIR` - Directory for logs and saves (default: platform-specific)
    /// - `CLICKER_EVENT_LOG` - Event log file (default: events.log)
    /// - `CLICKER_SNAPSHOT` - Snapshot file (default: savegame.json)
    /// - `CLICKER_PERSIST_EVENTS` - Append events to the log (default: true)
    /// - `CLICKER_MESSAGE_SECONDS` - Flavor text display time (default: 3.0)
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("CLICKER_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(file) = lookup("CLICKER_EVENT_LOG") {
            config.event_log = PathBuf::from(file);
        }

        if let Some(file) = lookup("CLICKER_SNAPSHOT") {
            config.snapshot = PathBuf::from(file);
        }

        if let Some(enable) = parse(&lookup, "CLICKER_PERSIST_EVENTS") {
            config.persist_events = enable;
        }

        if let Some(seconds) = parse::<f64>(&lookup, "CLICKER_MESSAGE_SECONDS")
            && seconds.is_finite()
            && seconds > 0.0
        {
            config.game = GameConfig::with_message_duration(seconds);
        }

        config
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn event_log_path(&self) -> PathBuf {
        self.resolve(&self.event_log)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.resolve(&self.snapshot)
    }

    fn resolve(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "clicker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".clicker"))
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = RuntimeConfig::from_source(source(&[]));

        assert!(config.persist_events);
        assert_eq!(config.game.message_duration, GameConfig::DEFAULT_MESSAGE_DURATION);
        assert!(config.event_log_path().ends_with("events.log"));
        assert!(config.snapshot_path().ends_with("savegame.json"));
    }

    #[test]
    fn variables_override_defaults() {
        let config = RuntimeConfig::from_source(source(&[
            ("CLICKER_DATA_DIR", "/tmp/rock"),
            ("CLICKER_EVENT_LOG", "history.ndjson"),
            ("CLICKER_SNAPSHOT", "/var/saves/rock.json"),
            ("CLICKER_PERSIST_EVENTS", "false"),
            ("CLICKER_MESSAGE_SECONDS", "1.5"),
        ]));

        assert!(!config.persist_events);
        assert_eq!(config.game.message_duration, 1.5);
        assert_eq!(config.event_log_path(), PathBuf::from("/tmp/rock/history.ndjson"));
        assert_eq!(config.snapshot_path(), PathBuf::from("/var/saves/rock.json"));
    }

    #[test]
    fn unparsable_values_are_ignored() {
        let config = RuntimeConfig::from_source(source(&[
            ("CLICKER_PERSIST_EVENTS", "sometimes"),
            ("CLICKER_MESSAGE_SECONDS", "-2"),
        ]));

        assert!(config.persist_events);
        assert_eq!(config.game.message_duration, GameConfig::DEFAULT_MESSAGE_DURATION);
    }
}
