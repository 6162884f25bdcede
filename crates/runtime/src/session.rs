//! Game session orchestrator.
//!
//! [`GameSession`] is the aggregate root the outside world talks to. It owns
//! the [`GameState`], the dispatcher that applies events to it, the optional
//! snapshot repository and the random source for flavor text. Every write
//! completes synchronously before returning.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use clicker_core::{Event, GameConfig, GameError, GameState, Result, Scenario, flavor};

use crate::config::RuntimeConfig;
use crate::events::EventDispatcher;
use crate::handlers::register_default_handlers;
use crate::repository::{EventStore, FileEventStore, FileSnapshotRepository, SnapshotRepository};

pub struct GameSession {
    state: GameState,
    dispatcher: EventDispatcher<GameState>,
    snapshots: Option<Arc<dyn SnapshotRepository>>,
    rng: StdRng,
    config: GameConfig,
    /// Fractional auto clicks carried between ticks.
    auto_click_progress: f64,
}

impl GameSession {
    /// Create a new session builder
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    /// Fresh game without persistence.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Fresh game wired to the files named by `config`.
    pub fn from_runtime_config(config: &RuntimeConfig) -> Self {
        Self::builder().runtime_config(config).build()
    }

    /// Rebuilds the game from the files named by `config`.
    pub fn resume_from_runtime_config(config: &RuntimeConfig) -> Result<Self> {
        Self::builder()
            .runtime_config(config)
            .build_from_history()
    }

    /// Rebuilds the game by replaying every event in `store`, then attaches
    /// `store` for live play.
    pub fn load_from_event_history(store: Arc<dyn EventStore>) -> Result<Self> {
        Self::builder().event_store(store).build_from_history()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn persists_events(&self) -> bool {
        self.dispatcher.has_store()
    }

    /// Hits the rock once.
    pub fn click(&mut self) -> Result<()> {
        let event = Event::Click(self.state.click_event());
        self.dispatcher.dispatch(&event, &mut self.state)?;

        let index = self.rng.gen_range(0..flavor::ROCK_MESSAGES.len());
        self.state
            .show_message(flavor::rock_message(index), self.config.message_duration);
        Ok(())
    }

    /// Buys the next level of `id`.
    ///
    /// # Errors
    ///
    /// `UpgradeNotFound`, `UpgradeMaxLevel` or `InsufficientDust`; the state is
    /// unchanged in every case.
    pub fn purchase_upgrade(&mut self, id: &str) -> Result<()> {
        let event = match self.state.purchase_upgrade(id) {
            Ok(event) => event,
            Err(err) => {
                tracing::debug!(upgrade = id, error = %err, "purchase rejected");
                return Err(err);
            }
        };

        tracing::info!(
            upgrade = id,
            level = event.new_level,
            dust = event.new_dust,
            "upgrade purchased"
        );
        self.dispatcher
            .dispatch(&Event::UpgradePurchased(event), &mut self.state)
    }

    /// Writes the whole state to the snapshot repository.
    pub fn save(&self) -> Result<()> {
        let repository = self.snapshot_repository()?;
        repository
            .save(&self.state)
            .map_err(|err| err.into_game_error("failed to save snapshot"))?;

        tracing::info!("game saved");
        Ok(())
    }

    /// Replaces the state with the stored snapshot.
    ///
    /// The event log is neither replayed nor reconciled.
    pub fn load(&mut self) -> Result<()> {
        let repository = self.snapshot_repository()?;
        let mut state = repository
            .load()
            .map_err(|err| err.into_game_error("failed to load snapshot"))?
            .ok_or_else(|| GameError::unknown("no saved game found"))?;

        state.register_catalog();
        self.state = state;
        self.auto_click_progress = 0.0;

        tracing::info!(
            health = self.state.rock().health,
            dust = self.state.player().dust,
            "game loaded"
        );
        Ok(())
    }

    /// "Take the heart".
    pub fn take_bad_ending(&mut self) {
        self.state.take_bad_ending();
        self.auto_click_progress = 0.0;
        tracing::info!("bad ending taken");
    }

    /// "Let it rest". Saves a snapshot when a repository is configured.
    pub fn take_good_ending(&mut self) -> Result<()> {
        self.state.take_good_ending();
        self.auto_click_progress = 0.0;
        tracing::info!("good ending taken");

        if self.snapshots.is_some() {
            self.save()?;
        }
        Ok(())
    }

    pub fn apply_scenario(&mut self, scenario: Scenario) {
        self.state.apply_scenario(scenario);
        self.auto_click_progress = 0.0;
        tracing::info!(%scenario, "scenario applied");
    }

    /// Advances time by `dt` and returns the number of auto clicks performed.
    ///
    /// Non-finite or non-positive `dt` is a no-op. At most
    /// [`GameConfig::MAX_AUTO_CLICKS_PER_TICK`] clicks run per call; whole
    /// clicks beyond that are dropped and only the fractional part carries over.
    pub fn tick(&mut self, dt: f64) -> Result<u32> {
        if !dt.is_finite() || dt <= 0.0 {
            return Ok(0);
        }
        self.state.advance_message_timer(dt);

        let state = &self.state;
        if !state.auto_clicker_active() || state.game_over() || state.game_won() {
            return Ok(0);
        }

        let progress = self.auto_click_progress + f64::from(state.auto_clicker_rate()) * dt;

        let cap = f64::from(GameConfig::MAX_AUTO_CLICKS_PER_TICK);
        self.auto_click_progress = if progress >= cap + 1.0 {
            tracing::warn!(requested = progress.trunc(), "auto clicks per tick capped");
            // rate * dt may overflow to infinity for huge finite dt
            cap + if progress.is_finite() { progress.fract() } else { 0.0 }
        } else {
            progress
        };

        let mut clicks = 0;
        while self.auto_click_progress >= 1.0 {
            self.auto_click_progress -= 1.0;
            self.click()?;
            clicks += 1;
        }
        Ok(clicks)
    }

    fn snapshot_repository(&self) -> Result<Arc<dyn SnapshotRepository>> {
        self.snapshots
            .clone()
            .ok_or_else(|| GameError::unknown("no snapshot repository configured"))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`GameSession`].
pub struct GameSessionBuilder {
    config: GameConfig,
    state: Option<GameState>,
    event_store: Option<Arc<dyn EventStore>>,
    snapshots: Option<Arc<dyn SnapshotRepository>>,
    rng: Option<StdRng>,
}

impl GameSessionBuilder {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            state: None,
            event_store: None,
            snapshots: None,
            rng: None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Game settings plus file-backed repositories at the configured paths.
    /// The event store is attached only when `persist_events` is set.
    pub fn runtime_config(mut self, config: &RuntimeConfig) -> Self {
        self.config = config.game.clone();
        self.snapshots = Some(Arc::new(FileSnapshotRepository::new(config.snapshot_path())));
        self.event_store = config
            .persist_events
            .then(|| Arc::new(FileEventStore::new(config.event_log_path())) as Arc<dyn EventStore>);
        self
    }

    /// Start from `state` instead of a new game. Ignored by
    /// [`build_from_history`](Self::build_from_history).
    pub fn initial_state(mut self, mut state: GameState) -> Self {
        if state.upgrades().catalog_is_empty() {
            state.register_catalog();
        }
        self.state = Some(state);
        self
    }

    pub fn event_store(mut self, store: Arc<dyn EventStore>) -> Self {
        self.event_store = Some(store);
        self
    }

    pub fn snapshots(mut self, repository: Arc<dyn SnapshotRepository>) -> Self {
        self.snapshots = Some(repository);
        self
    }

    pub fn rng(mut self, rng: StdRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn seed(self, seed: u64) -> Self {
        self.rng(StdRng::seed_from_u64(seed))
    }

    pub fn build(self) -> GameSession {
        let mut dispatcher = match self.event_store {
            Some(store) => EventDispatcher::with_store(store),
            None => EventDispatcher::new(),
        };
        register_default_handlers(&mut dispatcher);

        GameSession {
            state: self.state.unwrap_or_default(),
            dispatcher,
            snapshots: self.snapshots,
            rng: self.rng.unwrap_or_else(StdRng::from_entropy),
            config: self.config,
            auto_click_progress: 0.0,
        }
    }

    /// Replays the configured event store into a fresh game.
    ///
    /// Replay runs with no store attached, so nothing is written back. Without
    /// a store this is the same as [`build`](Self::build) on a new game.
    pub fn build_from_history(mut self) -> Result<GameSession> {
        let store = self.event_store.take();
        self.state = None;
        let mut session = self.build();

        let Some(store) = store else {
            return Ok(session);
        };

        let events = store
            .load_events()
            .map_err(|err| err.into_game_error("failed to load event history"))?;

        for event in &events {
            session.dispatcher.dispatch(event, &mut session.state)?;
        }

        tracing::info!(
            events = events.len(),
            health = session.state.rock().health,
            dust = session.state.player().dust,
            "replayed event history"
        );

        session.dispatcher.attach_store(store);
        Ok(session)
    }
}
