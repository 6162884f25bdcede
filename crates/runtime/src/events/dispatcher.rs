//! Kind-routed synchronous event dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use clicker_core::{Event, EventKind, GameError};

use crate::repository::EventStore;

/// A handler applies one event to the target `S`.
pub type Handler<S> = Box<dyn Fn(&mut S, &Event) -> Result<(), GameError> + Send + Sync>;

/// Routes events to the handlers registered for their [`EventKind`].
///
/// When an [`EventStore`] is attached, every event is persisted before any
/// handler runs. A failed write is logged and does not stop the handlers, so
/// the live state can run ahead of the stored history.
pub struct EventDispatcher<S> {
    handlers: HashMap<EventKind, Vec<Handler<S>>>,
    store: Option<Arc<dyn EventStore>>,
}

impl<S> EventDispatcher<S> {
    /// Dispatcher without a store; nothing is persisted.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            store: None,
        }
    }

    pub fn with_store(store: Arc<dyn EventStore>) -> Self {
        Self {
            handlers: HashMap::new(),
            store: Some(store),
        }
    }

    /// Appends `handler` to the list for `kind`.
    pub fn register<F>(&mut self, kind: EventKind, handler: F)
    where
        F: Fn(&mut S, &Event) -> Result<(), GameError> + Send + Sync + 'static,
    {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    pub fn attach_store(&mut self, store: Arc<dyn EventStore>) {
        self.store = Some(store);
    }

    /// Removes and returns the attached store.
    pub fn detach_store(&mut self) -> Option<Arc<dyn EventStore>> {
        self.store.take()
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Persists `event` (if a store is attached) and runs its handlers in
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns the first handler error; later handlers are skipped. Store
    /// failures never surface here.
    pub fn dispatch(&self, event: &Event, target: &mut S) -> Result<(), GameError> {
        let kind = event.kind();

        if let Some(store) = &self.store
            && let Err(err) = store.save_event(event)
        {
            tracing::error!(%kind, error = %err, "failed to persist event; applying anyway");
        }

        let Some(handlers) = self.handlers.get(&kind) else {
            tracing::trace!(%kind, "no handlers registered");
            return Ok(());
        };

        for handler in handlers {
            handler(target, event)?;
        }

        Ok(())
    }
}

impl<S> Default for EventDispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryEventStore;
    use clicker_core::{ClickEvent, DamageUpgradedEvent, ErrorKind};

    fn click() -> Event {
        Event::Click(ClickEvent {
            damage_dealt: 1,
            dust_gained: 1,
            rock_health_before: 5,
            rock_health_after: 4,
            player_dust_before: 0,
            player_dust_after: 1,
        })
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let mut dispatcher = EventDispatcher::<Vec<&'static str>>::new();
        dispatcher.register(EventKind::Click, |log, _| {
            log.push("first");
            Ok(())
        });
        dispatcher.register(EventKind::Click, |log, _| {
            log.push("second");
            Ok(())
        });

        let mut log = Vec::new();
        dispatcher.dispatch(&click(), &mut log).unwrap();

        assert_eq!(log, vec!["first", "second"]);
        assert_eq!(dispatcher.handler_count(EventKind::Click), 2);
    }

    #[test]
    fn unregistered_kind_is_silent() {
        let dispatcher = EventDispatcher::<u32>::new();
        let mut hits = 0;

        let legacy = Event::DamageUpgraded(DamageUpgradedEvent {
            old_damage: 1,
            new_damage: 2,
            old_dust: 10,
            new_dust: 0,
        });
        dispatcher.dispatch(&legacy, &mut hits).unwrap();

        assert_eq!(hits, 0);
    }

    #[test]
    fn first_handler_error_stops_the_rest() {
        let mut dispatcher = EventDispatcher::<u32>::new();
        dispatcher.register(EventKind::Click, |_, _| {
            Err(GameError::new(ErrorKind::UpgradeNotFound))
        });
        dispatcher.register(EventKind::Click, |hits, _| {
            *hits += 1;
            Ok(())
        });

        let mut hits = 0;
        let err = dispatcher.dispatch(&click(), &mut hits).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UpgradeNotFound);
        assert_eq!(hits, 0);
    }

    #[test]
    fn persists_before_handlers_run() {
        let store = Arc::new(InMemoryEventStore::new());
        let mut dispatcher = EventDispatcher::<usize>::with_store(store.clone());
        let observed = store.clone();
        dispatcher.register(EventKind::Click, move |seen, _| {
            *seen = observed.len();
            Ok(())
        });

        let mut seen = 0;
        dispatcher.dispatch(&click(), &mut seen).unwrap();

        assert_eq!(seen, 1);
    }

    #[test]
    fn store_failure_does_not_block_handlers() {
        let store = Arc::new(InMemoryEventStore::new());
        store.set_fail_writes(true);
        let mut dispatcher = EventDispatcher::<u32>::with_store(store.clone());
        dispatcher.register(EventKind::Click, |hits, _| {
            *hits += 1;
            Ok(())
        });

        let mut hits = 0;
        dispatcher.dispatch(&click(), &mut hits).unwrap();

        assert_eq!(hits, 1);
        assert!(store.is_empty());
    }

    #[test]
    fn detached_store_receives_nothing() {
        let store = Arc::new(InMemoryEventStore::new());
        let mut dispatcher = EventDispatcher::<()>::with_store(store.clone());
        assert!(dispatcher.has_store());

        assert!(dispatcher.detach_store().is_some());
        dispatcher.dispatch(&click(), &mut ()).unwrap();

        assert!(!dispatcher.has_store());
        assert!(store.is_empty());
    }
}
