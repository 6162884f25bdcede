//! Domain events produced by gameplay.
//!
//! The event vocabulary is closed: every variant of [`Event`] reports a stable
//! [`EventKind`] discriminant that is used both for in-process handler routing
//! and as the `type` tag of persisted log records. Each event carries the
//! before/after values it needs, so applying it never recomputes anything from
//! the current state.

/// Stable discriminant of an [`Event`].
///
/// The string form (`"Click"`, `"UpgradePurchased"`, `"DamageUpgraded"`) is
/// part of the event log format and must never change.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Click,
    UpgradePurchased,
    /// Legacy damage-upgrade record, accepted on load but no longer emitted.
    DamageUpgraded,
}

/// A single click on the rock.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickEvent {
    pub damage_dealt: u64,
    pub dust_gained: u64,
    pub rock_health_before: u64,
    pub rock_health_after: u64,
    pub player_dust_before: u64,
    pub player_dust_after: u64,
}

/// An upgrade level was bought.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradePurchasedEvent {
    pub upgrade_id: String,
    /// Level reached by this purchase (absolute, not a delta).
    pub new_level: u32,
    pub old_dust: u64,
    pub new_dust: u64,
}

/// Player damage was raised directly (older logs only).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageUpgradedEvent {
    pub old_damage: u64,
    pub new_damage: u64,
    pub old_dust: u64,
    pub new_dust: u64,
}

/// Closed set of domain events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Click(ClickEvent),
    UpgradePurchased(UpgradePurchasedEvent),
    DamageUpgraded(DamageUpgradedEvent),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click(_) => EventKind::Click,
            Event::UpgradePurchased(_) => EventKind::UpgradePurchased,
            Event::DamageUpgraded(_) => EventKind::DamageUpgraded,
        }
    }
}

impl From<ClickEvent> for Event {
    fn from(event: ClickEvent) -> Self {
        Event::Click(event)
    }
}

impl From<UpgradePurchasedEvent> for Event {
    fn from(event: UpgradePurchasedEvent) -> Self {
        Event::UpgradePurchased(event)
    }
}

impl From<DamageUpgradedEvent> for Event {
    fn from(event: DamageUpgradedEvent) -> Self {
        Event::DamageUpgraded(event)
    }
}
