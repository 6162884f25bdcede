//! Serialized envelope of one event in the history.
//!
//! Each record is a JSON object `{"type": <EventKind>, "data": <payload>}`.
//! Decoding happens in two stages: the envelope first, then the payload once
//! the tag has been matched against [`EventKind`], so an unknown tag is
//! reported as such instead of as a generic parse failure.

use std::str::FromStr;

use clicker_core::{Event, EventKind};
use serde::{Deserialize, Serialize};

use super::{RepositoryError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: serde_json::Value,
}

impl EventRecord {
    pub fn encode(event: &Event) -> Result<Self> {
        let data = match event {
            Event::Click(click) => serde_json::to_value(click)?,
            Event::UpgradePurchased(purchase) => serde_json::to_value(purchase)?,
            Event::DamageUpgraded(upgrade) => serde_json::to_value(upgrade)?,
        };

        Ok(Self {
            kind: event.kind().to_string(),
            data,
        })
    }

    pub fn decode(self) -> Result<Event> {
        let kind = EventKind::from_str(&self.kind)
            .map_err(|_| RepositoryError::UnknownEventType(self.kind.clone()))?;

        let event = match kind {
            EventKind::Click => Event::Click(serde_json::from_value(self.data)?),
            EventKind::UpgradePurchased => {
                Event::UpgradePurchased(serde_json::from_value(self.data)?)
            }
            EventKind::DamageUpgraded => Event::DamageUpgraded(serde_json::from_value(self.data)?),
        };

        Ok(event)
    }

    /// Encodes `event` as a single JSON line without the trailing newline.
    pub fn to_line(event: &Event) -> Result<String> {
        Ok(serde_json::to_string(&Self::encode(event)?)?)
    }

    /// Decodes one line of the history.
    pub fn from_line(line: &str) -> Result<Event> {
        let record: Self = serde_json::from_str(line)?;
        record.decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clicker_core::{ClickEvent, UpgradePurchasedEvent};

    #[test]
    fn click_record_uses_type_and_data_fields() {
        let event = Event::Click(ClickEvent {
            damage_dealt: 1,
            dust_gained: 1,
            rock_health_before: 10,
            rock_health_after: 9,
            player_dust_before: 0,
            player_dust_after: 1,
        });

        let value: serde_json::Value =
            serde_json::from_str(&EventRecord::to_line(&event).unwrap()).unwrap();

        assert_eq!(value["type"], "Click");
        assert_eq!(value["data"]["rock_health_after"], 9);
        assert_eq!(value["data"]["player_dust_after"], 1);
    }

    #[test]
    fn purchase_line_decodes() {
        let line = r#"{"type":"UpgradePurchased","data":{"upgrade_id":"stronger_pickaxe","new_level":1,"old_dust":10,"new_dust":0}}"#;

        let event = EventRecord::from_line(line).unwrap();
        assert_eq!(
            event,
            Event::UpgradePurchased(UpgradePurchasedEvent {
                upgrade_id: "stronger_pickaxe".into(),
                new_level: 1,
                old_dust: 10,
                new_dust: 0,
            })
        );
    }

    #[test]
    fn legacy_damage_line_decodes() {
        let line = r#"{"type":"DamageUpgraded","data":{"old_damage":1,"new_damage":2,"old_dust":10,"new_dust":0}}"#;
        let event = EventRecord::from_line(line).unwrap();
        assert_eq!(event.kind(), EventKind::DamageUpgraded);
    }

    #[test]
    fn unknown_tag_is_reported_by_name() {
        let err = EventRecord::from_line(r#"{"type":"RockExploded","data":{}}"#).unwrap_err();
        assert!(matches!(err, RepositoryError::UnknownEventType(tag) if tag == "RockExploded"));
    }

    #[test]
    fn bad_payload_is_a_json_error() {
        let err = EventRecord::from_line(r#"{"type":"Click","data":{"damage_dealt":"lots"}}"#)
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Json(_)));
    }
}
