use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope for a recorded event: identity + position in the journal.
///
/// - `event_id` is a UUIDv7 (time-ordered).
/// - `sequence_number` is monotonically increasing within one journal,
///   starting at 1.
/// - `event_version` is the payload's schema version at the time it was
///   recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord<E> {
    event_id: Uuid,
    sequence_number: u64,
    event_type: String,
    event_version: u32,
    payload: E,
}

impl<E> EventRecord<E> {
    pub fn new(
        event_id: Uuid,
        sequence_number: u64,
        event_type: impl Into<String>,
        event_version: u32,
        payload: E,
    ) -> Self {
        Self {
            event_id,
            sequence_number,
            event_type: event_type.into(),
            event_version,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn event_version(&self) -> u32 {
        self.event_version
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
