use serde::{Deserialize, Serialize};

use techstore_core::SessionId;

use crate::Event;

/// Envelope for an event, carrying the session it belongs to and its position
/// in that session's stream.
///
/// `sequence_number` is monotonically increasing per session, starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    session_id: SessionId,
    event_type: String,
    sequence_number: u64,
    payload: E,
}

impl<E: Event> EventEnvelope<E> {
    pub fn new(session_id: SessionId, sequence_number: u64, payload: E) -> Self {
        Self {
            session_id,
            event_type: payload.event_type().to_string(),
            sequence_number,
            payload,
        }
    }
}

impl<E> EventEnvelope<E> {
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
