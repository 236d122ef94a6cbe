//! Domain events emitted by storefront aggregates.

pub mod envelope;
pub mod event;

pub use envelope::EventEnvelope;
pub use event::Event;
