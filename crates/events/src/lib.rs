//! Kitchen events: what happened to the larder, as immutable facts.
//!
//! Events are process-lifetime only. The journal is an in-memory record of
//! the session, nothing here is persisted.

pub mod envelope;
pub mod event;
pub mod journal;

pub use envelope::EventRecord;
pub use event::Event;
pub use journal::EventJournal;
