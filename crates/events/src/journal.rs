//! In-memory append-only event journal.

use uuid::Uuid;

use crate::envelope::EventRecord;
use crate::event::Event;

/// Append-only, in-memory journal of events.
///
/// Single-writer; not synchronized. Sequence numbers start at 1 and increase
/// by one per appended event.
#[derive(Debug, Clone)]
pub struct EventJournal<E> {
    records: Vec<EventRecord<E>>,
}

impl<E> Default for EventJournal<E> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<E: Event> EventJournal<E> {
    pub fn new() -> Self {
        Self::default()
    }

    fn current_sequence(&self) -> u64 {
        self.records.last().map(|r| r.sequence_number()).unwrap_or(0)
    }

    /// Append events in order and return the records that were written.
    pub fn append(&mut self, events: impl IntoIterator<Item = E>) -> &[EventRecord<E>] {
        let start = self.records.len();
        let mut next = self.current_sequence() + 1;
        for event in events {
            let record = EventRecord::new(
                Uuid::now_v7(),
                next,
                event.event_type(),
                event.version(),
                event,
            );
            next += 1;
            self.records.push(record);
        }
        &self.records[start..]
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[EventRecord<E>] {
        &self.records
    }

    /// Records with a sequence number strictly greater than `after`.
    pub fn since(&self, after: u64) -> &[EventRecord<E>] {
        let idx = self
            .records
            .partition_point(|r| r.sequence_number() <= after);
        &self.records[idx..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
