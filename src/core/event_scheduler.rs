use super::event::Event;
use super::types::SimTime;
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
pub struct ScheduledEvent {
    pub time: SimTime,
    pub sequence_num: u64,
    pub event: Event,
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .time
            .total_cmp(&self.time)
            .then_with(|| other.sequence_num.cmp(&self.sequence_num))
    }
}

/// Pending events ordered by `(time, sequence)`
///
/// Sequence numbers are handed out at push time and never reused, so events
/// sharing a timestamp come back out in the order they were pushed.
#[derive(Debug, Default)]
pub struct EventScheduler {
    event_queue: BinaryHeap<ScheduledEvent>,
    sequence_counter: u64,
}

impl EventScheduler {
    /// Create a new EventScheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an event at its own timestamp
    pub fn push(&mut self, event: impl Into<Event>) {
        let event = event.into();
        debug!(
            "schedule {} at t={:.4} (seq {})",
            event.kind(),
            event.time(),
            self.sequence_counter
        );

        self.event_queue.push(ScheduledEvent {
            time: event.time(),
            sequence_num: self.sequence_counter,
            event,
        });
        self.sequence_counter += 1;
    }

    /// Remove and return the earliest event, `None` once drained
    pub fn pop(&mut self) -> Option<Event> {
        self.event_queue.pop().map(|scheduled| scheduled.event)
    }

    /// Timestamp of the next event without removing it
    pub fn peek_time(&self) -> Option<SimTime> {
        self.event_queue.peek().map(|scheduled| scheduled.time)
    }

    pub fn is_empty(&self) -> bool {
        self.event_queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.event_queue.len()
    }

    /// Total number of events ever pushed
    pub fn scheduled_count(&self) -> u64 {
        self.sequence_counter
    }
}
