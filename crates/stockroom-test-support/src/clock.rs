//! Deterministic `Clock` implementations for tests.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use stockroom_core::clock::Clock;

/// A clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that returns instants from a predetermined list, repeating the last
/// one once the list is exhausted. Lets tests simulate a clock that jumps
/// backwards.
#[derive(Debug)]
pub struct SequenceClock {
    instants: Vec<DateTime<Utc>>,
    index: Mutex<usize>,
}

impl SequenceClock {
    /// Creates a clock that will yield `instants` in order.
    ///
    /// # Panics
    ///
    /// Panics if `instants` is empty.
    #[must_use]
    pub fn new(instants: Vec<DateTime<Utc>>) -> Self {
        assert!(!instants.is_empty(), "SequenceClock needs at least one instant");
        Self {
            instants,
            index: Mutex::new(0),
        }
    }
}

impl Clock for SequenceClock {
    fn now(&self) -> DateTime<Utc> {
        let mut index = self.index.lock().unwrap();
        let instant = self.instants[(*index).min(self.instants.len() - 1)];
        *index += 1;
        instant
    }
}
