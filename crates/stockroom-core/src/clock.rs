//! Wall-clock abstraction used to stamp journal entries.

use chrono::{DateTime, SubsecRound, Utc};

/// Source of the instants recorded on movement records.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the operating system, truncated to whole milliseconds so
/// persisted timestamps keep one precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn test_system_clock_has_millisecond_precision() {
        let before = Utc::now().trunc_subsecs(3);

        let now = SystemClock.now();

        assert_eq!(now.nanosecond() % 1_000_000, 0);
        assert!(now >= before);
    }
}
