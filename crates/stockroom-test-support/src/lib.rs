//! Shared test doubles for the Stockroom inventory service.

mod clock;
mod repository;

pub use clock::{FixedClock, SequenceClock};
pub use repository::{
    CorruptSnapshotRepository, EmptySnapshotRepository, FailingSnapshotRepository,
    RecordingSnapshotRepository,
};
