#![forbid(unsafe_code)]

mod clock;
mod entry;
mod map;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use entry::Entry;
pub use map::TtlMap;

/// Reexportado para quem implementa [`Clock`] sem depender do tokio diretamente.
pub use tokio::time::{Duration, Instant};
