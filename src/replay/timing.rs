// Auto-play timing constants and tick results

/// Interval used when none is configured
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Fastest allowed auto-play interval
pub const MIN_INTERVAL_MS: u64 = 100;

/// Slowest allowed auto-play interval
pub const MAX_INTERVAL_MS: u64 = 2000;

/// Amount `faster`/`slower` change the interval by
pub const INTERVAL_STEP_MS: u64 = 100;

/// What a call to [`Replay::tick`](super::Replay::tick) did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Auto-play is off
    Idle,
    /// Playing, interval not yet reached
    Waiting,
    /// Advanced one move
    Stepped,
    /// Cursor was already at the end; auto-play has stopped
    Finished,
}

pub(crate) fn clamp_interval(interval_ms: u64) -> u64 {
    interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS)
}
