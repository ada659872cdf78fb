//! One puzzle session
//!
//! A session is created when a disk count is chosen and discarded when the
//! next one starts. It owns the call trace and the [`Replay`], which in turn
//! owns the solution and is the only thing that mutates tower state.

use crate::replay::{Replay, DEFAULT_INTERVAL_MS};
use crate::solver::{self, CallTrace, DiskCount, SolveError};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Session {
    disks: DiskCount,
    trace: CallTrace,
    replay: Replay,
}

impl Session {
    /// Validate `disks`, solve, and position the replay at the origin
    pub fn new(disks: u8) -> Result<Self, SolveError> {
        Self::with_interval(disks, DEFAULT_INTERVAL_MS)
    }

    pub fn with_interval(disks: u8, interval_ms: u64) -> Result<Self, SolveError> {
        let disks = DiskCount::new(disks)?;
        Ok(Self::from_disk_count(disks, interval_ms))
    }

    pub fn from_disk_count(disks: DiskCount, interval_ms: u64) -> Self {
        let (solution, trace) = solver::solve_with_trace(disks);
        info!(
            disks = disks.get(),
            moves = solution.len(),
            "new session"
        );
        Session {
            disks,
            trace,
            replay: Replay::with_interval(solution, interval_ms),
        }
    }

    pub fn disks(&self) -> DiskCount {
        self.disks
    }

    pub fn replay(&self) -> &Replay {
        &self.replay
    }

    pub fn replay_mut(&mut self) -> &mut Replay {
        &mut self.replay
    }

    pub fn trace(&self) -> &CallTrace {
        &self.trace
    }

    /// Call stack for the move the next forward step will apply.
    /// Empty once the puzzle is solved.
    pub fn current_trace_lines(&self) -> Vec<String> {
        self.trace.lines(self.replay.cursor())
    }
}
