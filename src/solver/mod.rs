//! Recursive move generator
//!
//! This module turns a disk count into the canonical move sequence:
//! - [`solve`]: the move list only
//! - [`solve_with_trace`]: the move list plus a [`CallTrace`] for display
//! - [`errors`]: input validation errors
//!
//! # Algorithm
//!
//! ```text
//! move_stack(n, source, target, auxiliary):
//!     if n == 0: return
//!     move_stack(n - 1, source, auxiliary, target)
//!     record (source, target, n)
//!     move_stack(n - 1, auxiliary, target, source)
//! ```
//!
//! The top-level call is `move_stack(n, A, C, B)`, which yields exactly
//! `2^n - 1` moves. The output depends on `n` alone.

pub mod constants;
pub mod errors;
pub mod trace;

pub use constants::{DEFAULT_DISKS, MAX_DISKS, MIN_DISKS};
pub use errors::SolveError;
pub use trace::{CallFrame, CallTrace};

use crate::tower::{Move, PegLabel};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A disk count known to be within `MIN_DISKS..=MAX_DISKS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiskCount(u8);

impl DiskCount {
    pub fn new(n: u8) -> Result<Self, SolveError> {
        Self::from_i64(n as i64)
    }

    fn from_i64(n: i64) -> Result<Self, SolveError> {
        if n < MIN_DISKS as i64 || n > MAX_DISKS as i64 {
            return Err(SolveError::InvalidDiskCount {
                requested: n,
                min: MIN_DISKS,
                max: MAX_DISKS,
            });
        }
        Ok(DiskCount(n as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Length of the solution for this many disks
    pub fn move_count(self) -> usize {
        (1usize << self.0) - 1
    }
}

impl Default for DiskCount {
    fn default() -> Self {
        DiskCount(DEFAULT_DISKS)
    }
}

impl fmt::Display for DiskCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DiskCount {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s.trim().parse().map_err(|_| SolveError::NotANumber {
            input: s.to_string(),
        })?;
        Self::from_i64(n)
    }
}

/// The complete ordered move list for one disk count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    disks: DiskCount,
    moves: Vec<Move>,
}

impl Solution {
    pub fn disks(&self) -> DiskCount {
        self.disks
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Collects moves (and optionally call frames) during the recursion
struct Recorder {
    moves: Vec<Move>,
    frames: Vec<CallFrame>,
    trace: Option<CallTrace>,
}

impl Recorder {
    fn move_stack(&mut self, n: u8, source: PegLabel, target: PegLabel, auxiliary: PegLabel) {
        if n == 0 {
            return;
        }

        let capture = self.trace.is_some();
        if capture {
            self.frames.push(CallFrame {
                depth: self.frames.len(),
                disks: n,
                source,
                target,
                auxiliary,
            });
        }

        self.move_stack(n - 1, source, auxiliary, target);

        self.moves.push(Move::new(source, target, n));
        if let Some(trace) = self.trace.as_mut() {
            trace.record(&self.frames);
        }

        self.move_stack(n - 1, auxiliary, target, source);

        if capture {
            self.frames.pop();
        }
    }
}

fn run(disks: DiskCount, with_trace: bool) -> (Solution, Option<CallTrace>) {
    let capacity = disks.move_count();
    let mut recorder = Recorder {
        moves: Vec::with_capacity(capacity),
        frames: Vec::with_capacity(disks.get() as usize),
        trace: with_trace.then(|| CallTrace::with_capacity(capacity)),
    };
    recorder.move_stack(disks.get(), PegLabel::A, PegLabel::C, PegLabel::B);

    debug!(disks = disks.get(), moves = recorder.moves.len(), "solved");

    let solution = Solution {
        disks,
        moves: recorder.moves,
    };
    (solution, recorder.trace)
}

/// Generate the move sequence for `disks`
pub fn solve(disks: DiskCount) -> Solution {
    run(disks, false).0
}

/// Generate the move sequence together with its call trace
pub fn solve_with_trace(disks: DiskCount) -> (Solution, CallTrace) {
    let (solution, trace) = run(disks, true);
    (solution, trace.unwrap_or_default())
}
