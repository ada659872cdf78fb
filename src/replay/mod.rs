//! Replay engine over a solved move sequence
//!
//! [`Replay`] is a cursor into a [`Solution`]. The tower state is rebuilt
//! incrementally: stepping forward applies `moves[cursor]`, stepping backward
//! undoes `moves[cursor - 1]`. The puzzle is never re-solved or replayed from
//! the origin except by [`Replay::reset`].
//!
//! # Auto-play
//!
//! Auto-play is polled, not threaded. The host calls [`Replay::tick`] with
//! the wall-clock time elapsed since its previous call; once the accumulated
//! time reaches the interval the engine advances one move and the
//! accumulator restarts from zero.

pub mod timing;

pub use timing::{
    TickOutcome, DEFAULT_INTERVAL_MS, INTERVAL_STEP_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS,
};

use crate::solver::Solution;
use crate::tower::{Move, Peg, PegLabel, Towers};
use tracing::{debug, trace};

/// Navigable state of one puzzle session
#[derive(Debug, Clone)]
pub struct Replay {
    solution: Solution,
    towers: Towers,
    cursor: usize,
    playing: bool,
    interval_ms: u64,
    elapsed_ms: u64,
}

impl Replay {
    /// Start at the origin with the default auto-play interval
    pub fn new(solution: Solution) -> Self {
        Self::with_interval(solution, DEFAULT_INTERVAL_MS)
    }

    pub fn with_interval(solution: Solution, interval_ms: u64) -> Self {
        let towers = Towers::new(solution.disks().get());
        Replay {
            solution,
            towers,
            cursor: 0,
            playing: false,
            interval_ms: timing::clamp_interval(interval_ms),
            elapsed_ms: 0,
        }
    }

    /// Apply the next move. Returns `false` without changing anything when
    /// the cursor is already at the end.
    pub fn step_forward(&mut self) -> bool {
        let Some(mv) = self.solution.get(self.cursor).copied() else {
            return false;
        };
        self.towers.apply(&mv);
        self.cursor += 1;
        trace!(cursor = self.cursor, %mv, "step forward");
        true
    }

    /// Undo the previous move. Returns `false` at the origin.
    pub fn step_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let mv = self.solution.moves()[self.cursor];
        self.towers.undo(&mv);
        trace!(cursor = self.cursor, %mv, "step backward");
        true
    }

    /// Step forward up to `count` times, returning how many steps were taken
    pub fn step_forward_by(&mut self, count: usize) -> usize {
        (0..count).take_while(|_| self.step_forward()).count()
    }

    /// Step backward up to `count` times, returning how many steps were taken
    pub fn step_backward_by(&mut self, count: usize) -> usize {
        (0..count).take_while(|_| self.step_backward()).count()
    }

    /// Apply every remaining move and stop auto-play
    pub fn jump_to_end(&mut self) -> usize {
        self.playing = false;
        let remaining = self.solution.len() - self.cursor;
        self.step_forward_by(remaining)
    }

    /// Back to the origin: cursor 0, all disks on A, not playing
    pub fn reset(&mut self) {
        self.towers = Towers::new(self.solution.disks().get());
        self.cursor = 0;
        self.playing = false;
        self.elapsed_ms = 0;
        debug!(disks = self.solution.disks().get(), "replay reset");
    }

    pub fn set_playing(&mut self, playing: bool) {
        if playing && !self.playing {
            self.elapsed_ms = 0;
        }
        self.playing = playing;
    }

    pub fn toggle_playing(&mut self) -> bool {
        self.set_playing(!self.playing);
        self.playing
    }

    /// Change the auto-play interval. Time already accumulated is kept, so
    /// the new interval is compared against it on the next tick.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = timing::clamp_interval(interval_ms);
    }

    /// Shorten the interval by one step
    pub fn faster(&mut self) {
        self.set_interval_ms(self.interval_ms.saturating_sub(INTERVAL_STEP_MS));
    }

    /// Lengthen the interval by one step
    pub fn slower(&mut self) {
        self.set_interval_ms(self.interval_ms.saturating_add(INTERVAL_STEP_MS));
    }

    /// Advance auto-play by `elapsed_ms` of wall-clock time.
    ///
    /// Moves at most once per call. When the cursor is already at the end,
    /// auto-play switches itself off.
    pub fn tick(&mut self, elapsed_ms: u64) -> TickOutcome {
        if !self.playing {
            return TickOutcome::Idle;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms < self.interval_ms {
            return TickOutcome::Waiting;
        }

        self.elapsed_ms = 0;
        if self.step_forward() {
            TickOutcome::Stepped
        } else {
            self.playing = false;
            debug!(cursor = self.cursor, "auto-play finished");
            TickOutcome::Finished
        }
    }

    // ========== Getter methods for UI ==========

    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    pub fn peg(&self, label: PegLabel) -> &Peg {
        self.towers.peg(label)
    }

    /// Number of moves applied so far
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_moves(&self) -> usize {
        self.solution.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Time accumulated towards the next auto-play step
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor == self.solution.len()
    }

    pub fn disks(&self) -> u8 {
        self.solution.disks().get()
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// The move most recently applied
    pub fn last_move(&self) -> Option<&Move> {
        self.cursor.checked_sub(1).and_then(|i| self.solution.get(i))
    }

    /// The move the next forward step will apply
    pub fn next_move(&self) -> Option<&Move> {
        self.solution.get(self.cursor)
    }
}
