//! Puzzle data model
//!
//! This module provides the state the solver produces and the replay engine
//! mutates:
//! - [`peg`]: [`PegLabel`] and the [`Peg`] disk stack
//! - [`Move`]: a single disk relocation
//! - [`Towers`]: the three pegs together
//!
//! # Peg Invariant
//!
//! Disks are stored bottom-to-top. At every point in time each peg is
//! strictly decreasing from bottom to top, and across all three pegs the
//! disk sizes are exactly `1..=n`, each appearing once.

pub mod peg;

pub use peg::{Peg, PegLabel};

use std::fmt;

/// A single disk relocation produced by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: PegLabel,
    pub target: PegLabel,
    pub disk: u8,
}

impl Move {
    pub fn new(source: PegLabel, target: PegLabel, disk: u8) -> Self {
        Move {
            source,
            target,
            disk,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk {}: {} -> {}", self.disk, self.source, self.target)
    }
}

/// The three pegs of a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    pegs: [Peg; 3],
}

impl Towers {
    /// Initial configuration: all `disks` stacked on A, largest at the bottom
    pub fn new(disks: u8) -> Self {
        let mut towers = Towers {
            pegs: PegLabel::ALL.map(Peg::new),
        };
        for size in (1..=disks).rev() {
            towers.pegs[PegLabel::A.index()].push(size);
        }
        towers
    }

    pub fn peg(&self, label: PegLabel) -> &Peg {
        &self.pegs[label.index()]
    }

    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// Apply a move: pop from its source, push onto its target.
    ///
    /// # Panics
    ///
    /// Panics if the disk on top of the source is not the disk the move names.
    /// That can only happen if the move sequence and the tower state have
    /// drifted apart, which is a bug rather than a recoverable condition.
    pub fn apply(&mut self, mv: &Move) {
        self.relocate(mv.source, mv.target, mv.disk);
    }

    /// Undo a move: pop from its target, push back onto its source.
    ///
    /// # Panics
    ///
    /// Same invariant as [`Towers::apply`], checked against the target peg.
    pub fn undo(&mut self, mv: &Move) {
        self.relocate(mv.target, mv.source, mv.disk);
    }

    fn relocate(&mut self, from: PegLabel, to: PegLabel, expected: u8) {
        let popped = self.pegs[from.index()].pop();
        assert_eq!(
            popped,
            Some(expected),
            "peg {} does not have disk {} on top",
            from,
            expected
        );
        if let Some(top) = self.pegs[to.index()].top() {
            assert!(
                top > expected,
                "disk {} cannot rest on smaller disk {} (peg {})",
                expected,
                top,
                to
            );
        }
        self.pegs[to.index()].push(expected);
    }

    /// Total number of disks across all pegs
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Peg::len).sum()
    }

    /// Check the peg invariant: every peg ordered, disks exactly `1..=disks`
    pub fn is_valid(&self, disks: u8) -> bool {
        if !self.pegs.iter().all(Peg::is_ordered) {
            return false;
        }
        let mut seen: Vec<u8> = self
            .pegs
            .iter()
            .flat_map(|peg| peg.disks().iter().copied())
            .collect();
        seen.sort_unstable();
        seen.into_iter().eq(1..=disks)
    }

    /// All disks on C in descending order, A and B empty
    pub fn is_solved(&self, disks: u8) -> bool {
        self.peg(PegLabel::A).is_empty()
            && self.peg(PegLabel::B).is_empty()
            && self.peg(PegLabel::C).disks().iter().copied().eq((1..=disks).rev())
    }
}
