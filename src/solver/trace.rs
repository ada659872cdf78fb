//! Recursive call trace captured alongside the move list
//!
//! Each recorded move gets one snapshot of the `move_stack` frames that were
//! active when the move was emitted, outermost call first. The trace is only
//! used for display; replay never reads it.

use crate::tower::PegLabel;
use std::fmt;

/// One active `move_stack` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallFrame {
    /// Recursion depth, 0 for the top-level call
    pub depth: usize,
    /// Number of disks this call is moving
    pub disks: u8,
    pub source: PegLabel,
    pub target: PegLabel,
    pub auxiliary: PegLabel,
}

impl fmt::Display for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move_stack({}, {}, {}, {})",
            self.disks, self.source, self.target, self.auxiliary
        )
    }
}

/// Call stack snapshots, one per move in the matching solution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallTrace {
    snapshots: Vec<Vec<CallFrame>>,
}

impl CallTrace {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        CallTrace {
            snapshots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, frames: &[CallFrame]) {
        self.snapshots.push(frames.to_vec());
    }

    /// Frames active when move `index` was emitted
    pub fn snapshot(&self, index: usize) -> Option<&[CallFrame]> {
        self.snapshots.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Display lines for move `index`, indented two spaces per depth level
    pub fn lines(&self, index: usize) -> Vec<String> {
        self.snapshot(index)
            .map(|frames| {
                frames
                    .iter()
                    .map(|frame| format!("{}{}", "  ".repeat(frame.depth), frame))
                    .collect()
            })
            .unwrap_or_default()
    }
}
