//! Peg labels and disk stacks

use std::fmt;

/// One of the three pegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PegLabel {
    A,
    B,
    C,
}

impl PegLabel {
    pub const ALL: [PegLabel; 3] = [PegLabel::A, PegLabel::B, PegLabel::C];

    /// Position of this peg, left to right
    pub fn index(self) -> usize {
        match self {
            PegLabel::A => 0,
            PegLabel::B => 1,
            PegLabel::C => 2,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            PegLabel::A => 'A',
            PegLabel::B => 'B',
            PegLabel::C => 'C',
        }
    }
}

impl fmt::Display for PegLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A stack of disk sizes, bottom first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peg {
    label: PegLabel,
    disks: Vec<u8>,
}

impl Peg {
    pub fn new(label: PegLabel) -> Self {
        Peg {
            label,
            disks: Vec::new(),
        }
    }

    pub fn label(&self) -> PegLabel {
        self.label
    }

    pub fn push(&mut self, disk: u8) {
        self.disks.push(disk);
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.disks.pop()
    }

    /// Disk currently on top, if any
    pub fn top(&self) -> Option<u8> {
        self.disks.last().copied()
    }

    /// Disks bottom-to-top
    pub fn disks(&self) -> &[u8] {
        &self.disks
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Strictly decreasing from bottom to top
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[0] > pair[1])
    }
}
