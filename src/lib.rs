//! # Introduction
//!
//! hanoi-tty solves the Towers of Hanoi for up to eight disks, records the
//! recursive call stack behind every move, and lets you step through the
//! solution forward and backward in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Disk count → Solver → Solution + CallTrace → Replay → TUI
//! ```
//!
//! 1. [`solver`] — validates the disk count and runs the recursive
//!    `move_stack` procedure, producing the `2^n - 1` moves and, optionally,
//!    a [`solver::CallTrace`] snapshot per move.
//! 2. [`tower`] — the puzzle data model: [`tower::PegLabel`],
//!    [`tower::Peg`], [`tower::Move`] and [`tower::Towers`].
//! 3. [`replay`] — a cursor over the solution that rebuilds tower state one
//!    move at a time, with polled auto-play.
//! 4. [`session`] — owns one puzzle's solution, trace and replay.
//! 5. [`settings`] — the persisted theme preference.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use hanoi_tty::session::Session;
//! use hanoi_tty::tower::PegLabel;
//!
//! let mut session = Session::new(2).unwrap();
//! let replay = session.replay_mut();
//! while replay.step_forward() {}
//! assert_eq!(replay.peg(PegLabel::C).disks(), &[2, 1]);
//! ```

pub mod replay;
pub mod session;
pub mod settings;
pub mod solver;
pub mod tower;
pub mod ui;
