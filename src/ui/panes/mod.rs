//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`towers`]: The three pegs and their disks
//! - [`code`]: Listing of the recursive procedure with the emitting line marked
//! - [`call_stack`]: Recursive calls active for the next move
//! - [`moves`]: The full move list with the replay cursor
//! - [`status`]: Status bar with keybindings and playback state
//! - [`dialog`]: Modal disk-count picker shown when a new game starts
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function that reads state
//! and draws it. Panes never mutate puzzle state; the only `&mut` they take
//! is their own scroll state.

pub mod call_stack;
pub mod code;
pub mod dialog;
pub mod moves;
pub mod status;
pub mod towers;

// Re-export render functions for convenience
pub use call_stack::{render_call_stack_pane, CallStackScrollState};
pub use code::render_code_pane;
pub use dialog::{render_setup_dialog, CancelAction, SetupDialog};
pub use moves::{render_moves_pane, MovesScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use towers::{render_towers_pane, TowersRenderData};

use crate::ui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered pane block, highlighted when focused
pub(crate) fn pane_block<'a>(title: &'a str, is_focused: bool, theme: &Theme) -> Block<'a> {
    let border_style = if is_focused {
        Style::default()
            .fg(theme.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(theme.bg).fg(theme.fg))
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: usize, total_items: usize, visible_height: usize) -> usize {
    if total_items > visible_height {
        offset.min(total_items - visible_height)
    } else {
        0
    }
}
