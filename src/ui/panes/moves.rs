//! Move list pane
//!
//! Lists every move of the solution. Applied moves are shown normally, the
//! next move is marked with an arrow, and moves still ahead are dimmed.
//! While `follow_cursor` is set the view scrolls to keep the next move in
//! sight; manual scrolling clears it until the next step.

use super::{clamp_scroll, pane_block};
use crate::solver::Solution;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Scroll state for the move list
#[derive(Debug)]
pub struct MovesScrollState {
    pub offset: usize,
    pub follow_cursor: bool,
}

impl Default for MovesScrollState {
    fn default() -> Self {
        MovesScrollState {
            offset: 0,
            follow_cursor: true,
        }
    }
}

/// Render the move list with the replay cursor
pub fn render_moves_pane(
    frame: &mut Frame,
    area: Rect,
    solution: &Solution,
    cursor: usize,
    is_focused: bool,
    scroll_state: &mut MovesScrollState,
    theme: &Theme,
) {
    let block = pane_block(" Moves ", is_focused, theme);
    let total_items = solution.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if scroll_state.follow_cursor {
        // Keep the next move roughly a third of the way down
        let anchor = visible_height / 3;
        scroll_state.offset = cursor.saturating_sub(anchor);
    }
    scroll_state.offset = clamp_scroll(scroll_state.offset, total_items, visible_height);

    let number_width = total_items.to_string().len();
    let items: Vec<ListItem> = solution
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, mv)| {
            let (marker, style) = if idx == cursor {
                (
                    "▶ ",
                    Style::default()
                        .fg(theme.secondary)
                        .bg(theme.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else if idx < cursor {
                ("  ", Style::default().fg(theme.fg))
            } else {
                ("  ", Style::default().fg(theme.comment))
            };
            let line = Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{:>width$}. ", idx + 1, width = number_width), style),
                Span::styled(mv.to_string(), style),
            ]);
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
