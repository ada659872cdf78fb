//! Recursive call stack pane

use super::{clamp_scroll, pane_block};
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Scroll state for the call stack pane
#[derive(Debug, Default)]
pub struct CallStackScrollState {
    pub offset: usize,
}

/// Render the call stack for the next move. The innermost call is last.
pub fn render_call_stack_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[String],
    is_focused: bool,
    scroll_state: &mut CallStackScrollState,
    theme: &Theme,
) {
    let block = pane_block(" Recursive Call Stack ", is_focused, theme);

    if lines.is_empty() {
        let paragraph = Paragraph::new("(solved: no active calls)")
            .block(block)
            .style(Style::default().fg(theme.comment).bg(theme.bg));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let innermost = lines.len() - 1;
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    scroll_state.offset = clamp_scroll(scroll_state.offset, lines.len(), visible_height);

    let items: Vec<ListItem> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let style = if idx == innermost {
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            ListItem::new(line.as_str()).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
