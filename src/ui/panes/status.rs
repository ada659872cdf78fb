//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub cursor: usize,
    pub total_moves: usize,
    pub interval_ms: u64,
    pub is_playing: bool,
}

impl StatusRenderData<'_> {
    /// Ready / Playing / Completed / Paused, as shown after the move counter
    pub fn state_label(&self) -> &'static str {
        if self.is_playing {
            "Playing"
        } else if self.cursor == self.total_moves {
            "Completed"
        } else if self.cursor == 0 {
            "Ready"
        } else {
            "Paused"
        }
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData, theme: &Theme) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let bar_style = Style::default().bg(theme.current_line_bg);

    // Left side: move counter, state and message
    let left_spans = vec![
        Span::styled(
            format!(" Move {}/{} ", data.cursor, data.total_moves),
            Style::default()
                .bg(theme.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", data.state_label()),
            bar_style.fg(theme.secondary).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│", bar_style.fg(theme.comment)),
        Span::styled(format!(" {} ", data.message), bar_style.fg(theme.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(theme.comment).fg(Color::Black);
    let desc_style = bar_style.fg(theme.fg);
    let sep_style = bar_style.fg(theme.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" +/- ", key_style),
        Span::styled(format!(" {}ms ", data.interval_ms), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" r ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" n ", key_style),
        Span::styled(" new ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" t ", key_style),
        Span::styled(" theme ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    // Show status indicators based on position and state
    let badge = if data.is_playing {
        Some((" ▶ PLAYING ", theme.secondary))
    } else if data.cursor == data.total_moves {
        Some((" END ", theme.error))
    } else if data.cursor == 0 {
        Some((" START ", theme.success))
    } else {
        None
    };

    if let Some((text, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
