//! Disk count setup dialog
//!
//! A modal overlay for choosing the size of the next puzzle. Digits pick a
//! count directly, arrows adjust it, Enter starts the game and Esc cancels.

use crate::solver::{DEFAULT_DISKS, MAX_DISKS, MIN_DISKS};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// What Esc does while the dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelAction {
    /// Close the dialog and keep the current game
    Close,
    /// Quit the application (no game has been chosen yet)
    Quit,
}

/// State of the open setup dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupDialog {
    selected: u8,
    on_cancel: CancelAction,
}

impl SetupDialog {
    pub fn new(selected: u8, on_cancel: CancelAction) -> Self {
        SetupDialog {
            selected: selected.clamp(MIN_DISKS, MAX_DISKS),
            on_cancel,
        }
    }

    pub fn selected(&self) -> u8 {
        self.selected
    }

    pub fn on_cancel(&self) -> CancelAction {
        self.on_cancel
    }

    /// Select `disks`, ignoring values outside the supported range
    pub fn select(&mut self, disks: u8) -> bool {
        if (MIN_DISKS..=MAX_DISKS).contains(&disks) {
            self.selected = disks;
            true
        } else {
            false
        }
    }

    pub fn increment(&mut self) {
        self.selected = (self.selected + 1).min(MAX_DISKS);
    }

    pub fn decrement(&mut self) {
        self.selected = self.selected.saturating_sub(1).max(MIN_DISKS);
    }
}

impl Default for SetupDialog {
    fn default() -> Self {
        SetupDialog::new(DEFAULT_DISKS, CancelAction::Close)
    }
}

/// A `width` x `height` rectangle centred in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}

/// Render the dialog on top of whatever is already drawn
pub fn render_setup_dialog(frame: &mut Frame, area: Rect, dialog: &SetupDialog, theme: &Theme) {
    let rect = centered_rect(44, 9, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(" Towers of Hanoi - Setup ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(theme.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(theme.bg).fg(theme.fg));

    let mut number_spans = Vec::new();
    for disks in MIN_DISKS..=MAX_DISKS {
        let style = if disks == dialog.selected() {
            Style::default()
                .bg(theme.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg)
        };
        number_spans.push(Span::styled(format!(" {} ", disks), style));
        number_spans.push(Span::raw(" "));
    }

    let hint_style = Style::default().fg(theme.comment);
    let lines = vec![
        Line::from(Span::styled(
            "Enter Number of Disks",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(number_spans),
        Line::from(""),
        Line::from(Span::styled(
            format!("Selected: {} disks", dialog.selected()),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "1-8 / ←→ choose   ↵ start   Esc cancel",
            hint_style,
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, rect);
}
