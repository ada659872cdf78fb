//! Tower pane rendering
//!
//! Draws the three pegs side by side. Each disk is a solid bar whose width
//! grows with its size, labelled with its number and filled with its palette
//! color. The disk moved by the last step is emphasised, as are the labels of
//! the pegs it moved between.

use super::pane_block;
use crate::tower::{Move, PegLabel, Towers};
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the tower pane
pub struct TowersRenderData<'a> {
    pub towers: &'a Towers,
    pub disks: u8,
    pub last_move: Option<&'a Move>,
}

/// Width of the bar for `disk` in a column `column_width` wide
fn disk_width(disk: u8, disks: u8, column_width: usize) -> usize {
    let max_width = column_width.saturating_sub(2).max(3);
    let width = max_width * disk as usize / disks.max(1) as usize;
    width.max(3).min(max_width)
}

/// Left and right padding that centre `content` within `column`
fn centre_padding(content: usize, column: usize) -> (usize, usize) {
    let spare = column.saturating_sub(content);
    let left = spare / 2;
    (left, spare - left)
}

/// A disk bar with its number in the middle
fn disk_bar(disk: u8, width: usize) -> String {
    let label = disk.to_string();
    let (left, right) = centre_padding(label.len(), width);
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(right))
}

/// Render the tower pane
pub fn render_towers_pane(frame: &mut Frame, area: Rect, data: TowersRenderData, theme: &Theme) {
    let block = pane_block(" Towers ", false, theme);
    let inner = block.inner(area);
    let column_width = (inner.width as usize / 3).max(5);

    // Peg tip row above the tallest possible stack
    let stack_height = data.disks as usize + 1;
    let mut lines: Vec<Line> = Vec::new();

    // Bottom-align: blank rows above the towers, then stack, base and labels
    let used_rows = stack_height + 2;
    for _ in 0..(inner.height as usize).saturating_sub(used_rows) {
        lines.push(Line::from(""));
    }

    let moved_disk = data.last_move.map(|mv| (mv.target, mv.disk));

    for level in (0..stack_height).rev() {
        let mut spans = Vec::new();
        for label in PegLabel::ALL {
            let peg = data.towers.peg(label);
            match peg.disks().get(level) {
                Some(&disk) => {
                    let width = disk_width(disk, data.disks, column_width);
                    let (left, right) = centre_padding(width, column_width);
                    let mut style = Style::default()
                        .bg(theme.disk_color(disk))
                        .fg(theme.disk_text);
                    let is_top = level + 1 == peg.len();
                    if is_top && moved_disk == Some((label, disk)) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                    }
                    spans.push(Span::raw(" ".repeat(left)));
                    spans.push(Span::styled(disk_bar(disk, width), style));
                    spans.push(Span::raw(" ".repeat(right)));
                }
                None => {
                    let (left, right) = centre_padding(1, column_width);
                    spans.push(Span::raw(" ".repeat(left)));
                    spans.push(Span::styled("┃", Style::default().fg(theme.peg)));
                    spans.push(Span::raw(" ".repeat(right)));
                }
            }
        }
        lines.push(Line::from(spans));
    }

    // Base
    lines.push(Line::from(Span::styled(
        "▀".repeat(column_width * 3),
        Style::default().fg(theme.base),
    )));

    // Peg labels, with the last move's endpoints emphasised
    let mut label_spans = Vec::new();
    for label in PegLabel::ALL {
        let style = match data.last_move {
            Some(mv) if mv.target == label => Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
            Some(mv) if mv.source == label => Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        };
        let (left, right) = centre_padding(1, column_width);
        label_spans.push(Span::raw(" ".repeat(left)));
        label_spans.push(Span::styled(label.to_string(), style));
        label_spans.push(Span::raw(" ".repeat(right)));
    }
    lines.push(Line::from(label_spans));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
