//! Procedure listing pane
//!
//! Shows the recursive procedure the solver runs, with light syntax
//! highlighting. While moves remain, the line that records a move is marked,
//! matching the innermost frame shown in the call stack pane.

use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const CODE_LISTING: [&str; 8] = [
    "fn move_stack(n, source, target, spare) {",
    "    if n == 0 {",
    "        return; // nothing to move",
    "    }",
    "    move_stack(n - 1, source, spare, target);",
    "    record(source, target, n);",
    "    move_stack(n - 1, spare, target, source);",
    "}",
];

/// Index into [`CODE_LISTING`] of the line that emits a move
pub const RECORD_LINE: usize = 5;

/// Simple syntax highlighting for the listing
fn highlight_line<'a>(line: &'a str, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Handle comments
        if c == '/' && i + 1 < chars.len() && chars[i + 1] == '/' {
            if !current_word.is_empty() {
                spans.push(Span::raw(current_word.clone()));
                current_word.clear();
            }
            let byte_index = line.char_indices().nth(i).map_or(line.len(), |(b, _)| b);
            spans.push(Span::styled(
                &line[byte_index..],
                Style::default().fg(theme.comment),
            ));
            break;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let style = word_style(&current_word, c == '(', theme);
                spans.push(Span::styled(current_word.clone(), style));
                current_word.clear();
            }

            let style = match c {
                '{' | '}' | '(' | ')' => Style::default().fg(theme.primary), // Brackets
                _ => Style::default().fg(theme.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word, false, theme);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str, is_function: bool, theme: &Theme) -> Style {
    match word {
        "fn" | "if" | "return" => Style::default()
            .fg(theme.keyword)
            .add_modifier(Modifier::BOLD),
        _ if word.chars().all(|c| c.is_ascii_digit()) => Style::default().fg(theme.number),
        _ if is_function => Style::default().fg(theme.function),
        _ => Style::default().fg(theme.fg),
    }
}

/// Render the procedure listing. `has_next_move` marks the emitting line.
pub fn render_code_pane(frame: &mut Frame, area: Rect, has_next_move: bool, theme: &Theme) {
    let block = Block::default()
        .title(" Move Procedure ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_normal))
        .style(Style::default().bg(theme.bg).fg(theme.fg));

    let lines: Vec<Line> = CODE_LISTING
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let is_current = has_next_move && idx == RECORD_LINE;
            let num_style = if is_current {
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.comment)
            };
            let marker = if is_current { "▶" } else { " " };

            let mut content = highlight_line(text, theme);
            if is_current {
                for span in &mut content.spans {
                    span.style = span.style.bg(theme.current_line_bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{}{:2} ", marker, idx + 1), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
