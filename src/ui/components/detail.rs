//! Detail panel component
//!
//! Renders the configured record's name and formatted rates

use super::super::state::ViewState;
use crate::api::types::format_rate;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the single-record detail panel.
///
/// A key absent from the snapshot gets a placeholder display instead of an
/// empty panel; the poller has already logged the miss.
pub fn render_detail(f: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let mut info_lines = Vec::new();

    info_lines.push(Line::from(vec![Span::styled(
        format!("Key: {}", state.record_key),
        Style::default().fg(Color::DarkGray),
    )]));
    info_lines.push(Line::from(""));

    match state.detail_record() {
        Some(record) => {
            info_lines.push(Line::from(vec![Span::styled(
                format!("Name: {}", record.name),
                Style::default().fg(Color::LightBlue),
            )]));
            info_lines.push(Line::from(vec![Span::styled(
                format!("Down: {}", format_rate(record.down_rate)),
                Style::default().fg(Color::LightGreen),
            )]));
            info_lines.push(Line::from(vec![Span::styled(
                format!("Up: {}", format_rate(record.up_rate)),
                Style::default().fg(Color::LightCyan),
            )]));
            info_lines.push(Line::from(vec![Span::styled(
                format!("Progress: {:.1}%", record.progress * 100.0),
                Style::default().fg(Color::LightYellow),
            )]));
            info_lines.push(Line::from(vec![Span::styled(
                format!("Swarm: {} seeds / {} peers", record.seeds, record.peers),
                Style::default().fg(Color::Magenta),
            )]));
        }
        None => {
            info_lines.push(Line::from(vec![Span::styled(
                "Name: -",
                Style::default().fg(Color::DarkGray),
            )]));
            info_lines.push(Line::from(vec![Span::styled(
                "Down: -",
                Style::default().fg(Color::DarkGray),
            )]));
            info_lines.push(Line::from(vec![Span::styled(
                "Up: -",
                Style::default().fg(Color::DarkGray),
            )]));
            info_lines.push(Line::from(""));
            let note = if state.snapshot.is_empty() {
                "Snapshot is empty"
            } else {
                "Record not in the current snapshot"
            };
            info_lines.push(Line::from(vec![Span::styled(
                note,
                Style::default().fg(Color::Yellow),
            )]));
        }
    }

    let info_block = Block::default()
        .title("DETAIL")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
