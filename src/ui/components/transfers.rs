//! Transfers table component
//!
//! Renders the polled snapshot as one row per tracked transfer

use super::super::state::ViewState;
use crate::api::types::format_rate;

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Row, Table};

/// Render the transfers table from the latest snapshot.
pub fn render_transfers(f: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let header = Row::new(["NAME", "DOWN", "UP", "PROGRESS", "S/P"]).style(
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = state
        .snapshot
        .records()
        .map(|(_, record)| {
            Row::new([
                record.name.clone(),
                format_rate(record.down_rate),
                format_rate(record.up_rate),
                format!("{:.1}%", record.progress * 100.0),
                format!("{}/{}", record.seeds, record.peers),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(44),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!("TRANSFERS ({})", state.snapshot.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    f.render_widget(table, area);
}
