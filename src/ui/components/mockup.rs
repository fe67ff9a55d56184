//! Layout mockup component
//!
//! A collapsible two-pane shell with a navigation sidebar and a content
//! table over a fixed synthetic dataset. Presentational only; renders no
//! daemon data.

use super::super::state::ViewState;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{
    Block, BorderType, Borders, List, ListItem, ListState, Padding, Row, Table,
};

/// Navigation entries; placeholders carried over from the mocked-up shell.
pub const NAV_ITEMS: [&str; 3] = ["nav 1", "nav 2", "nav 3"];

/// Render the two-pane layout mockup.
pub fn render_mockup(f: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let sidebar_width = if state.sidebar_collapsed { 5 } else { 20 };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Fill(1)])
        .split(area);

    render_sidebar(f, chunks[0], state);
    render_content(f, chunks[1], state);
}

fn render_sidebar(f: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let items: Vec<ListItem> = NAV_ITEMS
        .iter()
        .map(|item| {
            let label = if state.sidebar_collapsed {
                // Keep only the entry number when collapsed
                item.split(' ').next_back().unwrap_or(item).to_string()
            } else {
                item.to_string()
            };
            ListItem::new(label)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(if state.sidebar_collapsed { "N" } else { "NAV" })
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_nav));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_content(f: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let header = Row::new(["FULL NAME", "AGE", "ADDRESS"]).style(
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = state
        .mock_rows
        .iter()
        .map(|row| {
            Row::new([
                row.name.clone(),
                row.age.to_string(),
                row.address.clone(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Length(6),
        Constraint::Percentage(50),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title("CONTENT")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    f.render_widget(table, area);
}
