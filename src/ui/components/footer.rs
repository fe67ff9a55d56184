//! Footer component
//!
//! Renders key hints for the active screen

use super::super::app::Screen;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer with the key hints that apply to the current screen.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, screen: &Screen) {
    let footer_text = match screen {
        Screen::Transfers => "[1] Transfers | [2] Detail | [3] Layout | [Q] Quit",
        Screen::Detail => {
            "[1] Transfers | [2] Detail | [3] Layout | [R] Refresh | [P] Post Note | [Q] Quit"
        }
        Screen::Mockup => {
            "[1] Transfers | [2] Detail | [3] Layout | [B] Sidebar | [Up/Down] Nav | [Q] Quit"
        }
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
