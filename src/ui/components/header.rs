//! Header component
//!
//! Renders the title and the poll cadence gauge

use super::super::state::ViewState;
use super::super::utils::format_uptime;
use crate::consts::cli_consts::polling;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render the header with title and poll cadence progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!(
        "SLEEKWATCH v{} - {} - up {}",
        version,
        state.environment,
        format_uptime(state.start_time.elapsed())
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: progress through the current poll interval
    let (progress_text, gauge_color, progress_percent) = match state.last_poll {
        None => {
            // Animated gauge while the first snapshot is outstanding
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                "WAITING - No snapshot from the daemon yet".to_string(),
                Color::LightBlue,
                progress,
            )
        }
        Some(last_poll) => {
            let interval = polling::poll_interval();
            let elapsed = last_poll.elapsed();
            if elapsed >= interval {
                ("POLLING - Refresh due".to_string(), Color::LightGreen, 100)
            } else {
                let percent = (elapsed.as_millis() as f64 / interval.as_millis() as f64 * 100.0)
                    as u16;
                let remaining_ms = (interval - elapsed).as_millis();
                (
                    format!(
                        "POLLING - {} transfers, next refresh in {:.1}s",
                        state.snapshot.len(),
                        remaining_ms as f64 / 1000.0
                    ),
                    Color::LightGreen,
                    percent.min(100),
                )
            }
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
