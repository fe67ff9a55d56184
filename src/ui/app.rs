//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::types::TorrentSnapshot;
use crate::consts::cli_consts::polling;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::components::{detail, footer, header, logs, mockup, transfers};
use crate::ui::state::ViewState;
use crate::workers::poller::Command;
use crossterm::event::{self, Event, KeyCode};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{Frame, Terminal, backend::Backend};
use tokio::sync::{broadcast, mpsc};

/// The different screens in the application.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Screen {
    /// Table of every tracked transfer, refreshed each poll cycle.
    Transfers,
    /// Single-record view for the configured key.
    Detail,
    /// Static two-pane layout mockup with synthetic data.
    Mockup,
}

impl Screen {
    fn next(self) -> Self {
        match self {
            Screen::Transfers => Screen::Detail,
            Screen::Detail => Screen::Mockup,
            Screen::Mockup => Screen::Transfers,
        }
    }
}

/// Application state
pub struct App {
    /// Shared view state across screens.
    state: ViewState,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives snapshots from the poll worker.
    snapshot_receiver: mpsc::Receiver<TorrentSnapshot>,

    /// Receives activity events from the poll worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Sends fetch-now / post-note commands to the poll worker.
    command_sender: mpsc::Sender<Command>,

    /// Broadcasts the shutdown signal to the poll worker.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        record_key: String,
        snapshot_receiver: mpsc::Receiver<TorrentSnapshot>,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        command_sender: mpsc::Sender<Command>,
        shutdown_sender: broadcast::Sender<()>,
    ) -> Self {
        Self {
            state: ViewState::new(environment, record_key),
            current_screen: Screen::Transfers,
            snapshot_receiver,
            event_receiver,
            command_sender,
            shutdown_sender,
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// current screen until the user quits.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        // Drain worker channels without blocking the draw cadence
        while let Ok(snapshot) = app.snapshot_receiver.try_recv() {
            app.state.apply_snapshot(snapshot);
        }
        while let Ok(event) = app.event_receiver.try_recv() {
            app.state.add_event(event);
        }

        app.state.update();
        terminal.draw(|f| render(f, &app.current_screen, &app.state))?;

        // Poll for key events
        if event::poll(polling::key_poll_timeout())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match key.code {
                    // Handle exit events
                    KeyCode::Esc | KeyCode::Char('q') => {
                        // Send shutdown signal to the poll worker
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }
                    KeyCode::Char('1') => app.current_screen = Screen::Transfers,
                    KeyCode::Char('2') => app.current_screen = Screen::Detail,
                    KeyCode::Char('3') => app.current_screen = Screen::Mockup,
                    KeyCode::Tab => app.current_screen = app.current_screen.next(),

                    // Detail screen actions
                    KeyCode::Char('r') if app.current_screen == Screen::Detail => {
                        let _ = app.command_sender.try_send(Command::FetchNow);
                    }
                    KeyCode::Char('p') if app.current_screen == Screen::Detail => {
                        let _ = app.command_sender.try_send(Command::PostNote);
                    }

                    // Mockup screen actions
                    KeyCode::Char('b') if app.current_screen == Screen::Mockup => {
                        app.state.sidebar_collapsed = !app.state.sidebar_collapsed;
                    }
                    KeyCode::Up if app.current_screen == Screen::Mockup => {
                        app.state.selected_nav = app.state.selected_nav.saturating_sub(1);
                    }
                    KeyCode::Down if app.current_screen == Screen::Mockup => {
                        app.state.selected_nav =
                            (app.state.selected_nav + 1).min(mockup::NAV_ITEMS.len() - 1);
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Renders the active screen between the shared header, log, and footer areas.
fn render(f: &mut Frame, screen: &Screen, state: &ViewState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    match screen {
        Screen::Transfers => transfers::render_transfers(f, main_chunks[1], state),
        Screen::Detail => detail::render_detail(f, main_chunks[1], state),
        Screen::Mockup => mockup::render_mockup(f, main_chunks[1], state),
    }

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], screen);
}
