//! Snapshot polling with an explicit, cancellable cadence
//!
//! The poll worker owns the HTTP client and the timer. It fetches the
//! transfer collection once at startup and then on every tick until a
//! shutdown signal arrives, forwarding snapshots and activity events to the
//! UI over channels. A failed fetch is logged and the previous snapshot is
//! left in place; the next cycle recovers.

use super::core::EventSender;
use crate::api::TorrentApi;
use crate::api::error::ApiError;
use crate::api::types::{StatusNote, TorrentSnapshot};
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::EventType;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Commands the UI can send to the poll worker between ticks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Fetch a snapshot now instead of waiting for the next tick.
    FetchNow,
    /// Post the placeholder status note to the daemon root.
    PostNote,
}

/// Periodic snapshot fetcher for the transfers and detail views.
pub struct SnapshotPoller {
    api: Box<dyn TorrentApi>,
    event_sender: EventSender,
    snapshot_sender: mpsc::Sender<TorrentSnapshot>,
    classifier: ErrorClassifier,
    interval: Duration,
    /// Record key the detail view watches; a manual fetch that comes back
    /// without it logs a missing-key event.
    record_key: Option<String>,
}

impl SnapshotPoller {
    pub fn new(
        api: Box<dyn TorrentApi>,
        event_sender: EventSender,
        snapshot_sender: mpsc::Sender<TorrentSnapshot>,
        interval: Duration,
        record_key: Option<String>,
    ) -> Self {
        Self {
            api,
            event_sender,
            snapshot_sender,
            classifier: ErrorClassifier::new(),
            interval,
            record_key,
        }
    }

    /// Start the worker. Runs until the shutdown signal arrives or the
    /// command channel closes.
    pub fn spawn(
        self,
        mut shutdown: broadcast::Receiver<()>,
        mut commands: mpsc::Receiver<Command>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = shutdown.recv() => break,
                    _ = ticker.tick() => self.poll_once(false).await,
                    command = commands.recv() => match command {
                        Some(Command::FetchNow) => {
                            // Restart the cadence from the manual fetch
                            ticker.reset();
                            self.poll_once(true).await;
                        }
                        Some(Command::PostNote) => self.post_note().await,
                        None => break,
                    },
                }
            }
        })
    }

    /// One poll cycle: fetch, forward on success, log and keep going on failure.
    async fn poll_once(&self, manual: bool) {
        match self.api.get_torrents().await {
            Ok(snapshot) => {
                let count = snapshot.len();
                let missing_key = match &self.record_key {
                    Some(key) if manual && snapshot.get(key).is_none() => Some(key.clone()),
                    _ => None,
                };
                let _ = self.snapshot_sender.send(snapshot).await;

                if manual {
                    self.event_sender
                        .send_control_event(
                            format!("Snapshot refreshed ({} transfers)", count),
                            EventType::Success,
                            LogLevel::Info,
                        )
                        .await;
                    if let Some(key) = missing_key {
                        let err = ApiError::MissingRecord(key);
                        let log_level = self.classifier.classify_fetch_error(&err);
                        self.event_sender
                            .send_control_event(err.to_string(), EventType::Waiting, log_level)
                            .await;
                    }
                } else {
                    self.event_sender
                        .send_poller_event(
                            format!("Polled {} transfers", count),
                            EventType::Refresh,
                            LogLevel::Debug,
                        )
                        .await;
                }
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.event_sender
                    .send_poller_event(
                        format!("Failed to fetch transfers: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
            }
        }
    }

    /// Deliver the placeholder status note; the response is discarded except
    /// for its status code.
    async fn post_note(&self) {
        match self.api.post_note(StatusNote::placeholder()).await {
            Ok(status) => {
                self.event_sender
                    .send_control_event(
                        format!("Status note delivered (HTTP {})", status),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.event_sender
                    .send_control_event(
                        format!("Failed to deliver status note: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
            }
        }
    }
}
