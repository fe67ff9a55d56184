//! View state shared by all screens
//!
//! Holds the latest snapshot, the activity log, and the per-screen bits of
//! interaction state.

use crate::api::types::{TorrentRecord, TorrentSnapshot};
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, mockup};
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;

use std::collections::VecDeque;
use std::time::Instant;

/// One synthetic row for the layout mockup screen. Purely decorative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRow {
    pub name: String,
    pub age: u32,
    pub address: String,
}

/// The fixed dataset the layout mockup renders; generated once at startup.
pub fn mock_rows() -> Vec<MockRow> {
    (0..mockup::ROW_COUNT)
        .map(|i| MockRow {
            name: format!("Edrward {}", i),
            age: mockup::ROW_AGE,
            address: format!("London Park no. {}", i),
        })
        .collect()
}

#[derive(Debug)]
pub struct ViewState {
    /// The environment the viewer is connected to.
    pub environment: Environment,
    /// Record key the detail screen displays.
    pub record_key: String,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Latest good snapshot; overwritten wholesale on each successful poll.
    pub snapshot: TorrentSnapshot,
    /// When the latest snapshot arrived, for the cadence gauge.
    pub last_poll: Option<Instant>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,
    /// Synthetic dataset for the layout mockup screen.
    pub mock_rows: Vec<MockRow>,
    /// Whether the mockup sidebar is collapsed.
    pub sidebar_collapsed: bool,
    /// Selected navigation entry in the mockup sidebar.
    pub selected_nav: usize,
}

impl ViewState {
    pub fn new(environment: Environment, record_key: String) -> Self {
        Self {
            environment,
            record_key,
            start_time: Instant::now(),
            snapshot: TorrentSnapshot::default(),
            last_poll: None,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            mock_rows: mock_rows(),
            sidebar_collapsed: false,
            selected_nav: 0,
        }
    }

    /// Replace the snapshot with a fresh one from the poll worker.
    pub fn apply_snapshot(&mut self, snapshot: TorrentSnapshot) {
        self.snapshot = snapshot;
        self.last_poll = Some(Instant::now());
    }

    /// The record the detail screen displays, if present in the snapshot.
    pub fn detail_record(&self) -> Option<&TorrentRecord> {
        self.snapshot.get(&self.record_key)
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Advance the animation tick and drain queued events into the log.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_classifier::LogLevel;
    use crate::events::EventType;

    fn state() -> ViewState {
        ViewState::new(Environment::Local, "abc".to_string())
    }

    fn snapshot_with_one_record() -> TorrentSnapshot {
        serde_json::from_str(r#"{"abc": {"name":"X","down_rate":2000,"up_rate":500}}"#).unwrap()
    }

    #[test]
    fn test_mock_rows_match_upstream_dataset() {
        let rows = mock_rows();
        assert_eq!(rows.len(), 50);
        assert_eq!(rows[0].name, "Edrward 0");
        assert_eq!(rows[49].address, "London Park no. 49");
        assert!(rows.iter().all(|row| row.age == 32));
    }

    #[test]
    fn test_apply_snapshot_replaces_wholesale() {
        let mut state = state();
        state.apply_snapshot(snapshot_with_one_record());
        assert_eq!(state.snapshot.len(), 1);

        state.apply_snapshot(TorrentSnapshot::default());
        assert!(state.snapshot.is_empty());
    }

    #[test]
    fn test_reapplying_identical_snapshot_is_idempotent() {
        let mut state = state();
        state.apply_snapshot(snapshot_with_one_record());
        let first = state.snapshot.clone();

        state.apply_snapshot(snapshot_with_one_record());
        assert_eq!(state.snapshot, first);
    }

    #[test]
    fn test_detail_record_fallback_when_key_missing() {
        let mut state = state();
        state.record_key = "id_torrent".to_string();
        state.apply_snapshot(snapshot_with_one_record());
        assert!(state.detail_record().is_none());
    }

    #[test]
    fn test_activity_log_is_capped() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_event(WorkerEvent::poller_with_level(
                format!("event {}", i),
                EventType::Refresh,
                LogLevel::Debug,
            ));
        }
        state.update();
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        // Oldest entries were dropped first
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 10");
    }
}
