//! Runtime wiring for the poll worker

use crate::api::TorrentApi;
use crate::api::types::TorrentSnapshot;
use crate::consts::cli_consts;
use crate::events::Event;
use crate::workers::core::EventSender;
use crate::workers::poller::{Command, SnapshotPoller};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Channel endpoints the UI needs to talk to a running poll worker.
pub struct PollerHandles {
    /// Receives a fresh snapshot after each successful poll cycle.
    pub snapshot_receiver: mpsc::Receiver<TorrentSnapshot>,
    /// Receives activity events from the worker.
    pub event_receiver: mpsc::Receiver<Event>,
    /// Sends fetch-now / post-note commands to the worker.
    pub command_sender: mpsc::Sender<Command>,
    /// Handle of the worker task; awaited on teardown.
    pub join_handle: JoinHandle<()>,
}

/// Start the poll worker on the given cadence.
pub fn start_poller(
    api: Box<dyn TorrentApi>,
    shutdown: broadcast::Receiver<()>,
    interval: Duration,
    record_key: Option<String>,
) -> PollerHandles {
    let (snapshot_sender, snapshot_receiver) =
        mpsc::channel::<TorrentSnapshot>(cli_consts::SNAPSHOT_QUEUE_SIZE);
    let (event_sender, event_receiver) = mpsc::channel::<Event>(cli_consts::EVENT_QUEUE_SIZE);
    let (command_sender, command_receiver) =
        mpsc::channel::<Command>(cli_consts::COMMAND_QUEUE_SIZE);

    let poller = SnapshotPoller::new(
        api,
        EventSender::new(event_sender),
        snapshot_sender,
        interval,
        record_key,
    );
    let join_handle = poller.spawn(shutdown, command_receiver);

    PollerHandles {
        snapshot_receiver,
        event_receiver,
        command_sender,
        join_handle,
    }
}
