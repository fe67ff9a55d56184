use crate::api::error::ApiError;
use crate::api::types::{StatusNote, TorrentSnapshot};
use crate::environment::Environment;

pub(crate) mod client;
pub use client::DaemonClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TorrentApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the current snapshot of all tracked transfers.
    async fn get_torrents(&self) -> Result<TorrentSnapshot, ApiError>;

    /// Send the placeholder status note; returns the response status code.
    async fn post_note(&self, note: StatusNote) -> Result<u16, ApiError>;
}
