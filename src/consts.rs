pub mod cli_consts {
    //! Client Configuration Constants
    //!
    //! This module contains all configuration constants for the status viewer,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events from the poll worker.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of buffered snapshots awaiting the UI loop.
    pub const SNAPSHOT_QUEUE_SIZE: usize = 8;

    /// Maximum number of buffered UI commands awaiting the poll worker.
    pub const COMMAND_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Polling cadence configuration.
    pub mod polling {
        use std::time::Duration;

        /// Interval between snapshot fetches (milliseconds).
        pub const POLL_INTERVAL_MS: u64 = 2_000;

        /// How long the UI loop blocks waiting for a key event (milliseconds).
        pub const KEY_POLL_MS: u64 = 100;

        /// Helper function to get the poll interval.
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }

        /// Helper function to get the key poll timeout.
        pub const fn key_poll_timeout() -> Duration {
            Duration::from_millis(KEY_POLL_MS)
        }
    }

    // =============================================================================
    // HTTP CONFIGURATION
    // =============================================================================

    /// HTTP client timeout configuration.
    pub mod http {
        use std::time::Duration;

        /// Connect timeout for requests to the daemon (seconds).
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Overall request timeout (seconds).
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the connect timeout.
        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        /// Helper function to get the request timeout.
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // RECORD KEY PROFILES
    // =============================================================================

    /// Default record keys for the detail view, one per profile.
    ///
    /// Both defaults shipped with the daemon's web front end and are kept as
    /// alternate configurations.
    pub mod record_keys {
        /// Default key for the `hash` profile: a literal info-hash.
        pub const HASH_PROFILE_KEY: &str = "56a21a042238079f5cc68a81af8f3689dd923b0b";

        /// Default key for the `alias` profile.
        pub const ALIAS_PROFILE_KEY: &str = "id_torrent";
    }

    // =============================================================================
    // STATUS NOTE
    // =============================================================================

    /// The fixed placeholder payload posted to the daemon root.
    /// The daemon discards it; only the response status is logged.
    pub mod status_note {
        pub const TITLE: &str = "ping";
        pub const BODY: &str = "sleekwatch";
        pub const USER_ID: u64 = 123;
    }

    // =============================================================================
    // LAYOUT MOCKUP
    // =============================================================================

    /// Synthetic dataset configuration for the layout mockup screen.
    pub mod mockup {
        /// Number of synthetic rows generated at startup.
        pub const ROW_COUNT: usize = 50;

        /// Age column value shared by every synthetic row.
        pub const ROW_AGE: u32 = 32;
    }
}
