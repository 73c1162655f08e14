pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Grouped by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying finished requests back to the UI
    pub const COMPLETION_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // API CONFIGURATION
    // =============================================================================

    pub mod api {
        /// Backend used when neither flag, environment nor config name one
        pub const DEFAULT_API_URL: &str = "http://localhost:3333";

        /// Environment variable overriding the configured API URL
        pub const API_URL_ENV_VAR: &str = "RESTAURANT_API_URL";
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up unless a key is pressed
        pub const SPLASH_DURATION_MS: u64 = 1_000;

        /// Key polling timeout; also the redraw cadence while idle
        pub const POLL_INTERVAL_MS: u64 = 100;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }
}
