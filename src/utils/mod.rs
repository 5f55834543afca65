/// Configuration constants for the application
pub mod config {
    use std::sync::LazyLock;
    use tracing::{warn, Level};

    use crate::status::Status;

    /// Title of the desktop window
    pub const WINDOW_TITLE: &str = "Status Dropdown";

    /// Level handed to the logger at startup
    pub const LOG_LEVEL: Level = Level::INFO;

    /// Status shown when no startup argument is given
    pub const DEFAULT_STATUS: Status = Status::Pending;

    /// Position of the optional initial status on the command line
    pub const STATUS_ARG_POSITION: usize = 1;

    /// Initial status resolved once from the command line
    pub static INITIAL_STATUS: LazyLock<Status> =
        LazyLock::new(|| initial_status_from(std::env::args().nth(STATUS_ARG_POSITION)));

    /// Resolve the startup status, falling back to the default on bad input
    pub fn initial_status_from(arg: Option<String>) -> Status {
        match arg {
            None => DEFAULT_STATUS,
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warn!(%err, "ignoring startup status argument");
                DEFAULT_STATUS
            }),
        }
    }
}
