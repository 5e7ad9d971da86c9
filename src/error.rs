use std::time::Duration;

use thiserror::Error;

use crate::config::EXEC_NAME;

/// Error kinds that callers need to tell apart. Everything else travels as a
/// plain `anyhow::Error`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    RequestFailed(String),

    #[error("{what} entered state {state}")]
    ResourceFailed { what: String, state: String },

    #[error("timed out after {}s waiting for {what}", after.as_secs())]
    Timeout { what: String, after: Duration },

    #[error("Aborted")]
    Declined,

    #[error("Invalid column `{column}`, available columns: {}", allowed.join(", "))]
    InvalidColumn {
        column: String,
        allowed: Vec<&'static str>,
    },

    #[error(
        "No credentials found. Run `{} login` or set IONOS_USERNAME and IONOS_PASSWORD (or IONOS_TOKEN)",
        EXEC_NAME
    )]
    MissingCredentials,
}

