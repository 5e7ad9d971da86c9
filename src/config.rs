use std::time::Duration;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "ionosctl";
#[cfg(windows)]
pub const EXEC_NAME: &str = "ionosctl.exe";

pub const DEFAULT_API_URL: &str = "https://api.ionos.com/cloudapi/v6";
pub const DEFAULT_AUTH_API_URL: &str = "https://api.ionos.com/auth/v1";

pub const ENV_USERNAME: &str = "IONOS_USERNAME";
pub const ENV_PASSWORD: &str = "IONOS_PASSWORD";
pub const ENV_TOKEN: &str = "IONOS_TOKEN";
pub const ENV_API_URL: &str = "IONOS_API_URL";
pub const ENV_AUTH_API_URL: &str = "IONOS_AUTH_API_URL";

/// Seconds, used when `--timeout` is not given.
pub const DEFAULT_TIMEOUT: u64 = 60;
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// The lifecycle state a resource reports once provisioning is finished.
pub const AVAILABLE_STATE: &str = "AVAILABLE";
