use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub fn config_path(to_join: &str) -> Result<PathBuf> {
    let path = dirs::config_dir()
        .context("Could not find the user configuration directory")?
        .join("ionosctl")
        .join(to_join);

    log::debug!("Config path + joined: {:?}", path);

    Ok(path)
}

/// Credentials live in the store, keep it readable by the owner only.
#[cfg(unix)]
pub async fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .await
        .context("Failed to restrict store permissions")
}

#[cfg(not(unix))]
pub async fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
