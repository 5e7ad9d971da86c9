use anyhow::{ensure, Result};

use super::wait::RequestWaitOptions;
use crate::state::http::HttpClient;

/// Deletes every `(id, path)` in turn. With several targets a failure is
/// logged and counted but does not stop the rest of the batch. A single
/// target returns its error unchanged.
pub async fn delete_each(
    http: &HttpClient,
    kind: &str,
    targets: &[(String, String)],
    wait: &RequestWaitOptions,
) -> Result<()> {
    if let [(id, path)] = targets {
        log::info!("Deleting {kind} `{id}`");

        delete_one(http, path, wait).await?;

        log::info!("Deleted {kind} `{id}`");

        return Ok(());
    }

    let total = targets.len();
    let mut deleted = 0;

    for (id, path) in targets {
        log::info!("Deleting {kind} `{id}`");

        if let Err(err) = delete_one(http, path, wait).await {
            log::error!("Failed to delete {kind} `{id}`: {err}");
        } else {
            deleted += 1;
        }
    }

    log::info!("Deleted {deleted}/{total} {kind}(s)");

    ensure!(
        deleted == total,
        "Failed to delete {} of {total} {kind}(s)",
        total - deleted
    );

    Ok(())
}

async fn delete_one(http: &HttpClient, path: &str, wait: &RequestWaitOptions) -> Result<()> {
    let request = http.delete(path).await?;

    wait.wait(http, request.as_deref()).await
}
