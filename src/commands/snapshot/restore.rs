use anyhow::Result;
use clap::Parser;

use super::utils::restore_snapshot;
use crate::commands::volume::utils::volume_path;
use crate::state::State;
use crate::utils::confirm::confirm;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Restore a snapshot onto a volume, overwriting its data")]
pub struct Options {
    #[clap(long = "snapshot-id", help = "ID of the snapshot to restore")]
    pub snapshot_id: String,

    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "volume-id", help = "ID of the volume to restore onto")]
    pub volume_id: String,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    confirm(
        &format!(
            "Are you sure you want to restore snapshot `{}` onto volume `{}`?",
            options.snapshot_id, options.volume_id
        ),
        options.force,
    )?;

    let request = restore_snapshot(
        &state.http,
        &options.datacenter_id,
        &options.volume_id,
        &options.snapshot_id,
    )
    .await?;

    options
        .wait
        .wait(
            &state.http,
            request.as_deref(),
            &volume_path(&options.datacenter_id, &options.volume_id),
        )
        .await?;

    log::info!(
        "Restored snapshot `{}` onto volume `{}`",
        options.snapshot_id,
        options.volume_id
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_restore_posts_the_snapshot_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/datacenters/dc/volumes/vol/restore-snapshot"))
            .and(body_string("snapshotId=snap"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let options = Options {
            snapshot_id: "snap".to_string(),
            datacenter_id: "dc".to_string(),
            volume_id: "vol".to_string(),
            force: true,
            wait: WaitOptions {
                wait_for_request: false,
                wait_for_state: false,
                timeout: 60,
            },
        };

        handle(options, State::for_tests(&server.uri())).await.unwrap();
    }
}
