use anyhow::Result;
use clap::Parser;

use crate::commands::server::utils::attached_volume_path;
use crate::state::State;
use crate::utils::confirm::confirm;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Detach a volume from a server, the volume itself is kept")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "server-id", help = "ID of the server")]
    pub server_id: String,

    #[clap(long = "volume-id", help = "ID of the volume to detach")]
    pub volume_id: String,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    confirm(
        &format!(
            "Are you sure you want to detach volume `{}` from server `{}`?",
            options.volume_id, options.server_id
        ),
        options.force,
    )?;

    let request = state
        .http
        .delete(&attached_volume_path(
            &options.datacenter_id,
            &options.server_id,
            &options.volume_id,
        ))
        .await?;

    options.wait.wait(&state.http, request.as_deref()).await?;

    log::info!(
        "Detached volume `{}` from server `{}`",
        options.volume_id,
        options.server_id
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_forced_detach() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/datacenters/dc/servers/srv/volumes/vol"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let options = Options {
            datacenter_id: "dc".to_string(),
            server_id: "srv".to_string(),
            volume_id: "vol".to_string(),
            force: true,
            wait: RequestWaitOptions {
                wait_for_request: false,
                timeout: 60,
            },
        };

        handle(options, State::for_tests(&server.uri())).await.unwrap();
    }
}
