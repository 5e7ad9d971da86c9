use anyhow::Result;
use clap::Parser;

use super::utils::{get_all_shares, share_path};
use crate::state::State;
use crate::utils::batch::delete_each;
use crate::utils::confirm::confirm;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Stop sharing a resource with a group")]
pub struct Options {
    #[clap(long = "group-id", help = "ID of the group")]
    pub group_id: String,

    #[clap(
        long = "resource-id",
        help = "ID of the shared resource",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub resource_id: Option<String>,

    #[clap(long = "all", help = "Remove every share of the group")]
    pub all: bool,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let group_id = &options.group_id;

    let targets = match options.resource_id {
        Some(id) => vec![(id.clone(), share_path(group_id, &id))],

        None => get_all_shares(&state.http, group_id)
            .await?
            .into_iter()
            .map(|share| (share.id.clone(), share_path(group_id, &share.id)))
            .collect(),
    };

    if targets.is_empty() {
        log::info!("No shares to remove");
        return Ok(());
    }

    confirm(
        &format!("Are you sure you want to remove {} share(s)?", targets.len()),
        options.force,
    )?;

    delete_each(&state.http, "share", &targets, &options.wait).await
}

#[cfg(test)]
mod test {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_remove_all_keeps_going_after_a_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/um/groups/g/shares"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{ "id": "a" }, { "id": "b" }]
            })))
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/um/groups/g/shares/a"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/um/groups/g/shares/b"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let options = Options {
            group_id: "g".to_string(),
            resource_id: None,
            all: true,
            force: true,
            wait: RequestWaitOptions {
                wait_for_request: false,
                timeout: 60,
            },
        };

        let err = handle(options, State::for_tests(&server.uri()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to delete 1 of 2 share(s)");
    }
}
