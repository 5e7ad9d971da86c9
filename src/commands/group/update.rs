use anyhow::{ensure, Result};
use clap::Parser;

use super::types::{Group, Privileges};
use super::utils::{get_group, group_path, replace_group};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Update a user group")]
pub struct Options {
    #[clap(long = "group-id", help = "ID of the group")]
    pub group_id: String,

    #[clap(long = "name", help = "New name of the group")]
    pub name: Option<String>,

    #[clap(flatten)]
    pub privileges: Privileges,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Group>()?;

    ensure!(
        options.name.is_some() || !options.privileges.is_empty(),
        "Nothing to update, pass a new name or at least one privilege"
    );

    // groups only support full replacement
    let mut properties = get_group(&state.http, &options.group_id).await?.properties;

    if let Some(name) = options.name {
        properties.name = Some(name);
    }

    properties.privileges.merge(&options.privileges);

    let (group, request) = replace_group(&state.http, &options.group_id, properties).await?;

    options
        .wait
        .wait(&state.http, request.as_deref(), &group_path(&options.group_id))
        .await?;

    log::info!("Updated group `{}`", group.id);

    output.print_one(&group)
}

#[cfg(test)]
mod test {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_update_merges_into_the_current_group() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/um/groups/g"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "g",
                "properties": {
                    "name": "ops",
                    "createDataCenter": true,
                    "reserveIp": false
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/um/groups/g"))
            .and(body_json(serde_json::json!({
                "properties": {
                    "name": "ops",
                    "createDataCenter": true,
                    "reserveIp": true
                }
            })))
            .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
                "id": "g",
                "properties": { "name": "ops" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = Options {
            group_id: "g".to_string(),
            name: None,
            privileges: Privileges {
                reserve_ip: Some(true),
                ..Default::default()
            },
            wait: WaitOptions {
                wait_for_request: false,
                wait_for_state: false,
                timeout: 60,
            },
        };

        handle(options, State::for_tests(&server.uri())).await.unwrap();
    }
}
