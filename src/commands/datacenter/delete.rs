use anyhow::Result;
use clap::Parser;

use super::utils::{datacenter_path, get_all_datacenters};
use crate::state::State;
use crate::utils::batch::delete_each;
use crate::utils::confirm::confirm;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Delete a datacenter and everything in it")]
pub struct Options {
    #[clap(
        long = "datacenter-id",
        help = "ID of the datacenter",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub datacenter_id: Option<String>,

    #[clap(long = "all", help = "Delete all datacenters")]
    pub all: bool,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let targets = match options.datacenter_id {
        Some(id) => vec![(id.clone(), datacenter_path(&id))],

        None => get_all_datacenters(&state.http)
            .await?
            .into_iter()
            .map(|dc| (dc.id.clone(), datacenter_path(&dc.id)))
            .collect(),
    };

    if targets.is_empty() {
        log::info!("No datacenters to delete");
        return Ok(());
    }

    confirm(
        &format!(
            "Are you sure you want to delete {} datacenter(s) and all their resources?",
            targets.len()
        ),
        options.force,
    )?;

    delete_each(&state.http, "datacenter", &targets, &options.wait).await
}

#[cfg(test)]
mod test {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::error::Error;

    fn options(datacenter_id: Option<&str>) -> Options {
        Options {
            datacenter_id: datacenter_id.map(ToString::to_string),
            all: datacenter_id.is_none(),
            force: true,
            wait: RequestWaitOptions {
                wait_for_request: false,
                timeout: 1,
            },
        }
    }

    #[tokio::test]
    async fn test_forced_delete() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/datacenters/dc1"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        handle(options(Some("dc1")), State::for_tests(&server.uri()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_all() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/datacenters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    { "id": "dc1", "properties": { "name": "a" } },
                    { "id": "dc2", "properties": { "name": "b" } }
                ]
            })))
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/datacenters/dc1"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/datacenters/dc2"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        handle(options(None), State::for_tests(&server.uri()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_failed_request_keeps_its_message() {
        let server = MockServer::start().await;
        let location = format!("{}/requests/abc/status", server.uri());

        Mock::given(method("DELETE"))
            .and(path("/datacenters/dc1"))
            .respond_with(ResponseTemplate::new(202).insert_header("location", location.as_str()))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/requests/abc/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "abc/status",
                "metadata": { "status": "FAILED", "message": "Datacenter is locked" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut options = options(Some("dc1"));
        options.wait.wait_for_request = true;

        let err = handle(options, State::for_tests(&server.uri()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Datacenter is locked");
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::RequestFailed(_))
        ));
    }
}
