use anyhow::{Context, Result};
use clap::Parser;

use super::types::{Label, LabelTarget};
use super::utils::add_label;
use crate::state::State;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Add a label to a resource")]
#[clap(mut_arg("resource_type", |arg| arg.required(true)))]
pub struct Options {
    #[clap(long = "label-key", help = "Key of the label")]
    pub key: String,

    #[clap(long = "label-value", help = "Value of the label")]
    pub value: String,

    #[clap(flatten)]
    pub target: LabelTarget,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Label>()?;

    let labels_path = options
        .target
        .labels_path()?
        .context("--resource-type is required")?;

    let (mut label, request) =
        add_label(&state.http, &labels_path, &options.key, &options.value).await?;

    options.wait.wait(&state.http, request.as_deref()).await?;

    options.target.annotate(&mut label);

    log::info!("Added label `{}={}`", options.key, options.value);

    output.print_one(&label)
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Debug, Parser)]
    struct Wrapper {
        #[clap(flatten)]
        options: Options,
    }

    #[test]
    fn test_resource_type_is_required() {
        let err = Wrapper::try_parse_from(["add", "--label-key", "env", "--label-value", "prod"])
            .unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_server_needs_both_ids() {
        let err = Wrapper::try_parse_from([
            "add",
            "--label-key",
            "env",
            "--label-value",
            "prod",
            "--resource-type",
            "server",
            "--server-id",
            "srv",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("--datacenter-id"));
    }

    #[tokio::test]
    async fn test_add_label_to_ipblock() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ipblocks/ip/labels"))
            .and(body_json(serde_json::json!({
                "properties": { "key": "env", "value": "prod" }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "env",
                "properties": { "key": "env", "value": "prod" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = Wrapper::parse_from([
            "add",
            "--label-key",
            "env",
            "--label-value",
            "prod",
            "--resource-type",
            "ipblock",
            "--ipblock-id",
            "ip",
        ])
        .options;

        handle(options, State::for_tests(&server.uri())).await.unwrap();
    }
}
