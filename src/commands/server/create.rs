use anyhow::Result;
use clap::Parser;

use super::types::{Server, ServerProperties};
use super::utils::{create_server, parse_ram, server_path};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Create a server")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "name", help = "Name of the server")]
    pub name: Option<String>,

    #[clap(long = "cores", help = "Number of cores")]
    pub cores: u32,

    #[clap(
        long = "ram",
        help = "Memory, e.g. 2GB or 2048MB. Plain numbers are megabytes",
        value_parser = parse_ram
    )]
    pub ram: u64,

    #[clap(
        long = "availability-zone",
        help = "Availability zone of the server",
        value_parser = ["AUTO", "ZONE_1", "ZONE_2"],
        default_value = "AUTO"
    )]
    pub availability_zone: String,

    #[clap(long = "cpu-family", help = "CPU family, e.g. INTEL_SKYLAKE")]
    pub cpu_family: Option<String>,

    #[clap(
        long = "type",
        help = "Type of the server",
        value_parser = ["ENTERPRISE", "VCPU"],
        default_value = "ENTERPRISE"
    )]
    pub server_type: String,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Server>()?;

    let properties = ServerProperties {
        name: options.name,
        cores: Some(options.cores),
        ram: Some(options.ram),
        availability_zone: Some(options.availability_zone),
        cpu_family: options.cpu_family,
        server_type: Some(options.server_type),
        ..Default::default()
    };

    let (server, request) = create_server(&state.http, &options.datacenter_id, properties).await?;

    options
        .wait
        .wait(
            &state.http,
            request.as_deref(),
            &server_path(&options.datacenter_id, &server.id),
        )
        .await?;

    log::info!("Created server `{}`", server.id);

    output.print_one(&server)
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

    fn parse(args: &[&str]) -> Options {
        Wrapper::parse_from(std::iter::once("create").chain(args.iter().copied())).options
    }

    #[test]
    fn test_ram_units() {
        let options = parse(&["--datacenter-id", "dc", "--cores", "2", "--ram", "4GB"]);

        assert_eq!(options.ram, 4096);
        assert_eq!(options.availability_zone, "AUTO");
        assert!(!options.wait.wait_for_request);
    }

    #[tokio::test]
    async fn test_create_and_wait_for_request() {
        let server = MockServer::start().await;
        let location = format!("{}/requests/req1/status", server.uri());

        Mock::given(method("POST"))
            .and(path("/datacenters/dc/servers"))
            .and(body_json(serde_json::json!({
                "properties": {
                    "name": "web",
                    "cores": 2,
                    "ram": 2048,
                    "availabilityZone": "AUTO",
                    "type": "ENTERPRISE"
                }
            })))
            .respond_with(
                ResponseTemplate::new(202)
                    .insert_header("location", location.as_str())
                    .set_body_json(serde_json::json!({
                        "id": "srv",
                        "metadata": { "state": "BUSY" },
                        "properties": { "name": "web" }
                    })),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/requests/req1/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "metadata": { "status": "DONE" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = parse(&[
            "--datacenter-id",
            "dc",
            "--name",
            "web",
            "--cores",
            "2",
            "--ram",
            "2048",
            "-w",
        ]);

        handle(options, State::for_tests(&server.uri())).await.unwrap();
    }
}
