use std::io::Write;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::commands::datacenter::utils::get_all_datacenters;
use crate::commands::group::utils::get_all_groups;
use crate::commands::image::utils::get_all_images;
use crate::commands::ipblock::utils::get_all_ipblocks;
use crate::commands::pcc::utils::get_all_pccs;
use crate::commands::request::utils::get_all_requests;
use crate::commands::server::utils::get_all_servers;
use crate::commands::snapshot::utils::get_all_snapshots;
use crate::commands::token::utils::get_all_tokens;
use crate::commands::volume::utils::get_all_volumes;
use crate::state::State;
use crate::types::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Datacenter,
    Server,
    Volume,
    Snapshot,
    Image,
    Ipblock,
    Group,
    Pcc,
    Token,
    Request,
}

impl Kind {
    fn needs_datacenter(self) -> bool {
        matches!(self, Kind::Server | Kind::Volume)
    }
}

#[derive(Debug, Parser)]
#[clap(about = "Print live IDs for shell completion")]
pub struct Options {
    #[clap(name = "kind", value_enum, help = "Kind of resource to list")]
    pub kind: Kind,

    #[clap(long = "datacenter-id", help = "Datacenter holding servers or volumes")]
    pub datacenter_id: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let http = &state.http;

    let datacenter_id = match (&options.datacenter_id, options.kind.needs_datacenter()) {
        (Some(id), _) => id.as_str(),
        // nothing to complete without a datacenter
        (None, true) => return Ok(()),
        (None, false) => "",
    };

    let entries: Vec<(String, Option<String>)> = match options.kind {
        Kind::Datacenter => pairs(get_all_datacenters(http).await?, |properties| properties.name),
        Kind::Server => pairs(
            get_all_servers(http, datacenter_id).await?,
            |properties| properties.name,
        ),
        Kind::Volume => pairs(
            get_all_volumes(http, datacenter_id).await?,
            |properties| properties.name,
        ),
        Kind::Snapshot => pairs(get_all_snapshots(http).await?, |properties| properties.name),
        Kind::Image => pairs(get_all_images(http).await?, |properties| properties.name),
        Kind::Ipblock => pairs(get_all_ipblocks(http).await?, |properties| properties.name),
        Kind::Group => pairs(get_all_groups(http).await?, |properties| properties.name),
        Kind::Pcc => pairs(get_all_pccs(http).await?, |properties| properties.name),
        Kind::Token => get_all_tokens(&state.auth_http)
            .await?
            .into_iter()
            .map(|token| (token.id, None))
            .collect(),
        Kind::Request => get_all_requests(http)
            .await?
            .into_iter()
            .map(|request| (request.id, None))
            .collect(),
    };

    let mut out = std::io::stdout().lock();

    for (id, name) in entries {
        match name {
            Some(name) => writeln!(out, "{id}\t{name}")?,
            None => writeln!(out, "{id}")?,
        }
    }

    Ok(())
}

/// `(id, name)` of every item, `name` picks the name out of the properties.
fn pairs<P, F>(items: Vec<Resource<P>>, name: F) -> Vec<(String, Option<String>)>
where
    F: Fn(P) -> Option<String>,
{
    items
        .into_iter()
        .map(|item| (item.id, name(item.properties)))
        .collect()
}

#[cfg(test)]
mod test {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_servers_need_a_datacenter() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let options = Options {
            kind: Kind::Server,
            datacenter_id: None,
        };

        handle(options, State::for_tests(&server.uri())).await.unwrap();
    }

    #[tokio::test]
    async fn test_datacenter_ids() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/datacenters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{ "id": "dc1", "properties": { "name": "prod" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = Options {
            kind: Kind::Datacenter,
            datacenter_id: None,
        };

        handle(options, State::for_tests(&server.uri())).await.unwrap();
    }
}
