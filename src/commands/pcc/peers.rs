use anyhow::Result;
use clap::Parser;

use super::types::Peer;
use super::utils::get_pcc;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List the LANs connected through a cross connect")]
pub struct Options {
    #[clap(long = "pcc-id", help = "ID of the cross connect")]
    pub pcc_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Peer>()?;

    let peers = get_pcc(&state.http, &options.pcc_id)
        .await?
        .properties
        .peers
        .unwrap_or_default();

    output.print(&peers)
}

#[cfg(test)]
mod test {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::output::Columns;

    #[test]
    fn test_peer_columns() {
        let peer: Peer = serde_json::from_value(serde_json::json!({
            "id": "1",
            "datacenterId": "dc",
            "location": "de/fra"
        }))
        .unwrap();

        assert_eq!(peer.column("LanId"), "1");
        assert_eq!(peer.column("DatacenterId"), "dc");
        assert_eq!(peer.column("LanName"), "-");
    }

    #[tokio::test]
    async fn test_pcc_without_peers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/pccs/p"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "p",
                "properties": { "name": "link" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = Options {
            pcc_id: "p".to_string(),
        };

        handle(options, State::for_tests(&server.uri())).await.unwrap();
    }
}
