use anyhow::Result;

use super::types::{Snapshot, SnapshotProperties};
use crate::commands::volume::utils::volume_path;
use crate::state::http::HttpClient;
use crate::types::Collection;

pub fn snapshot_path(snapshot_id: &str) -> String {
    format!("/snapshots/{snapshot_id}")
}

pub async fn get_all_snapshots(http: &HttpClient) -> Result<Vec<Snapshot>> {
    let snapshots = http
        .get::<Collection<Snapshot>>("/snapshots?depth=1")
        .await?
        .items;

    Ok(snapshots)
}

pub async fn get_snapshot(http: &HttpClient, snapshot_id: &str) -> Result<Snapshot> {
    http.get(&snapshot_path(snapshot_id)).await
}

/// Snapshots are taken through the volume, with a form encoded body.
pub async fn create_snapshot(
    http: &HttpClient,
    datacenter_id: &str,
    volume_id: &str,
    properties: &SnapshotProperties,
) -> Result<(Snapshot, Option<String>)> {
    let mut fields = vec![];

    if let Some(name) = &properties.name {
        fields.push(("name", name.clone()));
    }

    if let Some(description) = &properties.description {
        fields.push(("description", description.clone()));
    }

    if let Some(licence_type) = &properties.licence_type {
        fields.push(("licenceType", licence_type.clone()));
    }

    if let Some(protection) = properties.sec_auth_protection {
        fields.push(("secAuthProtection", protection.to_string()));
    }

    http.send_form(
        "POST",
        &format!("{}/create-snapshot", volume_path(datacenter_id, volume_id)),
        &fields,
    )
    .await?
    .into_parts()
}

pub async fn restore_snapshot(
    http: &HttpClient,
    datacenter_id: &str,
    volume_id: &str,
    snapshot_id: &str,
) -> Result<Option<String>> {
    let response = http
        .send_form::<serde_json::Value>(
            "POST",
            &format!("{}/restore-snapshot", volume_path(datacenter_id, volume_id)),
            &[("snapshotId", snapshot_id.to_string())],
        )
        .await?;

    Ok(response.request)
}

pub async fn update_snapshot(
    http: &HttpClient,
    snapshot_id: &str,
    properties: SnapshotProperties,
) -> Result<(Snapshot, Option<String>)> {
    http.send_json("PATCH", &snapshot_path(snapshot_id), &properties)
        .await?
        .into_parts()
}

#[cfg(test)]
mod test {
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_create_sends_only_given_fields() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/datacenters/dc/volumes/vol/create-snapshot"))
            .and(body_string("name=nightly&secAuthProtection=true"))
            .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
                "id": "snap",
                "properties": { "name": "nightly" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let http = HttpClient::new(
            crate::state::http::Credentials::Token("t".to_string()),
            &server.uri(),
        )
        .unwrap();

        let properties = SnapshotProperties {
            name: Some("nightly".to_string()),
            sec_auth_protection: Some(true),
            ..Default::default()
        };

        let (snapshot, _) = create_snapshot(&http, "dc", "vol", &properties).await.unwrap();

        assert_eq!(snapshot.id, "snap");
    }
}
