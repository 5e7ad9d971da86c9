use anyhow::Result;

use super::types::{Server, ServerProperties};
use crate::commands::datacenter::utils::datacenter_path;
use crate::commands::volume::types::Volume;
use crate::state::http::HttpClient;
use crate::types::{Body, Collection, IdRef};
use crate::utils::size::parse_size_as;

pub fn servers_path(datacenter_id: &str) -> String {
    format!("{}/servers", datacenter_path(datacenter_id))
}

pub fn server_path(datacenter_id: &str, server_id: &str) -> String {
    format!("{}/{server_id}", servers_path(datacenter_id))
}

/// Memory sizes without a unit are megabytes.
pub fn parse_ram(ram: &str) -> Result<u64> {
    parse_size_as(ram, "MB")
}

pub async fn get_all_servers(http: &HttpClient, datacenter_id: &str) -> Result<Vec<Server>> {
    let servers = http
        .get::<Collection<Server>>(&format!("{}?depth=1", servers_path(datacenter_id)))
        .await?
        .items;

    Ok(servers)
}

pub async fn get_server(http: &HttpClient, datacenter_id: &str, server_id: &str) -> Result<Server> {
    http.get(&server_path(datacenter_id, server_id)).await
}

pub async fn create_server(
    http: &HttpClient,
    datacenter_id: &str,
    properties: ServerProperties,
) -> Result<(Server, Option<String>)> {
    http.send_json("POST", &servers_path(datacenter_id), &Body { properties })
        .await?
        .into_parts()
}

pub async fn update_server(
    http: &HttpClient,
    datacenter_id: &str,
    server_id: &str,
    properties: ServerProperties,
) -> Result<(Server, Option<String>)> {
    http.send_json("PATCH", &server_path(datacenter_id, server_id), &properties)
        .await?
        .into_parts()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Start,
    Stop,
    Reboot,
}

impl PowerAction {
    fn as_str(self) -> &'static str {
        match self {
            PowerAction::Start => "start",
            PowerAction::Stop => "stop",
            PowerAction::Reboot => "reboot",
        }
    }
}

/// Returns the provisioning request started by the action.
pub async fn power_action(
    http: &HttpClient,
    datacenter_id: &str,
    server_id: &str,
    action: PowerAction,
) -> Result<Option<String>> {
    let response = http
        .request::<serde_json::Value>(
            "POST",
            &format!(
                "{}/{}",
                server_path(datacenter_id, server_id),
                action.as_str()
            ),
            None,
        )
        .await?;

    Ok(response.request)
}

pub fn attached_volumes_path(datacenter_id: &str, server_id: &str) -> String {
    format!("{}/volumes", server_path(datacenter_id, server_id))
}

pub async fn get_attached_volumes(
    http: &HttpClient,
    datacenter_id: &str,
    server_id: &str,
) -> Result<Vec<Volume>> {
    let volumes = http
        .get::<Collection<Volume>>(&format!(
            "{}?depth=1",
            attached_volumes_path(datacenter_id, server_id)
        ))
        .await?
        .items;

    Ok(volumes)
}

pub fn attached_volume_path(datacenter_id: &str, server_id: &str, volume_id: &str) -> String {
    format!("{}/{volume_id}", attached_volumes_path(datacenter_id, server_id))
}

pub async fn attach_volume(
    http: &HttpClient,
    datacenter_id: &str,
    server_id: &str,
    volume_id: &str,
) -> Result<(Volume, Option<String>)> {
    http.send_json(
        "POST",
        &attached_volumes_path(datacenter_id, server_id),
        &IdRef { id: volume_id },
    )
    .await?
    .into_parts()
}
