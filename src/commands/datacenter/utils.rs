use anyhow::Result;

use super::types::{Datacenter, DatacenterProperties};
use crate::state::http::HttpClient;
use crate::types::{Body, Collection};

pub fn datacenter_path(datacenter_id: &str) -> String {
    format!("/datacenters/{datacenter_id}")
}

pub async fn get_all_datacenters(http: &HttpClient) -> Result<Vec<Datacenter>> {
    let datacenters = http
        .get::<Collection<Datacenter>>("/datacenters?depth=1")
        .await?
        .items;

    Ok(datacenters)
}

pub async fn get_datacenter(http: &HttpClient, datacenter_id: &str) -> Result<Datacenter> {
    http.get(&datacenter_path(datacenter_id)).await
}

pub async fn create_datacenter(
    http: &HttpClient,
    properties: DatacenterProperties,
) -> Result<(Datacenter, Option<String>)> {
    http.send_json("POST", "/datacenters", &Body { properties })
        .await?
        .into_parts()
}

pub async fn update_datacenter(
    http: &HttpClient,
    datacenter_id: &str,
    properties: DatacenterProperties,
) -> Result<(Datacenter, Option<String>)> {
    http.send_json("PATCH", &datacenter_path(datacenter_id), &properties)
        .await?
        .into_parts()
}
