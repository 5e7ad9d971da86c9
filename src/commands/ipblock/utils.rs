use anyhow::Result;

use super::types::{IpBlock, IpBlockProperties};
use crate::state::http::HttpClient;
use crate::types::{Body, Collection};

pub fn ipblock_path(ipblock_id: &str) -> String {
    format!("/ipblocks/{ipblock_id}")
}

pub async fn get_all_ipblocks(http: &HttpClient) -> Result<Vec<IpBlock>> {
    let ipblocks = http
        .get::<Collection<IpBlock>>("/ipblocks?depth=1")
        .await?
        .items;

    Ok(ipblocks)
}

pub async fn get_ipblock(http: &HttpClient, ipblock_id: &str) -> Result<IpBlock> {
    http.get(&ipblock_path(ipblock_id)).await
}

pub async fn create_ipblock(
    http: &HttpClient,
    properties: IpBlockProperties,
) -> Result<(IpBlock, Option<String>)> {
    http.send_json("POST", "/ipblocks", &Body { properties })
        .await?
        .into_parts()
}

pub async fn update_ipblock(
    http: &HttpClient,
    ipblock_id: &str,
    properties: IpBlockProperties,
) -> Result<(IpBlock, Option<String>)> {
    http.send_json("PATCH", &ipblock_path(ipblock_id), &properties)
        .await?
        .into_parts()
}
