use anyhow::Result;

use super::types::{Share, ShareProperties};
use crate::commands::group::utils::group_path;
use crate::state::http::HttpClient;
use crate::types::{Body, Collection};

pub fn shares_path(group_id: &str) -> String {
    format!("{}/shares", group_path(group_id))
}

pub fn share_path(group_id: &str, resource_id: &str) -> String {
    format!("{}/{resource_id}", shares_path(group_id))
}

pub async fn get_all_shares(http: &HttpClient, group_id: &str) -> Result<Vec<Share>> {
    let shares = http
        .get::<Collection<Share>>(&format!("{}?depth=1", shares_path(group_id)))
        .await?
        .items;

    Ok(shares)
}

pub async fn get_share(http: &HttpClient, group_id: &str, resource_id: &str) -> Result<Share> {
    http.get(&share_path(group_id, resource_id)).await
}

/// Creating (`POST`) and updating (`PUT`) a share both address the shared
/// resource directly.
pub async fn put_share(
    http: &HttpClient,
    method: &str,
    group_id: &str,
    resource_id: &str,
    properties: ShareProperties,
) -> Result<(Share, Option<String>)> {
    http.send_json(method, &share_path(group_id, resource_id), &Body { properties })
        .await?
        .into_parts()
}
