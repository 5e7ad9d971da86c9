use anyhow::Result;

use super::types::{Pcc, PccProperties};
use crate::state::http::HttpClient;
use crate::types::{Body, Collection};

pub fn pcc_path(pcc_id: &str) -> String {
    format!("/pccs/{pcc_id}")
}

pub async fn get_all_pccs(http: &HttpClient) -> Result<Vec<Pcc>> {
    let pccs = http.get::<Collection<Pcc>>("/pccs?depth=1").await?.items;

    Ok(pccs)
}

pub async fn get_pcc(http: &HttpClient, pcc_id: &str) -> Result<Pcc> {
    http.get(&pcc_path(pcc_id)).await
}

pub async fn create_pcc(
    http: &HttpClient,
    properties: PccProperties,
) -> Result<(Pcc, Option<String>)> {
    http.send_json("POST", "/pccs", &Body { properties })
        .await?
        .into_parts()
}

pub async fn update_pcc(
    http: &HttpClient,
    pcc_id: &str,
    properties: PccProperties,
) -> Result<(Pcc, Option<String>)> {
    http.send_json("PATCH", &pcc_path(pcc_id), &properties)
        .await?
        .into_parts()
}
