use anyhow::Result;

use super::types::{Label, LabelProperties};
use crate::state::http::HttpClient;
use crate::types::{Body, Collection};

pub async fn get_all_labels(http: &HttpClient, labels_path: Option<&str>) -> Result<Vec<Label>> {
    let path = format!("{}?depth=1", labels_path.unwrap_or("/labels"));

    Ok(http.get::<Collection<Label>>(&path).await?.items)
}

pub async fn add_label(
    http: &HttpClient,
    labels_path: &str,
    key: &str,
    value: &str,
) -> Result<(Label, Option<String>)> {
    let properties = LabelProperties {
        key: Some(key.to_string()),
        value: Some(value.to_string()),
        ..Default::default()
    };

    http.send_json("POST", labels_path, &Body { properties })
        .await?
        .into_parts()
}
