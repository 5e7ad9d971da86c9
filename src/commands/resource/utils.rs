use anyhow::Result;

use super::types::ManagedResource;
use crate::state::http::HttpClient;
use crate::types::Collection;

pub async fn get_all_resources(
    http: &HttpClient,
    resource_type: Option<&str>,
) -> Result<Vec<ManagedResource>> {
    let path = match resource_type {
        Some(resource_type) => format!("/um/resources/{resource_type}?depth=1"),
        None => "/um/resources?depth=1".to_string(),
    };

    Ok(http.get::<Collection<ManagedResource>>(&path).await?.items)
}

pub async fn get_resource(
    http: &HttpClient,
    resource_type: &str,
    resource_id: &str,
) -> Result<ManagedResource> {
    http.get(&format!("/um/resources/{resource_type}/{resource_id}"))
        .await
}
