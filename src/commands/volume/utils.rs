use anyhow::{Context, Result};

use super::types::{Volume, VolumeProperties};
use crate::commands::datacenter::utils::datacenter_path;
use crate::state::http::HttpClient;
use crate::types::{Body, Collection};
use crate::utils::size::parse_size_as;

/// Volume sizes without a unit are gigabytes.
pub fn parse_volume_size(size: &str) -> Result<f64> {
    Ok(parse_size_as(size, "GB")? as f64)
}

pub fn volumes_path(datacenter_id: &str) -> String {
    format!("{}/volumes", datacenter_path(datacenter_id))
}

pub fn volume_path(datacenter_id: &str, volume_id: &str) -> String {
    format!("{}/{volume_id}", volumes_path(datacenter_id))
}

pub async fn get_all_volumes(http: &HttpClient, datacenter_id: &str) -> Result<Vec<Volume>> {
    let volumes = http
        .get::<Collection<Volume>>(&format!("{}?depth=1", volumes_path(datacenter_id)))
        .await?
        .items;

    Ok(volumes)
}

pub async fn get_volume(http: &HttpClient, datacenter_id: &str, volume_id: &str) -> Result<Volume> {
    http.get(&volume_path(datacenter_id, volume_id)).await
}

pub async fn create_volume(
    http: &HttpClient,
    datacenter_id: &str,
    properties: VolumeProperties,
) -> Result<(Volume, Option<String>)> {
    http.send_json("POST", &volumes_path(datacenter_id), &Body { properties })
        .await?
        .into_parts()
}

pub async fn update_volume(
    http: &HttpClient,
    datacenter_id: &str,
    volume_id: &str,
    properties: VolumeProperties,
) -> Result<(Volume, Option<String>)> {
    http.send_json("PATCH", &volume_path(datacenter_id, volume_id), &properties)
        .await?
        .into_parts()
}

/// Reads public keys to be injected into a volume created from an image.
pub async fn read_ssh_keys(paths: &[String]) -> Result<Vec<String>> {
    let mut keys = Vec::with_capacity(paths.len());

    for path in paths {
        let key = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Could not read SSH key `{path}`"))?;

        keys.push(key.trim().to_string());
    }

    Ok(keys)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_volume_size() {
        assert_eq!(parse_volume_size("20").unwrap(), 20.0);
        assert_eq!(parse_volume_size("1TB").unwrap(), 1024.0);
        assert!(parse_volume_size("1500MB").is_err());
    }

    #[tokio::test]
    async fn test_read_ssh_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id_ed25519.pub");

        tokio::fs::write(&path, "ssh-ed25519 AAAA user@host\n")
            .await
            .unwrap();

        let keys = read_ssh_keys(&[path.display().to_string()]).await.unwrap();

        assert_eq!(keys, vec!["ssh-ed25519 AAAA user@host"]);
        assert!(read_ssh_keys(&["/does/not/exist".to_string()]).await.is_err());
    }
}
