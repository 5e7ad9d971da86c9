use anyhow::{bail, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::commands::datacenter::utils::datacenter_path;
use crate::commands::image::utils::image_path;
use crate::commands::ipblock::utils::ipblock_path;
use crate::commands::server::utils::server_path;
use crate::commands::snapshot::utils::snapshot_path;
use crate::commands::volume::utils::volume_path;
use crate::output::Columns;
use crate::types::{or_unavailable, Resource, UNAVAILABLE_ELEMENT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_href: Option<String>,
}

/// Labels listed globally are identified by a URN, labels of a single
/// resource by their key.
pub type Label = Resource<LabelProperties>;

impl Columns for Label {
    const COLUMNS: &'static [&'static str] =
        &["Key", "Value", "ResourceType", "ResourceId", "Urn"];
    const DEFAULT_COLUMNS: &'static [&'static str] =
        &["Key", "Value", "ResourceType", "ResourceId"];

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;

        match name {
            "Key" => or_unavailable(&properties.key),
            "Value" => or_unavailable(&properties.value),
            "ResourceType" => or_unavailable(&properties.resource_type),
            "ResourceId" => or_unavailable(&properties.resource_id),
            "Urn" => self.id.clone(),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}

pub const LABELED_TYPES: [&str; 6] = [
    "datacenter",
    "server",
    "volume",
    "ipblock",
    "snapshot",
    "image",
];

/// The resource whose labels are addressed.
#[derive(Debug, Clone, Default, Args)]
pub struct LabelTarget {
    #[clap(
        long = "resource-type",
        help = "Type of the labeled resource",
        value_parser = LABELED_TYPES
    )]
    pub resource_type: Option<String>,

    #[clap(
        long = "datacenter-id",
        help = "ID of the datacenter, or of the datacenter holding the server or volume",
        required_if_eq_any([
            ("resource_type", "datacenter"),
            ("resource_type", "server"),
            ("resource_type", "volume"),
        ])
    )]
    pub datacenter_id: Option<String>,

    #[clap(
        long = "server-id",
        help = "ID of the server",
        required_if_eq("resource_type", "server")
    )]
    pub server_id: Option<String>,

    #[clap(
        long = "volume-id",
        help = "ID of the volume",
        required_if_eq("resource_type", "volume")
    )]
    pub volume_id: Option<String>,

    #[clap(
        long = "ipblock-id",
        help = "ID of the IP block",
        required_if_eq("resource_type", "ipblock")
    )]
    pub ipblock_id: Option<String>,

    #[clap(
        long = "snapshot-id",
        help = "ID of the snapshot",
        required_if_eq("resource_type", "snapshot")
    )]
    pub snapshot_id: Option<String>,

    #[clap(
        long = "image-id",
        help = "ID of the image",
        required_if_eq("resource_type", "image")
    )]
    pub image_id: Option<String>,
}

impl LabelTarget {
    /// The `.../labels` collection of the resource, `None` when no resource
    /// type was given.
    pub fn labels_path(&self) -> Result<Option<String>> {
        let Some(resource_type) = self.resource_type.as_deref() else {
            return Ok(None);
        };

        let resource = match (resource_type, self.resource_id()) {
            ("datacenter", Some(id)) => datacenter_path(id),
            ("server", Some(id)) => server_path(self.datacenter()?, id),
            ("volume", Some(id)) => volume_path(self.datacenter()?, id),
            ("ipblock", Some(id)) => ipblock_path(id),
            ("snapshot", Some(id)) => snapshot_path(id),
            ("image", Some(id)) => image_path(id),
            (resource_type, _) => bail!("Missing the ID of the {resource_type} to label"),
        };

        Ok(Some(format!("{resource}/labels")))
    }

    pub fn resource_id(&self) -> Option<&str> {
        match self.resource_type.as_deref()? {
            "datacenter" => self.datacenter_id.as_deref(),
            "server" => self.server_id.as_deref(),
            "volume" => self.volume_id.as_deref(),
            "ipblock" => self.ipblock_id.as_deref(),
            "snapshot" => self.snapshot_id.as_deref(),
            "image" => self.image_id.as_deref(),
            _ => None,
        }
    }

    fn datacenter(&self) -> Result<&str> {
        match self.datacenter_id.as_deref() {
            Some(id) => Ok(id),
            None => bail!("Missing --datacenter-id"),
        }
    }

    /// Per resource listings only carry key and value.
    pub fn annotate(&self, label: &mut Label) {
        let properties = &mut label.properties;

        if properties.resource_type.is_none() {
            properties.resource_type = self.resource_type.clone();
        }

        if properties.resource_id.is_none() {
            properties.resource_id = self.resource_id().map(ToString::to_string);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn target(resource_type: &str) -> LabelTarget {
        LabelTarget {
            resource_type: Some(resource_type.to_string()),
            datacenter_id: Some("dc".to_string()),
            server_id: Some("srv".to_string()),
            volume_id: Some("vol".to_string()),
            ipblock_id: Some("ip".to_string()),
            snapshot_id: Some("snap".to_string()),
            image_id: Some("img".to_string()),
        }
    }

    #[test]
    fn test_labels_paths() {
        let paths = [
            ("datacenter", "/datacenters/dc/labels"),
            ("server", "/datacenters/dc/servers/srv/labels"),
            ("volume", "/datacenters/dc/volumes/vol/labels"),
            ("ipblock", "/ipblocks/ip/labels"),
            ("snapshot", "/snapshots/snap/labels"),
            ("image", "/images/img/labels"),
        ];

        for (resource_type, path) in paths {
            assert_eq!(
                target(resource_type).labels_path().unwrap().as_deref(),
                Some(path)
            );
        }
    }

    #[test]
    fn test_no_type_means_every_label() {
        assert_eq!(LabelTarget::default().labels_path().unwrap(), None);
    }

    #[test]
    fn test_missing_id() {
        let target = LabelTarget {
            resource_type: Some("ipblock".to_string()),
            ..Default::default()
        };

        assert!(target.labels_path().is_err());
    }

    #[test]
    fn test_annotate() {
        let mut label: Label = serde_json::from_value(serde_json::json!({
            "id": "env",
            "properties": { "key": "env", "value": "prod" }
        }))
        .unwrap();

        target("server").annotate(&mut label);

        assert_eq!(label.column("ResourceType"), "server");
        assert_eq!(label.column("ResourceId"), "srv");
    }
}
