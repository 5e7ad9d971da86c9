use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{or_unavailable, Resource, UNAVAILABLE_ELEMENT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// In gigabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licence_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sec_auth_protection: Option<bool>,
}

pub type Snapshot = Resource<SnapshotProperties>;

impl Columns for Snapshot {
    const COLUMNS: &'static [&'static str] = &[
        "SnapshotId",
        "Name",
        "Location",
        "Size",
        "LicenceType",
        "State",
        "Description",
        "SecAuthProtection",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "SnapshotId",
        "Name",
        "Location",
        "Size",
        "LicenceType",
        "State",
    ];

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;

        match name {
            "SnapshotId" => self.id.clone(),
            "Name" => or_unavailable(&properties.name),
            "Location" => or_unavailable(&properties.location),
            "Size" => properties
                .size
                .map_or_else(|| UNAVAILABLE_ELEMENT.to_string(), |size| format!("{size}GB")),
            "LicenceType" => or_unavailable(&properties.licence_type),
            "State" => self.state().to_string(),
            "Description" => or_unavailable(&properties.description),
            "SecAuthProtection" => or_unavailable(&properties.sec_auth_protection),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}
