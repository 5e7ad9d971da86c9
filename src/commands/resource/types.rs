use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{or_unavailable, Resource, UNAVAILABLE_ELEMENT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedResourceProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sec_auth_protection: Option<bool>,
}

/// Any resource the user can see through the user management API.
pub type ManagedResource = Resource<ManagedResourceProperties>;

impl Columns for ManagedResource {
    const COLUMNS: &'static [&'static str] =
        &["ResourceId", "Name", "Type", "SecAuthProtection", "State"];
    const DEFAULT_COLUMNS: &'static [&'static str] =
        &["ResourceId", "Name", "Type", "SecAuthProtection"];

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;

        match name {
            "ResourceId" => self.id.clone(),
            "Name" => or_unavailable(&properties.name),
            "Type" => or_unavailable(&self.kind),
            "SecAuthProtection" => or_unavailable(&properties.sec_auth_protection),
            "State" => self.state().to_string(),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}

pub const RESOURCE_TYPES: [&str; 7] = [
    "datacenter",
    "snapshot",
    "image",
    "ipblock",
    "pcc",
    "backupunit",
    "k8s",
];
