use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{or_unavailable, Resource, UNAVAILABLE_ELEMENT};

/// A LAN connected through a cross connect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacenter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacenter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Columns for Peer {
    const COLUMNS: &'static [&'static str] =
        &["LanId", "LanName", "DatacenterId", "DatacenterName", "Location"];
    const DEFAULT_COLUMNS: &'static [&'static str] = Self::COLUMNS;

    fn column(&self, name: &str) -> String {
        match name {
            "LanId" => or_unavailable(&self.id),
            "LanName" => or_unavailable(&self.name),
            "DatacenterId" => or_unavailable(&self.datacenter_id),
            "DatacenterName" => or_unavailable(&self.datacenter_name),
            "Location" => or_unavailable(&self.location),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectableDatacenter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PccProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peers: Option<Vec<Peer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connectable_datacenters: Option<Vec<ConnectableDatacenter>>,
}

pub type Pcc = Resource<PccProperties>;

impl Columns for Pcc {
    const COLUMNS: &'static [&'static str] = &["PccId", "Name", "Description", "State"];
    const DEFAULT_COLUMNS: &'static [&'static str] = Self::COLUMNS;

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;

        match name {
            "PccId" => self.id.clone(),
            "Name" => or_unavailable(&properties.name),
            "Description" => or_unavailable(&properties.description),
            "State" => self.state().to_string(),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}
