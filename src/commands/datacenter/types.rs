use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{or_unavailable, Resource, UNAVAILABLE_ELEMENT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatacenterProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sec_auth_protection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

pub type Datacenter = Resource<DatacenterProperties>;

impl Columns for Datacenter {
    const COLUMNS: &'static [&'static str] = &[
        "DatacenterId",
        "Name",
        "Location",
        "Description",
        "Version",
        "State",
        "SecAuthProtection",
        "Features",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "DatacenterId",
        "Name",
        "Location",
        "Description",
        "Version",
        "State",
    ];

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;

        match name {
            "DatacenterId" => self.id.clone(),
            "Name" => or_unavailable(&properties.name),
            "Location" => or_unavailable(&properties.location),
            "Description" => or_unavailable(&properties.description),
            "Version" => or_unavailable(&properties.version),
            "State" => self.state().to_string(),
            "SecAuthProtection" => or_unavailable(&properties.sec_auth_protection),
            "Features" => properties
                .features
                .as_ref()
                .map_or_else(|| UNAVAILABLE_ELEMENT.to_string(), |f| f.join(",")),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}
