use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{or_unavailable, Resource, UNAVAILABLE_ELEMENT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpBlockProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ips: Option<Vec<String>>,
}

pub type IpBlock = Resource<IpBlockProperties>;

impl Columns for IpBlock {
    const COLUMNS: &'static [&'static str] =
        &["IpBlockId", "Name", "Location", "Size", "Ips", "State"];
    const DEFAULT_COLUMNS: &'static [&'static str] = Self::COLUMNS;

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;

        match name {
            "IpBlockId" => self.id.clone(),
            "Name" => or_unavailable(&properties.name),
            "Location" => or_unavailable(&properties.location),
            "Size" => or_unavailable(&properties.size),
            "Ips" => properties
                .ips
                .as_ref()
                .map_or_else(|| UNAVAILABLE_ELEMENT.to_string(), |ips| ips.join(",")),
            "State" => self.state().to_string(),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}
