use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{or_unavailable, Resource, UNAVAILABLE_ELEMENT};
use crate::utils::size::{unit_multiplier, user_friendly_size};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cores: Option<u32>,
    /// In megabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_family: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<String>,
}

pub type Server = Resource<ServerProperties>;

impl Columns for Server {
    const COLUMNS: &'static [&'static str] = &[
        "ServerId",
        "Name",
        "Type",
        "AvailabilityZone",
        "Cores",
        "Ram",
        "CpuFamily",
        "VmState",
        "State",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] = Self::COLUMNS;

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;

        match name {
            "ServerId" => self.id.clone(),
            "Name" => or_unavailable(&properties.name),
            "Type" => or_unavailable(&properties.server_type),
            "AvailabilityZone" => or_unavailable(&properties.availability_zone),
            "Cores" => or_unavailable(&properties.cores),
            "Ram" => properties
                .ram
                .and_then(|ram| user_friendly_size(ram * unit_multiplier::MB).ok())
                .unwrap_or_else(|| UNAVAILABLE_ELEMENT.to_string()),
            "CpuFamily" => or_unavailable(&properties.cpu_family),
            "VmState" => or_unavailable(&properties.vm_state),
            "State" => self.state().to_string(),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_server_columns() {
        let server: Server = serde_json::from_value(serde_json::json!({
            "id": "srv",
            "metadata": { "state": "BUSY" },
            "properties": {
                "name": "web",
                "cores": 2,
                "ram": 2048,
                "vmState": "RUNNING",
                "type": "ENTERPRISE"
            }
        }))
        .unwrap();

        assert_eq!(server.column("Ram"), "2GB");
        assert_eq!(server.column("Type"), "ENTERPRISE");
        assert_eq!(server.column("VmState"), "RUNNING");
        assert_eq!(server.column("State"), "BUSY");
        assert_eq!(server.column("CpuFamily"), UNAVAILABLE_ELEMENT);
    }

    #[test]
    fn test_unset_fields_are_not_sent() {
        let properties = ServerProperties {
            name: Some("web".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(properties).unwrap(),
            serde_json::json!({ "name": "web" })
        );
    }
}
