use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{or_unavailable, Resource, UNAVAILABLE_ELEMENT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
    /// In gigabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licence_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_number: Option<i64>,
}

pub type Volume = Resource<VolumeProperties>;

impl Columns for Volume {
    const COLUMNS: &'static [&'static str] = &[
        "VolumeId",
        "Name",
        "Size",
        "Type",
        "LicenceType",
        "State",
        "Image",
        "ImageAlias",
        "AvailabilityZone",
        "Bus",
        "DeviceNumber",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "VolumeId",
        "Name",
        "Size",
        "Type",
        "LicenceType",
        "State",
        "Image",
    ];

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;

        match name {
            "VolumeId" => self.id.clone(),
            "Name" => or_unavailable(&properties.name),
            "Size" => properties
                .size
                .map_or_else(|| UNAVAILABLE_ELEMENT.to_string(), |size| format!("{size}GB")),
            "Type" => or_unavailable(&properties.volume_type),
            "LicenceType" => or_unavailable(&properties.licence_type),
            "State" => self.state().to_string(),
            "Image" => or_unavailable(&properties.image),
            "ImageAlias" => or_unavailable(&properties.image_alias),
            "AvailabilityZone" => or_unavailable(&properties.availability_zone),
            "Bus" => or_unavailable(&properties.bus),
            "DeviceNumber" => or_unavailable(&properties.device_number),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_volume_columns() {
        let volume: Volume = serde_json::from_value(serde_json::json!({
            "id": "vol",
            "metadata": { "state": "AVAILABLE" },
            "properties": {
                "name": "data",
                "type": "SSD",
                "size": 10.0,
                "licenceType": "LINUX",
                "deviceNumber": 2
            }
        }))
        .unwrap();

        assert_eq!(volume.column("Size"), "10GB");
        assert_eq!(volume.column("Type"), "SSD");
        assert_eq!(volume.column("DeviceNumber"), "2");
        assert_eq!(volume.column("Image"), UNAVAILABLE_ELEMENT);
    }
}
