use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{or_unavailable, Resource, UNAVAILABLE_ELEMENT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licence_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_init: Option<String>,
}

pub type Image = Resource<ImageProperties>;

impl Columns for Image {
    const COLUMNS: &'static [&'static str] = &[
        "ImageId",
        "Name",
        "ImageAliases",
        "Location",
        "LicenceType",
        "ImageType",
        "CloudInit",
        "Size",
        "Public",
        "Description",
        "State",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "ImageId",
        "Name",
        "ImageAliases",
        "Location",
        "LicenceType",
        "ImageType",
        "CloudInit",
    ];

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;

        match name {
            "ImageId" => self.id.clone(),
            "Name" => or_unavailable(&properties.name),
            "ImageAliases" => properties
                .image_aliases
                .as_ref()
                .filter(|aliases| !aliases.is_empty())
                .map_or_else(|| UNAVAILABLE_ELEMENT.to_string(), |aliases| aliases.join(",")),
            "Location" => or_unavailable(&properties.location),
            "LicenceType" => or_unavailable(&properties.licence_type),
            "ImageType" => or_unavailable(&properties.image_type),
            "CloudInit" => or_unavailable(&properties.cloud_init),
            "Size" => properties
                .size
                .map_or_else(|| UNAVAILABLE_ELEMENT.to_string(), |size| format!("{size}GB")),
            "Public" => or_unavailable(&properties.public),
            "Description" => or_unavailable(&properties.description),
            "State" => self.state().to_string(),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}
