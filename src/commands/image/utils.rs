use anyhow::Result;

use super::types::{Image, ImageProperties};
use crate::state::http::HttpClient;
use crate::types::Collection;

pub fn image_path(image_id: &str) -> String {
    format!("/images/{image_id}")
}

pub async fn get_all_images(http: &HttpClient) -> Result<Vec<Image>> {
    let images = http
        .get::<Collection<Image>>("/images?depth=1")
        .await?
        .items;

    Ok(images)
}

pub async fn get_image(http: &HttpClient, image_id: &str) -> Result<Image> {
    http.get(&image_path(image_id)).await
}

pub async fn update_image(
    http: &HttpClient,
    image_id: &str,
    properties: ImageProperties,
) -> Result<(Image, Option<String>)> {
    http.send_json("PATCH", &image_path(image_id), &properties)
        .await?
        .into_parts()
}

#[derive(Debug, Default)]
pub struct ImageFilter {
    pub location: Option<String>,
    pub licence_type: Option<String>,
    pub image_type: Option<String>,
    pub alias: Option<String>,
}

impl ImageFilter {
    pub fn matches(&self, image: &Image) -> bool {
        let properties = &image.properties;

        fn same(wanted: &Option<String>, actual: &Option<String>) -> bool {
            match (wanted, actual) {
                (None, _) => true,
                (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
                (Some(_), None) => false,
            }
        }

        same(&self.location, &properties.location)
            && same(&self.licence_type, &properties.licence_type)
            && same(&self.image_type, &properties.image_type)
            && self.alias.as_ref().map_or(true, |alias| {
                properties
                    .image_aliases
                    .as_ref()
                    .is_some_and(|aliases| aliases.iter().any(|a| a.contains(alias.as_str())))
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn image(location: &str, licence: &str, aliases: &[&str]) -> Image {
        serde_json::from_value(serde_json::json!({
            "id": "img",
            "properties": {
                "location": location,
                "licenceType": licence,
                "imageType": "HDD",
                "imageAliases": aliases
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(ImageFilter::default().matches(&image("de/fra", "LINUX", &[])));
    }

    #[test]
    fn test_filter() {
        let filter = ImageFilter {
            location: Some("de/fra".to_string()),
            licence_type: Some("linux".to_string()),
            alias: Some("ubuntu".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&image("de/fra", "LINUX", &["ubuntu:latest"])));
        assert!(!filter.matches(&image("us/las", "LINUX", &["ubuntu:latest"])));
        assert!(!filter.matches(&image("de/fra", "WINDOWS", &["ubuntu:latest"])));
        assert!(!filter.matches(&image("de/fra", "LINUX", &["debian:latest"])));
    }
}
