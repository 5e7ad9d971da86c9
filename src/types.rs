use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The envelope every Cloud API entity is wrapped in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource<P> {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub properties: P,
}

impl<P> Resource<P> {
    pub fn state(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|metadata| metadata.state.as_deref())
            .unwrap_or(UNAVAILABLE_ELEMENT)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Request body for create and update calls.
#[derive(Debug, Serialize)]
pub struct Body<P> {
    pub properties: P,
}

/// Reference to another entity, as used in attach calls.
#[derive(Debug, Serialize)]
pub struct IdRef<'a> {
    pub id: &'a str,
}

pub const UNAVAILABLE_ELEMENT: &str = "-";

pub fn or_unavailable<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| UNAVAILABLE_ELEMENT.to_string(), ToString::to_string)
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Props {
        name: String,
    }

    #[test]
    fn test_resource_envelope() {
        let resource: Resource<Props> = serde_json::from_str(
            r#"{
                "id": "15f67991-0f51-4efc-a8ad-ef1fb31a480c",
                "type": "datacenter",
                "href": "https://api.ionos.com/cloudapi/v6/datacenters/15f67991",
                "metadata": {
                    "etag": "45480eb3fbfc31f1d916c1eaa4abdcc3",
                    "createdDate": "2015-12-04T14:34:09Z",
                    "state": "AVAILABLE"
                },
                "properties": { "name": "My resource" }
            }"#,
        )
        .unwrap();

        assert_eq!(resource.kind.as_deref(), Some("datacenter"));
        assert_eq!(resource.properties.name, "My resource");
        assert_eq!(resource.state(), "AVAILABLE");
    }

    #[test]
    fn test_missing_metadata() {
        let resource: Resource<Props> =
            serde_json::from_str(r#"{ "id": "a", "properties": { "name": "b" } }"#).unwrap();

        assert_eq!(resource.state(), UNAVAILABLE_ELEMENT);
    }

    #[test]
    fn test_empty_collection() {
        let collection: Collection<Resource<Props>> =
            serde_json::from_str(r#"{ "id": "servers", "type": "collection" }"#).unwrap();

        assert!(collection.items.is_empty());
    }
}
