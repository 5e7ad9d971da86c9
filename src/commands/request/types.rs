use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{or_unavailable, UNAVAILABLE_ELEMENT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestState {
    Queued,
    Running,
    Done,
    Failed,
    #[serde(other)]
    Unknown,
}

impl Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self {
            RequestState::Queued => "QUEUED",
            RequestState::Running => "RUNNING",
            RequestState::Done => "DONE",
            RequestState::Failed => "FAILED",
            RequestState::Unknown => "UNKNOWN",
        };

        write!(f, "{state}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetRef {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestTarget {
    pub target: TargetRef,
    #[serde(default)]
    pub status: Option<RequestState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMetadata {
    pub status: RequestState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub targets: Vec<RequestTarget>,
}

/// Body of `GET /requests/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub metadata: StatusMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_status: Option<RequestStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub id: String,
    #[serde(default)]
    pub metadata: RequestMetadata,
    #[serde(default)]
    pub properties: RequestProperties,
}

impl Request {
    pub fn status(&self) -> Option<&StatusMetadata> {
        self.metadata
            .request_status
            .as_ref()
            .map(|status| &status.metadata)
    }
}

impl Columns for Request {
    const COLUMNS: &'static [&'static str] = &[
        "RequestId",
        "CreatedDate",
        "CreatedBy",
        "Method",
        "Status",
        "Message",
        "Url",
        "Targets",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "RequestId",
        "CreatedDate",
        "Method",
        "Status",
        "Message",
        "Targets",
    ];

    fn column(&self, name: &str) -> String {
        match name {
            "RequestId" => self.id.clone(),
            "CreatedDate" => or_unavailable(&self.metadata.created_date),
            "CreatedBy" => or_unavailable(&self.metadata.created_by),
            "Method" => or_unavailable(&self.properties.method),
            "Url" => or_unavailable(&self.properties.url),
            "Status" => self
                .status()
                .map_or_else(|| UNAVAILABLE_ELEMENT.to_string(), |s| s.status.to_string()),
            "Message" => self
                .status()
                .and_then(|s| s.message.clone())
                .unwrap_or_else(|| UNAVAILABLE_ELEMENT.to_string()),
            "Targets" => match self.status() {
                Some(status) if !status.targets.is_empty() => status
                    .targets
                    .iter()
                    .map(|t| match &t.target.kind {
                        Some(kind) => format!("{kind}:{}", t.target.id),
                        None => t.target.id.clone(),
                    })
                    .collect::<Vec<_>>()
                    .join(","),
                _ => UNAVAILABLE_ELEMENT.to_string(),
            },
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_request_with_status() {
        let request: Request = serde_json::from_str(
            r#"{
                "id": "20333e60-d65c-4a95-846b-08c48b871186",
                "type": "request",
                "metadata": {
                    "createdDate": "2021-06-22T10:21:04Z",
                    "createdBy": "user@example.com",
                    "requestStatus": {
                        "id": "20333e60-d65c-4a95-846b-08c48b871186/status",
                        "metadata": {
                            "status": "DONE",
                            "message": "Request has been successfully executed",
                            "targets": [{
                                "target": { "id": "b7a6d7d4", "type": "datacenter" },
                                "status": "DONE"
                            }]
                        }
                    }
                },
                "properties": { "method": "POST", "url": "https://api.ionos.com/cloudapi/v6/datacenters" }
            }"#,
        )
        .unwrap();

        assert_eq!(request.column("Status"), "DONE");
        assert_eq!(request.column("Method"), "POST");
        assert_eq!(request.column("Targets"), "datacenter:b7a6d7d4");
        assert_eq!(
            request.column("Message"),
            "Request has been successfully executed"
        );
    }

    #[test]
    fn test_unknown_state_is_tolerated() {
        let status: RequestStatus =
            serde_json::from_str(r#"{ "metadata": { "status": "PAUSED" } }"#).unwrap();

        assert_eq!(status.metadata.status, RequestState::Unknown);
    }
}
