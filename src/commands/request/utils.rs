use anyhow::Result;

use super::types::Request;
use crate::state::http::HttpClient;
use crate::types::Collection;

pub async fn get_all_requests(http: &HttpClient) -> Result<Vec<Request>> {
    let requests = http
        .get::<Collection<Request>>("/requests?depth=2")
        .await?
        .items;

    Ok(requests)
}

pub async fn get_request(http: &HttpClient, request_id: &str) -> Result<Request> {
    http.get(&format!("/requests/{request_id}?depth=2")).await
}

pub fn status_path(request_id: &str) -> String {
    format!("/requests/{request_id}/status")
}

/// Newest first, optionally only the `latest` ones matching `method`.
pub fn filter_requests(
    mut requests: Vec<Request>,
    method: Option<&str>,
    latest: Option<usize>,
) -> Vec<Request> {
    if let Some(method) = method {
        requests.retain(|request| {
            request
                .properties
                .method
                .as_deref()
                .is_some_and(|m| m.eq_ignore_ascii_case(method))
        });
    }

    requests.sort_by(|a, b| b.metadata.created_date.cmp(&a.metadata.created_date));

    if let Some(latest) = latest {
        requests.truncate(latest);
    }

    requests
}

#[cfg(test)]
mod test {
    use super::*;

    fn request(id: &str, method: &str, created: &str) -> Request {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "metadata": { "createdDate": created },
            "properties": { "method": method }
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_requests() {
        let requests = vec![
            request("a", "POST", "2021-06-22T10:00:00Z"),
            request("b", "DELETE", "2021-06-22T12:00:00Z"),
            request("c", "POST", "2021-06-22T11:00:00Z"),
        ];

        let ids = |requests: Vec<Request>| {
            requests
                .into_iter()
                .map(|r| r.id)
                .collect::<Vec<_>>()
        };

        assert_eq!(ids(filter_requests(requests.clone(), None, None)), vec!["b", "c", "a"]);
        assert_eq!(
            ids(filter_requests(requests.clone(), Some("post"), None)),
            vec!["c", "a"]
        );
        assert_eq!(ids(filter_requests(requests, None, Some(1))), vec!["b"]);
    }
}
