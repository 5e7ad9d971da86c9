//! Polling of asynchronous API operations.
//!
//! Mutating calls return before the work is done: the API hands back a
//! request (`Location` header) whose status moves from QUEUED to RUNNING to
//! DONE or FAILED, and the touched resource reports BUSY until it becomes
//! AVAILABLE again. [`Watcher`] polls a [`Probe`] until it reports a terminal
//! status or the deadline passes.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Args;
use serde::Deserialize;
use tokio::time::{sleep, timeout, Instant};

use crate::commands::request::types::{RequestState, RequestStatus};
use crate::config::{AVAILABLE_STATE, DEFAULT_TIMEOUT, POLL_INTERVAL};
use crate::error::Error;
use crate::state::http::HttpClient;
use crate::types::Metadata;

#[derive(Debug)]
pub enum Status {
    Pending(String),
    Done,
    Failed(Error),
}

#[async_trait]
pub trait Probe: Send + Sync {
    /// What is being waited on, used in logs and errors.
    fn target(&self) -> String;

    async fn poll(&self) -> Result<Status>;
}

#[derive(Debug, Clone, Copy)]
pub struct Watcher {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Watcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            interval: POLL_INTERVAL,
            timeout,
        }
    }

    /// Polls until the probe reports a terminal status. Errors returned by the
    /// probe end the wait immediately, nothing is polled once the deadline
    /// has passed and a poll still in flight at the deadline is abandoned.
    pub async fn watch<P>(&self, probe: &P) -> Result<()>
    where
        P: Probe + ?Sized,
    {
        let deadline = Instant::now() + self.timeout;
        let target = probe.target();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());

            if remaining.is_zero() {
                return Err(self.timed_out(target));
            }

            let Ok(status) = timeout(remaining, probe.poll()).await else {
                return Err(self.timed_out(target));
            };

            match status? {
                Status::Done => return Ok(()),

                Status::Failed(error) => return Err(error.into()),

                Status::Pending(current) => {
                    log::debug!("{target} is {current}");

                    let remaining = deadline.saturating_duration_since(Instant::now());

                    sleep(self.interval.min(remaining)).await;
                }
            }
        }
    }

    fn timed_out(&self, what: String) -> anyhow::Error {
        Error::Timeout {
            what,
            after: self.timeout,
        }
        .into()
    }
}

pub struct RequestProbe<'a> {
    http: &'a HttpClient,
    url: &'a str,
}

impl<'a> RequestProbe<'a> {
    pub fn new(http: &'a HttpClient, url: &'a str) -> Self {
        Self { http, url }
    }
}

pub fn request_status(status: &RequestStatus) -> Status {
    let metadata = &status.metadata;

    match metadata.status {
        RequestState::Done => Status::Done,
        RequestState::Failed => Status::Failed(Error::RequestFailed(
            metadata
                .message
                .clone()
                .unwrap_or_else(|| "Request failed".to_string()),
        )),
        ref pending => Status::Pending(pending.to_string()),
    }
}

#[async_trait]
impl Probe for RequestProbe<'_> {
    fn target(&self) -> String {
        format!("request {}", request_id(self.url))
    }

    async fn poll(&self) -> Result<Status> {
        let status = self.http.get::<RequestStatus>(self.url).await?;

        Ok(request_status(&status))
    }
}

#[derive(Debug, Deserialize)]
struct StateOnly {
    #[serde(default)]
    metadata: Option<Metadata>,
}

pub struct StateProbe<'a> {
    http: &'a HttpClient,
    path: &'a str,
    target_state: &'a str,
}

impl<'a> StateProbe<'a> {
    pub fn new(http: &'a HttpClient, path: &'a str, target_state: &'a str) -> Self {
        Self {
            http,
            path,
            target_state,
        }
    }
}

pub fn resource_status(what: &str, state: Option<&str>, target_state: &str) -> Status {
    match state {
        Some(state) if state.eq_ignore_ascii_case(target_state) => Status::Done,
        Some(state) if state.to_uppercase().starts_with("FAILED") => {
            Status::Failed(Error::ResourceFailed {
                what: what.to_string(),
                state: state.to_string(),
            })
        }
        Some(state) => Status::Pending(state.to_string()),
        None => Status::Pending("UNKNOWN".to_string()),
    }
}

#[async_trait]
impl Probe for StateProbe<'_> {
    fn target(&self) -> String {
        format!("{} to be {}", self.path, self.target_state)
    }

    async fn poll(&self) -> Result<Status> {
        let resource = self.http.get::<StateOnly>(self.path).await?;
        let state = resource
            .metadata
            .as_ref()
            .and_then(|metadata| metadata.state.as_deref());

        Ok(resource_status(self.path, state, self.target_state))
    }
}

/// Extracts the request id out of a `.../requests/<id>/status` URL.
pub fn request_id(url: &str) -> &str {
    url.split_once("/requests/")
        .map(|(_, rest)| rest.split('/').next().unwrap_or(rest))
        .unwrap_or(url)
}

pub async fn wait_for_request(
    http: &HttpClient,
    request: Option<&str>,
    watcher: Watcher,
) -> Result<()> {
    let url = request.context("The API did not return a request to wait for")?;

    log::info!("Waiting for request {} to finish", request_id(url));

    watcher.watch(&RequestProbe::new(http, url)).await?;

    log::info!("Request {} is DONE", request_id(url));

    Ok(())
}

pub async fn wait_for_state(http: &HttpClient, path: &str, watcher: Watcher) -> Result<()> {
    log::info!("Waiting for {path} to be {AVAILABLE_STATE}");

    watcher
        .watch(&StateProbe::new(http, path, AVAILABLE_STATE))
        .await?;

    log::info!("{path} is {AVAILABLE_STATE}");

    Ok(())
}

#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct WaitOptions {
    #[clap(
        short = 'w',
        long = "wait-for-request",
        help = "Wait for the request to be executed"
    )]
    pub wait_for_request: bool,

    #[clap(
        short = 'W',
        long = "wait-for-state",
        help = "Wait for the resource to be in AVAILABLE state"
    )]
    pub wait_for_state: bool,

    #[clap(
        short = 't',
        long = "timeout",
        help = "Seconds to wait for each requested condition",
        default_value_t = DEFAULT_TIMEOUT
    )]
    pub timeout: u64,
}

impl WaitOptions {
    pub fn watcher(&self) -> Watcher {
        Watcher::new(Duration::from_secs(self.timeout))
    }

    /// `resource` is the path of the entity whose state is awaited.
    pub async fn wait(
        &self,
        http: &HttpClient,
        request: Option<&str>,
        resource: &str,
    ) -> Result<()> {
        if self.wait_for_request {
            wait_for_request(http, request, self.watcher()).await?;
        }

        if self.wait_for_state {
            wait_for_state(http, resource, self.watcher()).await?;
        }

        Ok(())
    }
}

/// For calls whose resource is gone once the request finishes.
#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct RequestWaitOptions {
    #[clap(
        short = 'w',
        long = "wait-for-request",
        help = "Wait for the request to be executed"
    )]
    pub wait_for_request: bool,

    #[clap(
        short = 't',
        long = "timeout",
        help = "Seconds to wait for the request",
        default_value_t = DEFAULT_TIMEOUT
    )]
    pub timeout: u64,
}

impl RequestWaitOptions {
    pub async fn wait(&self, http: &HttpClient, request: Option<&str>) -> Result<()> {
        if self.wait_for_request {
            wait_for_request(http, request, Watcher::new(Duration::from_secs(self.timeout)))
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use anyhow::anyhow;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::state::http::Credentials;

    /// Replays scripted answers, then stays BUSY forever.
    struct Scripted {
        answers: Mutex<VecDeque<Result<Status>>>,
        polls: Mutex<Vec<Instant>>,
    }

    impl Scripted {
        fn new(answers: Vec<Result<Status>>) -> Self {
            Self {
                answers: Mutex::new(answers.into()),
                polls: Mutex::new(vec![]),
            }
        }

        fn polls(&self) -> Vec<Instant> {
            self.polls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Probe for Scripted {
        fn target(&self) -> String {
            "request 1".to_string()
        }

        async fn poll(&self) -> Result<Status> {
            self.polls.lock().unwrap().push(Instant::now());

            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Status::Pending("BUSY".to_string())))
        }
    }

    fn pending() -> Result<Status> {
        Ok(Status::Pending("RUNNING".to_string()))
    }

    fn watcher(interval: u64, timeout: u64) -> Watcher {
        Watcher {
            interval: Duration::from_secs(interval),
            timeout: Duration::from_secs(timeout),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_done_before_timeout() {
        let probe = Scripted::new(vec![pending(), pending(), Ok(Status::Done)]);

        watcher(2, 60).watch(&probe).await.unwrap();

        assert_eq!(probe.polls().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_message_is_verbatim() {
        let probe = Scripted::new(vec![
            pending(),
            Ok(Status::Failed(Error::RequestFailed(
                "[VDC-5-1817] Quota exceeded for cores".to_string(),
            ))),
        ]);

        let err = watcher(2, 60).watch(&probe).await.unwrap_err();

        assert_eq!(err.to_string(), "[VDC-5-1817] Quota exceeded for cores");
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::RequestFailed(_))
        ));
        assert_eq!(probe.polls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_stops_polling() {
        let probe = Scripted::new(vec![]);
        let start = Instant::now();

        let err = watcher(2, 10).watch(&probe).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Timeout { .. })
        ));

        let polls = probe.polls();

        // polled at 0, 2, 4, 6 and 8 seconds, never at the deadline
        assert_eq!(polls.len(), 5);
        assert!(polls
            .iter()
            .all(|at| *at < start + Duration::from_secs(10)));
        assert!(start.elapsed() >= Duration::from_secs(10));
        assert!(start.elapsed() < Duration::from_secs(11));
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_sleep_is_cut_at_the_deadline() {
        let probe = Scripted::new(vec![]);
        let start = Instant::now();

        watcher(3, 10).watch(&probe).await.unwrap_err();

        assert_eq!(probe.polls().len(), 4);
        assert!(start.elapsed() >= Duration::from_secs(10));
        assert!(start.elapsed() < Duration::from_secs(11));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_timeout_never_polls() {
        let probe = Scripted::new(vec![Ok(Status::Done)]);

        let err = watcher(2, 0).watch(&probe).await.unwrap_err();

        assert!(err.to_string().starts_with("timed out after 0s"));
        assert!(probe.polls().is_empty());
    }

    /// Answers every poll, but only after `delay`.
    struct Slow {
        delay: Duration,
    }

    #[async_trait]
    impl Probe for Slow {
        fn target(&self) -> String {
            "request abc".to_string()
        }

        async fn poll(&self) -> Result<Status> {
            sleep(self.delay).await;

            Ok(Status::Done)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_poll_is_cut_at_the_deadline() {
        let probe = Slow {
            delay: Duration::from_secs(6),
        };
        let start = Instant::now();

        let err = watcher(2, 1).watch(&probe).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Timeout { .. })
        ));
        assert!(start.elapsed() >= Duration::from_secs(1));
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_api_errors_are_not_retried() {
        let probe = Scripted::new(vec![pending(), Err(anyhow!("connection reset"))]);

        let err = watcher(2, 60).watch(&probe).await.unwrap_err();

        assert_eq!(err.to_string(), "connection reset");
        assert_eq!(probe.polls().len(), 2);
    }

    #[test]
    fn test_resource_status() {
        assert!(matches!(
            resource_status("/s", Some("AVAILABLE"), "AVAILABLE"),
            Status::Done
        ));
        assert!(matches!(
            resource_status("/s", Some("BUSY"), "AVAILABLE"),
            Status::Pending(ref s) if s == "BUSY"
        ));
        assert!(matches!(
            resource_status("/s", None, "AVAILABLE"),
            Status::Pending(_)
        ));
        assert!(matches!(
            resource_status("/s", Some("FAILED_UPDATING"), "AVAILABLE"),
            Status::Failed(Error::ResourceFailed { ref state, .. }) if state == "FAILED_UPDATING"
        ));
    }

    #[test]
    fn test_request_id() {
        assert_eq!(
            request_id("https://api.ionos.com/cloudapi/v6/requests/3d1e8bd0-0d1c/status"),
            "3d1e8bd0-0d1c"
        );
        assert_eq!(request_id("/requests/abc"), "abc");
        assert_eq!(request_id("something-else"), "something-else");
    }

    fn status_body(status: &str, message: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "abc/status",
            "type": "request-status",
            "metadata": { "status": status, "message": message, "targets": [] }
        })
    }

    #[tokio::test]
    async fn test_request_probe_against_the_api() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/requests/abc/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body(
                "FAILED",
                "Datacenter location is not supported",
            )))
            .expect(1)
            .mount(&server)
            .await;

        let http = HttpClient::new(Credentials::Token("t".to_string()), &server.uri()).unwrap();
        let url = format!("{}/requests/abc/status", server.uri());

        let err = wait_for_request(&http, Some(url.as_str()), watcher(0, 5))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Datacenter location is not supported");
    }

    #[tokio::test]
    async fn test_request_probe_done() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/requests/abc/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body(
                "DONE",
                "Request has been successfully executed",
            )))
            .mount(&server)
            .await;

        let http = HttpClient::new(Credentials::Token("t".to_string()), &server.uri()).unwrap();
        let options = RequestWaitOptions {
            wait_for_request: true,
            timeout: 5,
        };

        options
            .wait(&http, Some(format!("{}/requests/abc/status", server.uri()).as_str()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_request_handle() {
        let http = HttpClient::new(Credentials::None, "http://127.0.0.1:9").unwrap();

        let err = wait_for_request(&http, None, watcher(0, 5)).await.unwrap_err();

        assert!(err.to_string().contains("did not return a request"));
    }

    #[tokio::test]
    async fn test_state_probe_against_the_api() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/datacenters/dc/servers/srv"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "srv",
                "metadata": { "state": "AVAILABLE" },
                "properties": { "name": "web" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let http = HttpClient::new(Credentials::Token("t".to_string()), &server.uri()).unwrap();
        let options = WaitOptions {
            wait_for_request: false,
            wait_for_state: true,
            timeout: 5,
        };

        options
            .wait(&http, None, "/datacenters/dc/servers/srv")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_request_then_state() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/requests/abc/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body(
                "DONE",
                "Request has been successfully executed",
            )))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/datacenters/dc/servers/srv"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "srv",
                "metadata": { "state": "FAILED_PROVISIONING" },
                "properties": { "name": "web" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let http = HttpClient::new(Credentials::Token("t".to_string()), &server.uri()).unwrap();
        let options = WaitOptions {
            wait_for_request: true,
            wait_for_state: true,
            timeout: 5,
        };
        let url = format!("{}/requests/abc/status", server.uri());

        let err = options
            .wait(&http, Some(url.as_str()), "/datacenters/dc/servers/srv")
            .await
            .unwrap_err();

        match err.downcast_ref::<Error>() {
            Some(Error::ResourceFailed { state, .. }) => {
                assert_eq!(state, "FAILED_PROVISIONING");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let paths: Vec<String> = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect();

        assert_eq!(
            paths,
            vec!["/requests/abc/status", "/datacenters/dc/servers/srv"]
        );
    }
}
