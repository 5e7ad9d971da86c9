mod types;

use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, LOCATION};
use reqwest::{Client as AsyncClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use self::types::{Credentials, Response};
use self::types::ErrorResponse;
use crate::config::VERSION;
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: String,
    pub ua: String,
    credentials: Credentials,
}

impl HttpClient {
    pub fn new(credentials: Credentials, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let ua = format!(
            "ionosctl/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        Ok(Self {
            client: AsyncClient::builder()
                .user_agent(ua.clone())
                .default_headers(headers)
                .build()
                .context("Failed to build the HTTP client")?,
            base_url: base_url.trim_end_matches('/').to_string(),
            ua,
            credentials,
        })
    }

    /// Same client and credentials, pointed at another API.
    pub fn with_base_url(&self, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        }
    }

    pub fn has_credentials(&self) -> bool {
        !matches!(self.credentials, Credentials::None)
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{path}", self.base_url)
        }
    }

    pub async fn handle_response<T>(&self, response: reqwest::Response) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_error(response, status).await);
        }

        let request = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        if status == StatusCode::NO_CONTENT {
            return Ok(Response {
                data: None,
                request,
            });
        }

        let body = response.bytes().await?;

        let data = if body.is_empty() {
            None
        } else {
            Some(serde_json::from_slice::<T>(&body).context("Failed to parse the API response")?)
        };

        Ok(Response { data, request })
    }

    async fn handle_error(&self, response: reqwest::Response, status: StatusCode) -> anyhow::Error {
        let body = response.json::<ErrorResponse>().await;

        let message = match body {
            Ok(body) => body.message(),
            Err(err) => {
                log::debug!("Error deserialize message: {:#?}", err);

                None
            }
        };

        Error::Api {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| format!("Error: HTTP {status}")),
        }
        .into()
    }

    pub async fn request<T>(
        &self,
        method: &str,
        path: &str,
        data: Option<(String, &str)>,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let method: Method = method
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP method `{method}`"))?;

        let mut request = self.client.request(method.clone(), self.url(path));

        request = match &self.credentials {
            Credentials::Token(token) => request.bearer_auth(token),
            Credentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Credentials::None => return Err(Error::MissingCredentials.into()),
        };

        log::debug!("request: {method} {path}");

        if let Some((body, content_type)) = data {
            // show body in debug mode / when developing
            #[cfg(debug_assertions)]
            log::debug!("request body: {body}");

            request = request.header(CONTENT_TYPE, content_type).body(body);
        }

        let request = request.build()?;

        #[cfg(debug_assertions)]
        let now = tokio::time::Instant::now();

        let response = self.client.execute(request).await?;

        #[cfg(debug_assertions)]
        log::debug!("response in: {:#?}", now.elapsed());

        self.handle_response(response).await
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request::<T>("GET", path, None)
            .await?
            .data
            .context("The API returned an empty response")
    }

    pub async fn send_json<T, B>(&self, method: &str, path: &str, body: &B) -> Result<Response<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(
            method,
            path,
            Some((serde_json::to_string(body)?, "application/json")),
        )
        .await
    }

    /// For the few calls that take `application/x-www-form-urlencoded` bodies.
    pub async fn send_form<T>(
        &self,
        method: &str,
        path: &str,
        fields: &[(&str, String)],
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();

        self.request(
            method,
            path,
            Some((body, "application/x-www-form-urlencoded")),
        )
        .await
    }

    /// Issues a DELETE and returns the provisioning request it started, if any.
    pub async fn delete(&self, path: &str) -> Result<Option<String>> {
        Ok(self
            .request::<serde_json::Value>("DELETE", path, None)
            .await?
            .request)
    }
}

impl<T> Response<T> {
    pub fn into_parts(self) -> Result<(T, Option<String>)> {
        let data = self.data.context("The API returned an empty response")?;

        Ok((data, self.request))
    }
}
