pub mod http;

use std::path::PathBuf;

use anyhow::Result;

use self::http::HttpClient;
use crate::config::{DEFAULT_API_URL, DEFAULT_AUTH_API_URL, ENV_AUTH_API_URL};
use crate::output::Printer;
use crate::store::config::Config;
use crate::store::Store;

/// Everything a command needs, resolved once per invocation.
#[derive(Debug)]
pub struct State {
    pub http: HttpClient,
    /// Client for the token endpoints, which live outside the Cloud API.
    pub auth_http: HttpClient,
    pub printer: Printer,
    pub config: Config,
    pub config_path: PathBuf,
    /// The URL given with `--api-url`, if any.
    pub api_url_override: Option<String>,
}

#[derive(Debug, Default)]
pub struct StateOptions {
    pub config_path: Option<PathBuf>,
    pub override_api_url: Option<String>,
    pub printer: Printer,
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let config_path = match options.config_path {
            Some(path) => path,
            None => Config::default_path()?,
        };

        let config = Config::load(&config_path)
            .await?
            .with_env(|key| std::env::var(key).ok());

        // the flag wins over the environment and the config file
        let api_url = options
            .override_api_url
            .clone()
            .or_else(|| config.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let auth_url =
            std::env::var(ENV_AUTH_API_URL).unwrap_or_else(|_| DEFAULT_AUTH_API_URL.to_string());

        log::debug!("Using API at {api_url}");

        let http = HttpClient::new(config.credentials(), &api_url)?;

        Ok(State {
            auth_http: http.with_base_url(&auth_url),
            http,
            printer: options.printer,
            config,
            config_path,
            api_url_override: options.override_api_url,
        })
    }
}

#[cfg(test)]
impl State {
    /// A state talking to `api_url` with a fixed token and default output.
    pub fn for_tests(api_url: &str) -> Self {
        let http = HttpClient::new(http::Credentials::Token("test".to_string()), api_url)
            .unwrap_or_else(|err| panic!("{err}"));

        State {
            auth_http: http.clone(),
            http,
            printer: Printer {
                quiet: true,
                ..Default::default()
            },
            config: Config::default(),
            config_path: PathBuf::from("config.json"),
            api_url_override: None,
        }
    }
}
