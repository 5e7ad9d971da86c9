use anyhow::{Context, Result};
use clap::Parser;

use crate::state::http::{Credentials, HttpClient};
use crate::state::State;
use crate::store::config::Config;
use crate::store::Store;

#[derive(Debug, Parser, Default, PartialEq, Eq)]
#[clap(about = "Check credentials against the API and save them")]
pub struct Options {
    #[clap(long = "user", help = "Username, prompted for when missing", conflicts_with = "token")]
    pub user: Option<String>,

    #[clap(
        long = "password",
        help = "Password, prompted for when missing",
        conflicts_with = "token"
    )]
    pub password: Option<String>,

    #[clap(long = "token", help = "Authentication token used instead of username and password")]
    pub token: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let credentials = match options {
        Options {
            token: Some(token), ..
        } => Credentials::Token(token),

        Options { user, password, .. } => {
            let username = match user {
                Some(user) => user,
                None => dialoguer::Input::<String>::new()
                    .with_prompt("Username")
                    .interact_text()
                    .context("Failed to read the username")?,
            };

            let password = match password {
                Some(password) => password,
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .interact()
                    .context("Failed to read the password")?,
            };

            Credentials::Basic { username, password }
        }
    };

    verify(&credentials, &state.http.base_url).await?;

    let mut config = Config::load(&state.config_path).await?;

    match credentials {
        Credentials::Token(token) => {
            config.token = Some(token);
            config.username = None;
            config.password = None;
        }

        Credentials::Basic { username, password } => {
            config.username = Some(username);
            config.password = Some(password);
            config.token = None;
        }

        Credentials::None => {}
    }

    // a URL from the environment stays there
    if let Some(api_url) = state.api_url_override {
        config.api_url = Some(api_url);
    }

    config.save(&state.config_path).await?;

    log::info!(
        "Authentication successful, credentials saved to {}",
        state.config_path.display()
    );

    Ok(())
}

/// Any authenticated call works, the API root is the cheapest.
pub async fn verify(credentials: &Credentials, api_url: &str) -> Result<()> {
    HttpClient::new(credentials.clone(), api_url)?
        .get::<serde_json::Value>("/")
        .await
        .context("Could not log in with the given credentials")?;

    Ok(())
}

#[cfg(test)]
mod test {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_login_saves_the_token() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("authorization", "Bearer new-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "api",
                "href": "https://api.ionos.com/cloudapi/v6"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut state = State::for_tests(&server.uri());
        state.config_path = dir.path().join("config.json");
        state.api_url_override = Some(server.uri());

        Config {
            username: Some("old".to_string()),
            password: Some("old".to_string()),
            ..Default::default()
        }
        .save(&state.config_path)
        .await
        .unwrap();

        let options = Options {
            token: Some("new-token".to_string()),
            ..Default::default()
        };

        let config_path = state.config_path.clone();

        handle(options, state).await.unwrap();

        let config = Config::load(&config_path).await.unwrap();

        assert_eq!(config.token.as_deref(), Some("new-token"));
        assert_eq!(config.username, None);
        assert_eq!(config.api_url, Some(server.uri()));
    }

    #[tokio::test]
    async fn test_rejected_credentials_are_not_saved() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "httpStatus": 401,
                "messages": [{ "errorCode": "315", "message": "Unauthorized" }]
            })))
            .mount(&server)
            .await;

        let mut state = State::for_tests(&server.uri());
        state.config_path = dir.path().join("config.json");

        let config_path = state.config_path.clone();

        let options = Options {
            user: Some("user".to_string()),
            password: Some("wrong".to_string()),
            ..Default::default()
        };

        assert!(handle(options, state).await.is_err());
        assert!(!config_path.exists());
    }

    #[tokio::test]
    async fn test_api_url_from_the_environment_is_not_saved() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        // resolved from IONOS_API_URL rather than `--api-url`
        let mut state = State::for_tests(&server.uri());
        state.config_path = dir.path().join("config.json");

        let config_path = state.config_path.clone();

        let options = Options {
            token: Some("token".to_string()),
            ..Default::default()
        };

        handle(options, state).await.unwrap();

        let config = Config::load(&config_path).await.unwrap();

        assert_eq!(config.token.as_deref(), Some("token"));
        assert_eq!(config.api_url, None);
    }
}
