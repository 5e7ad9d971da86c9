use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::utils::config_path;
use crate::config::{ENV_API_URL, ENV_PASSWORD, ENV_TOKEN, ENV_USERNAME};
use crate::impl_store;
use crate::state::http::Credentials;

/// Persisted login data. Environment variables take precedence over the file.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(
        rename = "userdata.name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,
    #[serde(
        rename = "userdata.password",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<String>,
    #[serde(
        rename = "userdata.token",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub token: Option<String>,
    #[serde(
        rename = "userdata.api-url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub api_url: Option<String>,
}

impl_store!(Config);

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        config_path("config.json")
    }

    pub fn with_env<F>(self, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|value| !value.is_empty());

        Self {
            username: env(ENV_USERNAME).or(self.username),
            password: env(ENV_PASSWORD).or(self.password),
            token: env(ENV_TOKEN).or(self.token),
            api_url: env(ENV_API_URL).or(self.api_url),
        }
    }

    /// A token wins over username and password.
    pub fn credentials(&self) -> Credentials {
        match (&self.token, &self.username, &self.password) {
            (Some(token), _, _) => Credentials::Token(token.clone()),
            (None, Some(username), Some(password)) => Credentials::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            _ => Credentials::None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;
    use crate::store::Store;

    fn file_config() -> Config {
        Config {
            username: Some("file-user".to_string()),
            password: Some("file-pass".to_string()),
            token: None,
            api_url: Some("https://file.example.com".to_string()),
        }
    }

    #[test]
    fn test_env_overrides_file() {
        let env = HashMap::from([
            (ENV_USERNAME, "env-user"),
            (ENV_API_URL, ""),
            (ENV_TOKEN, "env-token"),
        ]);

        let config = file_config().with_env(|key| env.get(key).map(ToString::to_string));

        assert_eq!(config.username.as_deref(), Some("env-user"));
        assert_eq!(config.password.as_deref(), Some("file-pass"));
        assert_eq!(config.token.as_deref(), Some("env-token"));
        // empty variables are ignored
        assert_eq!(config.api_url.as_deref(), Some("https://file.example.com"));
    }

    #[test]
    fn test_credentials_precedence() {
        assert!(matches!(
            file_config().credentials(),
            Credentials::Basic { ref username, .. } if username == "file-user"
        ));

        let with_token = Config {
            token: Some("t".to_string()),
            ..file_config()
        };
        assert!(matches!(with_token.credentials(), Credentials::Token(ref t) if t == "t"));

        let only_user = Config {
            password: None,
            ..file_config()
        };
        assert!(matches!(only_user.credentials(), Credentials::None));
    }

    #[test]
    fn test_file_keys() {
        let config: Config = serde_json::from_str(
            r#"{ "userdata.name": "a", "userdata.password": "b", "userdata.api-url": "c" }"#,
        )
        .unwrap();

        assert_eq!(config.username.as_deref(), Some("a"));
        assert_eq!(config.password.as_deref(), Some("b"));
        assert_eq!(config.api_url.as_deref(), Some("c"));
        assert_eq!(config.token, None);
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        assert_eq!(Config::load(&path).await.unwrap(), Config::default());

        file_config().save(&path).await.unwrap();

        assert_eq!(Config::load(&path).await.unwrap(), file_config());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }
}
