use anyhow::Result;
use clap::Parser;

use crate::state::State;
use crate::store::config::Config;
use crate::store::Store;

#[derive(Debug, Parser)]
#[clap(about = "Remove the saved credentials")]
pub struct Options {}

pub async fn handle(_options: Options, state: State) -> Result<()> {
    let mut config = Config::load(&state.config_path).await?;

    if config.token.is_none() && config.username.is_none() && config.password.is_none() {
        log::info!("No saved credentials, nothing to do");
        return Ok(());
    }

    config.username = None;
    config.password = None;
    config.token = None;

    config.save(&state.config_path).await?;

    log::info!("Removed credentials from {}", state.config_path.display());

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_logout_keeps_the_api_url() {
        let dir = tempfile::tempdir().unwrap();

        let mut state = State::for_tests("http://localhost");
        state.config_path = dir.path().join("config.json");

        Config {
            token: Some("t".to_string()),
            api_url: Some("https://api.example.com".to_string()),
            ..Default::default()
        }
        .save(&state.config_path)
        .await
        .unwrap();

        let config_path = state.config_path.clone();

        handle(Options {}, state).await.unwrap();

        let config = Config::load(&config_path).await.unwrap();

        assert_eq!(config.token, None);
        assert_eq!(config.api_url.as_deref(), Some("https://api.example.com"));
    }
}
