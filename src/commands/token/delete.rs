use anyhow::Result;
use clap::{ArgGroup, Parser};

use super::utils::delete_tokens;
use crate::state::State;
use crate::utils::confirm::confirm;

#[derive(Debug, Parser)]
#[clap(about = "Delete authentication tokens")]
#[clap(group(
    ArgGroup::new("which")
        .required(true)
        .args(["token_id", "expired", "current", "all"])
))]
pub struct Options {
    #[clap(long = "token-id", help = "ID of the token")]
    pub token_id: Option<String>,

    #[clap(long = "expired", help = "Delete every expired token")]
    pub expired: bool,

    #[clap(long = "current", help = "Delete the token used by this session")]
    pub current: bool,

    #[clap(long = "all", help = "Delete every token")]
    pub all: bool,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,
}

impl Options {
    /// Path suffix under `/tokens` and a description for the prompt.
    fn target(&self) -> (String, String) {
        match &self.token_id {
            Some(id) => (format!("/{id}"), format!("token `{id}`")),
            None if self.expired => ("?criteria=EXPIRED".into(), "every expired token".into()),
            None if self.current => ("?criteria=CURRENT".into(), "the current token".into()),
            None => ("?criteria=ALL".into(), "every token".into()),
        }
    }
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let (target, description) = options.target();

    confirm(
        &format!("Are you sure you want to delete {description}?"),
        options.force,
    )?;

    delete_tokens(&state.auth_http, &target).await?;

    log::info!("Deleted {description}");

    Ok(())
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Debug, Parser)]
    struct Wrapper {
        #[clap(flatten)]
        options: Options,
    }

    fn parse(args: &[&str]) -> Options {
        Wrapper::parse_from(std::iter::once("delete").chain(args.iter().copied())).options
    }

    #[test]
    fn test_targets() {
        assert_eq!(parse(&["--token-id", "t"]).target().0, "/t");
        assert_eq!(parse(&["--expired"]).target().0, "?criteria=EXPIRED");
        assert_eq!(parse(&["--current"]).target().0, "?criteria=CURRENT");
        assert_eq!(parse(&["--all"]).target().0, "?criteria=ALL");
    }

    #[test]
    fn test_exactly_one_selector() {
        assert!(Wrapper::try_parse_from(["delete"]).is_err());
        assert!(Wrapper::try_parse_from(["delete", "--all", "--expired"]).is_err());
    }

    #[tokio::test]
    async fn test_delete_expired() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/tokens"))
            .and(query_param("criteria", "EXPIRED"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
            )
            .expect(1)
            .mount(&server)
            .await;

        handle(parse(&["--expired", "-f"]), State::for_tests(&server.uri()))
            .await
            .unwrap();
    }
}
