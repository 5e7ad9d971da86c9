use anyhow::{ensure, Result};

use super::types::{DeleteResponse, Jwt, Token, Tokens};
use crate::state::http::HttpClient;

pub async fn get_all_tokens(http: &HttpClient) -> Result<Vec<Token>> {
    Ok(http.get::<Tokens>("/tokens").await?.tokens)
}

pub async fn get_token(http: &HttpClient, token_id: &str) -> Result<Token> {
    http.get(&format!("/tokens/{token_id}")).await
}

pub async fn generate_token(http: &HttpClient) -> Result<Jwt> {
    http.get("/tokens/generate").await
}

/// `target` is a token id or a `?criteria=` query.
pub async fn delete_tokens(http: &HttpClient, target: &str) -> Result<()> {
    let response = http
        .request::<DeleteResponse>("DELETE", &format!("/tokens{target}"), None)
        .await?;

    ensure!(
        response.data.map_or(true, |data| data.success),
        "The API did not confirm the deletion"
    );

    Ok(())
}
