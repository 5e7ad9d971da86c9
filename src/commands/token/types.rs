use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{or_unavailable, UNAVAILABLE_ELEMENT};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl Columns for Token {
    const COLUMNS: &'static [&'static str] = &["TokenId", "CreatedDate", "ExpirationDate", "Href"];
    const DEFAULT_COLUMNS: &'static [&'static str] = &["TokenId", "CreatedDate", "ExpirationDate"];

    fn column(&self, name: &str) -> String {
        match name {
            "TokenId" => self.id.clone(),
            "CreatedDate" => or_unavailable(&self.created_date),
            "ExpirationDate" => or_unavailable(&self.expiration_date),
            "Href" => or_unavailable(&self.href),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Tokens {
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// A freshly generated token. The secret is only ever shown once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jwt {
    pub token: String,
}

impl Columns for Jwt {
    const COLUMNS: &'static [&'static str] = &["Token"];
    const DEFAULT_COLUMNS: &'static [&'static str] = Self::COLUMNS;

    fn column(&self, _name: &str) -> String {
        self.token.clone()
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
}
