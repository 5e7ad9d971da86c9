use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

pub mod config;
pub mod macros;
pub mod utils;

#[async_trait]
pub trait Store<T: Serialize + DeserializeOwned + Default + Clone = Self> {
    /// Reads the store, falling back to the default when the file does not exist yet.
    async fn load(path: &Path) -> Result<T>;
    async fn save(&self, path: &Path) -> Result<T>;
}
