#[macro_export]
macro_rules! impl_store {
    ($($name:ty),+ $(,)?) => ($(
        #[async_trait::async_trait]
        impl $crate::store::Store for $name {
            async fn load(path: &std::path::Path) -> anyhow::Result<Self> {
                use anyhow::Context as _;
                use tokio::io::AsyncReadExt as _;

                if tokio::fs::metadata(path).await.is_err() {
                    return Ok(Self::default());
                }

                let mut file = tokio::fs::File::open(path)
                    .await
                    .context("Error opening file")?;

                let mut buffer = String::new();
                file.read_to_string(&mut buffer).await?;

                serde_json::from_str(&buffer).context("Failed to deserialize")
            }

            async fn save(&self, path: &std::path::Path) -> anyhow::Result<Self> {
                use anyhow::Context as _;
                use tokio::io::AsyncWriteExt as _;

                tokio::fs::create_dir_all(path.parent().context("Failed to get store directory")?)
                    .await
                    .context("Failed to create store directory")?;

                let mut file = tokio::fs::File::create(path)
                    .await
                    .context("Error opening file")?;

                file.write_all(
                    serde_json::to_string_pretty(&self)
                        .context("Failed to serialize")?
                        .as_bytes(),
                )
                .await
                .context("Failed to write store")?;

                $crate::store::utils::restrict_permissions(path).await?;

                Ok(self.clone())
            }
        }
    )+)
}
