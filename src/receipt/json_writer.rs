use super::{MenuWriter, WriteError};
use crate::model::Dish;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes each receipt as a pretty-printed JSON array into a directory.
///
/// The directory is created on the first publish. A receipt published twice under the
/// same name replaces the earlier file.
#[derive(Debug, Clone)]
pub struct JsonFileWriter {
    dir: PathBuf,
}

impl JsonFileWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl MenuWriter for JsonFileWriter {
    async fn publish(&self, name: &str, items: &[Dish]) -> Result<(), WriteError> {
        let body = serde_json::to_vec_pretty(items).map_err(|source| WriteError::Serialize {
            name: name.to_string(),
            source,
        })?;

        let io_error = |source| WriteError::Io {
            name: name.to_string(),
            source,
        };
        tokio::fs::create_dir_all(&self.dir).await.map_err(io_error)?;
        let path = self.dir.join(name);
        tokio::fs::write(&path, body).await.map_err(io_error)?;

        info!(path = %path.display(), items = items.len(), "Receipt written");
        Ok(())
    }
}
