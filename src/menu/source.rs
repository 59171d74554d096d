//! # Catalog Sources
//!
//! Where the initial menu comes from. The shop reads its source exactly once at
//! startup; a failure is logged and the shop opens with an empty menu.

use crate::model::Dish;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to fetch catalog from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A read-once supplier of the initial menu.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Dish>, CatalogLoadError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Fetches a JSON array of dishes over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn load(&self) -> Result<Vec<Dish>, CatalogLoadError> {
        let fetch_err = |source| CatalogLoadError::Fetch {
            url: self.url.clone(),
            source,
        };

        debug!(url = %self.url, "Fetching catalog");
        let body = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(fetch_err)?
            .bytes()
            .await
            .map_err(fetch_err)?;

        let dishes: Vec<Dish> = serde_json::from_slice(&body)?;
        info!(url = %self.url, count = dishes.len(), "Catalog fetched");
        Ok(dishes)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads a JSON array of dishes from a local file.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<Dish>, CatalogLoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogLoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        let dishes: Vec<Dish> = serde_json::from_slice(&bytes)?;
        info!(path = %self.path.display(), count = dishes.len(), "Catalog read");
        Ok(dishes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An in-memory menu.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    dishes: Vec<Dish>,
}

impl StaticCatalog {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn load(&self) -> Result<Vec<Dish>, CatalogLoadError> {
        Ok(self.dishes.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} dishes)", self.dishes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DishKind;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("takeout-catalog-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_json_file_catalog_reads_dishes() {
        let path = scratch_file("menu.json");
        let json = r#"[
            {"name": "Pad Thai", "vegetarian": false, "calories": 650, "price": 13.5, "type": "MEAT"},
            {"name": "Garden Salad", "vegetarian": true, "calories": 180, "price": 7.0}
        ]"#;
        tokio::fs::write(&path, json).await.unwrap();

        let dishes = JsonFileCatalog::new(&path).load().await.unwrap();
        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[0].kind, Some(DishKind::Meat));
        assert!(dishes[1].vegetarian);

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = JsonFileCatalog::new(scratch_file("does-not-exist.json")).load().await;
        assert!(matches!(result, Err(CatalogLoadError::Io { .. })));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let path = scratch_file("broken.json");
        tokio::fs::write(&path, b"{ not a list").await.unwrap();

        let result = JsonFileCatalog::new(&path).load().await;
        assert!(matches!(result, Err(CatalogLoadError::Parse(_))));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_static_catalog() {
        let source = StaticCatalog::new(vec![Dish::new("rice", true, 200, 2.0)]);
        assert_eq!(source.load().await.unwrap().len(), 1);
        assert_eq!(source.describe(), "static (1 dishes)");
    }
}
