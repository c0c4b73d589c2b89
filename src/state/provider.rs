use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MenuError, Result};
use crate::models::{InventoryRecord, Item};

/// Source of the inventory snapshot for one request.
pub trait InventoryProvider {
    fn fetch(&self) -> Result<Vec<Item>>;
}

/// Reads inventory records from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl InventoryProvider for JsonFileProvider {
    fn fetch(&self) -> Result<Vec<Item>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            MenuError::upstream(format!("reading {}: {}", self.path.display(), e))
        })?;
        let records: Vec<InventoryRecord> = serde_json::from_str(&content).map_err(|e| {
            MenuError::upstream(format!("parsing {}: {}", self.path.display(), e))
        })?;

        let items = records
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>>>()?;

        debug!(path = %self.path.display(), items = items.len(), "fetched inventory");
        Ok(items)
    }
}

/// In-memory inventory, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    items: Vec<Item>,
}

impl StaticProvider {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl InventoryProvider for StaticProvider {
    fn fetch(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }
}
