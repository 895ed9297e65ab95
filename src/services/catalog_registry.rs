//! Named pricing catalogs, loaded from a directory of JSON files.
//!
//! Each `<id>.json` file in the catalog directory is one catalog. Lookups
//! hand out `Arc` snapshots, so a catalog replaced mid-request never changes
//! under a running calculation.

use anyhow::{Context, Result};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::domain::PricingCatalog;

const MAX_ID_LEN: usize = 64;

#[derive(Clone)]
pub struct CatalogRegistry {
    dir: PathBuf,
    catalogs: Arc<RwLock<BTreeMap<String, Arc<PricingCatalog>>>>,
    /// Held across file write and insert so disk and memory agree
    save_lock: Arc<Mutex<()>>,
}

impl CatalogRegistry {
    /// Empty registry persisting into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            catalogs: Arc::new(RwLock::new(BTreeMap::new())),
            save_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load every `*.json` catalog in `dir`.
    ///
    /// A missing directory is not an error; `default_id` is always registered,
    /// as an all-zero catalog if no file provides it.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn load(dir: impl AsRef<Path>, default_id: &str) -> Result<Self> {
        let dir = dir.as_ref();
        let registry = Self::new(dir);

        if dir.is_dir() {
            let entries = fs::read_dir(dir)
                .with_context(|| format!("Failed to read catalog directory {}", dir.display()))?;

            for entry in entries {
                let path = entry.context("Failed to read catalog directory entry")?.path();
                if path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }

                let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if !is_valid_id(id) {
                    warn!(path = %path.display(), "Skipping catalog file with invalid id");
                    continue;
                }

                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog {}", path.display()))?;
                let catalog: PricingCatalog = serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid catalog JSON in {}", path.display()))?;

                debug!(catalog_id = id, "Loaded pricing catalog");
                registry.insert(id, catalog);
            }
        } else {
            warn!("Catalog directory not found; starting with an empty default catalog");
        }

        if registry.get(default_id).is_none() {
            warn!(catalog_id = default_id, "Default catalog missing; all prices will be zero");
            registry.insert(default_id, PricingCatalog::default());
        }

        info!(catalogs = registry.len(), "Pricing catalogs loaded");
        Ok(registry)
    }

    pub fn get(&self, id: &str) -> Option<Arc<PricingCatalog>> {
        self.catalogs.read().get(id).cloned()
    }

    pub fn ids(&self) -> Vec<String> {
        self.catalogs.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.catalogs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.read().is_empty()
    }

    /// Insert or replace in memory; returns `true` when the id is new.
    pub fn insert(&self, id: &str, catalog: PricingCatalog) -> bool {
        self.catalogs
            .write()
            .insert(id.to_string(), Arc::new(catalog))
            .is_none()
    }

    /// Write the catalog to disk, then make it visible to lookups.
    ///
    /// Saves are serialized, and the file is replaced by rename so a crash
    /// mid-write never leaves a truncated catalog behind. Blocking; call from
    /// `spawn_blocking` inside async handlers.
    pub fn save(&self, id: &str, catalog: PricingCatalog) -> Result<bool> {
        anyhow::ensure!(is_valid_id(id), "invalid catalog id: {id}");

        let body = serde_json::to_vec_pretty(&catalog).context("Failed to serialize catalog")?;

        let _guard = self.save_lock.lock();

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create catalog directory {}", self.dir.display()))?;

        let path = self.dir.join(format!("{id}.json"));
        let staging = self.dir.join(format!("{id}.json.tmp"));
        fs::write(&staging, body)
            .with_context(|| format!("Failed to write catalog {}", staging.display()))?;
        fs::rename(&staging, &path)
            .with_context(|| format!("Failed to replace catalog {}", path.display()))?;

        Ok(self.insert(id, catalog))
    }
}

/// 1-64 characters of ASCII letters, digits, `-` and `_`.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
