//! Compiled-contract artifact store.
//!
//! Deployment and linking happen elsewhere; this crate only needs read
//! access to the compiled `{ abi, bytecode }` records so callers can encode
//! calls against the deployed contracts. Artifacts are JSON files named
//! `<ContractName>.json` in a single directory and are immutable for a
//! process lifetime.
//!
//! The store is an explicit value callers construct once and share by
//! reference - not a module-level singleton. Loads are lazy and cached; a
//! racing double-load writes identical content twice, which is harmless.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// One compiled contract or library, as emitted by the build pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    /// Interface description (kept opaque; callers feed it to their
    /// ABI-encoding layer)
    pub abi: serde_json::Value,

    /// Deployable bytecode as a `0x`-prefixed hex string
    pub bytecode: String,
}

/// Read-mostly store of compiled-contract artifacts, keyed by name.
///
/// ## Example
///
/// ```no_run
/// use dex_signing::contracts::ArtifactStore;
///
/// let store = ArtifactStore::new("artifacts");
/// let exchange = store.get("Exchange").unwrap();
/// assert!(exchange.bytecode.starts_with("0x"));
/// ```
#[derive(Debug)]
pub struct ArtifactStore {
    dir: PathBuf,
    cache: RwLock<HashMap<String, Arc<ContractArtifact>>>,
}

impl ArtifactStore {
    /// Create a store over `dir`. No files are read until first access.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the artifact for `name`, loading and caching it on first use.
    ///
    /// # Errors
    ///
    /// [`Error::ArtifactIo`] if the file cannot be read,
    /// [`Error::ArtifactParse`] if it is not a valid artifact record.
    pub fn get(&self, name: &str) -> Result<Arc<ContractArtifact>> {
        if let Some(artifact) = self.cache.read().get(name) {
            return Ok(Arc::clone(artifact));
        }

        let artifact = Arc::new(self.load(name)?);
        let mut cache = self.cache.write();
        // Another caller may have loaded the same immutable file while we
        // were parsing; either copy is identical.
        let entry = cache
            .entry(name.to_string())
            .or_insert_with(|| Arc::clone(&artifact));
        Ok(Arc::clone(entry))
    }

    fn load(&self, name: &str) -> Result<ContractArtifact> {
        let path = self.dir.join(format!("{name}.json"));
        debug!(name, path = %path.display(), "loading contract artifact");
        let raw = std::fs::read(&path).map_err(|source| Error::ArtifactIo {
            name: name.to_string(),
            source,
        })?;
        serde_json::from_slice(&raw).map_err(|source| Error::ArtifactParse {
            name: name.to_string(),
            source,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_artifact(dir: &std::path::Path, name: &str, contents: &str) {
        let mut file = std::fs::File::create(dir.join(format!("{name}.json"))).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_get_loads_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Exchange", r#"{"abi": [], "bytecode": "0x6080"}"#);

        let store = ArtifactStore::new(dir.path());
        let first = store.get("Exchange").unwrap();
        assert_eq!(first.bytecode, "0x6080");

        // Second fetch serves the cached Arc, surviving file deletion.
        std::fs::remove_file(dir.path().join("Exchange.json")).unwrap();
        let second = store.get("Exchange").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_get_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        assert!(matches!(
            store.get("Nope"),
            Err(Error::ArtifactIo { .. }),
        ));
    }

    #[test]
    fn test_get_malformed_artifact() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Broken", "not json");
        let store = ArtifactStore::new(dir.path());
        assert!(matches!(
            store.get("Broken"),
            Err(Error::ArtifactParse { .. }),
        ));
    }
}
