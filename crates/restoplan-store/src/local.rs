//! Local filesystem artifact store.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use restoplan_models::RawBundle;

use crate::error::{StoreError, StoreResult};
use crate::traits::{bundle_file_names, component_from_file_name, ArtifactStore};

/// Artifact store over a flat directory of bundle files.
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    dir: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read_file(&self, name: &str) -> StoreResult<Vec<u8>> {
        let path = self.dir.join(name);
        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(StoreError::Io {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn discover_components(&self) -> StoreResult<Vec<String>> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            // a missing directory is an empty store, not an error
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.dir.display().to_string(),
                    source: e,
                })
            }
        };

        let mut components = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| StoreError::Io {
            path: self.dir.display().to_string(),
            source: e,
        })? {
            let name = entry.file_name();
            if let Some(component) = name.to_str().and_then(component_from_file_name) {
                components.push(component.to_string());
            }
        }
        components.sort();
        debug!(dir = %self.dir.display(), count = components.len(), "discovered components");
        Ok(components)
    }

    async fn fetch_bundle(&self, component: &str) -> StoreResult<RawBundle> {
        let [pre, time, succ] = bundle_file_names(component);
        Ok(RawBundle {
            preprocessor: self.read_file(&pre).await?,
            time_model: self.read_file(&time).await?,
            success_model: self.read_file(&succ).await?,
        })
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}
