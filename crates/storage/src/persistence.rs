//! Data persistence layer
//!
//! This module provides versioned, checksummed JSON files with atomic writes
//! for small application documents such as the daily hydration log.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/// Persistence error types
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// State not initialized
    #[error("State not initialized")]
    NotInitialized,

    /// Corruption detected
    #[error("Corruption detected: {0}")]
    Corruption(String),

    /// Version mismatch
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Expected version
        expected: u32,
        /// Found version
        found: u32,
    },
}

impl PersistenceError {
    /// Whether the file on disk is damaged and should be replaced
    ///
    /// A version mismatch is not damage: the file belongs to another schema.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, PersistenceError::Serialization(_) | PersistenceError::Corruption(_))
    }
}

/// Result type for persistence operations
pub type Result<T> = std::result::Result<T, PersistenceError>;

/// On-disk envelope around the persisted document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    checksum: String,
    data: T,
}

fn checksum_of<T: Serialize>(data: &T) -> Result<String> {
    let json = serde_json::to_string(data)?;
    Ok(format!("{:x}", md5::compute(json)))
}

impl<T: Serialize> Envelope<T> {
    fn seal(version: u32, data: T) -> Result<Self> {
        let checksum = checksum_of(&data)?;
        Ok(Self { version, checksum, data })
    }

    fn verify(&self) -> Result<()> {
        let computed = checksum_of(&self.data)?;
        if computed != self.checksum {
            return Err(PersistenceError::Corruption(format!(
                "Checksum mismatch: expected {}, got {}",
                self.checksum, computed
            )));
        }
        Ok(())
    }
}

/// Persistence configuration
#[derive(Debug, Clone)]
pub struct PersistenceConfig {
    /// Path to the persistence file
    pub path: PathBuf,
    /// Current schema version
    pub version: u32,
    /// Write through a temp file and rename
    pub atomic_writes: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("state.json"),
            version: 1,
            atomic_writes: true,
        }
    }
}

impl PersistenceConfig {
    /// Create a new configuration
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set schema version
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Enable or disable atomic writes
    pub fn atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }
}

/// A single JSON document kept in memory and mirrored to disk
///
/// Cloning is cheap; clones share the same in-memory document.
#[derive(Clone)]
pub struct PersistedState<T> {
    config: PersistenceConfig,
    state: Arc<RwLock<Option<T>>>,
}

impl<T> PersistedState<T>
where
    T: Serialize + DeserializeOwned + Clone + Default,
{
    /// Create a new persisted state manager
    pub fn new(config: PersistenceConfig) -> Self {
        Self { config, state: Arc::new(RwLock::new(None)) }
    }

    /// Path of the backing file
    pub fn path(&self) -> &std::path::Path {
        &self.config.path
    }

    /// Initialize by loading from disk
    ///
    /// A missing file yields `T::default()`. Any other failure is returned.
    pub async fn init(&self) -> Result<()> {
        let loaded = match self.load_from_disk().await {
            Ok(data) => data,
            Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.config.path.display(), "no persisted state yet");
                T::default()
            }
            Err(e) => return Err(e),
        };

        *self.state.write().await = Some(loaded);
        Ok(())
    }

    /// Initialize, replacing a damaged file with the default document
    ///
    /// The damaged file is moved to [`Self::corrupt_path`] first. Version
    /// mismatches and IO failures other than a missing file are returned.
    pub async fn init_or_reset(&self) -> Result<()> {
        match self.init().await {
            Err(e) if e.is_unreadable() => {
                let kept = self.corrupt_path();
                tracing::warn!(
                    path = %self.config.path.display(),
                    kept = %kept.display(),
                    error = %e,
                    "discarding unreadable persisted state"
                );
                fs::rename(&self.config.path, &kept).await?;
                self.set(T::default()).await
            }
            other => other,
        }
    }

    /// Sibling path a damaged file is moved to, e.g. `log.json.corrupt`
    pub fn corrupt_path(&self) -> PathBuf {
        let mut path = self.config.path.clone();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.set_file_name(format!("{filename}.corrupt"));
        path
    }

    /// Get the current state
    pub async fn get(&self) -> Result<T> {
        let state = self.state.read().await;
        state.clone().ok_or(PersistenceError::NotInitialized)
    }

    /// Update the state and persist to disk
    pub async fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut T),
    {
        let mut state = self.state.write().await;
        let current = state.as_mut().ok_or(PersistenceError::NotInitialized)?;
        f(current);
        self.write_to_disk(current).await
    }

    /// Set the entire state and persist
    pub async fn set(&self, new_state: T) -> Result<()> {
        let mut state = self.state.write().await;
        self.write_to_disk(&new_state).await?;
        *state = Some(new_state);
        Ok(())
    }

    /// Reset to the default document and delete the backing file
    pub async fn clear(&self) -> Result<()> {
        let mut state = self.state.write().await;
        *state = Some(T::default());

        match fs::remove_file(&self.config.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn load_from_disk(&self) -> Result<T> {
        let contents = fs::read_to_string(&self.config.path).await?;
        let envelope: Envelope<T> = serde_json::from_str(&contents)?;

        envelope.verify()?;

        if envelope.version != self.config.version {
            return Err(PersistenceError::VersionMismatch {
                expected: self.config.version,
                found: envelope.version,
            });
        }

        Ok(envelope.data)
    }

    async fn write_to_disk(&self, data: &T) -> Result<()> {
        let envelope = Envelope::seal(self.config.version, data)?;
        let json = serde_json::to_string_pretty(&envelope)?;

        if let Some(parent) = self.config.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        if self.config.atomic_writes {
            self.write_atomic(&json).await
        } else {
            fs::write(&self.config.path, json).await?;
            Ok(())
        }
    }

    async fn write_atomic(&self, contents: &str) -> Result<()> {
        let temp_path = self.config.path.with_extension("tmp");

        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &self.config.path).await?;
        Ok(())
    }
}
