//! Cache manager for persisting the last API response to disk
//!
//! Provides a `CacheManager` that keeps the raw bytes of the most recent
//! successful remote fetch in a single file, replaced atomically on write.

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

/// Name of the cache file inside the cache directory
pub const CACHE_FILE_NAME: &str = "MorningQuotation";

/// Manages reading and writing the cached payload
///
/// The payload lives at `<cache_dir>/MorningQuotation` (`~/.cache/morningquote/`
/// on Linux by default). Only one payload exists per cache directory; every
/// write replaces it. Clones share one write lock, so writes from the same
/// process never interleave.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where the cache file is stored
    cache_dir: PathBuf,
    /// Serializes writers within this process
    write_lock: Arc<Mutex<()>>,
}

impl CacheManager {
    /// Creates a new CacheManager using XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "morningquote")?;
        Some(Self::with_dir(project_dirs.cache_dir().to_path_buf()))
    }

    /// Creates a new CacheManager with a custom cache directory
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Directory holding the cache file
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Full path of the cache file
    pub fn cache_path(&self) -> PathBuf {
        self.cache_dir.join(CACHE_FILE_NAME)
    }

    /// Reads the cached bytes
    ///
    /// Fails if no payload has been cached yet or the file cannot be read.
    pub async fn read(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.cache_path()).await
    }

    /// Replaces the cached payload with `bytes`
    ///
    /// The bytes go to a temporary file in the cache directory which is then
    /// renamed over the cache file, so readers see either the old payload or
    /// the new one in full.
    pub async fn write(&self, bytes: &[u8]) -> io::Result<()> {
        let _guard = self.write_lock.lock().await;

        let dir = self.cache_dir.clone();
        let path = self.cache_path();
        let bytes = bytes.to_vec();

        tokio::task::spawn_blocking(move || write_atomic(&dir, &path, &bytes))
            .await
            .map_err(io::Error::other)?
    }

    /// When the cached payload was last written, if one exists
    pub async fn modified_at(&self) -> Option<DateTime<Utc>> {
        let metadata = tokio::fs::metadata(self.cache_path()).await.ok()?;
        let modified = metadata.modified().ok()?;
        Some(DateTime::<Utc>::from(modified))
    }

    /// Whether a cached payload exists and is younger than `expiration`
    ///
    /// A modification time in the future counts as stale.
    pub async fn is_fresh(&self, expiration: Duration) -> bool {
        let Some(modified_at) = self.modified_at().await else {
            return false;
        };
        let age = Utc::now() - modified_at;
        if age < chrono::Duration::zero() {
            return false;
        }
        match chrono::Duration::from_std(expiration) {
            Ok(expiration) => age < expiration,
            Err(_) => true,
        }
    }
}

fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
