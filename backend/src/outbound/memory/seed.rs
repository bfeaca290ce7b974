//! Seed file loading for the in-memory store.
//!
//! A seed file is a JSON array of POI drafts, the same shape the create
//! endpoint accepts.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use mockable::Clock;
use thiserror::Error;
use tracing::info;

use super::InMemoryPoiStore;
use crate::domain::{PoiDraft, PoiValidationError};

/// Errors raised while loading a seed file.
#[derive(Debug, Error)]
pub enum SeedFileError {
    /// Seed file could not be read.
    #[error("failed to read seed file at {path}: {source}")]
    Read {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Seed file is not a JSON array of drafts.
    #[error("failed to parse seed file at {path}: {source}")]
    Parse {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// A draft in the file failed validation.
    #[error("invalid seed record in {path}: {source}")]
    Invalid {
        /// Path to the seed file.
        path: PathBuf,
        /// Validation failure for the first bad draft.
        #[source]
        source: PoiValidationError,
    },
}

fn read_error(path: &Path, source: std::io::Error) -> SeedFileError {
    SeedFileError::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// Build a store from the drafts in the JSON file at `path`.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use poi_finder::outbound::memory::load_seed_file;
///
/// let store = load_seed_file(Path::new("fixtures/pois.json"), &DefaultClock)
///     .expect("seed file loads");
/// assert!(!store.is_empty());
/// ```
pub fn load_seed_file(path: &Path, clock: &dyn Clock) -> Result<InMemoryPoiStore, SeedFileError> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        read_error(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "seed path must be a file",
            ),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|source| read_error(path, source))?;
    let payload = dir
        .read(Path::new(file_name))
        .map_err(|source| read_error(path, source))?;

    let drafts: Vec<PoiDraft> =
        serde_json::from_slice(&payload).map_err(|source| SeedFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let store = InMemoryPoiStore::with_drafts(drafts, clock.utc()).map_err(|source| {
        SeedFileError::Invalid {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!(path = %path.display(), records = store.len(), "poi store seeded");
    Ok(store)
}
