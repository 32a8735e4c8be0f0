//! Pinned transformations and usage history
//!
//! Persisted as JSON (`{"pinned": [..], "history": [..]}`) holding
//! transformation ordinals. Every mutation is saved immediately.

use anyhow::{Context, Result};
use casekit_core::TransformationType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.json";

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    pinned: Vec<u8>,
    #[serde(default)]
    history: Vec<u8>,
}

/// Owner of the pinned list and the most-recent-first history
#[derive(Debug)]
pub struct StateStore {
    path: PathBuf,
    pinned: Vec<TransformationType>,
    history: Vec<TransformationType>,
}

impl StateStore {
    /// `<data dir>/casekit/state.json`, or the working directory when the
    /// platform has no data directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::config::APP_DIR)
            .join(STATE_FILE)
    }

    /// Load the state at `path`.
    ///
    /// A missing file is an empty state. A file that does not parse is
    /// reported and replaced by an empty state on the next save.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<StateFile>(&content) {
                Ok(file) => file,
                Err(e) => {
                    log::warn!(
                        "Ignoring unreadable state file {}: {}",
                        path.display(),
                        e
                    );
                    StateFile::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => StateFile::default(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read state file: {}", path.display()))
            }
        };

        let store = Self {
            pinned: decode(&file.pinned),
            history: decode(&file.history),
            path,
        };
        log::debug!(
            "Loaded state: {} pinned, {} in history",
            store.pinned.len(),
            store.history.len()
        );
        Ok(store)
    }

    /// Location of the state file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pinned types in pin order
    pub fn pinned(&self) -> &[TransformationType] {
        &self.pinned
    }

    /// Used types, most recent first
    pub fn history(&self) -> &[TransformationType] {
        &self.history
    }

    /// Whether `ty` is pinned
    pub fn is_pinned(&self, ty: TransformationType) -> bool {
        self.pinned.contains(&ty)
    }

    /// Append `ty` to the pinned list. Returns false when already pinned.
    pub fn pin(&mut self, ty: TransformationType) -> Result<bool> {
        if self.is_pinned(ty) {
            return Ok(false);
        }
        self.pinned.push(ty);
        self.save()?;
        Ok(true)
    }

    /// Remove `ty` from the pinned list. Returns false when it was not pinned.
    pub fn unpin(&mut self, ty: TransformationType) -> Result<bool> {
        let before = self.pinned.len();
        self.pinned.retain(|pinned| *pinned != ty);
        if self.pinned.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Move `ty` to the front of the history
    pub fn record_use(&mut self, ty: TransformationType) -> Result<()> {
        self.history.retain(|used| *used != ty);
        self.history.insert(0, ty);
        self.save()
    }

    /// Forget all usage history; pins are kept
    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear();
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create state directory: {}", parent.display())
                })?;
            }
        }

        let file = StateFile {
            pinned: self.pinned.iter().map(|ty| ty.ordinal()).collect(),
            history: self.history.iter().map(|ty| ty.ordinal()).collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write state file: {}", self.path.display()))?;

        log::debug!("Saved state to {}", self.path.display());
        Ok(())
    }
}

/// Known ordinals in order, first occurrence only
fn decode(ordinals: &[u8]) -> Vec<TransformationType> {
    let mut types = Vec::with_capacity(ordinals.len());
    for &ordinal in ordinals {
        match TransformationType::try_from(ordinal) {
            Ok(ty) if !types.contains(&ty) => types.push(ty),
            Ok(_) => {}
            Err(e) => log::warn!("Skipping state entry: {e}"),
        }
    }
    types
}
