use crate::error::{ForgeError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// StepState
// ---------------------------------------------------------------------------

/// Final state of one step attempt-sequence. A key that is absent from the
/// record has not been started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Failed,
}

impl StepState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepState::Completed => "completed",
            StepState::Failed => "failed",
        }
    }
}

// ---------------------------------------------------------------------------
// StatusRecord
// ---------------------------------------------------------------------------

/// Flat step-key → state mapping, the entire persisted format of
/// `status.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusRecord(BTreeMap<String, StepState>);

impl StatusRecord {
    pub fn state(&self, key: &str) -> Option<StepState> {
        self.0.get(key).copied()
    }

    pub fn set(&mut self, key: impl Into<String>, state: StepState) {
        self.0.insert(key.into(), state);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, StepState)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// StatusStore
// ---------------------------------------------------------------------------

/// Durable owner of the status record for one run. Every mutation is
/// persisted before the next step runs; a crash resumes from whatever was
/// last written.
#[derive(Debug)]
pub struct StatusStore {
    path: PathBuf,
    record: StatusRecord,
}

impl StatusStore {
    /// Load the persisted record, or start empty when no file exists.
    /// A file that exists but does not parse is a distinct, fatal
    /// diagnostic, never an empty record and never a panic.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::status_path(root);
        if !path.exists() {
            return Ok(Self {
                path,
                record: StatusRecord::default(),
            });
        }
        let data = std::fs::read_to_string(&path)?;
        let record: StatusRecord =
            serde_json::from_str(&data).map_err(|e| ForgeError::MalformedStatus {
                path: path.clone(),
                detail: e.to_string(),
            })?;
        Ok(Self { path, record })
    }

    pub fn record(&self) -> &StatusRecord {
        &self.record
    }

    pub fn is_completed(&self, key: &str) -> bool {
        self.record.state(key) == Some(StepState::Completed)
    }

    pub fn mark_completed(&mut self, key: &str) -> Result<()> {
        self.record.set(key, StepState::Completed);
        self.save()
    }

    pub fn mark_failed(&mut self, key: &str) -> Result<()> {
        self.record.set(key, StepState::Failed);
        self.save()
    }

    fn save(&self) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.record)?;
        crate::io::atomic_write(&self.path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
