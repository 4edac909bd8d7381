/// Model snapshots — the format-stable serialization boundary.

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::chain::{ChainModel, Entry};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// One entry of a serialized model. Compiled distributions are never
/// persisted; loaded entries always start dirty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub total: u32,
    /// Successor word → count, in first-observation order.
    pub related: Vec<(String, u32)>,
}

/// A full serialized model. Encoding-agnostic: any serde format works;
/// RON file helpers are provided for convenience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Total observation pairs. Reconstructed from entry totals when
    /// absent.
    #[serde(default)]
    pub edge_count: Option<u64>,
    pub has_sentence_boundary: bool,
    pub entries: Vec<(String, SnapshotEntry)>,
}

impl Snapshot {
    /// Structural validation. Runs in full before a load mutates anything.
    fn validate(&self) -> Result<(), SnapshotError> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (word, entry) in &self.entries {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(SnapshotError::Malformed(format!(
                    "invalid word key {:?}",
                    word
                )));
            }
            if !seen.insert(word) {
                return Err(SnapshotError::Malformed(format!(
                    "duplicate word key {:?}",
                    word
                )));
            }
            let mut sum = 0u64;
            for (successor, count) in &entry.related {
                if successor.is_empty() || successor.chars().any(char::is_whitespace) {
                    return Err(SnapshotError::Malformed(format!(
                        "invalid successor {:?} under {:?}",
                        successor, word
                    )));
                }
                if *count == 0 {
                    return Err(SnapshotError::Malformed(format!(
                        "zero count for successor {:?} under {:?}",
                        successor, word
                    )));
                }
                sum += u64::from(*count);
            }
            if sum != u64::from(entry.total) {
                return Err(SnapshotError::Malformed(format!(
                    "total {} does not match summed counts {} under {:?}",
                    entry.total, sum, word
                )));
            }
        }
        Ok(())
    }
}

impl ChainModel {
    /// Exports the model as a snapshot.
    ///
    /// Compiles every entry first so the export path is deterministic;
    /// compilation is a pure cache fill and leaves the exported fields
    /// untouched.
    pub fn to_snapshot(&mut self) -> Snapshot {
        self.finalize();
        Snapshot {
            edge_count: Some(self.edge_count),
            has_sentence_boundary: self.has_sentence_boundary,
            entries: self
                .entries
                .iter()
                .map(|(word, entry)| {
                    (
                        word.clone(),
                        SnapshotEntry {
                            total: entry.total,
                            related: entry.related.clone(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Replaces this model's state with the snapshot's.
    ///
    /// Validates everything up front — on error the model is left exactly
    /// as it was. All loaded entries are dirty; stored distributions are
    /// never trusted from external data.
    pub fn load(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        snapshot.validate()?;

        self.reset();
        let mut edge_sum = 0u64;
        for (word, entry) in &snapshot.entries {
            edge_sum += u64::from(entry.total);
            self.entries.insert(
                word.clone(),
                Entry {
                    total: entry.total,
                    related: entry.related.clone(),
                    compiled: None,
                },
            );
        }
        self.edge_count = snapshot.edge_count.unwrap_or(edge_sum);
        self.has_sentence_boundary = snapshot.has_sentence_boundary;
        Ok(())
    }

    /// Builds a fresh model from a snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        let mut model = Self::new();
        model.load(snapshot)?;
        Ok(model)
    }
}

/// Save a snapshot to a RON file.
pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> Result<(), SnapshotError> {
    let serialized = ron::ser::to_string_pretty(snapshot, ron::ser::PrettyConfig::default())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    std::fs::write(path, serialized)?;
    Ok(())
}

/// Load a snapshot from a RON file.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let contents = std::fs::read_to_string(path)?;
    let snapshot: Snapshot = ron::from_str(&contents)?;
    Ok(snapshot)
}
