//! Durable model snapshots.
//!
//! A snapshot is written to a temporary file next to its target and then
//! renamed over it, so a reader never observes a half-written model.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::analysis::ngram::NgramMode;
use crate::error::{LexisError, Result};

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Encoding used on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFormat {
    /// Compact bincode encoding.
    Binary,
    /// Human-readable JSON.
    Json,
}

impl SnapshotFormat {
    /// `.json` files are JSON; anything else is binary.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SnapshotFormat::Json,
            _ => SnapshotFormat::Binary,
        }
    }
}

/// N-grams recorded for one class, in training order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSnapshot {
    pub label: String,
    pub ngrams: Vec<String>,
}

/// Serializable form of a frequency model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub version: u32,
    pub ngram_size: usize,
    pub mode: NgramMode,
    pub corpus_counts: BTreeMap<String, u64>,
    /// Classes in insertion order.
    pub classes: Vec<ClassSnapshot>,
}

/// Write `snapshot` to `path`, replacing whatever was there.
pub fn save_snapshot(snapshot: &ModelSnapshot, path: &Path, format: SnapshotFormat) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        match format {
            SnapshotFormat::Binary => bincode::serialize_into(&mut writer, snapshot)?,
            SnapshotFormat::Json => serde_json::to_writer(&mut writer, snapshot)?,
        }
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;

    temp_file
        .persist(path)
        .map_err(|e| LexisError::Io(e.error))?;
    Ok(())
}

/// Read a snapshot from `path`.
pub fn load_snapshot(path: &Path, format: SnapshotFormat) -> Result<ModelSnapshot> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: ModelSnapshot = match format {
        SnapshotFormat::Binary => bincode::deserialize_from(reader)?,
        SnapshotFormat::Json => serde_json::from_reader(reader)
            .map_err(|e| LexisError::snapshot(format!("invalid JSON snapshot: {}", e)))?,
    };
    Ok(snapshot)
}
