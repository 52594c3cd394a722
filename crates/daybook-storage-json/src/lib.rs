//! daybook-storage-json
//!
//! Filesystem JSON persistence for the snapshot document. Writes land in a
//! temporary sibling file first and are renamed into place, so an
//! interrupted write never leaves a readable-but-corrupt snapshot.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use daybook_core::{CoreError, SnapshotStorage};
use daybook_domain::Snapshot;

const SNAPSHOT_FILE: &str = "daybook.json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for the full snapshot.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStorage {
    path: PathBuf,
}

impl JsonSnapshotStorage {
    /// Persists the snapshot at an explicit file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Persists the snapshot as `daybook.json` inside `dir`, creating the
    /// directory when missing.
    pub fn in_dir(dir: &Path) -> Result<Self, CoreError> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(SNAPSHOT_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for JsonSnapshotStorage {
    fn save(&self, snapshot: &Snapshot) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<Snapshot, CoreError> {
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
