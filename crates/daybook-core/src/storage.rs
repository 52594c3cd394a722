//! Persistence contract for the snapshot document.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use daybook_domain::Snapshot;

use crate::CoreError;

/// Abstraction over backends able to persist the complete snapshot.
///
/// A `save` must be all-or-nothing: a failed write may not leave a
/// readable-but-corrupt document behind.
pub trait SnapshotStorage: Send + Sync {
    fn save(&self, snapshot: &Snapshot) -> Result<(), CoreError>;
    fn load(&self) -> Result<Snapshot, CoreError>;
}

impl<T: SnapshotStorage + ?Sized> SnapshotStorage for Arc<T> {
    fn save(&self, snapshot: &Snapshot) -> Result<(), CoreError> {
        (**self).save(snapshot)
    }

    fn load(&self) -> Result<Snapshot, CoreError> {
        (**self).load()
    }
}

/// In-memory storage for tests and previews. Loading before the first save
/// fails like a missing file would.
#[derive(Debug, Default)]
pub struct MemorySnapshotStorage {
    inner: Mutex<Option<Snapshot>>,
}

impl MemorySnapshotStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStorage for MemorySnapshotStorage {
    fn save(&self, snapshot: &Snapshot) -> Result<(), CoreError> {
        let mut slot = self
            .inner
            .lock()
            .map_err(|_| CoreError::Storage("snapshot lock poisoned".into()))?;
        *slot = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Snapshot, CoreError> {
        let slot = self
            .inner
            .lock()
            .map_err(|_| CoreError::Storage("snapshot lock poisoned".into()))?;
        slot.clone()
            .ok_or_else(|| CoreError::Storage("no snapshot stored".into()))
    }
}

/// Detects dangling references and inconsistent flags within a snapshot.
pub fn snapshot_warnings(snapshot: &Snapshot) -> Vec<String> {
    let group_ids: HashSet<_> = snapshot.groups.iter().map(|group| group.id).collect();
    let mut warnings = Vec::new();

    for reminder in &snapshot.reminders {
        if let Some(group_id) = reminder.group_id {
            if !group_ids.contains(&group_id) {
                warnings.push(format!(
                    "reminder {} references unknown group {}",
                    reminder.id, group_id
                ));
            }
        }
        if reminder.is_completed != reminder.completed_date.is_some() {
            warnings.push(format!(
                "reminder {} completion flag disagrees with completion date",
                reminder.id
            ));
        }
    }

    for item in &snapshot.shopping_items {
        if item.is_archived != item.archived_date.is_some() {
            warnings.push(format!(
                "shopping item {} archive flag disagrees with archive date",
                item.id
            ));
        }
    }

    for period in &snapshot.periods {
        if period.end_date <= period.start_date {
            warnings.push(format!(
                "period {} has end date on or before start date",
                period.id
            ));
        }
    }

    warnings
}
