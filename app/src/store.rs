//! Keyed local persistence
//!
//! The core never touches a concrete storage mechanism: everything goes
//! through [`KeyValueStore`], addressed by composite [`StoreKey`]s whose
//! string forms stay wire-compatible with the original browser storage.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use shared::models::Project;

use crate::error::{AppError, AppResult};

/// Composite key: a resource kind, scoped to a project where applicable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey<'a> {
    /// The ordered project collection
    Projects,
    /// The zone collection of one project
    Zones(&'a str),
}

impl fmt::Display for StoreKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKey::Projects => write!(f, "agriProjects"),
            StoreKey::Zones(project_id) => write!(f, "agri-zones-{project_id}"),
        }
    }
}

/// String-payload key-value persistence
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &StoreKey<'_>) -> AppResult<Option<String>>;
    fn set(&self, key: &StoreKey<'_>, value: &str) -> AppResult<()>;
    fn remove(&self, key: &StoreKey<'_>) -> AppResult<()>;
}

fn lock_entries(
    entries: &Mutex<HashMap<String, String>>,
) -> AppResult<MutexGuard<'_, HashMap<String, String>>> {
    entries
        .lock()
        .map_err(|_| AppError::StorePersist("store mutex poisoned".to_string()))
}

/// In-memory store for tests and demos
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &StoreKey<'_>) -> AppResult<Option<String>> {
        Ok(lock_entries(&self.entries)?.get(&key.to_string()).cloned())
    }

    fn set(&self, key: &StoreKey<'_>, value: &str) -> AppResult<()> {
        lock_entries(&self.entries)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &StoreKey<'_>) -> AppResult<()> {
        lock_entries(&self.entries)?.remove(&key.to_string());
        Ok(())
    }
}

/// Durable store backed by a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store, loading existing entries if the file is present
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| AppError::StorePersist(format!("cannot read {}: {e}", path.display())))?;
            serde_json::from_str(&raw)
                .map_err(|e| AppError::StorePersist(format!("corrupt store file {}: {e}", path.display())))?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, String>) -> AppResult<()> {
        let payload = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::StorePersist(format!("cannot serialize store: {e}")))?;
        fs::write(&self.path, payload)
            .map_err(|e| AppError::StorePersist(format!("cannot write {}: {e}", self.path.display())))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &StoreKey<'_>) -> AppResult<Option<String>> {
        Ok(lock_entries(&self.entries)?.get(&key.to_string()).cloned())
    }

    fn set(&self, key: &StoreKey<'_>, value: &str) -> AppResult<()> {
        let mut entries = lock_entries(&self.entries)?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &StoreKey<'_>) -> AppResult<()> {
        let mut entries = lock_entries(&self.entries)?;
        entries.remove(&key.to_string());
        self.flush(&entries)
    }
}

/// Project collection persistence over any [`KeyValueStore`].
///
/// Insertion order is preserved; removing a project also drops its zone
/// record so the store never accumulates orphans.
#[derive(Clone)]
pub struct ProjectRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ProjectRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> AppResult<Vec<Project>> {
        match self.store.get(&StoreKey::Projects)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::StorePersist(format!("corrupt project record: {e}"))),
            None => Ok(Vec::new()),
        }
    }

    pub fn find(&self, project_id: &str) -> AppResult<Option<Project>> {
        Ok(self.list()?.into_iter().find(|p| p.id == project_id))
    }

    pub fn append(&self, project: &Project) -> AppResult<()> {
        let mut projects = self.list()?;
        projects.push(project.clone());
        self.save(&projects)
    }

    pub fn remove(&self, project_id: &str) -> AppResult<Project> {
        let mut projects = self.list()?;
        let position = projects
            .iter()
            .position(|p| p.id == project_id)
            .ok_or_else(|| AppError::ProjectNotFound(project_id.to_string()))?;
        let removed = projects.remove(position);
        self.save(&projects)?;
        self.store.remove(&StoreKey::Zones(project_id))?;
        Ok(removed)
    }

    fn save(&self, projects: &[Project]) -> AppResult<()> {
        let payload = serde_json::to_string(projects)
            .map_err(|e| AppError::StorePersist(format!("cannot serialize projects: {e}")))?;
        self.store.set(&StoreKey::Projects, &payload)
    }
}
