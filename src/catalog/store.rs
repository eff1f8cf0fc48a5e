//! Catalog providers — where the cached snapshot comes from.
//!
//! The snapshot lives in a key-addressed client-side cache written by an
//! external sync tool (`$XDG_CACHE_HOME/group-pick/groups.json` by default).
//! The view only ever reads it, so the provider surface is a single `get()`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Read-only access to the raw catalog payload.
///
/// Abstracting the storage backend keeps the selection panel testable with
/// an in-memory fake.
pub trait CatalogProvider {
    /// The raw payload text, or `None` when the key is absent.
    fn get(&self) -> Option<String>;
}

/// File-backed provider over the durable cache.
pub struct FileCatalogStore {
    path: PathBuf,
}

impl FileCatalogStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default cache location, honouring `$XDG_CACHE_HOME`.
    pub fn default_path() -> PathBuf {
        let cache_dir = std::env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
                PathBuf::from(home).join(".cache")
            });
        cache_dir.join("group-pick").join("groups.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the sync tool last wrote the snapshot (file mtime).
    /// `None` when the file is missing — the status bar then shows
    /// "never synced".
    pub fn synced_at(&self) -> Option<DateTime<Local>> {
        let modified = std::fs::metadata(&self.path).ok()?.modified().ok()?;
        Some(modified.into())
    }
}

impl CatalogProvider for FileCatalogStore {
    fn get(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::debug!("catalog cache unreadable at {:?}: {err}", self.path);
                None
            }
        }
    }
}

/// Human-readable age of the snapshot for the status bar.
pub fn sync_age_label(synced_at: Option<DateTime<Local>>) -> String {
    let Some(at) = synced_at else {
        return "never synced".into();
    };
    let age = Local::now().signed_duration_since(at);
    if age.num_seconds() < 60 {
        "synced just now".into()
    } else if age.num_minutes() < 60 {
        format!("synced {}m ago", age.num_minutes())
    } else if age.num_hours() < 48 {
        format!("synced {}h ago", age.num_hours())
    } else {
        format!("synced {}d ago", age.num_days())
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn missing_file_reads_as_absent_key() {
        let store = FileCatalogStore::new(PathBuf::from("/nonexistent/groups.json"));
        assert!(store.get().is_none());
        assert!(store.synced_at().is_none());
    }

    #[test]
    fn existing_file_round_trips() {
        let path = std::env::temp_dir().join("group-pick-store-test.json");
        std::fs::write(&path, r#"{"list":[[],[],[],[]]}"#).unwrap();

        let store = FileCatalogStore::new(path.clone());
        assert_eq!(store.get().as_deref(), Some(r#"{"list":[[],[],[],[]]}"#));
        assert!(store.synced_at().is_some());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn sync_age_labels() {
        assert_eq!(sync_age_label(None), "never synced");
        assert_eq!(sync_age_label(Some(Local::now())), "synced just now");
        let hour_ago = Local::now() - Duration::minutes(90);
        assert_eq!(sync_age_label(Some(hour_ago)), "synced 1h ago");
        let week_ago = Local::now() - Duration::days(7);
        assert_eq!(sync_age_label(Some(week_ago)), "synced 7d ago");
    }
}
