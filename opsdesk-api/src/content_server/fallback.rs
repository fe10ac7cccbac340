use anyhow::Result;
use shared_types::Workspace;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Local JSON-file store used when the content server is unreachable.
/// Only workspaces are covered; their child entities have no local copy.
pub struct FallbackStore {
    data_dir: PathBuf,
}

impl FallbackStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn workspaces_path(&self) -> PathBuf {
        self.data_dir.join("workspaces.json")
    }

    /// A missing or corrupt file reads as empty
    pub fn read_workspaces(&self) -> Vec<Workspace> {
        let path = self.workspaces_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(workspaces) => workspaces,
            Err(e) => {
                warn!("Ignoring corrupt fallback file {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Append-and-rewrite: the whole array is serialized back out
    pub fn append_workspace(&self, workspace: &Workspace) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        let mut workspaces = self.read_workspaces();
        workspaces.push(workspace.clone());

        let json = serde_json::to_string_pretty(&workspaces)?;
        fs::write(self.workspaces_path(), json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_workspace(name: &str) -> Workspace {
        let now = Utc::now();
        Workspace {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: None,
            color: "#6366f1".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FallbackStore::new(dir.path());
        assert!(store.read_workspaces().is_empty());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("workspaces.json"), "{not json").unwrap();

        let store = FallbackStore::new(dir.path());
        assert!(store.read_workspaces().is_empty());
    }

    #[test]
    fn test_append_rewrites_the_whole_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = FallbackStore::new(dir.path());

        store.append_workspace(&sample_workspace("first")).unwrap();
        store.append_workspace(&sample_workspace("second")).unwrap();

        let names: Vec<String> = store
            .read_workspaces()
            .into_iter()
            .map(|w| w.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
