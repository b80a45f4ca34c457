use super::KeyValueStore;
use crate::error::{DashError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DashError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DashError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.key_path(key);
        // Write beside the target and swap in, so readers never see a torn value
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(DashError::Io)?;
        fs::rename(&tmp, &path).map_err(DashError::Io)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DashError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("lendsqr_users").unwrap(), None);
    }

    #[test]
    fn set_get_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        store.set("lendsqr_auth_token", "tok").unwrap();
        assert_eq!(store.get("lendsqr_auth_token").unwrap().as_deref(), Some("tok"));
        assert!(dir.path().join("nested/lendsqr_auth_token.json").exists());
        assert!(!dir.path().join("nested/lendsqr_auth_token.json.tmp").exists());

        store.set("lendsqr_auth_token", "tok2").unwrap();
        assert_eq!(store.get("lendsqr_auth_token").unwrap().as_deref(), Some("tok2"));

        store.remove("lendsqr_auth_token").unwrap();
        assert_eq!(store.get("lendsqr_auth_token").unwrap(), None);
        store.remove("lendsqr_auth_token").unwrap();
    }

    #[test]
    fn unwritable_root_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "not a dir").unwrap();

        let mut store = FileStore::new(&blocker);
        assert!(matches!(store.set("k", "v"), Err(DashError::Io(_))));
    }
}
