//! Client-held display name, remembered across sessions in a plain-text
//! file. Nothing verifies it — two clients using the same name are the
//! same author as far as the timeline is concerned.

use std::io;
use std::path::{Path, PathBuf};
use std::{env, fs};

use tracing::error;

pub fn resolve_identity_path() -> PathBuf {
    if let Ok(path) = env::var("LUNARIA_IDENTITY_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/lunaria_name")
}

#[derive(Debug)]
pub struct Identity {
    name: String,
    path: PathBuf,
}

impl Identity {
    /// Initialize from durable storage: a missing file means no remembered
    /// name, an unreadable one is logged and treated the same.
    pub fn load() -> Self {
        Self::load_from(resolve_identity_path())
    }

    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = read_name(&path);
        Self { name, path }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overwrite the current name. Only non-empty values are persisted, so
    /// clearing the field never erases a previously remembered name.
    pub fn set_name(&mut self, value: impl Into<String>) -> io::Result<()> {
        self.name = value.into();
        if self.name.is_empty() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, &self.name)
    }

    /// Forget the name in memory and on disk.
    pub fn logout(&mut self) -> io::Result<()> {
        self.name.clear();
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

fn read_name(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(contents) => contents.trim().to_string(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
        Err(err) => {
            error!("failed to read identity file: {err}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn scratch_path() -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!(
            "lunaria_identity_{}_{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        path
    }

    #[test]
    fn missing_file_means_empty_name() {
        let identity = Identity::load_from(scratch_path());
        assert_eq!(identity.name(), "");
    }

    #[test]
    fn set_name_persists_across_loads() {
        let path = scratch_path();
        let mut identity = Identity::load_from(path.clone());
        identity.set_name("Alice").unwrap();

        let reloaded = Identity::load_from(path.clone());
        assert_eq!(reloaded.name(), "Alice");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn empty_name_is_not_persisted() {
        let path = scratch_path();
        let mut identity = Identity::load_from(path.clone());
        identity.set_name("Alice").unwrap();
        identity.set_name("").unwrap();
        assert_eq!(identity.name(), "");

        // The remembered name survives the empty overwrite.
        let reloaded = Identity::load_from(path.clone());
        assert_eq!(reloaded.name(), "Alice");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn logout_clears_memory_and_disk() {
        let path = scratch_path();
        let mut identity = Identity::load_from(path.clone());
        identity.set_name("Alice").unwrap();
        identity.logout().unwrap();
        assert_eq!(identity.name(), "");
        assert_eq!(Identity::load_from(path.clone()).name(), "");

        // Logging out twice is fine.
        identity.logout().unwrap();
    }
}
