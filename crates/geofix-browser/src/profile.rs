use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// A throwaway Chrome user-data directory, removed on drop.
///
/// Every capture run gets a fresh profile so no prior geolocation
/// permission state or session data leaks into the run.
pub struct TempProfile {
    path: PathBuf,
}

impl TempProfile {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("geofix-profile-")
            .tempdir()
            .map_err(Error::Io)?;

        Ok(Self { path: dir.keep() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempProfile {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}
