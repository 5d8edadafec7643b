use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Binary names worth trying on $PATH when no install path matches.
const PATH_CANDIDATES: &[&str] = &["google-chrome", "google-chrome-stable", "chromium", "chromium-browser"];

/// Locates a Chrome or Chromium binary on the system.
pub struct ChromeFinder {
    custom_path: Option<PathBuf>,
}

impl ChromeFinder {
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self { custom_path }
    }

    /// Resolve the browser binary: an explicit path wins, then platform
    /// install locations, then a $PATH lookup.
    pub fn find(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.custom_path {
            return self.validate(path);
        }

        for path in Self::install_paths() {
            if let Ok(valid) = self.validate(&path) {
                return Ok(valid);
            }
        }

        for name in PATH_CANDIDATES {
            if let Ok(path) = which::which(name) {
                return Ok(path);
            }
        }

        Err(Error::Launch(format!(
            "Chrome not found. Checked: {}, and $PATH for {}. Use --chrome-path to specify location.",
            Self::install_paths()
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            PATH_CANDIDATES.join(", ")
        )))
    }

    fn install_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        #[cfg(target_os = "macos")]
        {
            paths.push(PathBuf::from(
                "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            ));
            paths.push(PathBuf::from(
                "/Applications/Chromium.app/Contents/MacOS/Chromium",
            ));
            if let Some(home) = dirs::home_dir() {
                paths.push(home.join("Applications/Google Chrome.app/Contents/MacOS/Google Chrome"));
            }
        }

        #[cfg(target_os = "linux")]
        {
            paths.push(PathBuf::from("/usr/bin/google-chrome"));
            paths.push(PathBuf::from("/usr/bin/google-chrome-stable"));
            paths.push(PathBuf::from("/usr/bin/chromium"));
            paths.push(PathBuf::from("/usr/bin/chromium-browser"));
            paths.push(PathBuf::from("/snap/bin/chromium"));
        }

        #[cfg(target_os = "windows")]
        {
            paths.push(PathBuf::from(
                r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            ));
            paths.push(PathBuf::from(
                r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            ));
        }

        paths
    }

    fn validate(&self, path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            return Err(Error::Launch(format!(
                "Chrome not found at: {}",
                path.display()
            )));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path).map_err(Error::Io)?;
            if metadata.permissions().mode() & 0o111 == 0 {
                return Err(Error::Launch(format!(
                    "Chrome binary not executable: {}",
                    path.display()
                )));
            }
        }

        Ok(path.to_path_buf())
    }
}
