use crate::{Error, Result};
use std::path::{Path, PathBuf};

pub const CAPTURE_PAGE_FILENAME: &str = "geofix-capture.html";

/// CSS selector for the element the in-page script renders the fix into.
pub const LOCATION_SELECTOR: &str = "#location";

/// The capture document. The script asks for a fresh high-accuracy fix
/// (no cached position, 10 s limit) and renders it as "lat,lon,accuracy"
/// into #location. Geolocation failures go to the console only, so a
/// denied or timed-out request is indistinguishable from a callback that
/// has not fired yet: both leave #location empty.
const CAPTURE_PAGE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>GPS Capture</title>
</head>
<body>
    <div id="location"></div>

    <script>
        navigator.geolocation.getCurrentPosition(
            position => {
                document.getElementById('location').innerHTML =
                    `${position.coords.latitude},${position.coords.longitude},${position.coords.accuracy}`;
            },
            err => console.error(err),
            {
                enableHighAccuracy: true,
                timeout: 10000,
                maximumAge: 0
            }
        );
    </script>
</body>
</html>
"#;

/// The provisioned capture page on disk. Dropping the value removes the
/// file, so the page cannot outlive the run on any exit path.
pub struct CapturePage {
    path: PathBuf,
}

impl CapturePage {
    /// Write the capture document to `dir`, overwriting any existing file
    /// of the same name. `dir` must be absolute for `file_url` to be
    /// loadable.
    pub fn provision(dir: &Path) -> Result<Self> {
        let path = dir.join(CAPTURE_PAGE_FILENAME);
        std::fs::write(&path, CAPTURE_PAGE_HTML).map_err(Error::Io)?;

        tracing::debug!("Capture page written to {}", path.display());

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_url(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

impl Drop for CapturePage {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}
