//! Hand-off of written reports to the platform's default viewer.
//!
//! The entry point only guarantees the file exists and is flushed; what
//! happens next is behind the [`Opener`] trait so it can be replaced in tests
//! or disabled with `--no-open`.

use crate::error::ReviewError;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Something that can show a file to the user.
pub trait Opener {
    fn open(&self, path: &Path) -> Result<(), ReviewError>;
}

/// Opens files with the host's standard launcher (`open`, `start`, `xdg-open`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

/// Launchers tried in order on Unix desktops other than macOS.
#[cfg(all(unix, not(target_os = "macos")))]
const UNIX_LAUNCHERS: [&str; 3] = ["xdg-open", "gio", "sensible-browser"];

impl SystemOpener {
    #[cfg(target_os = "macos")]
    fn command(&self, path: &Path) -> Result<Command, String> {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        Ok(cmd)
    }

    #[cfg(windows)]
    fn command(&self, path: &Path) -> Result<Command, String> {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        Ok(cmd)
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    fn command(&self, path: &Path) -> Result<Command, String> {
        let launcher = UNIX_LAUNCHERS
            .iter()
            .find_map(|name| which::which(name).ok())
            .ok_or_else(|| format!("none of {} found in PATH", UNIX_LAUNCHERS.join(", ")))?;
        debug!(launcher = %launcher.display(), "Using launcher");

        let mut cmd = Command::new(&launcher);
        if launcher.file_name().is_some_and(|n| n == "gio") {
            cmd.arg("open");
        }
        cmd.arg(path);
        Ok(cmd)
    }
}

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> Result<(), ReviewError> {
        let open_err = |message: String| ReviewError::Open {
            path: path.to_path_buf(),
            message,
        };

        let mut cmd = self.command(path).map_err(open_err)?;
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // The viewer keeps running after we exit; only the spawn is checked.
        cmd.spawn().map_err(|e| open_err(e.to_string()))?;
        info!(path = %path.display(), "Opened report in browser");
        Ok(())
    }
}
