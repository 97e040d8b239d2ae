//! Locations of files on disk.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

const PREFS_FILE_NAME: &str = "speedcube-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

static PREFS_FILE: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    let dirs = ProjectDirs::from("", "", "Speedcube")?;
    Some(
        dirs.config_dir()
            .join(PREFS_FILE_NAME)
            .with_extension(PREFS_FILE_EXTENSION),
    )
});

/// Returns the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    PREFS_FILE
        .as_deref()
        .ok_or_eyre("unable to determine preferences directory")
}
