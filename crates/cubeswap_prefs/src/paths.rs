//! Locations of files read and written by cubeswap.

use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

const PREFS_FILE_NAME: &str = "cubeswap-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

lazy_static! {
    static ref PREFS_FILE: Option<PathBuf> = default_prefs_file();
}

/// Returns the default location of the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    PREFS_FILE.as_deref().ok_or_eyre("no preferences path")
}

/// Uses the system config directory if there is one, or else the directory
/// containing the executable.
fn default_prefs_file() -> Option<PathBuf> {
    let file_name = format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}");
    match ProjectDirs::from("", "", "cubeswap") {
        Some(dirs) => Some(dirs.config_dir().join(file_name)),
        None => {
            log::warn!("error getting config directory; using executable directory");
            let exe_path = env::current_exe().ok()?.canonicalize().ok()?;
            Some(exe_path.parent()?.join(file_name))
        }
    }
}

/// Renames a file to create a backup. Emits a log message indicating success or
/// failure.
pub fn move_to_backup_file(original: &Path) {
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    let backup_path = backup_path(original, now);

    match std::fs::rename(original, &backup_path) {
        Ok(()) => log::info!(
            "backup of {} stored at {}",
            original.display(),
            backup_path.display(),
        ),
        Err(e) => {
            if original.is_file() {
                log::error!("error backing up {}: {e}", original.display());
            }
        }
    }
}

pub(crate) fn backup_path(original: &Path, now: time::OffsetDateTime) -> PathBuf {
    let stem = original
        .file_stem()
        .map_or_else(|| "unknown".to_string(), |s| s.to_string_lossy().into_owned());
    let extension = original
        .extension()
        .map_or_else(|| "txt".to_string(), |s| s.to_string_lossy().into_owned());

    original.with_file_name(format!(
        "{stem}_{:04}-{:02}-{:02}_{:02}-{:02}-{:02}_bak.{extension}",
        now.year(),
        now.month() as u8,
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_path() {
        let epoch = time::OffsetDateTime::UNIX_EPOCH;
        assert_eq!(
            backup_path(Path::new("/tmp/cubeswap-prefs.yaml"), epoch),
            Path::new("/tmp/cubeswap-prefs_1970-01-01_00-00-00_bak.yaml"),
        );
        assert_eq!(
            backup_path(Path::new("prefs"), epoch),
            Path::new("prefs_1970-01-01_00-00-00_bak.txt"),
        );
    }

    #[test]
    fn test_move_to_backup_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        std::fs::write(&path, "garbage").unwrap();
        move_to_backup_file(&path);
        assert!(!path.exists());
        let backups: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(backups.len(), 1);

        // Missing files are not an error.
        move_to_backup_file(&path);
    }
}
