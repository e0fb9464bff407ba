use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};

/// Directory under the home directory used when nothing overrides it.
pub const NOTES_DIR: &str = ".stickynotes";

/// Environment variable that overrides the notes directory.
pub const NOTES_DIR_ENV: &str = "STICKYNOTES_DIR";

/// Note shown when no identifier is given on the command line.
pub const DEFAULT_NOTE_ID: u32 = 1;

/// Get the path to the notes directory
pub fn get_notes_dir(config: &Config) -> Result<PathBuf> {
    let from_env = std::env::var_os(NOTES_DIR_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    resolve_notes_dir(from_env, config, dirs::home_dir())
}

fn resolve_notes_dir(
    from_env: Option<PathBuf>,
    config: &Config,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = from_env.or_else(|| config.notes_dir.clone()) {
        return Ok(dir);
    }
    home.map(|home| home.join(NOTES_DIR)).ok_or(Error::NoHomeDir)
}

/// Create the notes directory if it is missing. Failures are logged and
/// otherwise ignored; the first save will report the real problem.
pub fn ensure_notes_dir(dir: &Path) {
    if dir.is_dir() {
        return;
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    match builder.create(dir) {
        Ok(()) => log::info!("Created notes directory {}", dir.display()),
        Err(e) => log::warn!("Could not create {}: {}", dir.display(), e),
    }
}

/// Turn the optional command-line argument into a note identifier.
///
/// A missing argument selects note 1. Otherwise the leading decimal digits
/// are used, so `"12abc"` is 12 while `"abc"`, `"-3"` and values that do
/// not fit in a `u32` all become 0.
pub fn parse_note_id(arg: Option<&str>) -> u32 {
    let Some(arg) = arg else {
        return DEFAULT_NOTE_ID;
    };

    let trimmed = arg.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_note_id_defaults_to_one() {
        assert_eq!(parse_note_id(None), 1);
    }

    #[test]
    fn parse_note_id_reads_leading_digits() {
        assert_eq!(parse_note_id(Some("7")), 7);
        assert_eq!(parse_note_id(Some("  42")), 42);
        assert_eq!(parse_note_id(Some("+5")), 5);
        assert_eq!(parse_note_id(Some("12abc")), 12);
        assert_eq!(parse_note_id(Some("007")), 7);
    }

    #[test]
    fn parse_note_id_falls_back_to_zero() {
        assert_eq!(parse_note_id(Some("")), 0);
        assert_eq!(parse_note_id(Some("abc")), 0);
        assert_eq!(parse_note_id(Some("-3")), 0);
        assert_eq!(parse_note_id(Some("99999999999")), 0);
    }

    #[test]
    fn notes_dir_prefers_env_then_config_then_home() {
        let home = Some(PathBuf::from("/home/someone"));
        let config = Config {
            notes_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };

        let dir = resolve_notes_dir(Some(PathBuf::from("/from/env")), &config, home.clone());
        assert_eq!(dir.unwrap(), PathBuf::from("/from/env"));

        let dir = resolve_notes_dir(None, &config, home.clone());
        assert_eq!(dir.unwrap(), PathBuf::from("/from/config"));

        let dir = resolve_notes_dir(None, &Config::default(), home);
        assert_eq!(dir.unwrap(), PathBuf::from("/home/someone/.stickynotes"));
    }

    #[test]
    fn notes_dir_without_home_is_an_error() {
        let result = resolve_notes_dir(None, &Config::default(), None);
        assert!(matches!(result, Err(Error::NoHomeDir)));
    }

    #[test]
    fn ensure_notes_dir_creates_once() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join(NOTES_DIR);

        ensure_notes_dir(&dir);
        assert!(dir.is_dir());

        // Second run finds it in place.
        ensure_notes_dir(&dir);
        assert!(dir.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn ensure_notes_dir_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join(NOTES_DIR);
        ensure_notes_dir(&dir);

        let mode = std::fs::metadata(&dir).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn ensure_notes_dir_ignores_failures() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        ensure_notes_dir(&blocker.join("notes"));
        assert!(!blocker.join("notes").exists());
    }
}
