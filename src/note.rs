use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A note on disk: one identifier, one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: u32,
    pub path: PathBuf,
}

impl Note {
    /// Point at the file for `id` inside `notes_dir`. Nothing is touched on disk.
    pub fn new(notes_dir: &Path, id: u32) -> Self {
        Note {
            id,
            path: resolve_path(notes_dir, id),
        }
    }

    /// Read the whole note, or `None` if there is nothing readable yet.
    pub fn load(&self) -> Option<String> {
        load(&self.path)
    }

    /// Overwrite the note file with `text`.
    pub fn save(&self, text: &str) -> Result<()> {
        save(&self.path, text)
    }
}

pub fn resolve_path(notes_dir: &Path, id: u32) -> PathBuf {
    notes_dir.join(format!("note_{id}.txt"))
}

pub fn load(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            log::debug!("Treating unreadable {} as empty: {}", path.display(), e);
            None
        }
    }
}

pub fn save(path: &Path, text: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| Error::io(path, e))?;

    file.write_all(text.as_bytes())
        .map_err(|e| Error::io(path, e))?;

    Ok(())
}
