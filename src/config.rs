use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Overrides `~/.stickynotes` when set. A leading `~` is expanded.
    #[serde(default)]
    pub notes_dir: Option<PathBuf>,

    #[serde(default = "default_width")]
    pub width: i32,

    #[serde(default = "default_height")]
    pub height: i32,
}

fn default_width() -> i32 {
    300
}

fn default_height() -> i32 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notes_dir: None,
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Config {
    /// Load `<config_dir>/stickynote/config.toml`, falling back to defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        };

        let mut config: Config = toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Error parsing config file {}: {}", path.display(), e);
            Self::default()
        });

        if let Some(dir) = config.notes_dir.take() {
            config.notes_dir = Some(expand_tilde(&dir, dirs::home_dir().as_deref()));
        }

        config
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stickynote").join("config.toml"))
    }
}

fn expand_tilde(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
