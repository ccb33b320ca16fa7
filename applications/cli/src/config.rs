/// Application configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use setlist_playback::PlaybackConfig;
use std::path::{Path, PathBuf};

/// Config file read from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "setlist.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub player: PlayerSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSettings {
    /// Program launched with the entry's path as its last argument
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the path
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_playlist_path")]
    pub playlist_path: PathBuf,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            playlist_path: default_playlist_path(),
        }
    }
}

fn default_program() -> String {
    if cfg!(windows) {
        "cmd".to_string()
    } else if cfg!(target_os = "macos") {
        "open".to_string()
    } else {
        "xdg-open".to_string()
    }
}

fn default_args() -> Vec<String> {
    if cfg!(windows) {
        // `start` treats the first quoted argument as a window title
        vec!["/C".to_string(), "start".to_string(), String::new()]
    } else {
        Vec::new()
    }
}

fn default_playlist_path() -> PathBuf {
    PathBuf::from("playlist.txt")
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `setlist.toml` is read if
    /// present. Environment variables prefixed with `SETLIST_` override file
    /// values, with `__` between nested keys (`SETLIST_PLAYER__PROGRAM`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(config::File::from(path.to_path_buf())),
            None => settings
                .add_source(config::File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false)),
        };

        settings = settings.add_source(
            config::Environment::with_prefix("SETLIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?.try_deserialize()?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.playback.history_size == 0 {
            return Err(CliError::Config(
                "playback.history_size must be at least 1".to_string(),
            ));
        }

        if self.player.program.trim().is_empty() {
            return Err(CliError::Config(
                "player.program must not be empty".to_string(),
            ));
        }

        if self.storage.playlist_path.as_os_str().is_empty() {
            return Err(CliError::Config(
                "storage.playlist_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.playback.history_size, 10);
        assert_eq!(config.storage.playlist_path, PathBuf::from("playlist.txt"));
        assert!(!config.player.program.is_empty());
        config.validate().expect("valid");
    }

    #[test]
    fn loads_toml_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
[playback]
history_size = 5
repeat = true
shuffle_seed = 42

[player]
program = "mpv"
args = ["--no-video"]

[storage]
playlist_path = "/tmp/mix.txt"
"#,
        )
        .expect("write");

        let config = AppConfig::load(Some(&path)).expect("load");
        assert_eq!(config.playback.history_size, 5);
        assert!(config.playback.repeat);
        assert_eq!(config.playback.shuffle_seed, Some(42));
        assert_eq!(config.player.program, "mpv");
        assert_eq!(config.player.args, vec!["--no-video".to_string()]);
        assert_eq!(config.storage.playlist_path, PathBuf::from("/tmp/mix.txt"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("partial.toml");
        fs::write(&path, "[player]\nprogram = \"vlc\"\n").expect("write");

        let config = AppConfig::load(Some(&path)).expect("load");
        assert_eq!(config.player.program, "vlc");
        assert_eq!(config.playback.history_size, 10);
        assert_eq!(config.storage.playlist_path, PathBuf::from("playlist.txt"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let result = AppConfig::load(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn rejects_zero_history() {
        let mut config = AppConfig::default();
        config.playback.history_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_program() {
        let mut config = AppConfig::default();
        config.player.program = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
