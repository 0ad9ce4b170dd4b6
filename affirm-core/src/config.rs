use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Where the affirmation endpoint lives when the user doesn't override it.
const DEFAULT_API_BASE_URL: &str = "http://imarti.cloud:5999";

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where the preference store, alarm file and logs live.
    pub data_dir: PathBuf,
    /// Base URL of the affirmations API. The only call made is `GET {base}/affirmations`.
    pub api_base_url: String,
    /// Display format used to stamp journal entries (e.g. `14/03/24, 09:12 AM`).
    pub journal_time_format: String,
    /// Display format used to stamp daily answers (date only).
    pub answer_date_format: String,
    /// Preferred editor name/binary. Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    api_base_url: Option<String>,
    journal_time_format: Option<String>,
    answer_date_format: Option<String>,
    editor: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults for everything the user didn't set.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_default();

        Ok(Self {
            data_dir: file_config.data_dir.unwrap_or_else(Self::default_data_dir),
            api_base_url: file_config
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            journal_time_format: file_config
                .journal_time_format
                .unwrap_or_else(|| "%d/%m/%y, %I:%M %p".to_string()),
            answer_date_format: file_config
                .answer_date_format
                .unwrap_or_else(|| "%d/%m/%y".to_string()),
            editor: file_config.editor,
        })
    }

    /// Default data root: `{data_dir}/affirm`
    /// - macOS:   `~/Library/Application Support/affirm`
    /// - Linux:   `$XDG_DATA_HOME/affirm` or `~/.local/share/affirm`
    /// - Windows: `%APPDATA%\affirm`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("affirm");
            p
        } else {
            PathBuf::from("./affirm")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("affirm")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("affirm").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
