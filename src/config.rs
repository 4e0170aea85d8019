use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use directories::ProjectDirs;

pub const DEFAULT_SEARCH_DELAY_MS: i64 = 500;
pub const WINDOW_TITLE: &str = "Orders";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub window_title: String,
    pub search_delay_ms: i64,
    pub csv_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            csv_path: None,
        }
    }
}

impl AppConfig {
    /// Parses `[--delay <ms>] [path.csv]`, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg.to_str() == Some("--delay") {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("--delay requires a value in milliseconds"))?;
                let value = value.to_string_lossy();
                config.search_delay_ms = value
                    .parse()
                    .with_context(|| format!("invalid --delay value: {value}"))?;
            } else if config.csv_path.is_none() {
                config.csv_path = Some(PathBuf::from(arg));
            } else {
                bail!("unexpected argument: {}", arg.to_string_lossy())
            }
        }
        Ok(config)
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "datatable")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create dir: {}", dir.display()))?;
    Ok(dir.to_path_buf())
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    ensure_dir(&base_data_dir.join("webview2"))
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}

pub fn default_log_path() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let dir = ensure_dir(project_dirs.data_local_dir())?;
    Ok(dir.join("datatable.log"))
}
