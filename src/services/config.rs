use crate::domain::constants::{CONFIG_RELATIVE_PATH, DEFAULT_LINE_RANGE, DEFAULT_TARGET_FILE};
use crate::domain::models::FileConfig;
use crate::lines::LineRange;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Fully resolved inputs for one edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSettings {
    pub file: PathBuf,
    pub range: LineRange,
    pub strict: bool,
    pub audit_log: Option<PathBuf>,
}

/// Explicit values from flags or env vars. `None` falls through to the
/// config file and then to the built-in default.
#[derive(Debug, Default, Clone)]
pub struct Overrides<'a> {
    pub file: Option<&'a Path>,
    pub lines: Option<&'a str>,
    pub strict: bool,
    pub audit_log: Option<&'a Path>,
}

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(CONFIG_RELATIVE_PATH))
}

/// Loads the config file. An explicit path must exist; the default
/// location is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let path = match explicit {
        Some(p) if !p.exists() => return Err(ConfigError::Missing(p.to_path_buf())),
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(FileConfig::default()),
        },
    };
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let cfg = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

pub fn resolve(overrides: &Overrides<'_>, cfg: &FileConfig) -> anyhow::Result<EditSettings> {
    let file = overrides
        .file
        .map(Path::to_path_buf)
        .or_else(|| cfg.file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_FILE));
    let lines = overrides
        .lines
        .or(cfg.lines.as_deref())
        .unwrap_or(DEFAULT_LINE_RANGE);
    let range: LineRange = lines.parse()?;
    let audit_log = overrides
        .audit_log
        .map(Path::to_path_buf)
        .or_else(|| cfg.audit_log.clone());

    Ok(EditSettings {
        file,
        range,
        strict: overrides.strict || cfg.strict.unwrap_or(false),
        audit_log,
    })
}
