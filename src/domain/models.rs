use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Values read from `config.toml`. Every key is optional.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub lines: Option<String>,
    #[serde(default)]
    pub strict: Option<bool>,
    #[serde(default)]
    pub audit_log: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RemovalReport {
    pub file: String,
    pub lines: String,
    /// 1-based, inclusive.
    pub start: usize,
    /// 1-based, inclusive.
    pub end: usize,
    pub requested: usize,
    pub removed: usize,
    pub lines_before: usize,
    pub lines_after: usize,
    pub sha256_before: String,
    pub sha256_after: String,
    pub removed_sha256: String,
    pub dry_run: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct PreviewLine {
    pub line: usize,
    pub text: String,
}
