/// File edited when no `--file`, env var or config value is given.
pub const DEFAULT_TARGET_FILE: &str = "src/components/Dashboard.tsx";

/// 1-based inclusive range removed by default.
pub const DEFAULT_LINE_RANGE: &str = "550-562";

/// Config file location relative to `$HOME`.
pub const CONFIG_RELATIVE_PATH: &str = ".config/linesnip/config.toml";

pub const DEFAULT_LOG_FILTER: &str = "warn";
