use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "linesnip",
    version,
    about = "Remove a range of lines from a text file in place"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "LINESNIP_FILE",
        help = "File to edit [default: src/components/Dashboard.tsx]"
    )]
    pub file: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "LINESNIP_LINES",
        help = "1-based inclusive line range, e.g. 550-562 [default: 550-562]"
    )]
    pub lines: Option<String>,
    #[arg(
        long,
        global = true,
        env = "LINESNIP_CONFIG",
        help = "Config file (default: ~/.config/linesnip/config.toml if present)"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "LINESNIP_AUDIT_LOG",
        help = "Append a JSON line per applied edit to this file"
    )]
    pub audit_log: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove the line range and overwrite the file (the default command).
    Remove {
        #[arg(long, help = "Fail if the file is shorter than the range end")]
        strict: bool,
        #[arg(long, help = "Report what would be removed without writing")]
        dry_run: bool,
    },
    /// Print the lines that fall inside the range.
    Preview {
        #[arg(long, help = "Fail if the file is shorter than the range end")]
        strict: bool,
    },
}
