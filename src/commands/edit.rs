use crate::cli::{Cli, Commands};
use crate::services::config::{load_config, resolve, Overrides};
use crate::services::editor::{preview_lines, remove_lines};
use crate::services::output::{print_one, print_out};

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    let cfg = load_config(cli.config.as_deref())?;
    let (strict, dry_run) = match &cli.command {
        Some(Commands::Remove { strict, dry_run }) => (*strict, *dry_run),
        Some(Commands::Preview { strict }) => (*strict, false),
        None => (false, false),
    };
    let overrides = Overrides {
        file: cli.file.as_deref(),
        lines: cli.lines.as_deref(),
        strict,
        audit_log: cli.audit_log.as_deref(),
    };
    let settings = resolve(&overrides, &cfg)?;
    tracing::debug!(?settings, "resolved settings");

    match &cli.command {
        None | Some(Commands::Remove { .. }) => {
            let report = remove_lines(&settings, dry_run)?;
            print_one(cli.json, report, |r| r.message.clone())?;
        }
        Some(Commands::Preview { .. }) => {
            let rows = preview_lines(&settings)?;
            print_out(cli.json, &rows, |r| format!("{}\t{}", r.line, r.text))?;
        }
    }
    Ok(())
}
