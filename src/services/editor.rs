use crate::domain::models::{PreviewLine, RemovalReport};
use crate::lines::{self, LineRange};
use crate::services::config::EditSettings;
use crate::services::digest::sha256_hex;
use crate::services::storage::audit;

pub fn confirmation_message(range: LineRange, dry_run: bool) -> String {
    if dry_run {
        format!("Lines {} would be removed (dry run)", range)
    } else {
        format!("Lines {} removed successfully", range)
    }
}

/// Reads the target, cuts the configured range and writes the rest back.
///
/// Running twice removes a different block the second time: positions are
/// taken from the file as it is now, not as it was before the first run.
pub fn remove_lines(settings: &EditSettings, dry_run: bool) -> anyhow::Result<RemovalReport> {
    let range = settings.range;
    let before = lines::read_lines(&settings.file)?;
    if settings.strict {
        range.require_within(before.len())?;
    }

    let lines_before = before.len();
    let sha256_before = sha256_hex(before.to_text().as_bytes());
    let cut = before.remove_range(range);

    if cut.removed.is_empty() {
        tracing::warn!(
            file = %settings.file.display(),
            lines = %range,
            found = lines_before,
            "file is shorter than the requested range; nothing removed"
        );
    } else if cut.removed.len() < range.len() {
        tracing::warn!(
            file = %settings.file.display(),
            lines = %range,
            found = lines_before,
            removed = cut.removed.len(),
            "file is shorter than the requested range"
        );
    }

    if !dry_run {
        lines::write_lines(&settings.file, &cut.kept)?;
    }

    let report = RemovalReport {
        file: settings.file.to_string_lossy().to_string(),
        lines: range.to_string(),
        start: range.first_line(),
        end: range.last_line(),
        requested: range.len(),
        removed: cut.removed.len(),
        lines_before,
        lines_after: cut.kept.len(),
        sha256_before,
        sha256_after: sha256_hex(cut.kept.to_text().as_bytes()),
        removed_sha256: sha256_hex(cut.removed.to_text().as_bytes()),
        dry_run,
        message: confirmation_message(range, dry_run),
    };

    if !dry_run {
        tracing::info!(file = %report.file, lines = %report.lines, removed = report.removed, "removed lines");
        if let Some(path) = &settings.audit_log {
            audit(path, "remove", serde_json::to_value(&report)?);
        }
    }
    Ok(report)
}

pub fn preview_lines(settings: &EditSettings) -> anyhow::Result<Vec<PreviewLine>> {
    let seq = lines::read_lines(&settings.file)?;
    if settings.strict {
        settings.range.require_within(seq.len())?;
    }
    Ok(seq
        .slice(settings.range)
        .into_iter()
        .map(|(line, text)| PreviewLine {
            line,
            text: strip_terminator(text).to_string(),
        })
        .collect())
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}
