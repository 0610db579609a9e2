use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// An ordered sequence of lines, each keeping its own terminator.
///
/// Concatenating the lines back together reproduces the source text exactly,
/// so a file with no trailing newline stays that way after an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSequence {
    lines: Vec<String>,
}

/// Half-open, 0-based range of line positions.
///
/// Parsed from and displayed as the 1-based inclusive form users type:
/// `550-562` is positions `[549, 562)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: usize,
    end: usize,
}

/// Outcome of cutting a range out of a sequence.
#[derive(Debug, Clone)]
pub struct Removal {
    pub kept: LineSequence,
    pub removed: LineSequence,
}

#[derive(thiserror::Error, Debug)]
pub enum LineError {
    #[error("invalid line range '{0}': {1}")]
    InvalidRange(String, &'static str),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8 (first bad byte at offset {offset})")]
    Decode { path: PathBuf, offset: usize },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("file has {found} lines but range {range} needs at least {needed}")]
    ShortFile {
        range: LineRange,
        needed: usize,
        found: usize,
    },
}

impl LineError {
    pub fn code(&self) -> &'static str {
        match self {
            LineError::InvalidRange(..) => "INVALID_RANGE",
            LineError::Read { .. } => "FILE_READ",
            LineError::Decode { .. } => "FILE_DECODE",
            LineError::Write { .. } => "FILE_WRITE",
            LineError::ShortFile { .. } => "SHORT_FILE",
        }
    }
}

impl LineSequence {
    /// Splits after every `\n`, `\r\n` or lone `\r`.
    pub fn parse(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut lines = Vec::new();
        let mut start = 0;
        let mut i = 0;
        while i < bytes.len() {
            let end = match bytes[i] {
                b'\n' => Some(i + 1),
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => Some(i + 2),
                b'\r' => Some(i + 1),
                _ => None,
            };
            match end {
                Some(end) => {
                    // Terminators are ASCII, so `end` is a char boundary.
                    lines.push(text[start..end].to_string());
                    start = end;
                    i = end;
                }
                None => i += 1,
            }
        }
        if start < bytes.len() {
            lines.push(text[start..].to_string());
        }
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }

    /// Splits off `range`, keeping `[0, start) ++ [end, len)`.
    ///
    /// Positions past the end of the sequence are ignored, so a short
    /// sequence loses `[start, len)` and nothing more.
    pub fn remove_range(mut self, range: LineRange) -> Removal {
        let len = self.lines.len();
        let start = range.start().min(len);
        let end = range.end().min(len);
        let removed: Vec<String> = self.lines.drain(start..end).collect();
        Removal {
            kept: self,
            removed: LineSequence { lines: removed },
        }
    }

    /// Lines inside `range` paired with their 1-based numbers.
    pub fn slice(&self, range: LineRange) -> Vec<(usize, &str)> {
        let len = self.lines.len();
        let start = range.start().min(len);
        let end = range.end().min(len);
        self.iter()
            .enumerate()
            .skip(start)
            .take(end - start)
            .map(|(i, l)| (i + 1, l))
            .collect()
    }
}

impl LineRange {
    /// Builds a range from 1-based inclusive line numbers.
    pub fn from_one_based(first: usize, last: usize) -> Result<Self, LineError> {
        let label = format!("{}-{}", first, last);
        if first == 0 {
            return Err(LineError::InvalidRange(label, "line numbers start at 1"));
        }
        if last < first {
            return Err(LineError::InvalidRange(label, "end is before start"));
        }
        Ok(Self {
            start: first - 1,
            end: last,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn first_line(&self) -> usize {
        self.start + 1
    }

    pub fn last_line(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Fails when a sequence of `found` lines cannot cover the whole range.
    pub fn require_within(&self, found: usize) -> Result<(), LineError> {
        if found < self.end {
            return Err(LineError::ShortFile {
                range: *self,
                needed: self.end,
                found,
            });
        }
        Ok(())
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first_line(), self.last_line())
    }
}

impl FromStr for LineRange {
    type Err = LineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim();
        let bad = |why| LineError::InvalidRange(raw.to_string(), why);
        let (first, last) = match s.split_once('-') {
            Some((a, b)) => (a.trim(), b.trim()),
            None => (s, s),
        };
        let first: usize = first.parse().map_err(|_| bad("expected START-END"))?;
        let last: usize = last.parse().map_err(|_| bad("expected START-END"))?;
        Self::from_one_based(first, last)
    }
}

pub fn read_lines(path: &Path) -> Result<LineSequence, LineError> {
    let bytes = std::fs::read(path).map_err(|source| LineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| LineError::Decode {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read file");
    Ok(LineSequence::parse(&text))
}

/// Overwrites `path` with the sequence. Truncates first; not atomic.
pub fn write_lines(path: &Path, lines: &LineSequence) -> Result<(), LineError> {
    let text = lines.to_text();
    std::fs::write(path, &text).map_err(|source| LineError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote file");
    Ok(())
}
