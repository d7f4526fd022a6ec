//! The editing surface the journal operations work against.
//!
//! Operations only need to read lines and replace or insert text, so any
//! editor can host them by implementing [`Editor`]. [`Document`] is the
//! in-memory implementation used by the command line, backed by a markdown
//! file on disk.

use anyhow::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("Line {line} is out of range (document has {count} lines)")]
    LineOutOfRange { line: usize, count: usize },
}

/// Zero-based line and character offset. Characters are counted as `char`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Position { line, character }
    }
}

/// A range of text; `start` is never after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    pub fn new(start: Position, end: Position) -> Self {
        if end < start {
            return Selection { start: end, end: start };
        }
        Selection { start, end }
    }

    /// An empty selection at `position`.
    pub fn caret(position: Position) -> Self {
        Selection {
            start: position,
            end: position,
        }
    }

    /// Whole lines `first..=last`, ending at the start of `last`.
    pub fn lines(first: usize, last: usize) -> Self {
        Self::new(Position::new(first, 0), Position::new(last, 0))
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Host editor collaborator.
pub trait Editor {
    fn line_count(&self) -> usize;

    fn read_line(&self, index: usize) -> Result<String, EditorError>;

    /// Replaces `range` with `text` and returns the position right after the inserted text.
    fn replace_range(&mut self, range: Selection, text: &str) -> Position;

    /// Inserts `text` at `position` and returns the position right after it.
    fn insert_at(&mut self, position: Position, text: &str) -> Position {
        self.replace_range(Selection::caret(position), text)
    }
}

/// A text buffer addressed by lines, optionally tied to a file.
///
/// Lines are separated by `\n`, so a text ending with a newline has a final
/// empty line, as in most editors. Line start offsets are kept up to date on
/// every edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: Option<PathBuf>,
    text: String,
    line_starts: Vec<usize>,
}

impl Default for Document {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        let mut document = Document {
            path: None,
            text: text.replace("\r\n", "\n"),
            line_starts: Vec::new(),
        };
        document.index_lines();
        document
    }

    /// Loads `path`; a missing file opens as an empty document.
    pub fn open(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        };
        let mut document = Self::from_text(&text);
        document.path = Some(path.to_path_buf());
        Ok(document)
    }

    /// Writes the buffer back to the file it was opened from.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, &self.text)?;
        }
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Appends empty lines until `index` is a valid line.
    pub fn ensure_line(&mut self, index: usize) {
        while self.line_count() <= index {
            self.text.push('\n');
            self.line_starts.push(self.text.len());
        }
    }

    /// Index of the last line.
    pub fn last_line(&self) -> usize {
        self.line_count() - 1
    }

    fn index_lines(&mut self) {
        self.line_starts = std::iter::once(0)
            .chain(self.text.match_indices('\n').map(|(newline, _)| newline + 1))
            .collect();
    }

    /// Byte range of line `index`, without its newline.
    fn line_range(&self, index: usize) -> Option<(usize, usize)> {
        let start = *self.line_starts.get(index)?;
        let end = self.line_starts.get(index + 1).map_or(self.text.len(), |next| next - 1);
        Some((start, end))
    }

    /// Byte offset of `position`, clamped to the document.
    fn offset(&self, position: Position) -> usize {
        let Some((line_start, line_end)) = self.line_range(position.line) else {
            return self.text.len();
        };
        self.text[line_start..line_end]
            .char_indices()
            .nth(position.character)
            .map_or(line_end, |(index, _)| line_start + index)
    }

    fn position_of(&self, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        Position::new(line, self.text[line_start..offset].chars().count())
    }
}

impl Editor for Document {
    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn read_line(&self, index: usize) -> Result<String, EditorError> {
        self.line_range(index)
            .map(|(start, end)| self.text[start..end].to_string())
            .ok_or(EditorError::LineOutOfRange {
                line: index,
                count: self.line_count(),
            })
    }

    fn replace_range(&mut self, range: Selection, text: &str) -> Position {
        let start = self.offset(range.start);
        let end = self.offset(range.end).max(start);
        let text = text.replace("\r\n", "\n");
        self.text.replace_range(start..end, &text);
        self.index_lines();
        self.position_of(start + text.len())
    }
}
