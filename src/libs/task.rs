//! Task lines: parsing a markdown list item into a [`Task`] and back.
//!
//! A task line is a list item starting with a time marker:
//!
//! ```text
//! - `09:30` Code review
//! - `10:15` Code review // waiting on CI
//! - `10:30` //_Coffee_
//! ```
//!
//! The marker is the time the entry *ended*. Text after the last `//` is a
//! comment; a line whose text is only a comment is a break.

use super::config::Config;
use super::formatter::ClockFormat;
use super::time_span::time_span_minutes;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use thiserror::Error;

const BREAK_MARKER: &str = "//";

#[derive(Debug, Error)]
pub enum TaskLineError {
    #[error("Task line invalid format: - `HH:mm` <Task description> (line: {line})")]
    InvalidLine { line: String },
    #[error("Cannot build the task line pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// One logged activity or break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Task name; empty for break lines.
    pub text: String,
    /// Annotation; the description of a break.
    pub comment: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Task {
    /// Creates a task. Without `end` the task is a point in time at `start`.
    pub fn new(text: &str, start: NaiveDateTime, end: Option<NaiveDateTime>, comment: Option<&str>) -> Self {
        Task {
            text: text.to_string(),
            comment: comment.unwrap_or_default().to_string(),
            start,
            end: end.unwrap_or(start),
        }
    }

    /// A break line ending at `end`, described by `comment`.
    pub fn new_break(comment: &str, start: NaiveDateTime, end: Option<NaiveDateTime>) -> Self {
        Self::new("", start, end, Some(comment))
    }

    pub fn is_break(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Minutes between this task's start and end, at least one.
    pub fn time_span_minutes(&self) -> i64 {
        time_span_minutes(self.end, self.start)
    }

    /// Renders the task as a markdown task line.
    pub fn to_line(&self, clock: &ClockFormat) -> String {
        let time = clock.format_time(&self.end);
        if self.is_break() {
            format!("- `{}` {}_{}_", time, BREAK_MARKER, self.comment)
        } else {
            format!("- `{}` {}", time, self.text)
        }
    }
}

/// Recognizes task lines for one separator and anchors their times to one day.
#[derive(Debug, Clone)]
pub struct TaskLineParser {
    pattern: Regex,
    day: NaiveDate,
}

impl TaskLineParser {
    /// A parser for `separator` anchored to today.
    pub fn new(separator: char) -> Result<Self, TaskLineError> {
        let pattern = format!(
            r"^-\s+`(0[0-9]|1[0-9]|2[0-3]){}([0-5][0-9])`\s+(.*)$",
            regex::escape(&separator.to_string())
        );
        Ok(Self {
            pattern: Regex::new(&pattern)?,
            day: Local::now().date_naive(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, TaskLineError> {
        Self::new(config.time_separator())
    }

    /// Anchors parsed times to `day` instead of today.
    pub fn on_day(mut self, day: NaiveDate) -> Self {
        self.day = day;
        self
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Whether `line` matches the task line grammar.
    pub fn is_valid_line(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Parses `line`, returning `None` when it is not a task line.
    pub fn try_parse_line(&self, line: &str, start: Option<NaiveDateTime>) -> Option<Task> {
        self.parse_line(line, start).ok()
    }

    /// Parses `line` into a task whose start is `start`, or its own end when absent.
    pub fn parse_line(&self, line: &str, start: Option<NaiveDateTime>) -> Result<Task, TaskLineError> {
        let captures = self.pattern.captures(line).ok_or_else(|| TaskLineError::InvalidLine { line: line.to_string() })?;

        let hour: u32 = captures[1].parse().unwrap_or_default();
        let minute: u32 = captures[2].parse().unwrap_or_default();
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TaskLineError::InvalidLine { line: line.to_string() })?;
        let end = self.day.and_time(time);

        let (text, comment) = split_comment(&captures[3]);

        Ok(Task {
            text,
            comment,
            start: start.unwrap_or(end),
            end,
        })
    }
}

/// Splits the payload of a task line at the last break marker.
fn split_comment(payload: &str) -> (String, String) {
    let (text, comment) = match payload.rfind(BREAK_MARKER) {
        Some(0) => (String::new(), payload[BREAK_MARKER.len()..].trim().to_string()),
        Some(index) => (
            payload[..index].trim().to_string(),
            payload[index + BREAK_MARKER.len()..].trim().to_string(),
        ),
        None => (payload.trim().to_string(), String::new()),
    };

    (text, unwrap_emphasis(comment))
}

/// `_text_` renders as emphasis in markdown; the underscores are not part of the comment.
fn unwrap_emphasis(comment: String) -> String {
    if comment.len() > 1 && comment.starts_with('_') && comment.ends_with('_') {
        return comment[1..comment.len() - 1].trim().to_string();
    }
    comment
}
