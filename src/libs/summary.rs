//! Aggregation of task lines into a per-task summary table.

use super::config::Config;
use super::task::TaskLineParser;
use super::time_span::time_span_to_string;
use chrono::{NaiveDateTime, Timelike};
use std::collections::BTreeMap;

/// Width of the "Time span" column.
const SPAN_COLUMN_WIDTH: usize = 18;
/// Minimum width of the "Task" column; fits `**Total**`.
const MIN_NAME_COLUMN_WIDTH: usize = 9;

/// Minutes accumulated for one task name during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpan {
    pub text: String,
    pub span_minutes: i64,
}

impl TaskSpan {
    pub fn new(text: &str, span_minutes: i64) -> Self {
        TaskSpan {
            text: text.to_string(),
            span_minutes,
        }
    }

    /// The span rendered with the configured display mode and rounding step.
    pub fn span_minutes_to_string(&self, config: &Config, fixed_decimal: bool) -> String {
        time_span_to_string(
            self.span_minutes,
            config.time_span_format,
            config.time_span_step,
            fixed_decimal,
            &config.clock_format(),
        )
    }
}

/// How the scanned lines were classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub valid: usize,
    pub comments: usize,
    pub invalid: usize,
}

/// Result of one pass over a range of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    spans: BTreeMap<String, TaskSpan>,
    pub total: i64,
    pub counts: LineCounts,
    max_name_length: usize,
}

impl Summary {
    /// Scans `lines` in order, chaining every task's start to the previous task's end.
    ///
    /// The first task line opens the log and is counted as valid without
    /// contributing time. Later break lines count as comments. Blank lines are
    /// skipped and anything else is invalid.
    pub fn scan<I, S>(lines: I, parser: &TaskLineParser) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = Summary {
            max_name_length: MIN_NAME_COLUMN_WIDTH,
            ..Default::default()
        };
        let mut start: Option<NaiveDateTime> = None;

        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }

            let Some(task) = parser.try_parse_line(line, start) else {
                tracing::debug!(line, "not a task line");
                summary.counts.invalid += 1;
                continue;
            };

            let name = task.text.trim();
            if name.is_empty() || summary.counts.valid == 0 {
                if summary.counts.valid == 0 {
                    summary.counts.valid += 1;
                } else {
                    summary.counts.comments += 1;
                }
            } else {
                let minutes = task.time_span_minutes();
                match summary.spans.get_mut(name) {
                    Some(span) => span.span_minutes += minutes,
                    None => {
                        summary.spans.insert(name.to_string(), TaskSpan::new(name, minutes));
                        summary.max_name_length = summary.max_name_length.max(name.chars().count());
                    }
                }
                summary.total += minutes;
                summary.counts.valid += 1;
            }

            start = Some(task.end);
        }

        tracing::debug!(
            tasks = summary.spans.len(),
            total = summary.total,
            valid = summary.counts.valid,
            comments = summary.counts.comments,
            invalid = summary.counts.invalid,
            "summary scan finished"
        );
        summary
    }

    /// Buckets ordered by task name.
    pub fn spans(&self) -> impl Iterator<Item = &TaskSpan> {
        self.spans.values()
    }

    pub fn span(&self, name: &str) -> Option<&TaskSpan> {
        self.spans.get(name)
    }

    /// Renders the markdown table and the footer line stamped with `now`.
    pub fn render<T: Timelike>(&self, config: &Config, now: &T) -> String {
        let span_width = SPAN_COLUMN_WIDTH;
        let width = self.max_name_length;
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("| {:<span_width$} | {:<width$} |", "Time span", "Task"));
        lines.push(format!("| {:->span_width$} | {:-<width$} |", ":", "-"));

        for span in self.spans() {
            let cell = format!("  `{}`  ", span.span_minutes_to_string(config, true));
            lines.push(format!("| {:>span_width$} | {:<width$} |", cell, span.text));
        }

        let total = TaskSpan::new("Total", self.total).span_minutes_to_string(config, true);
        let cell = format!("**`{}`**", total);
        lines.push(format!("| {:>span_width$} | {:<width$} |", cell, "**Total**"));

        lines.push(format!(
            "\n> _Last update {}_ / Lines [valid:{}, comments:{}, invalid:{}]\n",
            config.clock_format().format_time(now),
            self.counts.valid,
            self.counts.comments,
            self.counts.invalid
        ));

        lines.join("\n")
    }
}
