//! Candidate end times and task names offered when logging a new line.

use super::config::Config;
use super::editor::Editor;
use super::task::TaskLineParser;
use super::time_span::{time_span_minutes, time_span_to_string, TimeSpanFormat};
use chrono::{Duration, NaiveDateTime};

/// How far above the cursor the name scan starts.
pub const SCAN_LINES_ABOVE: usize = 50;
/// Maximum number of lines the name scan reads.
pub const SCAN_LINES: usize = 200;
/// The name scan stops once this many candidates are known.
pub const MAX_SUGGESTIONS: usize = 25;
/// Offered spans in minutes after the previous task's end.
pub const TIME_SPANS: [i64; 7] = [15, 30, 45, 60, 90, 120, 240];
/// Minutes added to the previous end when no time is picked.
pub const FALLBACK_MINUTES: i64 = 5;

/// One entry of the end-time pick-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeChoice {
    pub time: NaiveDateTime,
    pub minutes: i64,
    pub label: String,
}

/// End times after `prev_end`: "now" first when it is more than a minute away, then the fixed spans.
pub fn time_choices(prev_end: NaiveDateTime, now: NaiveDateTime, config: &Config) -> Vec<TimeChoice> {
    let clock = config.clock_format();
    let mut spans: Vec<i64> = TIME_SPANS.to_vec();

    let to_now = time_span_minutes(now, prev_end);
    if to_now > 1 {
        spans.insert(0, to_now);
    }

    spans
        .into_iter()
        .map(|minutes| {
            let time = prev_end + Duration::minutes(minutes);
            TimeChoice {
                time,
                minutes,
                label: format!(
                    "{} = {}",
                    clock.format_time(&time),
                    time_span_to_string(minutes, TimeSpanFormat::MinutesOrHours, 0, false, &clock)
                ),
            }
        })
        .collect()
}

/// End time used when the pick-list is dismissed.
pub fn fallback_time(prev_end: NaiveDateTime) -> NaiveDateTime {
    prev_end + Duration::minutes(FALLBACK_MINUTES)
}

/// Task names (or break descriptions) worth offering for a new line at `line`.
///
/// Starts from the configured list and adds what was already logged around
/// the cursor, skipping start messages for breaks. The result is sorted.
pub fn task_suggestions<E: Editor + ?Sized>(
    editor: &E,
    line: usize,
    is_break: bool,
    parser: &TaskLineParser,
    config: &Config,
) -> Vec<String> {
    let mut suggestions = if is_break { config.break_list() } else { config.task_list() };
    let start_messages = config.start_messages();

    let first = line.saturating_sub(SCAN_LINES_ABOVE);
    let last = (first + SCAN_LINES).min(editor.line_count());

    for index in first..last {
        let Ok(text) = editor.read_line(index) else {
            continue;
        };
        if text.trim().is_empty() {
            continue;
        }
        if let Some(task) = parser.try_parse_line(&text, None) {
            let name = task.text.trim();
            let comment = task.comment.trim();
            if !is_break && !name.is_empty() && !suggestions.iter().any(|s| s == name) {
                suggestions.push(name.to_string());
            } else if is_break
                && name.is_empty()
                && !comment.is_empty()
                && !start_messages.iter().any(|s| s == comment)
                && !suggestions.iter().any(|s| s == comment)
            {
                suggestions.push(comment.to_string());
            }
        }
        if suggestions.len() >= MAX_SUGGESTIONS {
            break;
        }
    }

    suggestions.sort();
    suggestions
}
