//! The journal operations: new day, new task or break, summary.
//!
//! Each operation runs one pass against an [`Editor`] and returns the
//! selection the editor should show afterwards.

use super::config::Config;
use super::editor::{Editor, Position, Selection};
use super::prompt::Prompt;
use super::suggestions::{fallback_time, task_suggestions, time_choices};
use super::summary::Summary;
use super::task::{Task, TaskLineParser};
use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, TimeZone};
use rand::Rng;
use std::fmt::Display;

/// Title written at the top of an empty journal.
pub const JOURNAL_TITLE: &str = "# My Time";
/// Number of leading lines that must be blank for the journal to count as empty.
const EMPTY_CHECK_LINES: usize = 50;

/// Replaces `selection` with a heading for the day of `now` and an opening break line.
pub fn new_day_block<E, R, Tz>(editor: &mut E, selection: Selection, config: &Config, now: &DateTime<Tz>, rng: &mut R) -> Result<Selection>
where
    E: Editor + ?Sized,
    R: Rng + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let is_empty_doc = (0..editor.line_count().min(EMPTY_CHECK_LINES))
        .filter_map(|index| editor.read_line(index).ok())
        .all(|line| line.trim().is_empty());

    let opening = Task::new_break(&config.start_message(rng), now.naive_local(), None);

    let mut block = String::new();
    if is_empty_doc {
        block.push_str(JOURNAL_TITLE);
        block.push_str("\n\n");
    }
    block.push_str(&format!("## {}\n\n{}\n", config.format_day(now)?, opening.to_line(&config.clock_format())));

    let end = editor.replace_range(selection, &block);
    tracing::info!(line = selection.start.line, "day block written");
    Ok(Selection::caret(end))
}

/// Writes a new task (or break) line at the selection's first line.
///
/// The start of the new entry is the end of the task on the line above. The
/// user picks the end time and the name; dismissing either pick-list falls
/// back to a default. The returned selection covers the name so it can be
/// typed over.
pub fn new_task_line<E, P, R>(
    editor: &mut E,
    prompt: &mut P,
    selection: Selection,
    is_break: bool,
    config: &Config,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<Selection>
where
    E: Editor + ?Sized,
    P: Prompt + ?Sized,
    R: Rng + ?Sized,
{
    let parser = TaskLineParser::from_config(config)?.on_day(now.date());
    let line = selection.start.line;

    let prev_task = if line > 0 {
        editor.read_line(line - 1).ok().and_then(|text| parser.try_parse_line(&text, None))
    } else {
        None
    };

    let time = select_time(prompt, prev_task.as_ref().map_or(now, |task| task.end), now, config, rng)?;
    let text = select_task(&*editor, prompt, line, is_break, &parser, config, rng)?;
    let task = build_task(prev_task.as_ref(), is_break, time, &text);

    let range = Selection::new(Position::new(line, 0), selection.end);
    let end = editor.replace_range(range, &task.to_line(&config.clock_format()));
    tracing::info!(line, is_break, minutes = task.time_span_minutes(), "task line written");

    let name_length = text.chars().count();
    let cursor = if is_break {
        match end.character.checked_sub(name_length + 1) {
            Some(start) if start > 0 => Selection::new(Position::new(end.line, start), Position::new(end.line, end.character - 1)),
            _ => Selection::caret(end),
        }
    } else {
        match end.character.checked_sub(name_length) {
            Some(start) if start > 0 => Selection::new(Position::new(end.line, start), end),
            _ => Selection::caret(end),
        }
    };
    Ok(cursor)
}

/// Summarizes the lines touched by `selection` and inserts the table below them.
///
/// The scanned lines are left untouched. Returns the summary and the
/// collapsed selection at the old selection end.
pub fn summary_block<E>(editor: &mut E, selection: Selection, config: &Config, now: NaiveDateTime) -> Result<(Summary, Selection)>
where
    E: Editor + ?Sized,
{
    let parser = TaskLineParser::from_config(config)?.on_day(now.date());
    let last = selection.end.line.min(editor.line_count().saturating_sub(1));

    let lines = (selection.start.line..=last).filter_map(|index| editor.read_line(index).ok()).collect::<Vec<_>>();
    let summary = Summary::scan(&lines, &parser);

    let block = format!("\n{}", summary.render(config, &now));
    editor.insert_at(Position::new(last + 1, 0), &block);
    tracing::info!(first = selection.start.line, last, "summary block written");

    Ok((summary, Selection::caret(selection.end)))
}

/// Parses a single line strictly, failing on anything that is not a task line.
pub fn check_line(line: &str, config: &Config) -> Result<Task> {
    let parser = TaskLineParser::from_config(config)?;
    Ok(parser.parse_line(line, None)?)
}

fn select_time<P, R>(prompt: &mut P, prev_end: NaiveDateTime, now: NaiveDateTime, config: &Config, rng: &mut R) -> Result<NaiveDateTime>
where
    P: Prompt + ?Sized,
    R: Rng + ?Sized,
{
    let choices = time_choices(prev_end, now, config);
    let labels = choices.iter().map(|choice| choice.label.clone()).collect::<Vec<_>>();

    let picked = prompt.prompt_choice(&labels, &config.task_time_placeholder(rng))?;
    Ok(picked.and_then(|index| choices.get(index)).map_or_else(|| fallback_time(prev_end), |choice| choice.time))
}

fn select_task<E, P, R>(
    editor: &E,
    prompt: &mut P,
    line: usize,
    is_break: bool,
    parser: &TaskLineParser,
    config: &Config,
    rng: &mut R,
) -> Result<String>
where
    E: Editor + ?Sized,
    P: Prompt + ?Sized,
    R: Rng + ?Sized,
{
    let new_entry = if is_break {
        config.new_break_placeholder(rng)
    } else {
        config.new_task_placeholder(rng)
    };

    let mut suggestions = task_suggestions(editor, line, is_break, parser, config);
    if suggestions.is_empty() {
        return Ok(new_entry);
    }
    suggestions.insert(0, new_entry);

    let picked = prompt.prompt_choice(&suggestions, &config.task_placeholder(rng))?;
    Ok(match picked.and_then(|index| suggestions.get(index)) {
        Some(name) if !name.is_empty() => name.clone(),
        _ => config.task_placeholder(rng),
    })
}

fn build_task(prev_task: Option<&Task>, is_break: bool, time: NaiveDateTime, text: &str) -> Task {
    match (prev_task, is_break) {
        (None, true) => Task::new_break(text, time, None),
        (None, false) => Task::new(text, time, None, None),
        (Some(prev), true) => Task::new_break(text, prev.end, Some(time)),
        (Some(prev), false) => Task::new(text, prev.end, Some(time), None),
    }
}
