//! Configuration management for the mytime application.
//!
//! The configuration is a plain value object. It is read once by the command
//! layer and handed to every operation explicitly, so the parsing and summary
//! code never reaches for global state.
//!
//! ## Storage
//!
//! Settings are stored as pretty-printed JSON in the platform-specific data
//! directory resolved by [`DataStorage`]:
//!
//! - **Windows**: `%LOCALAPPDATA%\mytime\mytime\config.json`
//! - **macOS**: `~/Library/Application Support/mytime/mytime/config.json`
//! - **Linux**: `~/.local/share/mytime/mytime/config.json`
//!
//! A missing file yields [`Config::default`], and missing fields in an existing
//! file take their default values, so older files keep working.
//!
//! ## Alternatives
//!
//! Message and placeholder settings may hold several alternatives separated by
//! `|`. Commands pick one of them at random with [`pick_random`].
//!
//! ```rust
//! use mytime::libs::config::{pick_random, split_alternatives};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let candidates = split_alternatives("Good morning! | Let's go |");
//! assert_eq!(candidates, vec!["Good morning!", "Let's go"]);
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let picked = pick_random(&candidates, &mut rng);
//! assert!(candidates.contains(&picked));
//! ```

use super::data_storage::DataStorage;
use super::formatter::ClockFormat;
use super::time_span::TimeSpanFormat;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Locale, TimeZone};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Settings consumed by the journal operations.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Break description written under a new day heading. `|`-separated alternatives.
    pub start_message: String,

    /// Pick-list placeholder when choosing a task name. `|`-separated alternatives.
    pub task_placeholder: String,

    /// Pick-list placeholder when choosing the end time. `|`-separated alternatives.
    pub task_time_placeholder: String,

    /// Entry offered for typing a brand new task name. `|`-separated alternatives.
    pub new_task_placeholder: String,

    /// Entry offered for typing a brand new break description. `|`-separated alternatives.
    pub new_break_placeholder: String,

    /// Task names always offered in the pick-list, `|`-separated.
    pub task_list: String,

    /// Break descriptions always offered in the pick-list, `|`-separated.
    pub break_list: String,

    /// `strftime` pattern of the day heading.
    pub new_date_format: String,

    /// Language of the day heading, e.g. `en`, `it` or `de_DE`.
    pub new_date_language: String,

    /// How time spans are displayed in summaries.
    pub time_span_format: TimeSpanFormat,

    /// Clock pattern of task line markers and clock durations, e.g. `HH:mm`.
    pub time_span_hours_and_minutes_format: String,

    /// Rounding step in minutes for displayed spans; `0` or `1` disables rounding.
    pub time_span_step: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_message: "Good morning! | Let's start | Ready to go".to_string(),
            task_placeholder: "What are you working on?".to_string(),
            task_time_placeholder: "When did it end?".to_string(),
            new_task_placeholder: "New task".to_string(),
            new_break_placeholder: "Break".to_string(),
            task_list: String::new(),
            break_list: String::new(),
            new_date_format: "%A, %d %B %Y".to_string(),
            new_date_language: "en".to_string(),
            time_span_format: TimeSpanFormat::default(),
            time_span_hours_and_minutes_format: "HH:mm".to_string(),
            time_span_step: 0,
        }
    }
}

impl Config {
    /// Location of the configuration file in the data directory.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration from the data directory, falling back to defaults.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    /// Reads the configuration from `path`, falling back to defaults when the file is missing.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Writes the configuration to the data directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file from the data directory, if any.
    pub fn delete() -> Result<bool> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Runs the interactive setup wizard, pre-filled with the values of `default`.
    pub fn init(default: Config) -> Result<Self> {
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigWizardHeader, true);

        let modes = TimeSpanFormat::all();
        let mode_index = Select::with_theme(&theme)
            .with_prompt(Message::PromptTimeSpanFormat.to_string())
            .items(&modes.iter().map(|mode| mode.to_string()).collect::<Vec<_>>())
            .default(modes.iter().position(|mode| *mode == default.time_span_format).unwrap_or(0))
            .interact()?;

        Ok(Config {
            time_span_format: modes[mode_index],
            time_span_step: Input::with_theme(&theme)
                .with_prompt(Message::PromptTimeSpanStep.to_string())
                .default(default.time_span_step)
                .interact_text()?,
            time_span_hours_and_minutes_format: Input::with_theme(&theme)
                .with_prompt(Message::PromptHoursAndMinutesFormat.to_string())
                .default(default.time_span_hours_and_minutes_format)
                .interact_text()?,
            new_date_format: Input::with_theme(&theme)
                .with_prompt(Message::PromptNewDateFormat.to_string())
                .default(default.new_date_format)
                .interact_text()?,
            new_date_language: Input::with_theme(&theme)
                .with_prompt(Message::PromptNewDateLanguage.to_string())
                .default(default.new_date_language)
                .interact_text()?,
            start_message: Input::with_theme(&theme)
                .with_prompt(Message::PromptStartMessages.to_string())
                .default(default.start_message)
                .interact_text()?,
            task_list: Input::with_theme(&theme)
                .with_prompt(Message::PromptTaskList.to_string())
                .default(default.task_list)
                .allow_empty(true)
                .interact_text()?,
            break_list: Input::with_theme(&theme)
                .with_prompt(Message::PromptBreakList.to_string())
                .default(default.break_list)
                .allow_empty(true)
                .interact_text()?,
            ..default
        })
    }

    /// The parsed hours-and-minutes pattern.
    pub fn clock_format(&self) -> ClockFormat {
        ClockFormat::new(&self.time_span_hours_and_minutes_format)
    }

    /// Separator between hours and minutes in task line markers.
    pub fn time_separator(&self) -> char {
        self.clock_format().separator()
    }

    pub fn start_messages(&self) -> Vec<String> {
        split_alternatives(&self.start_message)
    }

    pub fn task_list(&self) -> Vec<String> {
        split_alternatives(&self.task_list)
    }

    pub fn break_list(&self) -> Vec<String> {
        split_alternatives(&self.break_list)
    }

    pub fn start_message<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick_random(&self.start_messages(), rng)
    }

    pub fn task_placeholder<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick_random(&split_alternatives(&self.task_placeholder), rng)
    }

    pub fn task_time_placeholder<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick_random(&split_alternatives(&self.task_time_placeholder), rng)
    }

    pub fn new_task_placeholder<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick_random(&split_alternatives(&self.new_task_placeholder), rng)
    }

    pub fn new_break_placeholder<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick_random(&split_alternatives(&self.new_break_placeholder), rng)
    }

    /// Locale of the day heading. Unknown languages fall back to English.
    pub fn date_locale(&self) -> Locale {
        let language = self.new_date_language.trim().to_lowercase().replace('-', "_");
        match language.get(..2).unwrap_or_default() {
            "it" => Locale::it_IT,
            "de" => Locale::de_DE,
            "fr" => Locale::fr_FR,
            "es" => Locale::es_ES,
            "pt" => Locale::pt_PT,
            "nl" => Locale::nl_NL,
            _ => Locale::en_US,
        }
    }

    /// Renders the day heading text for `now`.
    pub fn format_day<Tz>(&self, now: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut out = String::new();
        write!(out, "{}", now.format_localized(&self.new_date_format, self.date_locale()))
            .map_err(|_| anyhow!(Message::InvalidDateFormat(self.new_date_format.clone())))?;
        Ok(out)
    }
}

/// Splits a `|`-separated setting into trimmed, non-empty alternatives.
pub fn split_alternatives(value: &str) -> Vec<String> {
    value
        .split('|')
        .map(str::trim)
        .filter(|alternative| !alternative.is_empty())
        .map(str::to_string)
        .collect()
}

/// Picks one of `candidates` uniformly at random. An empty slice yields an empty string.
pub fn pick_random<R: Rng + ?Sized>(candidates: &[String], rng: &mut R) -> String {
    if candidates.is_empty() {
        return String::new();
    }
    candidates[rng.gen_range(0..candidates.len())].clone()
}
