//! Core library modules for the mytime application.
//!
//! ## Layout
//!
//! - **Task lines**: [`task`] parses and renders single journal lines
//! - **Time spans**: [`time_span`] computes and displays elapsed minutes, [`formatter`] renders clock patterns
//! - **Summaries**: [`summary`] aggregates a range of lines into a table
//! - **Journal operations**: [`journal`] and [`suggestions`] implement the day, task and summary commands
//! - **Host glue**: [`editor`], [`prompt`], [`config`], [`data_storage`], [`messages`]
//!
//! ## Usage
//!
//! ```rust
//! use mytime::libs::config::Config;
//! use mytime::libs::summary::Summary;
//! use mytime::libs::task::TaskLineParser;
//!
//! let config = Config::default();
//! let parser = TaskLineParser::from_config(&config)?;
//! let lines = ["- `09:00` //_Start_", "- `10:30` Coding"];
//! let summary = Summary::scan(lines, &parser);
//! assert_eq!(summary.total, 90);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod editor;
pub mod formatter;
pub mod journal;
pub mod messages;
pub mod prompt;
pub mod suggestions;
pub mod summary;
pub mod task;
pub mod time_span;
