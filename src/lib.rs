//! # MyTime - markdown daily time log
//!
//! Keeps a plain-text journal of what was done and when, as markdown list
//! items, and summarizes a range of it into a time-per-task table.
//!
//! ```text
//! ## Monday, 19 October 2026
//!
//! - `09:00` //_Good morning!_
//! - `10:30` Code review
//! - `10:45` //_Coffee_
//! - `12:00` Release notes
//! ```
//!
//! ## Features
//!
//! - **Day blocks**: dated headings with an opening line
//! - **Task and break lines**: start times inferred from the previous line
//! - **Summaries**: per-task totals with rounding and several display modes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mytime::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
