//! Clock pattern formatting for times of day and clock durations.
//!
//! The hours-and-minutes pattern is configured with the familiar
//! `HH:mm`-style tokens rather than `strftime` directives, because the same
//! pattern also defines the separator that task lines are parsed with.
//!
//! ## Supported Tokens
//!
//! | Token | Meaning                              |
//! |-------|--------------------------------------|
//! | `HH`  | hour, 00-23 (zero-padded)            |
//! | `H`   | hour, 0-23                           |
//! | `hh`  | hour, 01-12 (zero-padded)            |
//! | `h`   | hour, 1-12                           |
//! | `mm`  | minute, zero-padded                  |
//! | `m`   | minute                               |
//! | `a`   | `AM` / `PM`                          |
//! | `'x'` | quoted literal text (`''` is a `'`)  |
//!
//! Every other character is copied verbatim.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveTime;
//! use mytime::libs::formatter::ClockFormat;
//!
//! let clock = ClockFormat::new("HH:mm");
//! let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
//! assert_eq!(clock.format_time(&time), "09:05");
//! assert_eq!(clock.format_duration(90), "01:30");
//! assert_eq!(clock.separator(), ':');
//! ```

use chrono::Timelike;

/// Separator used when the pattern does not define a usable one.
pub const DEFAULT_SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Hour24 { padded: bool },
    Hour12 { padded: bool },
    Minute { padded: bool },
    Meridiem,
    Literal(String),
}

/// A parsed hours-and-minutes pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFormat {
    pattern: String,
    tokens: Vec<Token>,
}

impl ClockFormat {
    /// Parses `pattern`. Parsing is total: anything that is not a token is kept as literal text.
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            tokens: tokenize(pattern),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The character between hours and minutes in a task line marker.
    ///
    /// Patterns shorter than three characters fall back to `:`. Otherwise the
    /// second character is used unless it is an hour letter, then the third,
    /// then `:`.
    pub fn separator(&self) -> char {
        let chars: Vec<char> = self.pattern.chars().collect();
        if chars.len() < 3 {
            return DEFAULT_SEPARATOR;
        }
        for &candidate in &chars[1..3] {
            if !candidate.eq_ignore_ascii_case(&'h') {
                return candidate;
            }
        }
        DEFAULT_SEPARATOR
    }

    /// Renders a time of day.
    pub fn format_time<T: Timelike>(&self, time: &T) -> String {
        let hour = time.hour() as i64;
        let minute = time.minute() as i64;
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };

        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Hour24 { padded } => push_number(&mut out, hour, *padded),
                Token::Hour12 { padded } => push_number(&mut out, hour12, *padded),
                Token::Minute { padded } => push_number(&mut out, minute, *padded),
                Token::Meridiem => out.push_str(if hour < 12 { "AM" } else { "PM" }),
                Token::Literal(text) => out.push_str(text),
            }
        }
        out
    }

    /// Renders an elapsed number of minutes as a clock duration.
    ///
    /// Hours are not wrapped at 24 and every hour token prints the full hour
    /// count. Negative input is treated as zero.
    pub fn format_duration(&self, minutes: i64) -> String {
        let minutes = minutes.max(0);
        let hours = minutes / 60;
        let rest = minutes % 60;

        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Hour24 { padded } | Token::Hour12 { padded } => push_number(&mut out, hours, *padded),
                Token::Minute { padded } => push_number(&mut out, rest, *padded),
                Token::Meridiem => {}
                Token::Literal(text) => out.push_str(text),
            }
        }
        out.trim().to_string()
    }
}

impl Default for ClockFormat {
    fn default() -> Self {
        Self::new("HH:mm")
    }
}

fn push_number(out: &mut String, value: i64, padded: bool) {
    if padded {
        out.push_str(&format!("{:02}", value));
    } else {
        out.push_str(&value.to_string());
    }
}

fn push_literal(tokens: &mut Vec<Token>, c: char) {
    if let Some(Token::Literal(text)) = tokens.last_mut() {
        text.push(c);
    } else {
        tokens.push(Token::Literal(c.to_string()));
    }
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    push_literal(&mut tokens, '\'');
                    continue;
                }
                while let Some(quoted) = chars.next() {
                    if quoted == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            push_literal(&mut tokens, '\'');
                            continue;
                        }
                        break;
                    }
                    push_literal(&mut tokens, quoted);
                }
            }
            'H' | 'h' | 'm' => {
                let mut run = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    run += 1;
                }
                let padded = run > 1;
                tokens.push(match c {
                    'H' => Token::Hour24 { padded },
                    'h' => Token::Hour12 { padded },
                    _ => Token::Minute { padded },
                });
            }
            'a' => {
                while chars.peek() == Some(&'a') {
                    chars.next();
                }
                tokens.push(Token::Meridiem);
            }
            other => push_literal(&mut tokens, other),
        }
    }

    tokens
}
