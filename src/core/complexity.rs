use regex::Regex;
use std::sync::LazyLock;
use crate::models::{MAX_COMPLEXITY, MIN_COMPLEXITY};

/// Score used when no analysis is available or none can be parsed
pub const DEFAULT_COMPLEXITY: u8 = 5;

/// Marker identifying the score line, e.g. "Complexity Score: 7/10"
const SCORE_MARKER: &str = "Score:";

static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+").expect("integer pattern is valid"));

/// Turn a free-text complexity assessment into a score in [1, 10]
///
/// Only the first line carrying the score marker is considered, and only the first
/// integer on that line. Anything unparseable falls back to [`DEFAULT_COMPLEXITY`].
pub fn score_complexity(analysis: Option<&str>) -> u8 {
    let Some(text) = analysis else {
        return DEFAULT_COMPLEXITY;
    };

    let Some(line) = text.lines().find(|line| line.contains(SCORE_MARKER)) else {
        tracing::debug!("No complexity score marker in analysis, using default");
        return DEFAULT_COMPLEXITY;
    };

    match INTEGER_PATTERN.find(line) {
        Some(m) => clamp_complexity(parse_saturating(signed_token(line, m))),
        None => {
            tracing::debug!("Score line has no integer: {:?}", line);
            DEFAULT_COMPLEXITY
        }
    }
}

/// Clamp any integer onto the 1-10 complexity scale
#[inline]
pub fn clamp_complexity(value: i64) -> u8 {
    value.clamp(MIN_COMPLEXITY as i64, MAX_COMPLEXITY as i64) as u8
}

// A hyphen glued to a preceding word ("high-7") is punctuation, not a sign.
fn signed_token<'a>(line: &str, m: regex::Match<'a>) -> &'a str {
    let token = m.as_str();
    let joined_to_word = line[..m.start()]
        .chars()
        .next_back()
        .is_some_and(char::is_alphanumeric);

    match token.strip_prefix('-') {
        Some(digits) if joined_to_word => digits,
        _ => token,
    }
}

// Digits too long for i64 saturate in the direction of their sign.
fn parse_saturating(token: &str) -> i64 {
    token.parse::<i64>().unwrap_or(if token.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}
