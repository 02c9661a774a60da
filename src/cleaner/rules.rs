use once_cell::sync::Lazy;
use regex::Regex;

use super::LineRule;

static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]").expect("valid ordinal regex"));

/// Any token that starts with `#`
static HASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)#\S*").expect("valid hashtag regex"));

/// Always list markers
const BULLETS: [char; 6] = ['*', '•', '·', '–', '—', '_'];

/// Markers only when not attached to a number ("-5%", "~30%", ">10")
const SIGNS: [char; 3] = ['-', '~', '>'];

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

const QUOTE_CHARS: [char; 3] = ['"', '\u{201C}', '\u{201D}'];

pub struct TrimWhitespace;

impl LineRule for TrimWhitespace {
    fn name(&self) -> &'static str {
        "trim"
    }

    fn apply(&self, line: &str) -> String {
        line.trim().to_string()
    }
}

/// Removes numbering and bullets the model adds despite being told not to
pub struct StripListMarker;

impl LineRule for StripListMarker {
    fn name(&self) -> &'static str {
        "list-marker"
    }

    fn apply(&self, line: &str) -> String {
        let mut rest = line;
        while let Some(len) = marker_len(rest) {
            rest = rest[len..].trim_start();
        }
        rest.to_string()
    }
}

/// Byte length of the list marker at the start of `line`, if there is one
///
/// Ordinals and signs followed by a digit are part of a number ("3.5",
/// "-5%") and are left alone.
fn marker_len(line: &str) -> Option<usize> {
    let len = match ORDINAL.find(line) {
        Some(m) => m.end(),
        None => {
            let first = line.chars().next()?;
            if !BULLETS.contains(&first) && !SIGNS.contains(&first) {
                return None;
            }
            first.len_utf8()
        }
    };

    let digit_follows = line[len..].starts_with(|c: char| c.is_ascii_digit());
    if digit_follows && !line.starts_with(BULLETS) {
        return None;
    }
    Some(len)
}

pub struct StripHashtags;

impl LineRule for StripHashtags {
    fn name(&self) -> &'static str {
        "hashtags"
    }

    fn apply(&self, line: &str) -> String {
        HASHTAG.replace_all(line, " ").into_owned()
    }
}

/// Straight and curly double quotes
pub struct StripQuotes;

impl LineRule for StripQuotes {
    fn name(&self) -> &'static str {
        "quotes"
    }

    fn apply(&self, line: &str) -> String {
        line.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect()
    }
}

/// Collapses internal runs of whitespace left behind by removals
pub struct CollapseWhitespace;

impl LineRule for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse-whitespace"
    }

    fn apply(&self, line: &str) -> String {
        WHITESPACE_RUN.replace_all(line.trim(), " ").into_owned()
    }
}
