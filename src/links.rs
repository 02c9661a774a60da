use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DISPLAY_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:https?://|www\.)\S+").expect("valid link regex"));

static REFERENCE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));

/// Piece of a line as it should be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link { display: &'a str, href: String },
}

/// Statistic text paired with the source it cites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "text")]
    pub display_text: String,
    #[serde(rename = "link")]
    pub url: String,
}

/// Split a line into plain text and links. Bare `www.` links get an
/// `http://` href.
pub fn segments(line: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;

    for m in DISPLAY_LINK.find_iter(line) {
        if m.start() > last {
            out.push(Segment::Text(&line[last..m.start()]));
        }
        let display = m.as_str();
        let href = if display.starts_with("www.") {
            format!("http://{}", display)
        } else {
            display.to_string()
        };
        out.push(Segment::Link { display, href });
        last = m.end();
    }

    if last < line.len() {
        out.push(Segment::Text(&line[last..]));
    }
    out
}

/// Text before the first `http(s)` URL, and that URL
///
/// Quotes are dropped from the text, and the separator the model puts
/// before the link (`;`, `.`, `-`) is trimmed off the end.
pub fn extract_reference(line: &str) -> Option<Reference> {
    let m = REFERENCE_URL.find(line)?;
    let display_text: String = line[..m.start()]
        .chars()
        .filter(|c| *c != '"')
        .collect::<String>()
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ';' | '.' | '-' | ':'))
        .trim_start()
        .to_string();

    Some(Reference {
        display_text,
        url: m.as_str().to_string(),
    })
}

/// Render a line for a terminal, marking links as `<href>`
pub fn render_plain(line: &str) -> String {
    segments(line)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.to_string(),
            Segment::Link { href, .. } => format!("<{}>", href),
        })
        .collect()
}
