use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Classification of a single line as a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    #[default]
    None,
    Bullet,
    Numbered,
}

/// A list line split into its parts. `indent` + `marker` + separator +
/// `content` reproduces the original line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub kind: ListKind,
    pub indent: &'a str,
    pub marker: &'a str,
    pub content: &'a str,
}

pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [&'static str; 3] = ["- ", "* ", "+ "];
    /// Marker written when creating bullet items.
    pub const BULLET: &'static str = "- ";

    /// Classifies a line by its trimmed start.
    pub fn classify(line: &str) -> ListKind {
        let t = line.trim();
        if Self::BULLETS.iter().any(|b| t.starts_with(*b)) {
            ListKind::Bullet
        } else if numbered_regex().is_match(t) {
            ListKind::Numbered
        } else {
            ListKind::None
        }
    }

    /// Splits a list line into indent, marker and content. Returns `None` for
    /// lines that do not classify as list items.
    pub fn split(line: &str) -> Option<ListLine<'_>> {
        let kind = Self::classify(line);
        if kind == ListKind::None {
            return None;
        }
        let caps = marker_regex().captures(line)?;
        let indent = caps.get(1)?.as_str();
        let marker = caps.get(2)?.as_str();
        let whole = caps.get(0)?;
        Some(ListLine {
            kind,
            indent,
            marker,
            content: &line[whole.end()..],
        })
    }

    /// Marker text for the `n`th item of a numbered list.
    pub fn numbered(n: usize) -> String {
        format!("{n}. ")
    }
}

fn numbered_regex() -> &'static Regex {
    static NUMBERED: OnceLock<Regex> = OnceLock::new();
    NUMBERED.get_or_init(|| Regex::new(r"^\d+\.\s").expect("Invalid numbered list regex"))
}

fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"^(\s*)([-*+]|\d+\.)\s+").expect("Invalid list marker regex")
    })
}
