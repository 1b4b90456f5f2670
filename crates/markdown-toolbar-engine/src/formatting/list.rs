use log::debug;
use serde::{Deserialize, Serialize};

use super::FormattingResult;
use crate::{
    context::kinds::{ListKind, ListLine, ListMarker},
    text::Span,
};

/// Which marker to apply when turning lines into a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    Bullet,
    Numbered,
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Splits leading whitespace from the rest of a non-list line.
pub(crate) fn split_indent(line: &str) -> (&str, &str) {
    let content = line.trim_start();
    (&line[..line.len() - content.len()], content)
}

/// Rewrites each list line through `f`; blank and non-list lines pass through.
fn map_items(lines: &[&str], f: impl Fn(ListLine<'_>) -> String) -> Vec<String> {
    lines
        .iter()
        .map(|line| match ListMarker::split(line) {
            Some(item) if !is_blank(line) => f(item),
            _ => line.to_string(),
        })
        .collect()
}

/// Formats exactly the lines of `sel`; callers expand to line boundaries
/// beforehand.
///
/// - every non-blank line is a list item of one kind: markers are removed
/// - every non-blank line is a list item, kinds mixed: all become bullets
/// - otherwise every non-blank line gets a `list_type` marker, numbering
///   from 1 regardless of existing numbers
///
/// Blank lines are never touched.
pub(crate) fn format_list(text: &str, sel: Span, list_type: ListType) -> FormattingResult {
    let lines: Vec<&str> = text[sel.start..sel.end].split('\n').collect();
    let kinds: Vec<ListKind> = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| ListMarker::classify(line))
        .collect();

    let rewritten = if kinds.iter().all(|k| *k != ListKind::None) {
        if kinds.windows(2).all(|w| w[0] == w[1]) {
            debug!("list: removing markers from {} lines", kinds.len());
            map_items(&lines, |item| format!("{}{}", item.indent, item.content))
        } else {
            debug!("list: normalising {} mixed items to bullets", kinds.len());
            map_items(&lines, |item| {
                format!("{}{}{}", item.indent, ListMarker::BULLET, item.content)
            })
        }
    } else {
        debug!("list: adding {list_type:?} markers to {} lines", kinds.len());
        add_markers(&lines, list_type)
    };

    let block = rewritten.join("\n");
    let mut out = String::with_capacity(text.len() + block.len());
    out.push_str(&text[..sel.start]);
    out.push_str(&block);
    out.push_str(&text[sel.end..]);
    FormattingResult::new(out, Span::new(sel.start, sel.start + block.len()))
}

fn add_markers(lines: &[&str], list_type: ListType) -> Vec<String> {
    let mut n = 0usize;
    lines
        .iter()
        .map(|line| {
            if is_blank(line) {
                return line.to_string();
            }
            n += 1;
            let (indent, content) = match ListMarker::split(line) {
                Some(item) => (item.indent, item.content),
                None => split_indent(line),
            };
            match list_type {
                ListType::Bullet => format!("{indent}{}{content}", ListMarker::BULLET),
                ListType::Numbered => format!("{indent}{}{content}", ListMarker::numbered(n)),
            }
        })
        .collect()
}
