use log::debug;

use super::{
    FormattingResult,
    list::{is_blank, split_indent},
};
use crate::{
    context::kinds::{ListKind, ListMarker, TaskBox},
    text::Span,
};

/// Toggles task checkboxes over the lines of `sel`.
///
/// When every non-blank line is already a task, the boxes flip together: all
/// checked become unchecked, anything else becomes checked. Otherwise each
/// non-task line is turned into an unchecked task.
pub(crate) fn toggle_task(text: &str, sel: Span) -> FormattingResult {
    let lines: Vec<&str> = text[sel.start..sel.end].split('\n').collect();
    let tasks: Vec<_> = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| TaskBox::parse(line))
        .collect();

    let rewritten: Vec<String> = if !tasks.is_empty() && tasks.iter().all(Option::is_some) {
        let check = !tasks.iter().flatten().all(|t| t.checked);
        debug!("task: setting {} boxes to checked={check}", tasks.len());
        let mark = if check {
            TaskBox::CHECKED_MARK
        } else {
            TaskBox::UNCHECKED_MARK
        };
        lines
            .iter()
            .map(|line| match TaskBox::parse(line) {
                Some(task) => {
                    let mut out = line.to_string();
                    out.replace_range(task.state_at..task.state_at + 1, mark);
                    out
                }
                None => line.to_string(),
            })
            .collect()
    } else {
        debug!("task: converting lines to tasks");
        lines.iter().map(|line| to_task(line)).collect()
    };

    let block = rewritten.join("\n");
    let mut out = String::with_capacity(text.len() + block.len());
    out.push_str(&text[..sel.start]);
    out.push_str(&block);
    out.push_str(&text[sel.end..]);
    FormattingResult::new(out, Span::new(sel.start, sel.start + block.len()))
}

fn to_task(line: &str) -> String {
    if is_blank(line) || TaskBox::parse(line).is_some() {
        return line.to_string();
    }
    match ListMarker::split(line) {
        Some(item) if item.kind == ListKind::Bullet => {
            format!("{}{} {}{}", item.indent, item.marker, TaskBox::UNCHECKED, item.content)
        }
        Some(item) => format!(
            "{}{}{}{}",
            item.indent,
            ListMarker::BULLET,
            TaskBox::UNCHECKED,
            item.content
        ),
        None => {
            let (indent, content) = split_indent(line);
            format!("{indent}{}{}{content}", ListMarker::BULLET, TaskBox::UNCHECKED)
        }
    }
}
