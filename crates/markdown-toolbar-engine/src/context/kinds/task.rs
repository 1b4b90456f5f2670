use std::sync::OnceLock;

use regex::Regex;

/// A task checkbox on a bullet line, `- [ ] todo` or `- [x] done`.
pub struct TaskBox;

/// A parsed task line. `state_at` is the byte offset, relative to the line,
/// of the character between the brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLine {
    pub checked: bool,
    pub state_at: usize,
}

impl TaskBox {
    pub const UNCHECKED: &'static str = "[ ] ";
    pub const CHECKED_MARK: &'static str = "x";
    pub const UNCHECKED_MARK: &'static str = " ";

    pub fn parse(line: &str) -> Option<TaskLine> {
        let caps = task_regex().captures(line)?;
        let state = caps.get(1)?;
        Some(TaskLine {
            checked: state.as_str() != " ",
            state_at: state.start(),
        })
    }
}

fn task_regex() -> &'static Regex {
    static TASK: OnceLock<Regex> = OnceLock::new();
    TASK.get_or_init(|| {
        Regex::new(r"^\s*[-*+]\s+\[([ xX])\](?:\s|$)").expect("Invalid task regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unchecked_and_checked() {
        assert_eq!(
            TaskBox::parse("- [ ] write tests"),
            Some(TaskLine {
                checked: false,
                state_at: 3
            })
        );
        assert_eq!(
            TaskBox::parse("  * [X] done"),
            Some(TaskLine {
                checked: true,
                state_at: 5
            })
        );
        assert!(TaskBox::parse("- [x]").is_some());
    }

    #[test]
    fn rejects_non_tasks() {
        assert_eq!(TaskBox::parse("- plain item"), None);
        assert_eq!(TaskBox::parse("[ ] no bullet"), None);
        assert_eq!(TaskBox::parse("1. [ ] numbered"), None);
        assert_eq!(TaskBox::parse("- [y] odd"), None);
    }
}
