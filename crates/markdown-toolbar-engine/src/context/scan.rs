//! Whole-buffer scanners, one per inline construct.
//!
//! Each scanner walks matches left to right and returns the first one whose
//! span overlaps the selection. Leftmost wins, not innermost.

use std::sync::OnceLock;

use regex::Regex;

use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan, Italic, Link, LinkMatch, Strikethrough},
};
use crate::text::Span;

/// `{delim}(.+?){delim}`, lazily matching within one line.
fn delimited(delim: &str) -> String {
    let d = regex::escape(delim);
    format!("{d}(.+?){d}")
}

fn bold_regex() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    BOLD.get_or_init(|| Regex::new(&delimited(Bold::DELIM)).expect("Invalid bold regex"))
}

fn strikethrough_regex() -> &'static Regex {
    static STRIKE: OnceLock<Regex> = OnceLock::new();
    STRIKE.get_or_init(|| {
        Regex::new(&delimited(Strikethrough::DELIM)).expect("Invalid strikethrough regex")
    })
}

fn code_regex() -> &'static Regex {
    static CODE: OnceLock<Regex> = OnceLock::new();
    CODE.get_or_init(|| {
        let tick = regex::escape(CodeSpan::DELIM);
        Regex::new(&format!(r"{tick}([^{tick}\n]+){tick}")).expect("Invalid code span regex")
    })
}

fn link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| {
        let open = regex::escape(Link::TEXT_OPEN);
        let mid = regex::escape(Link::TEXT_CLOSE_URL_OPEN);
        let close = regex::escape(Link::URL_CLOSE);
        Regex::new(&format!(r"{open}([^\]\n]+){mid}([^{close}\n]+){close}"))
            .expect("Invalid link regex")
    })
}

fn first_overlapping(re: &Regex, text: &str, sel: Span) -> Option<Span> {
    re.find_iter(text)
        .map(|m| Span::new(m.start(), m.end()))
        .find(|m| m.overlaps(sel))
}

pub fn find_bold(text: &str, sel: Span) -> Option<Span> {
    first_overlapping(bold_regex(), text, sel)
}

pub fn find_strikethrough(text: &str, sel: Span) -> Option<Span> {
    first_overlapping(strikethrough_regex(), text, sel)
}

pub fn find_code(text: &str, sel: Span) -> Option<Span> {
    first_overlapping(code_regex(), text, sel)
}

pub fn find_link(text: &str, sel: Span) -> Option<LinkMatch> {
    link_regex().captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        let span = Span::new(whole.start(), whole.end());
        if !span.overlaps(sel) {
            return None;
        }
        Some(LinkMatch {
            span,
            text: caps.get(1)?.as_str().to_string(),
            url: caps.get(2)?.as_str().to_string(),
        })
    })
}

/// Italic needs "`*` not touching another `*`", which the regex crate cannot
/// express without lookaround, so it is scanned by hand.
pub fn find_italic(text: &str, sel: Span) -> Option<Span> {
    let mut cur = Cursor::new(text);
    while !cur.eof() {
        if let Some(m) = try_parse_italic(&mut cur) {
            if m.overlaps(sel) {
                return Some(m);
            }
            continue;
        }
        cur.bump();
    }
    None
}

/// Attempts an italic run at the cursor. On failure the cursor is restored.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<Span> {
    let delim = cur.peek()?;
    let star = match delim {
        Italic::STAR => true,
        Italic::UNDERSCORE => false,
        _ => return None,
    };
    if star && (cur.prev() == Some(Italic::STAR) || cur.peek_nth(1) == Some(Italic::STAR)) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    let inner_start = cur.pos();
    cur.bump_while(|b| b != delim && b != b'\n');

    let closed = cur.peek() == Some(delim)
        && cur.pos() > inner_start
        && !(star && cur.peek_nth(1) == Some(Italic::STAR));
    if !closed {
        *cur = saved;
        return None;
    }
    cur.bump();
    Some(Span::new(start, cur.pos()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(text: &str) -> Span {
        Span::new(0, text.len())
    }

    #[test]
    fn bold_is_non_greedy() {
        let text = "**a** and **b**";
        assert_eq!(find_bold(text, all(text)), Some(Span::new(0, 5)));
        assert_eq!(find_bold(text, Span::caret(12)), Some(Span::new(10, 15)));
    }

    #[test]
    fn bold_does_not_span_lines() {
        assert_eq!(find_bold("**a\nb**", Span::new(0, 7)), None);
    }

    #[test]
    fn italic_star_and_underscore() {
        assert_eq!(find_italic("an *em* word", Span::caret(5)), Some(Span::new(3, 7)));
        assert_eq!(find_italic("an _em_ word", Span::caret(5)), Some(Span::new(3, 7)));
    }

    #[test]
    fn italic_ignores_bold_runs() {
        let text = "**bold** text";
        assert_eq!(find_italic(text, all(text)), None);
    }

    #[test]
    fn italic_rejects_closing_star_before_another_star() {
        assert_eq!(find_italic("*a** b", Span::new(0, 6)), None);
    }

    #[test]
    fn italic_skips_unclosed_and_empty() {
        assert_eq!(find_italic("* list item", Span::new(0, 11)), None);
        assert_eq!(find_italic("__", Span::new(0, 2)), None);
    }

    #[test]
    fn italic_continues_past_non_overlapping_match() {
        let text = "*a* then *b*";
        assert_eq!(find_italic(text, Span::caret(10)), Some(Span::new(9, 12)));
    }

    #[test]
    fn italic_inside_multibyte_text() {
        let text = "café *très* bien";
        let m = find_italic(text, Span::caret(8)).unwrap();
        assert_eq!(&text[m.start..m.end], "*très*");
    }

    #[test]
    fn code_span_single_backticks() {
        let text = "use `x` here";
        assert_eq!(find_code(text, Span::caret(5)), Some(Span::new(4, 7)));
        assert_eq!(find_code("```\ncode\n```", Span::new(0, 12)), None);
    }

    #[test]
    fn link_extracts_parts() {
        let text = "see [GitHub](https://github.com) now";
        let link = find_link(text, Span::caret(6)).unwrap();
        assert_eq!(link.span, Span::new(4, 32));
        assert_eq!(link.text, "GitHub");
        assert_eq!(link.url, "https://github.com");
    }

    #[test]
    fn rendered_link_is_detected() {
        let text = Link::render("a b", "/x");
        let link = find_link(&text, Span::caret(1)).unwrap();
        assert_eq!(link.span, all(&text));
        assert_eq!((link.text.as_str(), link.url.as_str()), ("a b", "/x"));
    }

    #[test]
    fn link_url_ends_at_first_close() {
        let text = "[t](u)v)";
        assert_eq!(find_link(text, Span::caret(1)).map(|l| l.span), Some(Span::new(0, 6)));
    }

    #[test]
    fn strikethrough_match() {
        let text = "old ~~gone~~ new";
        assert_eq!(find_strikethrough(text, Span::caret(7)), Some(Span::new(4, 12)));
    }

    #[test]
    fn first_overlapping_match_wins() {
        let text = "**a** **b**";
        assert_eq!(find_bold(text, Span::new(3, 8)), Some(Span::new(0, 5)));
    }
}
