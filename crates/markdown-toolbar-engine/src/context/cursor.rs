/// A byte cursor over the document for delimiter scanning.
///
/// Only ASCII delimiters are ever compared, so stepping byte-wise never lands
/// a reported position inside a multi-byte character.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a [u8],
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s: s.as_bytes(),
            i: 0,
        }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current one.
    pub fn peek_nth(&self, n: usize) -> Option<u8> {
        self.s.get(self.i + n).copied()
    }

    /// The byte just before the cursor.
    pub fn prev(&self) -> Option<u8> {
        self.i.checked_sub(1).and_then(|j| self.s.get(j).copied())
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances while `pred` holds for the current byte.
    pub fn bump_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.prev(), None);
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.prev(), Some(b'h'));
        assert_eq!(cur.peek_nth(1), Some(b'l'));
    }

    #[test]
    fn empty_string_input() {
        let mut cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn bump_while_stops_at_predicate() {
        let mut cur = Cursor::new("abc*def");
        cur.bump_while(|b| b != b'*');
        assert_eq!(cur.pos(), 3);
        assert_eq!(cur.peek(), Some(b'*'));
    }

    #[test]
    fn bump_while_runs_to_eof() {
        let mut cur = Cursor::new("abc");
        cur.bump_while(|_| true);
        assert!(cur.eof());
        assert_eq!(cur.peek_nth(0), None);
    }
}
