/// Strong emphasis, `**text**`.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static str = "**";
}

/// Emphasis, `*text*` or `_text_`.
///
/// A `*` touching another `*` belongs to a bold run and never delimits italic.
pub struct Italic;

impl Italic {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    /// Delimiter written when applying italic.
    pub const DELIM: &'static str = "*";
}

/// GFM strikethrough, `~~text~~`.
pub struct Strikethrough;

impl Strikethrough {
    pub const DELIM: &'static str = "~~";
}
