/// Single-backtick inline code. Embedded or escaped backticks are not
/// supported; the first closing tick ends the span.
pub struct CodeSpan;

impl CodeSpan {
    pub const DELIM: &'static str = "`";
}
