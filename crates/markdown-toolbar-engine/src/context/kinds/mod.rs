//! # Construct Kinds
//!
//! Each construct owns its delimiters. The scanner patterns are built from
//! these constants and the formatters write them back out.
//!
//! - **`Bold`**, **`Italic`**, **`Strikethrough`**: emphasis delimiters
//! - **`CodeSpan`**: single-backtick inline code
//! - **`Link`**: `[text](url)` pieces and the extracted [`LinkMatch`]
//! - **`ListMarker`**: bullet/numbered line markers and [`ListKind`]
//! - **`TaskBox`**: `[ ]` / `[x]` checkboxes on bullet lines
//! - **`CodeFence`**: fenced block openers and closers

pub mod code_fence;
pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod list;
pub mod task;

pub use code_fence::{CodeFence, FenceKind};
pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic, Strikethrough};
pub use link::{Link, LinkMatch};
pub use list::{ListKind, ListLine, ListMarker};
pub use task::{TaskBox, TaskLine};
