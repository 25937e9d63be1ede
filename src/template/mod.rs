//! # Template Mini-Language
//!
//! Templates are bracketed pattern strings describing a desired tree shape
//! plus binding and filter decorations:
//!
//! ```text
//! ( LABEL[/LABEL2...][:name[-kind]][=alt1|alt2] CHILD... [$] )
//! ```
//!
//! * `LABEL` — node label to match, `.` for wildcard, `/` for alternation
//! * `:name` — bind the matched node under `name`; `:name-kind` binds text
//!   extracted with `kind` (see [`crate::matcher::ExtractKind`])
//! * `=w1|w2` — require the subtree's lowercase text to be one of the words
//! * `$` — trailing exact-arity marker
//!
//! This module only tokenizes: it turns the template string into a nested
//! [`TokenGroup`] mirroring the parenthesis nesting. Decorations stay raw
//! strings here and are interpreted by the matcher.

pub mod token;
pub mod tokenizer;

pub use token::{RawToken, TemplateToken, TokenGroup};
pub use tokenizer::{tokenize, TemplateError};
