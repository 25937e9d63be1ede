//! # Token Matcher and Rule Engines
//!
//! The matching primitive ([`Template::match_tree`]) recursively compares a
//! tokenized template against one tree node, producing pass/fail and a flat
//! [`Context`] of named bindings. On top of it sit two rule-traversal
//! engines:
//!
//! * [`RuleSet::resolve`] — deterministic single-match mode: templates are
//!   tried in declared order and the first whose surface pattern matches
//!   commits.
//! * [`RuleSet::resolve_all`] — exhaustive multi-match mode: every matching
//!   template contributes the Cartesian product of its sub-key context
//!   sequences.
//!
//! [`action`] holds the optional dispatch glue that filters a resolved
//! context down to a handler's declared parameter names.

pub mod action;
pub mod context;
pub mod extract;
pub mod matcher;
pub mod rules;

pub use action::select_args;
pub use context::{text_bindings, Context, Value};
pub use extract::{extract, object, object_lower, raw, raw_lower, ExtractKind};
pub use matcher::{match_template, MatchError, MatchResult, Template};
pub use rules::{Rule, RuleSet};
