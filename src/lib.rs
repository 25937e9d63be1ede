//! # Sylva: Rule Matching over Constituency Parse Trees
//!
//! Sylva matches compact bracketed templates against constituency parse
//! trees, extracting named bindings from the matched positions and
//! optionally dispatching them to an action handler.
//!
//! ## Matching Pipeline
//!
//! ```text
//! Template string → Tokenizer → Token Matcher → Context(s) → Action Invoker
//! ```
//!
//! ### Stage 1: Template Tokenization
//!
//! The [`template`] module turns a bracketed pattern string such as
//! `"( S ( NP ) ( VP ) )"` into a nested token structure mirroring the
//! parenthesis nesting. Decorations on the tokens (bindings, equality
//! constraints, the arity marker) are not interpreted at this stage.
//!
//! ### Stage 2: Token Matching
//!
//! The [`matcher`] module recursively compares a compiled [`Template`]
//! against one [`Tree`] node, producing pass/fail and a flat [`Context`] of
//! named bindings. Extraction kinds turn a bound subtree into text
//! ([`matcher::extract`]).
//!
//! ### Stage 3: Rule Resolution
//!
//! A [`RuleSet`] maps templates to sub-rule sets keyed by binding name.
//! [`RuleSet::resolve`] commits to the first template whose surface pattern
//! matches; [`RuleSet::resolve_all`] enumerates every combination of
//! ambiguous sub-matches via a Cartesian product.
//!
//! ### Stage 4: Action Dispatch
//!
//! [`RuleSet::apply`] filters a resolved context down to a handler's
//! declared parameter names and invokes it.
//!
//! ## Collaborators
//!
//! Trees come from an external constituency parser behind the
//! [`parser::SentenceParser`] capability trait, with adapters for a remote
//! CoreNLP annotation server and for already-bracketed input, selected via
//! [`config`]. Per-user bindings can be kept across matches in a
//! [`context_store::ContextStore`].

pub mod config;
pub mod context_store;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod template;
pub mod tree;

// Re-exports
pub use error::{Error, Result};
pub use matcher::{match_template, Context, MatchError, Rule, RuleSet, Template, Value};
pub use tree::Tree;
