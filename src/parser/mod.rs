//! # Sentence Parser Adapters
//!
//! The matcher consumes trees; it has no linguistic knowledge of its own.
//! Trees come from an external constituency parser behind the
//! [`SentenceParser`] capability trait, with two independent adapters
//! selected by explicit configuration:
//!
//! * [`CoreNlpParser`] — HTTP calls to a remote CoreNLP annotation server
//! * [`BracketedParser`] — in-process reader for already-bracketed input
//!
//! Adapters never surface failures to the core: a sentence that cannot be
//! parsed yields the degenerate empty tree, which matches nothing but the
//! universal empty pattern.

pub mod bracketed;
pub mod corenlp;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ParserConfig;
use crate::tree::Tree;

pub use bracketed::BracketedParser;
pub use corenlp::CoreNlpParser;

/// Capability interface over an external constituency parser.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SentenceParser: Send + Sync {
    /// Parses a sentence into a constituency tree. On failure the adapter
    /// logs and returns [`Tree::empty`]; callers that need to distinguish
    /// can check [`Tree::is_empty`].
    async fn parse(&self, sentence: &str) -> Tree;

    fn name(&self) -> &str;
}

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Annotation request failed: {0}")]
    Request(String),
    #[error("Malformed annotation response: {0}")]
    MalformedResponse(String),
}

/// Builds the configured parser adapter.
pub fn from_config(config: &ParserConfig) -> Arc<dyn SentenceParser> {
    match config {
        ParserConfig::CoreNlpServer(config) => Arc::new(CoreNlpParser::new(config.clone())),
        ParserConfig::Bracketed => Arc::new(BracketedParser::new()),
    }
}

// Annotation servers wrap every parse in a ROOT node; matching starts at
// the sentence node below it.
pub(crate) fn strip_root(tree: Tree) -> Tree {
    match tree {
        Tree::Node { label, mut children } if label == "ROOT" && children.len() == 1 => {
            children.remove(0)
        }
        other => other,
    }
}
