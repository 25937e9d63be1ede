use async_trait::async_trait;
use tracing::warn;

use crate::tree::Tree;

use super::{strip_root, SentenceParser};

/// In-process adapter: the input line is already bracketed constituency
/// markup, as produced offline or kept in fixtures. No network access.
#[derive(Debug, Clone, Default)]
pub struct BracketedParser;

impl BracketedParser {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SentenceParser for BracketedParser {
    async fn parse(&self, line: &str) -> Tree {
        match Tree::parse_bracketed(line) {
            Ok(tree) => strip_root(tree),
            Err(error) => {
                warn!(parser = self.name(), %error, "falling back to the empty tree");
                Tree::empty()
            }
        }
    }

    fn name(&self) -> &str {
        "bracketed"
    }
}
