use thiserror::Error;

use super::token::{lex, RawToken, TemplateToken, TokenGroup};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("Bracket mismatch in template `{template}`")]
    BracketMismatch { template: String },
}

/// Tokenizes a template string into its nested group structure.
///
/// The outermost pair of brackets is implicit: `"( S ( NP ) ( VP ) )"`
/// yields the group `[S, [NP], [VP]]`. An empty template yields an empty
/// group, which matches any tree.
///
/// Fails with [`TemplateError::BracketMismatch`] when the nesting depth
/// underflows or does not return to zero at the end of the template.
#[tracing::instrument(level = "trace")]
pub fn tokenize(template: &str) -> Result<TokenGroup, TemplateError> {
    let tokens = lex(template);
    // Strip the enclosing bracket pair; short inputs have nothing inside.
    let inner = if tokens.len() <= 2 {
        &tokens[..0]
    } else {
        &tokens[1..tokens.len() - 1]
    };
    group(inner).ok_or_else(|| TemplateError::BracketMismatch {
        template: template.to_string(),
    })
}

// Single left-to-right scan tracking nesting depth; a nested group is
// captured exactly when depth returns to the enclosing level. Returns None
// on depth underflow or unclosed groups.
fn group(tokens: &[RawToken]) -> Option<TokenGroup> {
    let mut out = TokenGroup::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            RawToken::Open => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            RawToken::Close => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
                if depth == 0 {
                    out.push(TemplateToken::Group(group(&tokens[start + 1..i])?));
                }
            }
            RawToken::Symbol(s) => {
                if depth == 0 {
                    out.push(TemplateToken::Symbol(s.clone()));
                }
            }
        }
    }
    if depth != 0 {
        return None;
    }
    Some(out)
}
