use thiserror::Error;
use tracing::debug;

use crate::template::{tokenize, TemplateError, TemplateToken, TokenGroup};
use crate::tree::Tree;

use super::context::{Context, Value};
use super::extract::{extract, raw_lower, ExtractKind};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    /// A malformed rule, not a data condition: surfaced immediately instead
    /// of being folded into a no-match.
    #[error("Unknown extraction kind `{kind}` for binding `{name}`")]
    UnknownExtractKind { name: String, kind: String },
    #[error("Template group starts with a nested group; expected a label token")]
    NestedHead,
}

pub type MatchResult<T> = Result<T, MatchError>;

/// A compiled template pattern.
///
/// Compilation tokenizes the bracketed source once; rule sets hold compiled
/// templates and traverse them read-only at match time.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    tokens: TokenGroup,
}

impl Template {
    pub fn compile(source: &str) -> Result<Template, TemplateError> {
        let tokens = tokenize(source)?;
        Ok(Template {
            source: source.to_string(),
            tokens,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Matches this template against a tree node.
    ///
    /// Returns the named bindings on success and `None` on no-match.
    /// Bindings are collected into a scratch map, so a failed attempt never
    /// leaks partial bindings to the caller.
    pub fn match_tree<'t>(&self, tree: &'t Tree) -> MatchResult<Option<Context<'t>>> {
        let mut bindings = Context::new();
        if match_group(tree, &self.tokens, &mut bindings)? {
            debug!(template = %self.source, "matched template");
            Ok(Some(bindings))
        } else {
            Ok(None)
        }
    }
}

/// Tokenizes and matches a template string in one step.
pub fn match_template<'t>(tree: &'t Tree, template: &str) -> MatchResult<Option<Context<'t>>> {
    Template::compile(template)?.match_tree(tree)
}

// Decorations parsed off a group's head token, in fixed precedence:
// the `=...` equality suffix first, then the `:name[-kind]` binding suffix,
// leaving the bare label spec.
struct HeadSpec<'a> {
    labels: &'a str,
    binding: Option<BindingSpec<'a>>,
    equals: Option<Vec<String>>,
}

struct BindingSpec<'a> {
    name: &'a str,
    kind: Option<ExtractKind>,
}

fn parse_head(token: &str) -> MatchResult<HeadSpec<'_>> {
    let (rest, equals) = match token.split_once('=') {
        Some((head, words)) => {
            let words: Vec<String> = words.to_lowercase().split('|').map(String::from).collect();
            (head, Some(words))
        }
        None => (token, None),
    };
    let (labels, binding) = match rest.split_once(':') {
        Some((labels, bind)) => {
            let binding = match bind.split_once('-') {
                Some((name, kind)) => BindingSpec {
                    name,
                    kind: Some(kind.parse().map_err(|_| MatchError::UnknownExtractKind {
                        name: name.to_string(),
                        kind: kind.to_string(),
                    })?),
                },
                None => BindingSpec { name: bind, kind: None },
            };
            (labels, Some(binding))
        }
        None => (rest, None),
    };
    Ok(HeadSpec {
        labels,
        binding,
        equals,
    })
}

fn label_matches(spec: &str, label: &str) -> bool {
    spec == "." || spec.split('/').any(|alternative| alternative == label)
}

/// Recursively matches one token group against one tree position, writing
/// bindings into `bindings` as it goes. Callers that need leak-free failure
/// pass a scratch map (see [`Template::match_tree`]).
fn match_group<'t>(
    tree: &'t Tree,
    group: &[TemplateToken],
    bindings: &mut Context<'t>,
) -> MatchResult<bool> {
    // An empty group under-specifies: any remaining subtree is accepted.
    if group.is_empty() {
        return Ok(true);
    }

    // A leaf has no label or children left to match a non-empty group.
    let label = match tree.label() {
        Some(label) => label,
        None => return Ok(false),
    };

    let head = match &group[0] {
        TemplateToken::Symbol(symbol) => symbol.as_str(),
        TemplateToken::Group(_) => return Err(MatchError::NestedHead),
    };
    let spec = parse_head(head)?;

    if let Some(words) = &spec.equals {
        let text = raw_lower(tree);
        if !words.iter().any(|word| *word == text) {
            return Ok(false);
        }
    }

    if let Some(binding) = &spec.binding {
        let value = match binding.kind {
            Some(kind) => Value::Text(extract(kind, tree)),
            None => Value::Node(tree),
        };
        bindings.insert(binding.name.to_string(), value);
    }

    if !label_matches(spec.labels, label) {
        return Ok(false);
    }

    // `$` as the final token forces the child count to equal the declared
    // pattern length exactly.
    let mut tokens = group;
    if matches!(tokens.last(), Some(TemplateToken::Symbol(s)) if s == "$") {
        tokens = &tokens[..tokens.len() - 1];
        if tree.child_count() + 1 != tokens.len() {
            return Ok(false);
        }
    }

    // Without `$` the pattern is a prefix: the tree needs at least as many
    // children as declared; extra trailing children are ignored.
    if tree.child_count() + 1 < tokens.len() {
        return Ok(false);
    }

    for (child, token) in tree.children().iter().zip(&tokens[1..]) {
        let matched = match token {
            TemplateToken::Group(child_group) => match_group(child, child_group, bindings)?,
            symbol @ TemplateToken::Symbol(_) => {
                match_group(child, std::slice::from_ref(symbol), bindings)?
            }
        };
        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixture(markup: &str) -> Tree {
        Tree::parse_bracketed(markup).unwrap()
    }

    #[test]
    fn test_match_labels_positionally() {
        let tree = fixture("(S (NP (PRP me)) (VP (VB go)))");
        assert!(match_template(&tree, "( S ( NP ) ( VP ) )")
            .unwrap()
            .is_some());
        assert!(match_template(&tree, "( S ( VP ) ( NP ) )")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_bindings_with_kinds() {
        let tree = fixture("(NP (PRP$ my) (NN mother))");
        let context =
            match_template(&tree, "( NP ( PRP$:subject-raw-lower=my ) ( NN:relation-raw-lower ) )")
                .unwrap()
                .expect("template should match");
        assert_eq!(context.get("subject").and_then(Value::as_text), Some("my"));
        assert_eq!(
            context.get("relation").and_then(Value::as_text),
            Some("mother")
        );
    }

    #[test]
    fn test_node_binding_without_kind() {
        let tree = fixture("(S (NP (PRP me)))");
        let context = match_template(&tree, "( S ( NP:subj_t ) )")
            .unwrap()
            .expect("template should match");
        let node = context.get("subj_t").and_then(Value::as_node).unwrap();
        assert_eq!(node, &tree.children()[0]);
    }

    #[test]
    fn test_equality_constraint() {
        let tree = fixture("(PRP$ My)");
        assert!(match_template(&tree, "( PRP$=my|your )").unwrap().is_some());
        assert!(match_template(&tree, "( PRP$=his|her )").unwrap().is_none());
    }

    #[test]
    fn test_wildcard_label() {
        let tree = fixture("(FRAG (NN thing))");
        assert!(match_template(&tree, "( . ( NN ) )").unwrap().is_some());
    }

    #[test]
    fn test_label_alternation() {
        for label in ["WHNP", "WHADVP"] {
            let tree = Tree::node(label, vec![Tree::leaf("what")]);
            assert!(match_template(&tree, "( WHNP/WHADVP:qtype-raw )")
                .unwrap()
                .is_some());
        }
        let tree = Tree::node("WHPP", vec![Tree::leaf("with")]);
        assert!(match_template(&tree, "( WHNP/WHADVP:qtype-raw )")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_insufficient_children() {
        let tree = fixture("(S (NP (PRP me)) (VP (VB go)))");
        assert!(match_template(&tree, "( S ( NP ) ( VP ) ( PP ) )")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_extra_children_are_ignored_without_arity_marker() {
        let tree = fixture("(S (NP (PRP me)) (VP (VB go)) (X (XX x)))");
        assert!(match_template(&tree, "( S ( NP ) ( VP ) )")
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_arity_marker_requires_exact_count() {
        let exact = fixture("(S (NP (PRP me)) (VP (VB go)))");
        assert!(match_template(&exact, "( S ( NP ) ( VP ) $ )")
            .unwrap()
            .is_some());

        let extra = fixture("(S (NP (PRP me)) (VP (VB go)) (X (XX x)))");
        assert!(match_template(&extra, "( S ( NP ) ( VP ) $ )")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_arity_marker_alone_never_matches() {
        let tree = fixture("($ 100)");
        assert!(match_template(&tree, "( $ )").unwrap().is_none());
    }

    #[test]
    fn test_leaf_position_with_tokens_fails() {
        let tree = fixture("(NN mother)");
        // The NN node matches; descending a group into its leaf does not.
        assert!(match_template(&tree, "( NN ( NN ) )").unwrap().is_none());
    }

    #[test]
    fn test_empty_template_matches_anything() {
        assert!(match_template(&Tree::empty(), "( )").unwrap().is_some());
        let tree = fixture("(S (NP (PRP me)))");
        assert!(match_template(&tree, "( )").unwrap().is_some());
    }

    #[test]
    fn test_degenerate_tree_matches_nothing_labeled() {
        assert!(match_template(&Tree::empty(), "( S )").unwrap().is_none());
    }

    #[test]
    fn test_unknown_extraction_kind_is_fatal() {
        let tree = fixture("(NN mother)");
        let err = match_template(&tree, "( NN:relation-o )").unwrap_err();
        assert_eq!(
            err,
            MatchError::UnknownExtractKind {
                name: "relation".to_string(),
                kind: "o".to_string(),
            }
        );
    }

    #[test]
    fn test_bracket_mismatch_surfaces() {
        let tree = fixture("(NN mother)");
        assert!(matches!(
            match_template(&tree, "( NN"),
            Err(MatchError::Template(_))
        ));
    }

    #[test]
    fn test_failed_attempt_leaks_no_bindings() {
        let tree = fixture("(S (NP (PRP me)) (VP (VB go)))");
        // NP binds before the VP group fails on its label.
        let result = match_template(&tree, "( S ( NP:subj_t ) ( PP ) )").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_bare_symbol_child_matches_as_group() {
        let tree = fixture("(NP (DT the) (NN car))");
        let context = match_template(&tree, "( NP DT NN:item-object )")
            .unwrap()
            .expect("bare symbols should match like singleton groups");
        assert_eq!(context.get("item").and_then(Value::as_text), Some("car"));
    }
}
