use std::collections::HashMap;

use crate::tree::Tree;

/// A value bound by a template match.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'t> {
    /// The matched tree node itself, available for recursive sub-matching.
    Node(&'t Tree),
    /// Text extracted from the matched subtree.
    Text(String),
}

impl<'t> Value<'t> {
    pub fn as_node(&self) -> Option<&'t Tree> {
        match self {
            Value::Node(node) => Some(node),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Node(_) => None,
        }
    }
}

/// Binding names to bound values. Names are unique within one resolved
/// context; when nested rule levels reuse a name, the innermost successful
/// binding wins.
pub type Context<'t> = HashMap<String, Value<'t>>;

/// Snapshot of the textual bindings of a context, detached from the tree's
/// lifetime. Node bindings are skipped. Suitable for a
/// [`crate::context_store::ContextStore`].
pub fn text_bindings(context: &Context<'_>) -> HashMap<String, String> {
    context
        .iter()
        .filter_map(|(name, value)| value.as_text().map(|text| (name.clone(), text.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_bindings_skips_nodes() {
        let tree = Tree::leaf("mother");
        let mut context = Context::new();
        context.insert("relation".to_string(), Value::Text("mother".to_string()));
        context.insert("subj_t".to_string(), Value::Node(&tree));

        let snapshot = text_bindings(&context);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("relation").map(String::as_str), Some("mother"));
    }
}
