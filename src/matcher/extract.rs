//! Extraction kinds: the transforms from a matched subtree to the text
//! bound under a `:name-kind` decoration. A plain `:name` binding keeps the
//! tree node itself and involves no transform.

use strum_macros::{AsRefStr, Display, EnumString};

use crate::tree::Tree;

/// Labels whose subtrees are elided by the object extraction.
const DETERMINER: &str = "DT";
const POSSESSIVE: &str = "POS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ExtractKind {
    /// The word sequence under the subtree, leaves verbatim, space-joined.
    Raw,
    /// `raw`, lowercased.
    RawLower,
    /// Like `raw`, but determiner and possessive-marker subtrees contribute
    /// nothing: `(NP (DT the) (NN car))` yields `"car"`.
    Object,
    /// `object`, lowercased.
    ObjectLower,
}

pub fn extract(kind: ExtractKind, tree: &Tree) -> String {
    match kind {
        ExtractKind::Raw => raw(tree),
        ExtractKind::RawLower => raw_lower(tree),
        ExtractKind::Object => object(tree),
        ExtractKind::ObjectLower => object_lower(tree),
    }
}

/// Reconstructs the original word sequence under the subtree.
pub fn raw(tree: &Tree) -> String {
    match tree {
        Tree::Leaf(word) => word.clone(),
        Tree::Node { children, .. } => {
            children.iter().map(raw).collect::<Vec<_>>().join(" ")
        }
    }
}

pub fn raw_lower(tree: &Tree) -> String {
    raw(tree).to_lowercase()
}

/// The "object" of the subtree: the word sequence with determiners and
/// possessive markers stripped, remaining fragments joined by single spaces.
pub fn object(tree: &Tree) -> String {
    match tree {
        Tree::Leaf(word) => word.clone(),
        Tree::Node { label, .. } if label == DETERMINER || label == POSSESSIVE => String::new(),
        Tree::Node { children, .. } => children
            .iter()
            .map(object)
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

pub fn object_lower(tree: &Tree) -> String {
    object(tree).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn the_red_car() -> Tree {
        Tree::node(
            "NP",
            vec![
                Tree::node("DT", vec![Tree::leaf("The")]),
                Tree::node("JJ", vec![Tree::leaf("red")]),
                Tree::node("NN", vec![Tree::leaf("car")]),
            ],
        )
    }

    #[test]
    fn test_kind_surface_names() {
        let test_cases = [
            ("raw", ExtractKind::Raw),
            ("raw-lower", ExtractKind::RawLower),
            ("object", ExtractKind::Object),
            ("object-lower", ExtractKind::ObjectLower),
        ];
        for (name, expected) in test_cases {
            assert_eq!(name.parse::<ExtractKind>().unwrap(), expected);
            assert_eq!(expected.to_string(), name);
        }
        assert!("o".parse::<ExtractKind>().is_err());
    }

    #[test]
    fn test_raw_preserves_words() {
        assert_eq!(raw(&the_red_car()), "The red car");
        assert_eq!(raw_lower(&the_red_car()), "the red car");
    }

    #[test]
    fn test_object_elides_determiner() {
        assert_eq!(object(&the_red_car()), "red car");
        assert_eq!(object_lower(&the_red_car()), "red car");
    }

    #[test]
    fn test_object_elides_possessive_marker() {
        // Sam's dog
        let tree = Tree::node(
            "NP",
            vec![
                Tree::node(
                    "NP",
                    vec![
                        Tree::node("NNP", vec![Tree::leaf("Sam")]),
                        Tree::node("POS", vec![Tree::leaf("'s")]),
                    ],
                ),
                Tree::node("NN", vec![Tree::leaf("dog")]),
            ],
        );
        assert_eq!(object(&tree), "Sam dog");
        assert_eq!(object_lower(&tree), "sam dog");
    }

    #[test]
    fn test_extract_on_leaf() {
        let leaf = Tree::leaf("Uber");
        assert_eq!(extract(ExtractKind::Raw, &leaf), "Uber");
        assert_eq!(extract(ExtractKind::ObjectLower, &leaf), "uber");
    }
}
