//! # Constituency Tree
//!
//! A labeled, ordered tree representing the grammatical structure of a
//! sentence. Interior nodes carry a syntactic category label (`S`, `NP`,
//! `VP`, ...) and an ordered sequence of children; leaves carry raw words.
//!
//! Trees are produced by an external parser (see [`crate::parser`]) and are
//! read-only for the matcher. The bracketed Penn-Treebank surface form
//! emitted by annotation services is read with [`Tree::parse_bracketed`] and
//! written back by the [`std::fmt::Display`] impl.

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::map,
    multi::many0,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    /// Interior node: a syntactic category over an ordered child sequence.
    Node { label: String, children: Vec<Tree> },
    /// Leaf: a raw word, carrying no label.
    Leaf(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("Malformed bracketed tree near `{0}`")]
    Malformed(String),
    #[error("Empty input")]
    Empty,
}

impl Tree {
    pub fn node(label: impl Into<String>, children: Vec<Tree>) -> Tree {
        Tree::Node {
            label: label.into(),
            children,
        }
    }

    pub fn leaf(word: impl Into<String>) -> Tree {
        Tree::Leaf(word.into())
    }

    /// The degenerate tree: empty label, no children. Returned by parser
    /// adapters when a sentence cannot be parsed; it matches nothing but the
    /// universal empty pattern.
    pub fn empty() -> Tree {
        Tree::Node {
            label: String::new(),
            children: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Node { label, children } if label.is_empty() && children.is_empty())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// The node's own label; `None` for leaves, which carry only text.
    pub fn label(&self) -> Option<&str> {
        match self {
            Tree::Node { label, .. } => Some(label),
            Tree::Leaf(_) => None,
        }
    }

    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Node { children, .. } => children,
            Tree::Leaf(_) => &[],
        }
    }

    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Reads bracketed Penn-Treebank markup, e.g.
    /// `(NP (DT the) (NN car))`. Arbitrary whitespace between tokens is
    /// accepted; annotation servers pretty-print parses over several lines.
    pub fn parse_bracketed(input: &str) -> Result<Tree, TreeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(TreeError::Empty);
        }
        match node(trimmed) {
            Ok((rest, tree)) if rest.trim().is_empty() => Ok(tree),
            Ok((rest, _)) => Err(TreeError::Malformed(excerpt(rest))),
            Err(_) => Err(TreeError::Malformed(excerpt(trimmed))),
        }
    }

    /// Indented multi-line rendering for logs and debugging.
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::new();
        self.pretty_into(&mut out, 0);
        out
    }

    fn pretty_into(&self, out: &mut String, indent: usize) {
        match self {
            Tree::Leaf(word) => out.push_str(word),
            node if node.is_shallow() => out.push_str(&node.to_string()),
            Tree::Node { label, children } => {
                out.push('(');
                out.push_str(label);
                for child in children {
                    out.push('\n');
                    out.extend(std::iter::repeat(' ').take(indent + 2));
                    child.pretty_into(out, indent + 2);
                }
                out.push(')');
            }
        }
    }

    // Shallow = at most label → preterminal → word; rendered on one line.
    fn is_shallow(&self) -> bool {
        self.children().iter().all(|child| match child {
            Tree::Leaf(_) => true,
            Tree::Node { children, .. } => children.iter().all(Tree::is_leaf),
        })
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf(word) => write!(f, "{}", word),
            Tree::Node { label, children } => {
                write!(f, "({}", label)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

// Bracketed markup tokens never contain whitespace or parentheses.
fn word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '(' && c != ')')(input)
}

fn leaf(input: &str) -> IResult<&str, Tree> {
    map(word, |w: &str| Tree::Leaf(w.to_string()))(input)
}

fn node(input: &str) -> IResult<&str, Tree> {
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, label) = word(input)?;
    let (input, children) = many0(preceded(multispace0, alt((node, leaf))))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((
        input,
        Tree::Node {
            label: label.to_string(),
            children,
        },
    ))
}

fn excerpt(input: &str) -> String {
    input.chars().take(40).collect()
}
