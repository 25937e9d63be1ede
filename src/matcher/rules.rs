use crate::template::TemplateError;
use crate::tree::Tree;

use super::context::{Context, Value};
use super::matcher::{MatchResult, Template};

/// One template plus the sub-rule sets applied to its bindings.
///
/// A rule with no sub-rules is a leaf: match and stop. A composite rule
/// names bindings produced by its own template (plain `:name` node
/// bindings) and resolves each against its own rule set.
#[derive(Debug, Clone)]
pub struct Rule {
    template: Template,
    subrules: Vec<(String, RuleSet)>,
}

impl Rule {
    pub fn leaf(template: &str) -> Result<Rule, TemplateError> {
        Ok(Rule {
            template: Template::compile(template)?,
            subrules: Vec::new(),
        })
    }

    pub fn with_subrules(
        template: &str,
        subrules: Vec<(&str, RuleSet)>,
    ) -> Result<Rule, TemplateError> {
        Ok(Rule {
            template: Template::compile(template)?,
            subrules: subrules
                .into_iter()
                .map(|(name, rules)| (name.to_string(), rules))
                .collect(),
        })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }
}

/// An ordered set of rules.
///
/// Order is significant in single-match mode (the first template whose
/// surface pattern matches wins) and immaterial in multi-match mode.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> RuleSet {
        RuleSet { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Resolves a tree against this rule set in single-match mode with a
    /// fresh empty context.
    pub fn resolve<'t>(&self, tree: &'t Tree) -> MatchResult<Option<Context<'t>>> {
        self.resolve_seeded(tree, &Context::new())
    }

    /// Single-match resolution seeded with a parent context.
    ///
    /// Templates are tried in declared order; the engine commits to the
    /// first one whose surface pattern matches. If a committed template
    /// then fails to resolve one of its sub-rule keys (the key was never
    /// bound to a node, or its rule set does not match the bound subtree),
    /// the whole resolution returns `None`: later templates are *not*
    /// tried. This commit-then-fail policy is part of the engine's
    /// contract and is relied on by existing rule sets.
    pub fn resolve_seeded<'t>(
        &self,
        tree: &'t Tree,
        parent: &Context<'t>,
    ) -> MatchResult<Option<Context<'t>>> {
        for rule in &self.rules {
            let mut context = parent.clone();
            match rule.template.match_tree(tree)? {
                Some(bindings) => context.extend(bindings),
                None => continue,
            }
            for (key, subrules) in &rule.subrules {
                let node = match context.get(key).and_then(Value::as_node) {
                    Some(node) => node,
                    None => return Ok(None),
                };
                match subrules.resolve_seeded(node, &context)? {
                    Some(child_context) => context.extend(child_context),
                    None => return Ok(None),
                }
            }
            return Ok(Some(context));
        }
        Ok(None)
    }

    /// Resolves a tree against this rule set in multi-match mode with a
    /// fresh empty context.
    pub fn resolve_all<'t>(&self, tree: &'t Tree) -> MatchResult<Vec<Context<'t>>> {
        self.resolve_all_seeded(tree, &Context::new())
    }

    /// Multi-match resolution seeded with a parent context.
    ///
    /// Every template is tried. A matching template with sub-rule keys
    /// contributes the Cartesian product of its per-key context sequences,
    /// merged onto its own bindings; a key that resolves to nothing empties
    /// the template's whole contribution. Results are concatenated across
    /// templates.
    ///
    /// The number of produced contexts is the product of the branching
    /// factors of the ambiguous sub-keys; callers needing bounded latency
    /// must cap ambiguity depth or result count themselves.
    pub fn resolve_all_seeded<'t>(
        &self,
        tree: &'t Tree,
        parent: &Context<'t>,
    ) -> MatchResult<Vec<Context<'t>>> {
        let mut results = Vec::new();
        for rule in &self.rules {
            let mut context = parent.clone();
            match rule.template.match_tree(tree)? {
                Some(bindings) => context.extend(bindings),
                None => continue,
            }

            // Alternative contexts accumulated across the declared keys.
            let mut combos = vec![context.clone()];
            let mut annihilated = false;
            for (key, subrules) in &rule.subrules {
                let node = match context.get(key).and_then(Value::as_node) {
                    Some(node) => node,
                    None => {
                        annihilated = true;
                        break;
                    }
                };
                let alternatives = subrules.resolve_all_seeded(node, &context)?;
                if alternatives.is_empty() {
                    // A Cartesian product with an empty factor is empty.
                    annihilated = true;
                    break;
                }
                let mut next = Vec::with_capacity(combos.len() * alternatives.len());
                for combo in &combos {
                    for alternative in &alternatives {
                        let mut merged = combo.clone();
                        merged.extend(
                            alternative
                                .iter()
                                .map(|(name, value)| (name.clone(), value.clone())),
                        );
                        next.push(merged);
                    }
                }
                combos = next;
            }
            if !annihilated {
                results.extend(combos);
            }
        }
        Ok(results)
    }
}
