//! Action dispatch glue.
//!
//! A handler declares the parameter names it cares about; the invoker
//! filters a resolved context down to those names and calls the handler
//! with the filtered argument map. Parameters absent from the context are
//! simply omitted: the handler supplies its own defaults.

use crate::tree::Tree;

use super::context::Context;
use super::matcher::MatchResult;
use super::rules::RuleSet;

/// Filters a context down to the handler's declared parameter names.
pub fn select_args<'t>(context: &Context<'t>, params: &[&str]) -> Context<'t> {
    params
        .iter()
        .filter_map(|&param| {
            context
                .get(param)
                .map(|value| (param.to_string(), value.clone()))
        })
        .collect()
}

impl RuleSet {
    /// Single-match resolution followed by action dispatch: on a match,
    /// invokes `handler` with the context filtered down to `params`.
    pub fn apply<'t, R>(
        &self,
        tree: &'t Tree,
        params: &[&str],
        handler: impl FnOnce(Context<'t>) -> R,
    ) -> MatchResult<Option<R>> {
        match self.resolve(tree)? {
            Some(context) => Ok(Some(handler(select_args(&context, params)))),
            None => Ok(None),
        }
    }

    /// Multi-match variant: invokes `handler` once per resolved context and
    /// collects the results.
    pub fn apply_all<'t, R>(
        &self,
        tree: &'t Tree,
        params: &[&str],
        mut handler: impl FnMut(Context<'t>) -> R,
    ) -> MatchResult<Vec<R>> {
        let contexts = self.resolve_all(tree)?;
        Ok(contexts
            .into_iter()
            .map(|context| handler(select_args(&context, params)))
            .collect())
    }
}
