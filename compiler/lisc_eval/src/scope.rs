//! Lexical scope stack.
//!
//! One flat stack holds every visible binding, innermost last. A `let`
//! pushes its bindings as they are declared and pops all of them at once
//! when its body has produced a value. Configured globals sit below every
//! `let` binding and are never popped.

use rustc_hash::FxHashSet;

use crate::errors::EvalErrorKind;
use crate::suggest::suggest_similar;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Binding<'a> {
    name: &'a str,
    value: i64,
}

/// Stack of `(name, value)` bindings.
///
/// Names borrow from the evaluated input (or from the evaluator's globals),
/// so pushing a binding never allocates a string.
#[derive(Clone, Debug, Default)]
pub struct ScopeStack<'a> {
    bindings: Vec<Binding<'a>>,
    /// Number of bindings at the bottom that are globals.
    globals: usize,
}

impl<'a> ScopeStack<'a> {
    /// Create an empty stack with no globals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack seeded with globals. Later duplicates shadow earlier ones.
    pub fn with_globals(globals: impl IntoIterator<Item = (&'a str, i64)>) -> Self {
        let bindings: Vec<Binding<'a>> = globals
            .into_iter()
            .map(|(name, value)| Binding { name, value })
            .collect();
        let globals = bindings.len();
        ScopeStack { bindings, globals }
    }

    /// Push a binding, shadowing any visible binding of the same name.
    #[inline]
    pub fn push(&mut self, name: &'a str, value: i64) {
        tracing::trace!(name, value, depth = self.bindings.len(), "bind");
        self.bindings.push(Binding { name, value });
    }

    /// Remove the `n` most recently pushed bindings.
    ///
    /// Stops at the global region: globals are never removed.
    pub fn pop(&mut self, n: usize) {
        debug_assert!(
            n <= self.local_len(),
            "popping {n} bindings with only {} local",
            self.local_len()
        );
        let keep = self.bindings.len().saturating_sub(n).max(self.globals);
        tracing::trace!(count = n, depth = keep, "unbind");
        self.bindings.truncate(keep);
    }

    /// Resolve `name` to the value of its innermost binding.
    pub fn find(&self, name: &str) -> Result<i64, EvalErrorKind> {
        match self.bindings.iter().rev().find(|binding| binding.name == name) {
            Some(binding) => Ok(binding.value),
            None => Err(self.undefined(name)),
        }
    }

    #[cold]
    fn undefined(&self, name: &str) -> EvalErrorKind {
        EvalErrorKind::UndefinedVariable {
            name: name.to_owned(),
            similar: suggest_similar(name, self.visible_names()).map(str::to_owned),
        }
    }

    /// Names that resolve from the current position, innermost first.
    ///
    /// A name shadowed by an inner binding appears once.
    pub fn visible_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        let mut seen = FxHashSet::default();
        self.bindings
            .iter()
            .rev()
            .map(|binding| binding.name)
            .filter(move |name| seen.insert(*name))
    }

    /// Total number of bindings, globals included.
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if there are no bindings at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of bindings pushed above the globals.
    #[inline]
    pub fn local_len(&self) -> usize {
        self.bindings.len().saturating_sub(self.globals)
    }
}
