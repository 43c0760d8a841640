//! `Evaluator` and its builder.

use lisc_lexer::Scanner;

use crate::driver::Driver;
use crate::errors::EvalResult;
use crate::frame::FrameStack;
use crate::scope::ScopeStack;

/// Configured evaluator.
///
/// Immutable once built; every [`evaluate`](Evaluator::evaluate) call owns
/// its own stacks, so one evaluator can serve many inputs (and threads).
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    globals: Vec<(String, i64)>,
    max_depth: Option<usize>,
}

impl Evaluator {
    /// Evaluator with no globals and no depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    /// Configured globals, in definition order.
    pub fn globals(&self) -> impl Iterator<Item = (&str, i64)> {
        self.globals.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Maximum number of simultaneously open forms, if limited.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Evaluate one expression.
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn evaluate(&self, input: &str) -> EvalResult {
        let scanner = Scanner::new(input)?;
        let scopes = ScopeStack::with_globals(self.globals());
        let frames = FrameStack::with_max_depth(self.max_depth);

        let result = Driver::new(scanner, frames, scopes).run();
        match &result {
            Ok(value) => tracing::debug!(value, "evaluated"),
            Err(err) => tracing::debug!(code = %err.code(), span = %err.span, "{err}"),
        }
        result
    }
}

/// Builder for [`Evaluator`].
///
/// ```
/// use lisc_eval::Evaluator;
///
/// let evaluator = Evaluator::builder()
///     .global("width", 4)
///     .global("height", 3)
///     .max_depth(64)
///     .build();
/// assert_eq!(evaluator.evaluate("(mult width height)"), Ok(12));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EvaluatorBuilder {
    globals: Vec<(String, i64)>,
    max_depth: Option<usize>,
}

impl EvaluatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a global binding, visible everywhere unless shadowed by `let`.
    ///
    /// Defining the same name again replaces the earlier value.
    #[must_use]
    pub fn global(mut self, name: impl Into<String>, value: i64) -> Self {
        self.globals.push((name.into(), value));
        self
    }

    /// Limit how many forms may be open at once.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn build(self) -> Evaluator {
        Evaluator {
            globals: self.globals,
            max_depth: self.max_depth,
        }
    }
}

/// Evaluate one expression with the default [`Evaluator`].
pub fn evaluate(input: &str) -> EvalResult {
    Evaluator::new().evaluate(input)
}
