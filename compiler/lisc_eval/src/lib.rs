#![deny(clippy::arithmetic_side_effects)]
//! Lisc Eval - single-pass evaluator for `add` / `mult` / `let` expressions.
//!
//! Scanning and evaluation are fused into one forward pass over the input.
//! Nothing in this crate recurses: nesting lives in two explicit stacks.
//!
//! # Architecture
//!
//! - [`ScopeStack`]: flat stack of `(name, value)` bindings, innermost
//!   last, with configured globals at the bottom
//! - [`FrameStack`]: one [`Frame`] per open form, updated in place as
//!   operands arrive
//! - the driver: reads one token at a time, decides with
//!   [`classify_identifier`] whether a name inside `let` is a declaration or
//!   a reference, and feeds every produced value to the top frame
//! - [`Evaluator`] / [`EvaluatorBuilder`]: configuration (globals, depth
//!   limit) and the public entry point
//!
//! # Example
//!
//! ```
//! use lisc_eval::{evaluate, Evaluator};
//!
//! assert_eq!(evaluate("(let x 2 (mult x (add x 1)))"), Ok(6));
//!
//! let evaluator = Evaluator::builder().global("ten", 10).build();
//! assert_eq!(evaluator.evaluate("(add ten 1)"), Ok(11));
//! ```

mod builder;
mod diagnostics;
mod driver;
mod errors;
mod frame;
mod scope;
mod suggest;

pub use builder::{evaluate, Evaluator, EvaluatorBuilder};
pub use driver::{classify_identifier, IdentRole};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use frame::{Frame, FrameStack};
pub use scope::ScopeStack;
