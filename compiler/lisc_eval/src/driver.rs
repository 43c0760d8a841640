//! The evaluation state machine.
//!
//! One loop iteration reads one token and dispatches on its kind:
//!
//! | token            | action                                          |
//! |------------------|-------------------------------------------------|
//! | `(add` / `(mult` / `(let` | push a fresh frame                     |
//! | identifier       | declare inside `let`, otherwise resolve and feed |
//! | integer          | feed                                            |
//! | `)`              | pop the top frame and feed its value            |
//! | end of input     | error: a form is still open (or input is empty) |
//!
//! Feeding a value with no open frame finishes evaluation.

use lisc_ir::Span;
use lisc_lexer::{Form, Scanner, Token, TokenKind};

use crate::errors::{EvalError, EvalErrorKind, EvalResult};
use crate::frame::{Frame, FrameStack};
use crate::scope::ScopeStack;

/// How an identifier is read at its position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IdentRole {
    /// Names the next binding of the enclosing `let`.
    Declare,
    /// Resolves to the value of a visible binding.
    Reference,
}

/// Decide whether an identifier declares a binding or references one.
///
/// It declares only when the innermost frame is a `let` with no pending
/// name and the identifier is not immediately followed by `)`. In
/// `(let x 1 x)` the first `x` declares and the last is the body.
pub fn classify_identifier(top: Option<&Frame<'_>>, followed_by_close: bool) -> IdentRole {
    match top {
        Some(Frame::Let {
            pending_name: None, ..
        }) if !followed_by_close => IdentRole::Declare,
        _ => IdentRole::Reference,
    }
}

/// Outcome of feeding one value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Done(i64),
}

pub(crate) struct Driver<'a> {
    scanner: Scanner<'a>,
    frames: FrameStack<'a>,
    scopes: ScopeStack<'a>,
}

impl<'a> Driver<'a> {
    pub(crate) fn new(scanner: Scanner<'a>, frames: FrameStack<'a>, scopes: ScopeStack<'a>) -> Self {
        Driver {
            scanner,
            frames,
            scopes,
        }
    }

    /// Evaluate the whole input to a single value.
    pub(crate) fn run(mut self) -> EvalResult {
        loop {
            let token = self.scanner.next_token()?;
            tracing::trace!(
                kind = token.kind.name(),
                text = token.text,
                depth = self.frames.len(),
                "token"
            );

            let step = match token.kind {
                TokenKind::Open(form) => {
                    self.open_form(form, token.span)?;
                    Step::Continue
                }
                TokenKind::Ident => self.identifier(token)?,
                TokenKind::Int(value) => self.feed(value, token.span)?,
                TokenKind::Close => self.close_form(token.span)?,
                TokenKind::Eof => {
                    return Err(
                        EvalError::new(EvalErrorKind::UnexpectedEndOfInput, token.span)
                            .with_enclosing(self.frames.top_span()),
                    );
                }
            };

            if let Step::Done(value) = step {
                self.expect_end()?;
                return Ok(value);
            }
        }
    }

    fn open_form(&mut self, form: Form, span: Span) -> EvalResult<()> {
        self.frames.push(Frame::open(form, span)).map_err(|kind| {
            EvalError::new(kind, span).with_enclosing(self.frames.top_span())
        })
    }

    fn identifier(&mut self, token: Token<'a>) -> EvalResult<Step> {
        let followed_by_close = self.scanner.at_close();
        match classify_identifier(self.frames.peek_top(), followed_by_close) {
            IdentRole::Declare => {
                if let Some(Frame::Let { pending_name, .. }) = self.frames.peek_top_mut() {
                    *pending_name = Some(token);
                }
                Ok(Step::Continue)
            }
            IdentRole::Reference => {
                let value = self.scopes.find(token.text).map_err(|kind| {
                    EvalError::new(kind, token.span).with_enclosing(self.frames.top_span())
                })?;
                self.feed(value, token.span)
            }
        }
    }

    fn close_form(&mut self, span: Span) -> EvalResult<Step> {
        let frame = self
            .frames
            .pop()
            .map_err(|kind| EvalError::new(kind, span))?;
        match frame.value() {
            Some(value) => self.feed(value, frame.opener().merge(span)),
            None => Err(EvalError::new(
                EvalErrorKind::IncompleteForm { form: frame.form() },
                span,
            )
            .with_enclosing(Some(frame.opener()))),
        }
    }

    /// Hand a produced value to the innermost frame.
    ///
    /// `span` covers the input that produced the value.
    fn feed(&mut self, value: i64, span: Span) -> EvalResult<Step> {
        let Some(top) = self.frames.peek_top_mut() else {
            return Ok(Step::Done(value));
        };

        match top {
            Frame::Add {
                accumulator,
                awaiting_first_operand,
                opener,
            } => {
                if !fold_operand(accumulator, awaiting_first_operand, value, i64::checked_add) {
                    return Err(overflow(Form::Add, span, *opener));
                }
            }
            Frame::Mult {
                accumulator,
                awaiting_first_operand,
                opener,
            } => {
                if !fold_operand(accumulator, awaiting_first_operand, value, i64::checked_mul) {
                    return Err(overflow(Form::Mult, span, *opener));
                }
            }
            Frame::Let {
                bound_count,
                pending_name,
                opener,
            } => match pending_name.take() {
                Some(name) => {
                    self.scopes.push(name.text, value);
                    *bound_count = bound_count.saturating_add(1);
                }
                None => {
                    let opener = *opener;
                    self.scopes.pop(*bound_count);
                    *top = Frame::Value {
                        result: value,
                        opener,
                    };
                }
            },
            Frame::Value { opener, .. } => {
                return Err(EvalError::new(EvalErrorKind::UnexpectedOperand, span)
                    .with_enclosing(Some(*opener)));
            }
        }
        Ok(Step::Continue)
    }

    /// After the final value, only end of input may follow.
    fn expect_end(&mut self) -> EvalResult<()> {
        let next = self.scanner.next_token()?;
        if next.kind == TokenKind::Eof {
            Ok(())
        } else {
            Err(EvalError::new(EvalErrorKind::TrailingInput, next.span))
        }
    }
}

/// Fold `value` into an `add`/`mult` accumulator.
///
/// Returns `false` if `combine` overflowed; the accumulator is unchanged.
fn fold_operand(
    accumulator: &mut i64,
    awaiting_first_operand: &mut bool,
    value: i64,
    combine: fn(i64, i64) -> Option<i64>,
) -> bool {
    if *awaiting_first_operand {
        *accumulator = value;
        *awaiting_first_operand = false;
        return true;
    }
    match combine(*accumulator, value) {
        Some(result) => {
            *accumulator = result;
            true
        }
        None => false,
    }
}

#[cold]
fn overflow(operation: Form, span: Span, opener: Span) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation }, span).with_enclosing(Some(opener))
}

#[cfg(test)]
mod tests;
