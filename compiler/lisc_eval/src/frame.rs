//! Expression frames and the frame stack.
//!
//! Each open form owns one [`Frame`] on the [`FrameStack`]. Operands are
//! folded into the top frame in place; a frame is popped only by the `)`
//! that closes its form.

use lisc_ir::Span;
use lisc_lexer::{Form, Token};
use smallvec::SmallVec;

use crate::errors::EvalErrorKind;

/// One open (or just-finished) form.
///
/// Every variant records the span of its opener so that errors can point
/// back at the unfinished form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Frame<'a> {
    /// `(add ...`: running sum of the operands seen so far.
    Add {
        accumulator: i64,
        awaiting_first_operand: bool,
        opener: Span,
    },
    /// `(mult ...`: running product of the operands seen so far.
    Mult {
        accumulator: i64,
        awaiting_first_operand: bool,
        opener: Span,
    },
    /// `(let ...` still reading bindings.
    ///
    /// `pending_name` is set between a declared name and its value.
    Let {
        bound_count: usize,
        pending_name: Option<Token<'a>>,
        opener: Span,
    },
    /// A `let` whose body has been evaluated; waiting for its `)`.
    Value { result: i64, opener: Span },
}

impl<'a> Frame<'a> {
    /// Fresh frame for a form opened at `opener`.
    pub fn open(form: Form, opener: Span) -> Self {
        match form {
            Form::Add => Frame::Add {
                accumulator: 0,
                awaiting_first_operand: true,
                opener,
            },
            Form::Mult => Frame::Mult {
                accumulator: 0,
                awaiting_first_operand: true,
                opener,
            },
            Form::Let => Frame::Let {
                bound_count: 0,
                pending_name: None,
                opener,
            },
        }
    }

    /// The value of a finished frame.
    ///
    /// `None` while the form has not produced a value yet: an `add` or
    /// `mult` with no operands, or a `let` still reading bindings.
    pub fn value(&self) -> Option<i64> {
        match *self {
            Frame::Add {
                accumulator,
                awaiting_first_operand,
                ..
            }
            | Frame::Mult {
                accumulator,
                awaiting_first_operand,
                ..
            } => (!awaiting_first_operand).then_some(accumulator),
            Frame::Let { .. } => None,
            Frame::Value { result, .. } => Some(result),
        }
    }

    /// The form this frame was opened for.
    pub fn form(&self) -> Form {
        match self {
            Frame::Add { .. } => Form::Add,
            Frame::Mult { .. } => Form::Mult,
            Frame::Let { .. } | Frame::Value { .. } => Form::Let,
        }
    }

    /// Span of the `(add`, `(mult` or `(let` that opened this frame.
    pub fn opener(&self) -> Span {
        match *self {
            Frame::Add { opener, .. }
            | Frame::Mult { opener, .. }
            | Frame::Let { opener, .. }
            | Frame::Value { opener, .. } => opener,
        }
    }
}

/// Stack of open frames, innermost last.
///
/// Shallow expressions stay inline; deeper nesting spills to the heap.
#[derive(Clone, Debug, Default)]
pub struct FrameStack<'a> {
    frames: SmallVec<[Frame<'a>; 8]>,
    max_depth: Option<usize>,
}

impl<'a> FrameStack<'a> {
    /// Create an unbounded frame stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame stack holding at most `max_depth` frames (`None` for unbounded).
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        FrameStack {
            frames: SmallVec::new(),
            max_depth,
        }
    }

    /// Push a frame, checking the depth limit.
    ///
    /// The frame is not pushed when the limit is reached.
    pub fn push(&mut self, frame: Frame<'a>) -> Result<(), EvalErrorKind> {
        if let Some(limit) = self.max_depth {
            if self.frames.len() >= limit {
                return Err(EvalErrorKind::DepthLimitExceeded { limit });
            }
        }
        tracing::trace!(form = %frame.form(), depth = self.frames.len(), "open");
        self.frames.push(frame);
        Ok(())
    }

    /// Pop the innermost frame.
    pub fn pop(&mut self) -> Result<Frame<'a>, EvalErrorKind> {
        let frame = self.frames.pop().ok_or(EvalErrorKind::StackUnderflow)?;
        tracing::trace!(form = %frame.form(), depth = self.frames.len(), "close");
        Ok(frame)
    }

    /// The innermost frame, if any.
    #[inline]
    pub fn peek_top(&self) -> Option<&Frame<'a>> {
        self.frames.last()
    }

    /// Mutable access to the innermost frame, for in-place updates.
    #[inline]
    pub fn peek_top_mut(&mut self) -> Option<&mut Frame<'a>> {
        self.frames.last_mut()
    }

    /// Opener span of the innermost frame.
    #[inline]
    pub fn top_span(&self) -> Option<Span> {
        self.peek_top().map(Frame::opener)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
