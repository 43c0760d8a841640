//! Lisc IR - types shared by every stage of the lisc evaluator.
//!
//! Only source locations live here today. The scanner, the evaluator and
//! the diagnostic renderer all agree on [`Span`] so that an error raised
//! deep inside the driver can point back at the exact bytes of the input.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;

pub use span::{Span, SpanError};
