//! Portable integer types and cheap byte-mixing primitives for
//! coverage-guided fuzzing instrumentation.
//!
//! A coverage-guided fuzzer instruments every branch of its target and
//! folds control-flow edges into a fixed-size bitmap. The items here are
//! the numeric vocabulary of that instrumentation layer: the width-exact
//! aliases in [`types`] behave identically on 32-bit and 64-bit builds,
//! and the [`swap16`]/[`swap32`] mixing rounds in [`mix`] are applied
//! while hashing edge identifiers into the bitmap.
//!
//! The rest of the crate is a handful of one-line utilities the hashing
//! and scheduling paths lean on: [`min!`]/[`max!`] selection,
//! [`likely`]/[`unlikely`] branch hints, a compiler-ordering
//! [`mem_barrier`], and [`rand_below`], which reduces the output of any
//! [`rand_core::RngCore`] source into an index range.
//!
//! Nothing in this crate is cryptographic. The mixing rounds are fixed,
//! non-keyed byte permutations whose only requirements are determinism
//! and low computational cost; do not reuse them for any security
//! property.

#![deny(missing_docs, missing_debug_implementations)]

pub use rand_core;

pub mod mix;
pub mod types;

pub use crate::mix::{swap16, swap32};

use core::sync::atomic::{compiler_fence, Ordering};

use rand_core::RngCore;

/// Compile-time stringification of the given tokens.
///
/// Re-export of [`core::stringify!`], kept so instrumentation code can
/// pull its whole vocabulary from one crate.
pub use core::stringify;

/// Select the lesser of two values.
///
/// Expands to the comparison `if a > b { b } else { a }`, so it accepts
/// any identically typed [`PartialOrd`] pair, floats included. Each
/// argument is evaluated exactly once, in order.
///
/// ```
/// assert_eq!(fuzz_primitives::min!(3u32, 8), 3);
/// assert_eq!(fuzz_primitives::min!(0.5f64, -1.0), -1.0);
/// ```
#[macro_export]
macro_rules! min {
    ($a:expr, $b:expr $(,)?) => {{
        let a = $a;
        let b = $b;
        if a > b {
            b
        } else {
            a
        }
    }};
}

/// Select the greater of two values.
///
/// Counterpart of [`min!`]; the same single-evaluation guarantee
/// applies.
///
/// ```
/// assert_eq!(fuzz_primitives::max!(3u32, 8), 8);
/// assert_eq!(fuzz_primitives::max!(-2i64, -9), -2);
/// ```
#[macro_export]
macro_rules! max {
    ($a:expr, $b:expr $(,)?) => {{
        let a = $a;
        let b = $b;
        if a > b {
            a
        } else {
            b
        }
    }};
}

#[cold]
fn cold() {}

/// Branch hint: `cond` is expected to be true almost every time.
///
/// Purely advisory. The unexpected side is routed through a `#[cold]`
/// function to nudge code layout; the returned value is always exactly
/// `cond`.
#[inline(always)]
pub fn likely(cond: bool) -> bool {
    if !cond {
        cold();
    }
    cond
}

/// Branch hint: `cond` is expected to be false almost every time.
///
/// See [`likely`].
#[inline(always)]
pub fn unlikely(cond: bool) -> bool {
    if cond {
        cold();
    }
    cond
}

/// Keep the compiler from reordering memory operations across this
/// point.
///
/// This is a compiler-level fence only: it emits no hardware fence and
/// gives no cross-thread visibility guarantee. Callers synchronizing
/// between threads must pair it with an atomic or a platform fence of
/// their own.
#[inline(always)]
pub fn mem_barrier() {
    compiler_fence(Ordering::SeqCst);
}

/// Draw the next value from `rng` and reduce it into `[0, limit)`.
///
/// The reduction is a plain modulo, so whatever bias the source carries
/// for bounds that do not divide `2^32` passes through unchanged.
/// Mutation scheduling only needs cheap, roughly uniform picks.
///
/// # Panics
///
/// Panics if `limit` is zero.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(17);
/// let pick = fuzz_primitives::rand_below(&mut rng, 8);
/// assert!(pick < 8);
/// ```
#[inline]
pub fn rand_below<R: RngCore + ?Sized>(rng: &mut R, limit: u32) -> u32 {
    rng.next_u32() % limit
}
