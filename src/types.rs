//! Width-exact integer aliases shared by the instrumentation layer.
//!
//! Rust's primitive integers already have a fixed width on every
//! supported target, so each alias maps straight onto the matching
//! primitive. In particular the unsigned 64-bit alias needs no
//! target-conditional definition: `u64` holds and formats its full
//! value range through [`core::fmt::Display`] identically on 32-bit and
//! 64-bit builds. The aliases exist so instrumentation code reads the
//! same across the signed and unsigned families.

#![allow(non_camel_case_types)]

/// Unsigned 8-bit value.
pub type u8 = core::primitive::u8;

/// Unsigned 16-bit value.
pub type u16 = core::primitive::u16;

/// Unsigned 32-bit value.
pub type u32 = core::primitive::u32;

/// Unsigned 64-bit value, on 32-bit and 64-bit targets alike.
pub type u64 = core::primitive::u64;

/// Signed 8-bit value.
pub type s8 = core::primitive::i8;

/// Signed 16-bit value.
pub type s16 = core::primitive::i16;

/// Signed 32-bit value.
pub type s32 = core::primitive::i32;

/// Signed 64-bit value.
pub type s64 = core::primitive::i64;
