//! Shortest round-trip binary-to-decimal floating point conversion.
//!
//! Given a binary floating point value with up to 128 significand bits,
//! this crate produces the decimal representation with the fewest
//! digits that parses back to the exact same binary value under
//! round-to-nearest-even.
//!
//! The caller supplies either a raw IEEE 754 interchange encoding
//! ([`Decimal::from_bits`]) or an already decomposed value
//! ([`convert`]); the result is a [`Decimal`], a plain
//! `sign * digits * 10^exponent` triple. Rendering the triple as text
//! and parsing text back into a binary float are left to the caller.

#![allow(clippy::unusual_byte_groupings)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), deny(clippy::std_instead_of_core))]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::ptr_as_ptr)]
#![deny(clippy::string_slice)]
#![deny(clippy::transmute_ptr_to_ptr)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

// The reciprocal constants and table limbs are written out in
// little-endian order.
#[cfg(target_endian = "big")]
compile_error!("big-endian targets are not supported");

mod arith;
mod convert;
mod dec;
mod pow5;
mod tables;
mod uint256;
mod util;

pub use convert::convert;
pub use dec::Decimal;
