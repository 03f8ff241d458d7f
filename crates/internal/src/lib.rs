//! Internal shared helpers for the purecrypt library
//!
//! Every primitive in the purecrypt ecosystem shares the same small set of
//! low-level concerns: packing bytes into words with an explicit byte order,
//! rotating words, and comparing secret data without data-dependent timing.
//! Those helpers live here so that the implementation crates do not each
//! grow a private copy.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constant_time;
pub mod endian;
pub mod rotate;
