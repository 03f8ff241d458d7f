//! Algorithm parameters for the purecrypt library
//!
//! This crate centralizes the fixed constants of the algorithms implemented
//! in the purecrypt ecosystem so that implementation crates and callers
//! agree on sizes by construction.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod utils;
