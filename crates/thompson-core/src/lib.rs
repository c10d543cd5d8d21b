#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared display primitives for the thompson workspace.
//!
//! Both the library (trace and dump output) and the CLI format state ids,
//! state sets and input strings the same way; the helpers live here so the
//! two never drift apart.

pub mod colors;
pub mod utils;

#[cfg(test)]
mod colors_tests;
#[cfg(test)]
mod utils_tests;

pub use colors::Colors;
