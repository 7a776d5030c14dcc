//! Cross-module test suites
//!
//! Unit tests live next to their modules; this directory holds the suites
//! that exercise the built-in catalog data and the composition flows
//! end to end.

#[cfg(test)]
mod catalog_data;
