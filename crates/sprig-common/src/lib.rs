//! Common utilities for the Sprig parser.
//!
//! This crate provides shared infrastructure used by the parser and the driver:
//! - **Source Loader** - reads a markup file into a resident, NUL-free buffer
//! - **Warning System** - de-duplicated warnings routed through `log`

pub mod source;
pub mod warning;
