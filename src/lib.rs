//! Split a file into numbered parts by count or size, and join them back.
//!
//! Layers, innermost first:
//! - [`domain`]: split plans and part naming, no I/O
//! - [`application`]: split/join services over the [`infrastructure::traits::FileSystem`] boundary
//! - [`infrastructure`]: real filesystem and service wiring
//! - [`cli`]: argument parsing, dispatch and exit codes

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
