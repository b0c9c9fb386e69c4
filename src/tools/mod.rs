//! The tools module provides the user-facing helpers for hufftree.
//!
//! The tools are:
//! - cli: Command line interface for the demo binary, plus the parsers
//!   that turn its text arguments into alphabets, bit sequences and
//!   messages.
//! - freq_count: Frequency count over message symbols, used by encode
//!   mode to derive an alphabet when none is given.
//!
pub mod cli;
pub mod freq_count;
