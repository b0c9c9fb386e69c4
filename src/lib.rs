//! Weighted prefix-code trees: build them, encode against them, decode
//! with them.
//!
//! A code tree assigns each symbol of an alphabet a variable length bit
//! code, chosen so that no code is the prefix of another. Decoding is a
//! walk: start at the root, take the left child on 0 and the right child
//! on 1, and emit a symbol whenever the walk lands on a leaf. Encoding is
//! the reverse lookup of the path to a symbol's leaf. `build_tree` puts
//! heavy symbols near the root, so the more frequent a symbol the shorter
//! its code.
//!
//! Basic usage to decode a bit string against a weighted alphabet:
//!
//! `$> hufftree -w "A:5,B:2,C:1" 011010010`
//!
//! Or to encode a message, deriving the weights from the message itself:
//!
//! `$> hufftree -e "B A B C B A"`
//!
pub mod coding;
pub mod error;
pub mod tools;
pub mod tree;

pub use coding::{choose_branch, code_table, decode, encode, encode_symbol};
pub use error::{Error, Result};
pub use tree::{build_tree, merge, Node, NodeKind};
