//! The coding module drives bit sequences through a code tree.
//!
//! Decoding walks the tree one bit at a time: 0 selects the left child, 1
//! selects the right, and arriving at a leaf emits that leaf's symbol and
//! puts the walk back at the root. Encoding is the inverse: a symbol's
//! code is the path from the root down to its leaf.
//!
//! No leaf sits on the path to another leaf, so codes need no separators
//! and an encoded message is simply its codes laid end to end.
//!
pub mod decode;
pub mod encode;

pub use decode::{choose_branch, decode};
pub use encode::{code_table, encode, encode_symbol};
