//! Error types for hufftree.

use thiserror::Error;

use crate::tree::NodeKind;

/// Result type alias for hufftree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or driving a code tree.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A bit directive was something other than 0 or 1.
    #[error("invalid bit: {bit} (a bit directive must be 0 or 1)")]
    InvalidBit { bit: u8 },

    /// A variant-specific operation was applied to the wrong node variant.
    #[error("node type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: NodeKind, found: NodeKind },

    /// The bit sequence ran out part way through a code. `position` is the
    /// index just past the last completely decoded code.
    #[error("bit sequence ended inside a code (last complete code ended at bit {position})")]
    IncompleteCode { position: usize },

    /// The same symbol was supplied twice when building a tree.
    #[error("duplicate symbol in alphabet: {symbol}")]
    DuplicateSymbol { symbol: String },

    /// A symbol to encode does not occur anywhere in the tree.
    #[error("symbol not in tree: {symbol}")]
    UnknownSymbol { symbol: String },

    /// A tree was requested for an alphabet with no symbols at all.
    #[error("cannot build a tree from an empty alphabet")]
    EmptyAlphabet,

    /// Bad command line input.
    #[error("config error: {0}")]
    Config(String),
}
