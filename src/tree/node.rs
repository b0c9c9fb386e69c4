use std::fmt;
use std::slice;

use crate::error::{Error, Result};

/// The two node variants. Carried in type mismatch errors so callers can
/// see which variant an operation wanted and which it got.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NodeKind {
    Leaf,
    Internal,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Leaf => write!(f, "leaf"),
            NodeKind::Internal => write!(f, "internal"),
        }
    }
}

/// One node of a prefix-code tree.
///
/// A `Leaf` binds a single symbol to its weight. An `Internal` node holds
/// its two subtrees along with the aggregate symbol list (left symbols
/// followed by right symbols) and aggregate weight (sum of both children),
/// both fixed at construction time. Walking left is bit 0, walking right
/// is bit 1, so the path from the root to a leaf is that symbol's code.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: u32,
    },
    Internal {
        left: Box<Node<S>>,
        right: Box<Node<S>>,
        symbols: Vec<S>,
        weight: u32,
    },
}

impl<S> Node<S> {
    /// Create a new leaf node
    pub fn leaf(symbol: S, weight: u32) -> Node<S> {
        Node::Leaf { symbol, weight }
    }

    /// Which variant this node is
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Leaf { .. } => NodeKind::Leaf,
            Node::Internal { .. } => NodeKind::Internal,
        }
    }

    /// True for a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol of a leaf. Asking an internal node is a `TypeMismatch`.
    pub fn symbol(&self) -> Result<&S> {
        match self {
            Node::Leaf { symbol, .. } => Ok(symbol),
            Node::Internal { .. } => Err(Error::TypeMismatch {
                expected: NodeKind::Leaf,
                found: NodeKind::Internal,
            }),
        }
    }

    /// The weight of a leaf. Asking an internal node is a `TypeMismatch`.
    pub fn leaf_weight(&self) -> Result<u32> {
        match self {
            Node::Leaf { weight, .. } => Ok(*weight),
            Node::Internal { .. } => Err(Error::TypeMismatch {
                expected: NodeKind::Leaf,
                found: NodeKind::Internal,
            }),
        }
    }

    /// Every symbol at or below this node. For a leaf this is a one
    /// element slice; for an internal node it is the aggregate computed
    /// when the node was merged.
    pub fn symbols(&self) -> &[S] {
        match self {
            Node::Leaf { symbol, .. } => slice::from_ref(symbol),
            Node::Internal { symbols, .. } => symbols,
        }
    }

    /// Total weight at or below this node.
    pub fn weight(&self) -> u32 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// The 0 branch. Asking a leaf is a `TypeMismatch`.
    pub fn left(&self) -> Result<&Node<S>> {
        match self {
            Node::Internal { left, .. } => Ok(left),
            Node::Leaf { .. } => Err(Error::TypeMismatch {
                expected: NodeKind::Internal,
                found: NodeKind::Leaf,
            }),
        }
    }

    /// The 1 branch. Asking a leaf is a `TypeMismatch`.
    pub fn right(&self) -> Result<&Node<S>> {
        match self {
            Node::Internal { right, .. } => Ok(right),
            Node::Leaf { .. } => Err(Error::TypeMismatch {
                expected: NodeKind::Internal,
                found: NodeKind::Leaf,
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tree::build::merge;

    #[test]
    fn leaf_accessor_test() {
        let leaf = Node::leaf('a', 8);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.kind(), NodeKind::Leaf);
        assert_eq!(leaf.symbol(), Ok(&'a'));
        assert_eq!(leaf.leaf_weight(), Ok(8));
        assert_eq!(leaf.symbols(), &['a']);
        assert_eq!(leaf.weight(), 8);
    }

    #[test]
    fn leaf_has_no_children_test() {
        let leaf = Node::leaf('a', 8);
        let want = Error::TypeMismatch {
            expected: NodeKind::Internal,
            found: NodeKind::Leaf,
        };
        assert_eq!(leaf.left().unwrap_err(), want);
        assert_eq!(leaf.right().unwrap_err(), want);
    }

    #[test]
    fn internal_accessor_test() {
        let root = merge(Node::leaf('a', 5), Node::leaf('b', 2));
        assert!(!root.is_leaf());
        assert_eq!(root.kind(), NodeKind::Internal);
        assert_eq!(root.symbols(), &['a', 'b']);
        assert_eq!(root.weight(), 7);
        assert_eq!(root.left().unwrap().symbol(), Ok(&'a'));
        assert_eq!(root.right().unwrap().symbol(), Ok(&'b'));
    }

    #[test]
    fn internal_has_no_symbol_test() {
        let root = merge(Node::leaf('a', 5), Node::leaf('b', 2));
        let want = Error::TypeMismatch {
            expected: NodeKind::Leaf,
            found: NodeKind::Internal,
        };
        assert_eq!(root.symbol().unwrap_err(), want);
        assert_eq!(root.leaf_weight().unwrap_err(), want);
    }
}
