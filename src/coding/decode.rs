//! Bit-driven decoding for hufftree.
//!
//! The decoder holds a cursor into the bit sequence and a current node.
//! Each bit moves the current node one level down; landing on a leaf emits
//! that leaf's symbol and resets the current node to the root. The cursor
//! only ever moves forward, so decoding is a single pass over the input.
//!

use log::trace;

use crate::error::{Error, Result};
use crate::tree::node::Node;

/// Step one level down from `node`. Bit 0 selects the left child and bit 1
/// the right; any other value is an `InvalidBit` error, never coerced.
/// Stepping down from a leaf is a `TypeMismatch`.
pub fn choose_branch<S>(bit: u8, node: &Node<S>) -> Result<&Node<S>> {
    match bit {
        0 => node.left(),
        1 => node.right(),
        _ => Err(Error::InvalidBit { bit }),
    }
}

/// Decode a bit sequence into the symbols it spells.
///
/// If the bits run out below the root the input ended inside a code, and
/// the whole call fails with `IncompleteCode` carrying the index where the
/// unfinished code began. No partial output is ever returned.
///
/// A tree that is a bare leaf holds one zero-bit code: the empty bit
/// sequence decodes to that symbol exactly once, and any bit at all is a
/// `TypeMismatch` since a leaf offers no branch to take.
pub fn decode<S: Clone>(bits: &[u8], tree: &Node<S>) -> Result<Vec<S>> {
    // The degenerate tree. Its single code is zero bits long, so the
    // empty input spells the symbol once and we never touch the loop.
    if tree.is_leaf() && bits.is_empty() {
        return Ok(vec![tree.symbol()?.clone()]);
    }

    let mut out = Vec::new();
    let mut current = tree;
    // Where the code currently being walked began.
    let mut code_start = 0;

    for (pos, &bit) in bits.iter().enumerate() {
        current = choose_branch(bit, current)?;
        if current.is_leaf() {
            out.push(current.symbol()?.clone());
            trace!("code {} ended at bit {}", out.len(), pos + 1);
            // Reset to the root before looking for the next symbol.
            current = tree;
            code_start = pos + 1;
        }
    }

    // A walk left hanging below the root means the last code never
    // finished.
    if code_start != bits.len() {
        return Err(Error::IncompleteCode {
            position: code_start,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tree::build::merge;
    use crate::tree::node::NodeKind;

    // a=00 b=01 c=1
    fn abc() -> Node<char> {
        merge(
            merge(Node::leaf('a', 5), Node::leaf('b', 2)),
            Node::leaf('c', 1),
        )
    }

    #[test]
    fn choose_branch_test() {
        let tree = abc();
        assert_eq!(choose_branch(0, &tree).unwrap().symbols(), &['a', 'b']);
        assert_eq!(choose_branch(1, &tree).unwrap().symbols(), &['c']);
    }

    #[test]
    fn choose_branch_bad_bit_test() {
        let tree = abc();
        assert_eq!(
            choose_branch(2, &tree).unwrap_err(),
            Error::InvalidBit { bit: 2 }
        );
        assert_eq!(
            choose_branch(9, &tree).unwrap_err(),
            Error::InvalidBit { bit: 9 }
        );
    }

    #[test]
    fn choose_branch_leaf_test() {
        let leaf = Node::leaf('a', 5);
        assert_eq!(
            choose_branch(0, &leaf).unwrap_err(),
            Error::TypeMismatch {
                expected: NodeKind::Internal,
                found: NodeKind::Leaf,
            }
        );
    }

    #[test]
    fn decode_empty_test() {
        let tree = abc();
        assert_eq!(decode(&[], &tree), Ok(vec![]));
    }

    #[test]
    fn decode_message_test() {
        let tree = abc();
        assert_eq!(decode(&[0, 0], &tree), Ok(vec!['a']));
        assert_eq!(decode(&[0, 1, 1], &tree), Ok(vec!['b', 'c']));
        assert_eq!(decode(&[1, 1, 1], &tree), Ok(vec!['c', 'c', 'c']));
    }

    #[test]
    fn decode_incomplete_test() {
        let tree = abc();
        // One bit is not enough to finish a code under the 0 branch.
        assert_eq!(
            decode(&[0], &tree).unwrap_err(),
            Error::IncompleteCode { position: 0 }
        );
        // 'c' completes at bit 1, then the 0 leaves a code hanging.
        assert_eq!(
            decode(&[1, 0], &tree).unwrap_err(),
            Error::IncompleteCode { position: 1 }
        );
    }

    #[test]
    fn decode_bad_bit_test() {
        let tree = abc();
        assert_eq!(
            decode(&[0, 5], &tree).unwrap_err(),
            Error::InvalidBit { bit: 5 }
        );
    }

    #[test]
    fn decode_leaf_root_test() {
        let leaf = Node::leaf('a', 5);
        // The zero-bit code spells its symbol once.
        assert_eq!(decode(&[], &leaf), Ok(vec!['a']));
        // But no bit can select a branch from a leaf.
        assert_eq!(
            decode(&[0], &leaf).unwrap_err(),
            Error::TypeMismatch {
                expected: NodeKind::Internal,
                found: NodeKind::Leaf,
            }
        );
    }
}
