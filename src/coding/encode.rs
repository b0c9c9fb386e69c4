//! Path-based encoding for hufftree.
//!
//! A symbol's code is its root-to-leaf path written out as bits. The
//! aggregate symbol lists on internal nodes are what make the walk cheap:
//! at each fork exactly one child's aggregate holds the symbol, so the
//! descent never backtracks.
//!

use std::fmt::Debug;
use std::hash::Hash;

use log::trace;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::tree::node::Node;

/// The root-to-leaf path of `symbol` in `tree`, which is its code.
///
/// A symbol found in no leaf is an `UnknownSymbol` error. In the
/// degenerate single-leaf tree the resident symbol's code is empty.
pub fn encode_symbol<S>(symbol: &S, tree: &Node<S>) -> Result<Vec<u8>>
where
    S: Eq + Debug,
{
    if !tree.symbols().contains(symbol) {
        return Err(Error::UnknownSymbol {
            symbol: format!("{:?}", symbol),
        });
    }

    let mut path = Vec::new();
    let mut current = tree;
    while !current.is_leaf() {
        // The aggregates partition here, so not-left means right.
        let left = current.left()?;
        if left.symbols().contains(symbol) {
            path.push(0);
            current = left;
        } else {
            path.push(1);
            current = current.right()?;
        }
    }
    Ok(path)
}

/// Every leaf's code collected in one walk of the tree.
pub fn code_table<S>(tree: &Node<S>) -> FxHashMap<S, Vec<u8>>
where
    S: Clone + Eq + Hash,
{
    let mut table = FxHashMap::default();
    collect_codes(tree, &mut Vec::new(), &mut table);
    table
}

/// Recursively walk the tree, accumulating the path taken to each leaf.
fn collect_codes<S>(node: &Node<S>, path: &mut Vec<u8>, table: &mut FxHashMap<S, Vec<u8>>)
where
    S: Clone + Eq + Hash,
{
    match node {
        Node::Leaf { symbol, .. } => {
            table.insert(symbol.clone(), path.clone());
        }
        Node::Internal { left, right, .. } => {
            path.push(0);
            collect_codes(left, path, table);
            path.pop();
            path.push(1);
            collect_codes(right, path, table);
            path.pop();
        }
    }
}

/// Encode a message as the concatenation of its symbols' codes. The code
/// table is built once up front. Any symbol without a code in the tree
/// fails the whole call with `UnknownSymbol`.
pub fn encode<S>(symbols: &[S], tree: &Node<S>) -> Result<Vec<u8>>
where
    S: Clone + Eq + Hash + Debug,
{
    let table = code_table(tree);
    let mut bits = Vec::new();
    for symbol in symbols {
        let code = table.get(symbol).ok_or_else(|| Error::UnknownSymbol {
            symbol: format!("{:?}", symbol),
        })?;
        bits.extend_from_slice(code);
    }
    trace!("encoded {} symbols into {} bits", symbols.len(), bits.len());
    Ok(bits)
}
