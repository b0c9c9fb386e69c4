//! Tree construction for hufftree.
//!
//! `merge` is the only way an internal node comes into being: it fixes the
//! aggregate symbol list and weight at the moment the node is made. On top
//! of it, `build_tree` runs the classic greedy construction: repeatedly
//! combine the two lightest trees in the working set until one remains.
//! Equal weights are broken by creation order so the same alphabet always
//! yields the same tree.
//!

use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::tree::node::Node;

/// Join two finished trees under a new internal node. The new node's
/// symbol list is the left symbols followed by the right symbols, and its
/// weight is the sum of both children.
///
/// No validation happens here. Keeping the two symbol sets disjoint is the
/// caller's job; `build_tree` checks it for the alphabets it accepts.
pub fn merge<S: Clone>(left: Node<S>, right: Node<S>) -> Node<S> {
    let mut symbols = Vec::with_capacity(left.symbols().len() + right.symbols().len());
    symbols.extend_from_slice(left.symbols());
    symbols.extend_from_slice(right.symbols());
    let weight = left.weight() + right.weight();
    Node::Internal {
        left: Box::new(left),
        right: Box::new(right),
        symbols,
        weight,
    }
}

/// Build a code tree from symbol/weight pairs by greedily merging the two
/// lightest subtrees until a single root remains. Lighter symbols end up
/// deeper, so the more frequent a symbol the shorter its code.
///
/// A single pair yields a bare leaf root (the zero-bit-code tree). An empty
/// slice is an `EmptyAlphabet` error, and a symbol appearing twice is a
/// `DuplicateSymbol` error.
pub fn build_tree<S>(pairs: &[(S, u32)]) -> Result<Node<S>>
where
    S: Clone + Eq + Hash + Debug,
{
    if pairs.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    // Colliding symbols would make two leaves claim the same code space,
    // so reject them before any merging starts.
    let mut seen = FxHashSet::default();
    for (symbol, _) in pairs {
        if !seen.insert(symbol) {
            return Err(Error::DuplicateSymbol {
                symbol: format!("{:?}", symbol),
            });
        }
    }

    // The working set pairs each tree with a creation sequence number.
    // The sequence breaks weight ties, keeping the build deterministic.
    let mut forest: Vec<(usize, Node<S>)> = pairs
        .iter()
        .enumerate()
        .map(|(i, (symbol, weight))| (i, Node::leaf(symbol.clone(), *weight)))
        .collect();
    let mut next_seq = forest.len();

    // ...then pare it down to one single root - keep it sorted.
    while forest.len() > 1 {
        // Sort heaviest first so the two lightest sit at the end. Among
        // equal weights the earlier-created node sorts earlier, which
        // leaves it for the second pop and puts it on the left.
        forest.sort_unstable_by(|a, b| b.1.weight().cmp(&a.1.weight()).then(a.0.cmp(&b.0)));

        // Pull off the two lightest and merge them under a new node.
        let right_child = forest.pop().unwrap();
        let left_child = forest.pop().unwrap();
        let parent = merge(left_child.1, right_child.1);
        trace!(
            "merge {}: weight {} ({} trees left)",
            next_seq,
            parent.weight(),
            forest.len() + 1
        );
        forest.push((next_seq, parent));
        next_seq += 1;
    }

    let (_, root) = forest.pop().unwrap();
    debug!(
        "built tree over {} symbols, total weight {}",
        root.symbols().len(),
        root.weight()
    );
    Ok(root)
}
