//! The tree module holds the prefix-code tree model for hufftree.
//!
//! A code tree is a binary tree of nodes. Each leaf carries one symbol and
//! the weight assigned to it; each internal node carries its two children
//! plus the aggregate symbol list and weight of everything below it. The
//! aggregates are computed once when a node is built and never change, so
//! every query against a tree is a plain read.
//!
//! Trees come from two places:
//! - merge: combine two finished trees under a new root.
//! - build_tree: the greedy lowest-weight-first construction over a list of
//!   symbol/weight pairs.
//!
pub mod build;
pub mod node;

pub use build::{build_tree, merge};
pub use node::{Node, NodeKind};
