//! A [disjoint-sets/union-find] implementation over a fixed universe of elements
//! partitioned in sets.
//!
//! The main struct of this crate is [`DisjointSet`] which maintains a partition of the
//! elements `0 .. len` into disjoint sets.
//! The elements each start in their own set and these sets can be joined with the `union`
//! method.
//! You can check if elements share a set with the `connected` method and ask for the
//! representative of a set with the `find` method.
//! The `union`, `find`, and `connected` methods are extremely fast and have an amortized
//! complexity of `O(α(n))` where 'α' is the inverse Ackermann function and length `n`.
//! The `α(n)` has value below 5 for any `n` that can be written in the observable universe.
//!
//! This can be used for example to keep track of the connected components of an undirected
//! graph.
//! This struct can then be used to determine whether two vertices belong to the same component,
//! or whether adding an edge between them would result in a cycle.
//! The Union–Find algorithm is used in high-performance implementations of unification.
//! It is also a key component in implementing Kruskal's algorithm to find the minimum spanning
//! tree of a graph.
//!
//! For each element of a [`DisjointSet`] we need to store two additional `usize` values.
//! A more compact implementation is included that has the same functionality but only needs to
//! store a single `usize` value.
//! This is done by using a few bits of this value to store the rank.
//! This is a feature and can be enabled by adding the following to your `Cargo.toml` file:
//! ```toml
//! [dependencies.disjoint-set]
//! version = "0.1"
//! features = ["compact"]
//! ```
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet`]: struct.DisjointSet.html

extern crate bit_vec;
#[cfg(feature = "proptest")]
extern crate proptest;

mod metadata;
pub mod disjoint_set;

pub use crate::disjoint_set::DisjointSet;
