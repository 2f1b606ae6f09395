use std::cell::Cell;

/// This provides the set bookkeeping for a given element of the `DisjointSet`.
///
/// For each element of the `DisjointSet` we store a `Metadata`.
#[cfg(not(feature = "compact"))]
#[derive(Clone, Debug, Default)]
pub(crate) struct Metadata {
    /// The parent of the element in its sets tree.
    /// These form an upside down tree where each child has the index of its parent.
    parent: Cell<usize>,
    /// A maximum to the height of the tree of the set.
    /// Only the rank of a root is meaningful at any time.
    rank: Cell<usize>,
}

#[cfg(not(feature = "compact"))]
impl Metadata {
    /// Create a new `Metadata` for an element with the given index.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            rank: Cell::new(0),
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `rank` variable.
    pub(crate) fn rank(&self) -> usize {
        self.rank.get()
    }

    /// Set the `rank` variable.
    pub(crate) fn set_rank(&self, value: usize) {
        self.rank.set(value);
    }
}

#[cfg(feature = "compact")]
const USIZE_BITS: usize = 8 * std::mem::size_of::<usize>();
// The least amount of elements you need in a set to get a rank of 0 is 1.
// For a given n > 0 the least amount of elements you need to get a rank of n is
// double the least amount to get a rank of n - 1.
// This is because you need to join two sets of rank n - 1.
// With induction we see that the minimum amount of elements to get rank n is 2 ^ n.
//
// We write the amount of bytes a `usize` contains as 2 ^ B.
// For each element we store a single `usize` which is 2 ^ B bytes.
// There are 2 ^ (8 * 2 ^ B) = 2 ^ (2 ^ (B + 3)) memory addresses so a maximum for the amount
// of elements is given by 2 ^ (2 ^ (B + 3)) / 2 ^ B = 2 ^ (2 ^ (B + 3) - B).
// This means that a maximum for the rank is given by 2 ^ (B + 3) - B.
// To store this rank we need a maximum of B + 3 bits.
#[cfg(all(feature = "compact", target_pointer_width = "16"))]
const RANK_BITS: usize = 4;
#[cfg(all(feature = "compact", target_pointer_width = "32"))]
const RANK_BITS: usize = 5;
#[cfg(all(feature = "compact", target_pointer_width = "64"))]
const RANK_BITS: usize = 6;
#[cfg(all(feature = "compact", target_pointer_width = "128"))]
const RANK_BITS: usize = 7;
#[cfg(feature = "compact")]
const MASK: usize = (1 << RANK_BITS) - 1;
#[cfg(feature = "compact")]
const MAX: usize = (1 << (USIZE_BITS - RANK_BITS)) - 1;

/// This provides the set bookkeeping for a given element of the `DisjointSet`.
///
/// For each element of the `DisjointSet` we store a `Metadata`.
#[cfg(feature = "compact")]
#[derive(Clone, Debug, Default)]
pub(crate) struct Metadata {
    /// The parent of the element in the upper bits and the rank of the element in the
    /// lower `RANK_BITS` bits.
    /// The parents form an upside down tree where each child has the index of its parent.
    /// Only the rank of a root is meaningful at any time.
    word: Cell<usize>,
}

#[cfg(feature = "compact")]
impl Metadata {
    /// Create a new `Metadata` for an element with the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is above the maximum amount of elements a `DisjointSet` can
    /// store with the compact representation.
    pub(crate) fn new(index: usize) -> Self {
        if index > MAX {
            panic!("A DisjointSet can only hold {} elements.", MAX + 1)
        }

        Self {
            word: Cell::new(index << RANK_BITS),
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.word.get() >> RANK_BITS
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        let old = self.word.get();
        self.word.set((old & MASK) | (value << RANK_BITS));
    }

    /// Return the `rank` variable.
    pub(crate) fn rank(&self) -> usize {
        self.word.get() & MASK
    }

    /// Set the `rank` variable.
    pub(crate) fn set_rank(&self, value: usize) {
        let old = self.word.get();
        self.word.set((old & !MASK) | (value & MASK));
    }
}
