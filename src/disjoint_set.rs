//! A [disjoint-sets/union-find] implementation over a fixed universe of elements.
//!
//! See [`DisjointSet`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet`]: struct.DisjointSet.html

use {
    std::{
        ops,
        cmp::Ordering,
        iter::FusedIterator,
    },
    crate::metadata::Metadata,
};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [disjoint-sets/union-find] implementation over the elements `0 .. len`.
///
/// A `DisjointSet` is created with a fixed amount of elements, each in its own set.
/// Sets can be joined with the `union` method and membership can be queried with the
/// `connected` method or by comparing the results of the `find` method.
/// Elements are never added or removed after creation.
///
/// Internally each set forms a tree where every element stores the index of its parent and
/// the root of the tree is the representative of the set.
/// Two optimizations keep these trees shallow: `union` attaches the tree with the lower
/// rank under the root of the tree with the higher rank, and `find` re-points every element
/// it visits directly at the root it discovers ("path compression").
/// Path compression mutates parent pointers even during queries, but it never changes which
/// set an element belongs to.
///
/// # Examples
///
/// ```
/// # #[macro_use]
/// # extern crate disjoint_set;
/// #
/// # fn main() {
/// let mut disjoint_set = disjoint_set![5];
///
/// disjoint_set.union(0, 1);
/// disjoint_set.union(2, 3);
/// disjoint_set.union(1, 3);
///
/// assert!(disjoint_set.connected(0, 3));
/// assert!(!disjoint_set.connected(0, 4));
/// # }
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone)]
pub struct DisjointSet {
    /// The metadata for each element, the length of this vec is fixed at construction.
    meta: Vec<Metadata>,
    /// The amount of distinct sets, this decreases by one on every merge.
    sets: usize,
}

/// Creates a [`DisjointSet`] with the given amount of elements.
///
/// There are two forms of the `disjoint_set!` macro:
///
/// - Create a [`DisjointSet`] with a given amount of elements all in distinct sets:
///
/// ```
/// # #[macro_use]
/// # extern crate disjoint_set;
/// #
/// # fn main() {
/// let disjoint_set = disjoint_set![3];
///
/// assert!(disjoint_set.len() == 3);
/// assert!(disjoint_set.amount_of_sets() == 3);
/// # }
/// ```
///
/// - Create a [`DisjointSet`] with a given amount of elements and join the given pairs:
///
/// ```
/// # #[macro_use]
/// # extern crate disjoint_set;
/// #
/// # fn main() {
/// let disjoint_set = disjoint_set![5; (0, 1), (2, 3)];
///
/// assert!(disjoint_set.connected(0, 1));
/// assert!(disjoint_set.connected(2, 3));
/// assert!(!disjoint_set.connected(0, 2));
/// assert!(disjoint_set.amount_of_sets() == 3);
/// # }
/// ```
///
/// [`DisjointSet`]: disjoint_set/struct.DisjointSet.html
#[macro_export]
macro_rules! disjoint_set {
    ($len: expr) => {
        $crate::DisjointSet::new($len)
    };
    ($len: expr; $(($first: expr, $second: expr)),* $(,)?) => {
        {
            let mut disjoint_set = $crate::DisjointSet::new($len);

            $(
                disjoint_set.union($first, $second);
            )*

            disjoint_set
        }
    };
}

impl DisjointSet {
    /// Constructs a new `DisjointSet` with `len` elements, each in its own set.
    ///
    /// A length of zero gives a valid, empty `DisjointSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let disjoint_set = DisjointSet::new(5);
    ///
    /// assert!(disjoint_set.len() == 5);
    /// assert!(disjoint_set.amount_of_sets() == 5);
    /// ```
    #[inline]
    pub fn new(len: usize) -> Self {
        Self {
            meta: (0 .. len).map(Metadata::new).collect(),
            sets: len,
        }
    }

    /// Returns the amount of elements in the `DisjointSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// let disjoint_set = disjoint_set::DisjointSet::new(4);
    ///
    /// assert!(disjoint_set.len() == 4);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.meta.len()
    }

    /// Returns `true` if the `DisjointSet` contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// assert!(DisjointSet::new(0).is_empty());
    /// assert!(!DisjointSet::new(1).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }

    /// Joins the sets of `first_index` and `second_index`.
    ///
    /// Returns `true` if the two sets were distinct and are now merged, and `false` if the
    /// elements already shared a set.
    /// This signal is what makes cycle detection work: feeding the edges of an undirected
    /// graph to `union` one by one, the first edge for which `union` returns `false` closes
    /// a cycle.
    ///
    /// This method will be executed in `O(α(n))` time where `α` is the inverse
    /// Ackermann function. The inverse Ackermann function has value below 5
    /// for any value of `n` that can be written in the physical universe.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate disjoint_set;
    /// #
    /// # fn main() {
    /// let mut disjoint_set = disjoint_set![4];
    ///
    /// // All elements start out in their own sets.
    /// assert!(disjoint_set.amount_of_sets() == 4);
    ///
    /// assert!(disjoint_set.union(1, 2));
    /// assert!(disjoint_set.amount_of_sets() == 3);
    ///
    /// // 1 and 2 already share a set.
    /// assert!(!disjoint_set.union(2, 1));
    /// assert!(disjoint_set.amount_of_sets() == 3);
    /// # }
    /// ```
    pub fn union(&mut self, first_index: usize, second_index: usize) -> bool {
        let i = self.find(first_index);
        let j = self.find(second_index);

        if i == j {
            return false
        }

        // We add to the tree with the highest rank.
        match Ord::cmp(&self.meta[i].rank(), &self.meta[j].rank()) {
            Ordering::Less => {
                self.meta[i].set_parent(j);
            },
            Ordering::Equal => {
                // Ties attach the second tree under the first.
                self.meta[j].set_parent(i);
                // The first tree becomes larger.
                self.meta[i].set_rank(self.meta[i].rank() + 1);
            },
            Ordering::Greater => {
                self.meta[j].set_parent(i);
            },
        }

        self.sets -= 1;

        true
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// This method will be executed in `O(α(n))` time where `α` is the inverse
    /// Ackermann function.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate disjoint_set;
    /// # fn main() {
    /// let mut disjoint_set = disjoint_set![4];
    ///
    /// disjoint_set.union(1, 3);
    /// disjoint_set.union(0, 1);
    ///
    /// assert!(disjoint_set.connected(0, 1));
    /// assert!(!disjoint_set.connected(0, 2));
    /// assert!(disjoint_set.connected(0, 3));
    /// assert!(!disjoint_set.connected(1, 2));
    /// assert!(disjoint_set.connected(1, 3));
    /// assert!(!disjoint_set.connected(2, 3));
    /// # }
    /// ```
    #[inline]
    pub fn connected(&self, first_index: usize, second_index: usize) -> bool {
        self.find(first_index) == self.find(second_index)
    }

    /// Returns `true` if `first_index` and `second_index` are in different sets.
    ///
    /// This method will be executed in `O(α(n))` time where `α` is the inverse
    /// Ackermann function.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate disjoint_set;
    /// # fn main() {
    /// let mut disjoint_set = disjoint_set![4];
    ///
    /// disjoint_set.union(1, 3);
    ///
    /// assert!(disjoint_set.disjoint(0, 1));
    /// assert!(!disjoint_set.disjoint(1, 3));
    /// # }
    /// ```
    #[inline]
    pub fn disjoint(&self, first_index: usize, second_index: usize) -> bool {
        self.find(first_index) != self.find(second_index)
    }

    /// Returns the amount of sets in the `DisjointSet`.
    ///
    /// This starts out as the amount of elements, decreases by one on every merging
    /// `union`, and never increases.
    /// This will be done in `O(1)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate disjoint_set;
    /// #
    /// # fn main() {
    /// let mut disjoint_set = disjoint_set![5; (0, 1), (2, 3)];
    ///
    /// assert!(disjoint_set.amount_of_sets() == 3);
    ///
    /// disjoint_set.union(1, 3);
    ///
    /// assert!(disjoint_set.amount_of_sets() == 2);
    /// # }
    /// ```
    #[inline]
    pub fn amount_of_sets(&self) -> usize {
        self.sets
    }

    /// Gives the representative of the set that `index` belongs to.
    ///
    /// Each element of a set gives the same value, so two elements are in the same set
    /// exactly when their `find` results are equal.
    /// The representative is itself a member of the set and is its own representative.
    ///
    /// As a side effect every element on the walk to the root is re-pointed directly at the
    /// root, so later lookups of these elements are a single step.
    /// The walk is done in two iterative passes rather than recursively, so a deliberately
    /// deep chain of parents cannot exhaust the stack.
    /// This method will be executed in `O(α(n))` amortized time where `α` is the inverse
    /// Ackermann function.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate disjoint_set;
    /// #
    /// # fn main() {
    /// let disjoint_set = disjoint_set![4; (0, 1), (1, 2)];
    ///
    /// let root = disjoint_set.find(2);
    ///
    /// assert!(disjoint_set.find(root) == root);
    /// assert!(disjoint_set.find(0) == root);
    /// assert!(disjoint_set.find(1) == root);
    /// assert!(disjoint_set.find(3) == 3);
    /// # }
    /// ```
    pub fn find(&self, index: usize) -> usize {
        // First pass: walk to the root.
        let mut root = index;
        while self.meta[root].parent() != root {
            root = self.meta[root].parent();
        }

        // Second pass: point every element on the path directly at the root.
        let mut current = index;
        while current != root {
            let parent = self.meta[current].parent();
            self.meta[current].set_parent(root);
            current = parent;
        }

        root
    }

    /// Gives the representative of the set that `index` belongs to.
    ///
    /// This method is slightly faster than `find` but still `O(α(n))` time.
    /// This method wont update the parents while finding the representative and should
    /// only be used if the parents will be updated immediately afterwards.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    #[inline]
    pub(crate) fn find_final(&self, mut index: usize) -> usize {
        while index != self.meta[index].parent() {
            index = self.meta[index].parent();
        }

        index
    }

    /// Returns an iterator over the representatives of the sets in the `DisjointSet`.
    ///
    /// One element is yielded per set, and each yielded element is its own representative.
    /// The sets are returned in order by their smallest member.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate disjoint_set;
    /// #
    /// # fn main() {
    /// let disjoint_set = disjoint_set![6; (0, 1), (2, 3), (3, 4)];
    ///
    /// let representatives: Vec<usize> = disjoint_set.representatives().collect();
    ///
    /// assert!(representatives.len() == disjoint_set.amount_of_sets());
    ///
    /// for &root in &representatives {
    ///     assert!(disjoint_set.find(root) == root);
    /// }
    /// # }
    /// ```
    #[inline]
    pub fn representatives(&self) -> Representatives {
        let len = self.len();

        Representatives {
            disjoint_set: self,
            done: bit_vec::BitVec::from_elem(len, false),
            range: 0 .. len,
        }
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new(0)
    }
}

impl std::fmt::Debug for DisjointSet {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        // We map the roots to `usize` names.
        let mut map = std::collections::HashMap::with_capacity(self.len());
        let mut builder = formatter.debug_list();
        let mut names = 0;

        for i in 0 .. self.len() {
            let root = self.find(i);

            let name = if let Some(&name) = map.get(&root) {
                // If we already have a name we use it.
                name
            } else {
                // If we don't we make a new name.
                let new_name = names;
                map.insert(root, new_name);
                names += 1;

                new_name
            };

            builder.entry(&name);
        }

        builder.finish()
    }
}

impl PartialEq for DisjointSet {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() || self.sets != other.sets {
            return false
        }

        // We map the roots of self to the roots of other.
        // Together with the equal amount of sets this makes the mapping a bijection.
        let mut map = std::collections::HashMap::with_capacity(self.len());

        for i in 0 .. self.len() {
            let self_root = self.find(i);
            let other_root = other.find(i);

            if let Some(&root) = map.get(&self_root) {
                // If we have seen this root we check if we have the same map.
                if root != other_root {
                    return false
                }
            } else {
                // If we have not seen this root we add the relation to the map.
                map.insert(self_root, other_root);
            }
        }

        true
    }
}

impl Eq for DisjointSet {}

#[cfg(feature = "proptest")]
impl Arbitrary for DisjointSet {
    type Parameters = proptest::collection::SizeRange;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(size_range: Self::Parameters) -> Self::Strategy {
        use std::collections::hash_map;

        proptest::collection::vec(any::<usize>(), size_range).prop_map(|set_numbers| {
            let mut disjoint_set = Self::new(set_numbers.len());

            // We map a `set_number` to an element of that set.
            let mut map = hash_map::HashMap::with_capacity(disjoint_set.len());

            for (index, set_number) in set_numbers.into_iter().enumerate() {
                let set_number = set_number.trailing_zeros();

                match map.entry(set_number) {
                    hash_map::Entry::Occupied(occupied) => {
                        disjoint_set.union(index, *occupied.get());
                    },
                    hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(index);
                    }
                }
            }

            disjoint_set
        }).boxed()
    }
}

/// An iterator over the representatives of the sets in a `DisjointSet`.
///
/// This struct is created by the [`representatives`] method on [`DisjointSet`].
/// See its documentation for more information.
///
/// [`representatives`]: struct.DisjointSet.html#method.representatives
/// [`DisjointSet`]: struct.DisjointSet.html
#[derive(Clone, Debug)]
pub struct Representatives<'a> {
    disjoint_set: &'a DisjointSet,
    done: bit_vec::BitVec,
    range: ops::Range<usize>,
}

impl<'a> Iterator for Representatives<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // We keep going until we find a set we have not returned yet.
        loop {
            let index = self.range.next()?;
            let root = self.disjoint_set.find_final(index);

            // If we have not returned this set yet.
            if !self.done.get(root).unwrap() {
                self.done.set(root, true);

                return Some(root)
            }
        }
    }
}

impl<'a> DoubleEndedIterator for Representatives<'a> {
    fn next_back(&mut self) -> Option<usize> {
        // We keep going until we find a set we have not returned yet.
        loop {
            let index = self.range.next_back()?;
            let root = self.disjoint_set.find_final(index);

            // If we have not returned this set yet.
            if !self.done.get(root).unwrap() {
                self.done.set(root, true);

                return Some(root)
            }
        }
    }
}

impl<'a> FusedIterator for Representatives<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_with_singletons() {
        let disjoint_set = DisjointSet::new(5);

        assert_eq!(disjoint_set.len(), 5);
        assert_eq!(disjoint_set.amount_of_sets(), 5);

        for i in 0 .. 5 {
            assert_eq!(disjoint_set.find(i), i);
            assert!(disjoint_set.connected(i, i));

            for j in 0 .. 5 {
                if i != j {
                    assert!(!disjoint_set.connected(i, j));
                }
            }
        }
    }

    #[test]
    fn empty_is_valid() {
        let disjoint_set = DisjointSet::new(0);

        assert!(disjoint_set.is_empty());
        assert_eq!(disjoint_set.len(), 0);
        assert_eq!(disjoint_set.amount_of_sets(), 0);
        assert_eq!(disjoint_set.representatives().count(), 0);
    }

    #[test]
    fn union_joins_transitively() {
        let mut disjoint_set = DisjointSet::new(5);

        assert!(disjoint_set.union(0, 1));
        assert!(disjoint_set.union(2, 3));
        assert!(disjoint_set.union(1, 3));

        assert!(disjoint_set.connected(0, 3));
        assert!(!disjoint_set.connected(0, 4));
        assert_eq!(disjoint_set.amount_of_sets(), 2);
    }

    #[test]
    fn union_of_an_element_with_itself_is_a_no_op() {
        let mut disjoint_set = DisjointSet::new(3);
        let before = disjoint_set.clone();

        assert!(!disjoint_set.union(1, 1));
        assert_eq!(disjoint_set.amount_of_sets(), 3);
        assert_eq!(disjoint_set, before);
    }

    #[test]
    fn chain_of_edges_has_no_cycle() {
        let mut disjoint_set = DisjointSet::new(4);

        for &(a, b) in &[(0, 1), (1, 2), (2, 3)] {
            assert!(disjoint_set.union(a, b));
        }
    }

    #[test]
    fn closing_edge_reports_a_cycle() {
        let mut disjoint_set = DisjointSet::new(3);

        assert!(disjoint_set.union(0, 1));
        assert!(disjoint_set.union(1, 2));
        assert!(!disjoint_set.union(2, 0));
    }

    #[test]
    fn find_is_idempotent() {
        let mut disjoint_set = DisjointSet::new(8);
        disjoint_set.union(0, 1);
        disjoint_set.union(1, 2);
        disjoint_set.union(5, 6);

        for i in 0 .. 8 {
            let root = disjoint_set.find(i);

            assert_eq!(disjoint_set.find(i), root);
            assert_eq!(disjoint_set.find(root), root);
        }
    }

    #[test]
    fn set_count_never_increases() {
        let mut disjoint_set = DisjointSet::new(6);

        for &(a, b) in &[(0, 1), (1, 0), (2, 3), (4, 5), (3, 5), (0, 0)] {
            let before = disjoint_set.amount_of_sets();
            let merged = disjoint_set.union(a, b);
            let after = disjoint_set.amount_of_sets();

            if merged {
                assert_eq!(after, before - 1);
            } else {
                assert_eq!(after, before);
            }
        }

        assert_eq!(disjoint_set.amount_of_sets(), 2);
    }

    #[test]
    fn deep_chain_compresses_without_overflowing() {
        let disjoint_set = DisjointSet::new(10_000);

        // Build the chain 9999 -> 9998 -> ... -> 1 -> 0 directly.
        for i in 1 .. 10_000 {
            disjoint_set.meta[i].set_parent(i - 1);
        }

        assert_eq!(disjoint_set.find(9_999), 0);

        // Every element on the walk now points directly at the root.
        for i in 0 .. 10_000 {
            assert_eq!(disjoint_set.meta[i].parent(), 0);
        }
    }

    #[test]
    fn representatives_yields_one_root_per_set() {
        let disjoint_set = disjoint_set![7; (0, 1), (2, 3), (3, 4)];

        let representatives: Vec<usize> = disjoint_set.representatives().collect();

        assert_eq!(representatives.len(), disjoint_set.amount_of_sets());

        for &root in &representatives {
            assert_eq!(disjoint_set.find(root), root);
        }

        // Every element belongs to exactly one of the returned sets.
        for i in 0 .. disjoint_set.len() {
            let owners = representatives
                .iter()
                .filter(|&&root| disjoint_set.connected(i, root))
                .count();

            assert_eq!(owners, 1);
        }
    }

    #[test]
    fn representatives_can_be_reversed() {
        let disjoint_set = disjoint_set![5; (1, 2)];

        let forward: Vec<usize> = disjoint_set.representatives().collect();
        let mut backward: Vec<usize> = disjoint_set.representatives().rev().collect();
        backward.reverse();

        assert_eq!(forward, backward);
    }

    #[test]
    fn equality_ignores_union_order() {
        let pairs = [(0, 1), (2, 3), (1, 3), (5, 6)];

        let mut forward = DisjointSet::new(7);
        for &(a, b) in pairs.iter() {
            forward.union(a, b);
        }

        let mut backward = DisjointSet::new(7);
        for &(a, b) in pairs.iter().rev() {
            backward.union(a, b);
        }

        assert_eq!(forward, backward);
    }

    #[test]
    fn equality_distinguishes_partitions() {
        let coarse = disjoint_set![3; (0, 1)];
        let fine = disjoint_set![3];

        assert_ne!(coarse, fine);
        assert_ne!(fine, coarse);
        assert_ne!(coarse, disjoint_set![3; (1, 2)]);
        assert_ne!(coarse, disjoint_set![4; (0, 1)]);
    }

    #[test]
    fn debug_names_sets_in_first_seen_order() {
        let disjoint_set = disjoint_set![4; (0, 2)];

        assert_eq!(format!("{:?}", disjoint_set), "[0, 1, 0, 2]");
    }

    #[test]
    #[should_panic]
    fn find_out_of_range_panics() {
        let disjoint_set = DisjointSet::new(3);

        disjoint_set.find(3);
    }

    #[test]
    #[should_panic]
    fn union_out_of_range_panics() {
        let mut disjoint_set = DisjointSet::new(3);

        disjoint_set.union(0, 7);
    }
}
