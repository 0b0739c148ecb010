// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

use std::collections::{btree_set, hash_set, BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};
use std::slice;

/// The neighbors of a single vertex.
///
/// Sets ignore repeated insertions of the same neighbor, a `Vec` keeps them
/// (so a graph using `Vec` may hold parallel edges).
pub trait AdjacencyList<V>: Default {
    /// Iterator over the neighbors.
    type Iter<'a>: Iterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a;

    /// Return `true` if there are no neighbors.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of neighbors.
    fn len(&self) -> usize;

    /// Add a neighbor.
    ///
    /// Return `true` iff the container changed.
    fn insert(&mut self, v: V) -> bool;

    /// Remove all occurrences of a neighbor.
    ///
    /// Return `true` if `v` had been contained.
    fn remove(&mut self, v: &V) -> bool;

    /// Return `true` iff `v` is a neighbor.
    fn contains(&self, v: &V) -> bool;

    /// Return an iterator over the neighbors.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<V, S> AdjacencyList<V> for HashSet<V, S>
where
    V: Eq + Hash,
    S: BuildHasher + Default,
{
    type Iter<'a> = hash_set::Iter<'a, V> where Self: 'a, V: 'a;

    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn insert(&mut self, v: V) -> bool {
        HashSet::insert(self, v)
    }

    fn remove(&mut self, v: &V) -> bool {
        HashSet::remove(self, v)
    }

    fn contains(&self, v: &V) -> bool {
        HashSet::contains(self, v)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }
}

impl<V> AdjacencyList<V> for BTreeSet<V>
where
    V: Ord,
{
    type Iter<'a> = btree_set::Iter<'a, V> where Self: 'a, V: 'a;

    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn insert(&mut self, v: V) -> bool {
        BTreeSet::insert(self, v)
    }

    fn remove(&mut self, v: &V) -> bool {
        BTreeSet::remove(self, v)
    }

    fn contains(&self, v: &V) -> bool {
        BTreeSet::contains(self, v)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }
}

impl<V> AdjacencyList<V> for Vec<V>
where
    V: Eq,
{
    type Iter<'a> = slice::Iter<'a, V> where Self: 'a, V: 'a;

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn insert(&mut self, v: V) -> bool {
        Vec::push(self, v);
        true
    }

    fn remove(&mut self, v: &V) -> bool {
        let n = Vec::len(self);
        self.retain(|w| w != v);
        Vec::len(self) != n
    }

    fn contains(&self, v: &V) -> bool {
        self.as_slice().contains(v)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::AdjacencyList;
    use std::collections::{BTreeSet, HashSet};

    fn fill<C: AdjacencyList<u32>>() -> C {
        let mut c = C::default();
        for &v in &[3, 1, 3, 2] {
            c.insert(v);
        }
        c
    }

    #[test]
    fn test_sets() {
        let mut h: HashSet<u32> = fill();
        assert_eq!(AdjacencyList::len(&h), 3);
        assert!(AdjacencyList::remove(&mut h, &3));
        assert!(!AdjacencyList::remove(&mut h, &3));
        assert!(!AdjacencyList::contains(&h, &3));

        let b: BTreeSet<u32> = fill();
        assert_eq!(AdjacencyList::iter(&b).cloned().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_vec() {
        let mut v: Vec<u32> = fill();
        assert_eq!(AdjacencyList::len(&v), 4);
        assert!(AdjacencyList::remove(&mut v, &3));
        assert_eq!(v, vec![1, 2]);
        assert!(AdjacencyList::contains(&v, &2));
    }
}
