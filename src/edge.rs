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

//! Edge values of directed and undirected graphs.
//!
//! Graphs do not store edge objects, they store adjacencies. Edges are
//! materialized only when a graph is asked for a snapshot of its edges
//! (see [`Graph::edges`][crate::traits::Graph::edges]) or when algorithms
//! need an edge as a map key (e.g. the flow map of a maximum flow).
//!
//! A [`DirectedEdge`] is an ordered pair. An [`UndirectedEdge`] is an
//! unordered pair: `(u,v)` and `(v,u)` are equal, have the same hash and
//! compare equal.
//!
//! # Example
//!
//! ```
//! use rs_adjgraph::edge::{DirectedEdge, UndirectedEdge};
//! use std::collections::HashSet;
//!
//! assert_ne!(DirectedEdge::new(1, 2), DirectedEdge::new(2, 1));
//! assert_eq!(UndirectedEdge::new(1, 2), UndirectedEdge::new(2, 1));
//!
//! let edges: HashSet<_> = vec![UndirectedEdge::new(1, 2), UndirectedEdge::new(2, 1)]
//!     .into_iter()
//!     .collect();
//! assert_eq!(edges.len(), 1);
//!
//! assert_eq!(DirectedEdge::new(1, 2).to_string(), "(1-2)");
//! assert_eq!(UndirectedEdge::new(1, 2).to_string(), "(1=2)");
//! ```

use crate::traits::Vertex;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Common interface of directed and undirected edges.
pub trait Edge<V>: Clone + Eq + Hash + Ord + fmt::Debug {
    /// Whether edges of this type have a direction.
    const DIRECTED: bool;

    /// Create the edge `(source, target)`.
    fn new(source: V, target: V) -> Self;

    /// The source node of the edge.
    ///
    /// For undirected edges this is the first node the edge has been created
    /// with.
    fn source(&self) -> &V;

    /// The target node of the edge.
    fn target(&self) -> &V;

    /// Return the edge `(target, source)`.
    fn reverse(&self) -> Self
    where
        V: Clone,
    {
        Self::new(self.target().clone(), self.source().clone())
    }

    /// Return the pair `(source, target)`.
    fn into_pair(self) -> (V, V);
}

/// A directed pair `source -> target`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DirectedEdge<V> {
    pub source: V,
    pub target: V,
}

impl<V> DirectedEdge<V> {
    pub fn new(source: V, target: V) -> Self {
        DirectedEdge { source, target }
    }
}

impl<V> Edge<V> for DirectedEdge<V>
where
    V: Vertex,
{
    const DIRECTED: bool = true;

    fn new(source: V, target: V) -> Self {
        DirectedEdge { source, target }
    }

    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }

    fn into_pair(self) -> (V, V) {
        (self.source, self.target)
    }
}

impl<V> From<(V, V)> for DirectedEdge<V> {
    fn from((source, target): (V, V)) -> Self {
        DirectedEdge { source, target }
    }
}

impl<V> fmt::Display for DirectedEdge<V>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "({}-{})", self.source, self.target)
    }
}

/// An unordered pair `{source, target}`.
///
/// Equality, hashing and ordering ignore the order of the two nodes, hence
/// `UndirectedEdge::new(u, v) == UndirectedEdge::new(v, u)`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct UndirectedEdge<V> {
    pub source: V,
    pub target: V,
}

impl<V> UndirectedEdge<V> {
    pub fn new(source: V, target: V) -> Self {
        UndirectedEdge { source, target }
    }
}

impl<V> UndirectedEdge<V>
where
    V: Ord,
{
    /// The two nodes with the smaller one first.
    fn ordered(&self) -> (&V, &V) {
        if self.source <= self.target {
            (&self.source, &self.target)
        } else {
            (&self.target, &self.source)
        }
    }
}

impl<V> PartialEq for UndirectedEdge<V>
where
    V: Eq,
{
    fn eq(&self, other: &Self) -> bool {
        (self.source == other.source && self.target == other.target)
            || (self.source == other.target && self.target == other.source)
    }
}

impl<V> Eq for UndirectedEdge<V> where V: Eq {}

impl<V> Hash for UndirectedEdge<V>
where
    V: Ord + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state)
    }
}

impl<V> PartialOrd for UndirectedEdge<V>
where
    V: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for UndirectedEdge<V>
where
    V: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordered().cmp(&other.ordered())
    }
}

impl<V> Edge<V> for UndirectedEdge<V>
where
    V: Vertex,
{
    const DIRECTED: bool = false;

    fn new(source: V, target: V) -> Self {
        UndirectedEdge { source, target }
    }

    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }

    fn into_pair(self) -> (V, V) {
        (self.source, self.target)
    }
}

impl<V> From<(V, V)> for UndirectedEdge<V> {
    fn from((source, target): (V, V)) -> Self {
        UndirectedEdge { source, target }
    }
}

impl<V> fmt::Display for UndirectedEdge<V>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "({}={})", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectedEdge, Edge, UndirectedEdge};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(x: &T) -> u64 {
        let mut h = DefaultHasher::new();
        x.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_directed() {
        let e = DirectedEdge::new(1, 2);
        assert_eq!(e, DirectedEdge::new(1, 2));
        assert_ne!(e, DirectedEdge::new(2, 1));
        assert_eq!(e.reverse(), DirectedEdge::new(2, 1));
        assert_eq!(e.into_pair(), (1, 2));
        assert!(DirectedEdge::new(1, 3) < DirectedEdge::new(2, 1));
    }

    #[test]
    fn test_undirected() {
        let e = UndirectedEdge::new(3, 5);
        let f = UndirectedEdge::new(5, 3);
        assert_eq!(e, f);
        assert_eq!(hash_of(&e), hash_of(&f));
        assert_eq!(e.cmp(&f), std::cmp::Ordering::Equal);
        assert_ne!(e, UndirectedEdge::new(3, 4));
        assert!(UndirectedEdge::new(5, 1) < UndirectedEdge::new(2, 3));
    }

    #[test]
    fn test_sort_undirected() {
        let mut edges = vec![
            UndirectedEdge::new(4, 2),
            UndirectedEdge::new(1, 3),
            UndirectedEdge::new(2, 1),
        ];
        edges.sort();
        let pairs: Vec<_> = edges.iter().map(|e| (e.source, e.target)).collect();
        assert_eq!(pairs, vec![(2, 1), (1, 3), (4, 2)]);
    }
}
