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

//! Directed graphs with fast access to in-neighbors.

use crate::collections::AdjacencyList;
use crate::edge::DirectedEdge;
use crate::error::{GraphError, Result};
use crate::mutable::MutableGraph;
use crate::traits::{Bidirectional, Graph, Vertex};

use std::collections::{hash_map, HashMap, HashSet};
use std::iter::FromIterator;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The out- and in-neighbors of a vertex.
///
/// Only visible as part of the vertex iterator type of
/// [`BidirectionalGraph`].
#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct InOut<C> {
    outgoing: C,
    incoming: C,
}

/// A directed graph storing both out- and in-neighbors of each vertex.
///
/// Every mutation updates both sides, so removing a vertex costs time
/// proportional to its degree.
///
/// # Example
///
/// ```
/// use rs_adjgraph::{BidirectionalGraph, Graph, MutableGraph};
/// use rs_adjgraph::traits::Bidirectional;
///
/// let mut g: BidirectionalGraph<u32> = vec![(1, 2), (3, 2), (2, 4)].into_iter().collect();
/// assert_eq!(g.in_degree(&2), Ok(2));
/// assert_eq!(g.degree(&2), Ok(3));
/// assert!(g.has_in_edge(&2, &3));
///
/// g.remove_vertex(&2);
/// assert_eq!(g.out_degree(&1), Ok(0));
/// assert_eq!(g.in_degree(&4), Ok(0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(bound(
        serialize = "V: serde::Serialize + ::std::cmp::Eq + ::std::hash::Hash, C: serde::Serialize",
        deserialize = "V: serde::Deserialize<'de> + ::std::cmp::Eq + ::std::hash::Hash, C: serde::Deserialize<'de>"
    ))
)]
pub struct BidirectionalGraph<V, C = HashSet<V>>
where
    V: Eq + std::hash::Hash,
{
    vertices: HashMap<V, InOut<C>>,
}

impl<V, C> BidirectionalGraph<V, C>
where
    V: Vertex,
    C: AdjacencyList<V>,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V, C> Default for BidirectionalGraph<V, C>
where
    V: Eq + std::hash::Hash,
{
    fn default() -> Self {
        BidirectionalGraph {
            vertices: HashMap::new(),
        }
    }
}

impl<V, C> BidirectionalGraph<V, C>
where
    V: Vertex,
{
    fn record(&self, v: &V) -> Result<&InOut<C>> {
        self.vertices.get(v).ok_or_else(|| GraphError::no_vertex(v))
    }
}

impl<V, C> Graph for BidirectionalGraph<V, C>
where
    V: Vertex,
    C: AdjacencyList<V>,
{
    type Vertex = V;
    type Edge = DirectedEdge<V>;
    type VertexIt<'a> = hash_map::Keys<'a, V, InOut<C>> where Self: 'a;
    type AdjacentIt<'a> = C::Iter<'a> where Self: 'a;

    fn vertices_iter(&self) -> Self::VertexIt<'_> {
        self.vertices.keys()
    }

    fn adjacent_iter(&self, v: &V) -> Result<Self::AdjacentIt<'_>> {
        Ok(self.record(v)?.outgoing.iter())
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.vertices.contains_key(v)
    }

    fn has_edge(&self, u: &V, v: &V) -> bool {
        self.vertices.get(u).map_or(false, |r| r.outgoing.contains(v))
    }

    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn out_degree(&self, v: &V) -> Result<usize> {
        Ok(self.record(v)?.outgoing.len())
    }
}

impl<V, C> Bidirectional for BidirectionalGraph<V, C>
where
    V: Vertex,
    C: AdjacencyList<V>,
{
    type InIt<'a> = C::Iter<'a> where Self: 'a;

    fn in_iter(&self, v: &V) -> Result<Self::InIt<'_>> {
        Ok(self.record(v)?.incoming.iter())
    }

    fn in_degree(&self, v: &V) -> Result<usize> {
        Ok(self.record(v)?.incoming.len())
    }

    fn has_in_edge(&self, u: &V, v: &V) -> bool {
        self.vertices.get(u).map_or(false, |r| r.incoming.contains(v))
    }
}

impl<V, C> MutableGraph for BidirectionalGraph<V, C>
where
    V: Vertex,
    C: AdjacencyList<V>,
{
    fn add_vertex(&mut self, v: V) {
        self.vertices.entry(v).or_default();
    }

    fn add_edge(&mut self, u: V, v: V) {
        self.vertices.entry(v.clone()).or_default().incoming.insert(u.clone());
        self.vertices.entry(u).or_default().outgoing.insert(v);
    }

    fn remove_vertex(&mut self, v: &V) {
        if let Some(record) = self.vertices.remove(v) {
            for w in record.outgoing.iter() {
                if let Some(r) = self.vertices.get_mut(w) {
                    r.incoming.remove(v);
                }
            }
            for w in record.incoming.iter() {
                if let Some(r) = self.vertices.get_mut(w) {
                    r.outgoing.remove(v);
                }
            }
        }
    }

    fn remove_edge(&mut self, u: &V, v: &V) {
        if let Some(r) = self.vertices.get_mut(u) {
            r.outgoing.remove(v);
        }
        if let Some(r) = self.vertices.get_mut(v) {
            r.incoming.remove(u);
        }
    }
}

impl<V, C> FromIterator<(V, V)> for BidirectionalGraph<V, C>
where
    V: Vertex,
    C: AdjacencyList<V>,
{
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut g = Self::default();
        g.add_edges(edges);
        g
    }
}

#[cfg(test)]
mod tests {
    use super::BidirectionalGraph;
    use crate::components::strongly_connected_components;
    use crate::search::bfs;
    use crate::topsort;
    use crate::traits::{Bidirectional, Graph};
    use crate::MutableGraph;

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort();
        v
    }

    #[test]
    fn test_in_out() {
        let g: BidirectionalGraph<u32> = vec![(1, 2), (1, 3), (3, 2), (2, 2)].into_iter().collect();
        assert!(g.is_directed());
        assert_eq!(sorted(g.in_neighbors(&2).unwrap()), vec![1, 2, 3]);
        assert_eq!(sorted(g.adjacent_vertices(&1).unwrap()), vec![2, 3]);
        assert_eq!(g.in_degree(&1), Ok(0));
        assert_eq!(g.degree(&2), Ok(4));
        assert!(g.has_out_edge(&3, &2));
        assert!(g.has_in_edge(&3, &1));
        assert!(!g.has_in_edge(&1, &3));
        assert!(g.in_neighbors(&9).is_err());
    }

    #[test]
    fn test_remove() {
        let mut g: BidirectionalGraph<u32> = vec![(1, 2), (2, 3), (3, 1), (2, 2)].into_iter().collect();
        g.remove_edge(&2, &3);
        assert!(!g.has_edge(&2, &3));
        assert_eq!(g.in_degree(&3), Ok(0));

        g.remove_vertex(&2);
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.out_degree(&1), Ok(0));
        assert_eq!(sorted(g.in_neighbors(&1).unwrap()), vec![3]);
        for v in g.vertices() {
            assert!(!g.in_neighbors(&v).unwrap().contains(&2));
            assert!(!g.adjacent_vertices(&v).unwrap().contains(&2));
        }
    }

    #[test]
    fn test_generic_algorithms() {
        let mut g: BidirectionalGraph<u32> = vec![(1, 2), (1, 3), (2, 4), (3, 4)].into_iter().collect();
        assert_eq!(g.num_edges(), 4);
        assert_eq!(g.edges().len(), 4);

        let order: Vec<_> = topsort::start(&g).collect();
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], 1);
        assert_eq!(order[3], 4);
        assert!(topsort::is_acyclic(&g));

        let mut reached: Vec<_> = bfs::start(&g, &2).unwrap().collect();
        reached.sort();
        assert_eq!(reached, vec![2, 4]);

        g.add_edge(4, 1);
        assert!(!topsort::is_acyclic(&g));
        assert_eq!(strongly_connected_components(&g).unwrap().num_components(), 1);
        assert_eq!(sorted(g.in_neighbors(&1).unwrap()), vec![4]);
    }
}
