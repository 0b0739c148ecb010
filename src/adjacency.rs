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

//! Adjacency-list graphs.
//!
//! An [`AdjacencyGraph`] maps each vertex to the container of its
//! out-neighbors. The [`Direction`] parameter decides whether edges are
//! directed or undirected; an undirected graph is a directed one whose edge
//! insertion and removal act on both endpoints. The container type `C`
//! decides how neighbors are stored (a `HashSet` by default).
//!
//! # Example
//!
//! ```
//! use rs_adjgraph::{DirectedAdjacencyGraph, UndirectedAdjacencyGraph};
//! use rs_adjgraph::traits::*;
//! use rs_adjgraph::MutableGraph;
//!
//! let mut g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 1)].into_iter().collect();
//! assert_eq!(g.num_vertices(), 3);
//! assert!(g.has_edge(&1, &2));
//! assert!(!g.has_edge(&2, &1));
//!
//! g.remove_vertex(&3);
//! assert_eq!(g.num_edges(), 1);
//!
//! let u: UndirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3)].into_iter().collect();
//! assert!(u.has_edge(&2, &1));
//! assert_eq!(u.num_edges(), 2);
//! ```

use crate::collections::AdjacencyList;
use crate::edge::{DirectedEdge, Edge, UndirectedEdge};
use crate::error::{GraphError, Result};
use crate::mutable::MutableGraph;
use crate::traits::{Graph, Vertex};

use std::collections::{hash_map, HashMap, HashSet};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The orientation of the edges of an [`AdjacencyGraph`].
///
/// The default methods record a directed edge. [`Undirected`] overrides
/// them to act on both endpoints.
pub trait Direction {
    /// The edge type of graphs with this orientation.
    type Edge<V: Vertex>: Edge<V>;

    /// Record the adjacency `u -> v`. Both vertices must exist.
    fn insert_adjacency<V, C>(vertices: &mut HashMap<V, C>, u: V, v: V)
    where
        V: Vertex,
        C: AdjacencyList<V>,
    {
        if let Some(adj) = vertices.get_mut(&u) {
            adj.insert(v);
        }
    }

    /// Forget the adjacency `u -> v`.
    fn remove_adjacency<V, C>(vertices: &mut HashMap<V, C>, u: &V, v: &V)
    where
        V: Vertex,
        C: AdjacencyList<V>,
    {
        if let Some(adj) = vertices.get_mut(u) {
            adj.remove(v);
        }
    }
}

/// Directed edges.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Directed;

/// Undirected edges.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Undirected;

impl Direction for Directed {
    type Edge<V: Vertex> = DirectedEdge<V>;
}

impl Direction for Undirected {
    type Edge<V: Vertex> = UndirectedEdge<V>;

    fn insert_adjacency<V, C>(vertices: &mut HashMap<V, C>, u: V, v: V)
    where
        V: Vertex,
        C: AdjacencyList<V>,
    {
        // a self loop is a single adjacency
        if u != v {
            if let Some(adj) = vertices.get_mut(&v) {
                adj.insert(u.clone());
            }
        }
        if let Some(adj) = vertices.get_mut(&u) {
            adj.insert(v);
        }
    }

    fn remove_adjacency<V, C>(vertices: &mut HashMap<V, C>, u: &V, v: &V)
    where
        V: Vertex,
        C: AdjacencyList<V>,
    {
        if let Some(adj) = vertices.get_mut(u) {
            adj.remove(v);
        }
        if let Some(adj) = vertices.get_mut(v) {
            adj.remove(u);
        }
    }
}

/// A graph storing the out-neighbors of each vertex in a container `C`.
#[derive(Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(bound(
        serialize = "V: serde::Serialize + ::std::cmp::Eq + ::std::hash::Hash, C: serde::Serialize",
        deserialize = "V: serde::Deserialize<'de> + ::std::cmp::Eq + ::std::hash::Hash, C: serde::Deserialize<'de>"
    ))
)]
pub struct AdjacencyGraph<V, D = Directed, C = HashSet<V>> {
    vertices: HashMap<V, C>,
    #[cfg_attr(feature = "serialize", serde(skip))]
    direction: PhantomData<D>,
}

/// A directed adjacency graph.
pub type DirectedAdjacencyGraph<V, C = HashSet<V>> = AdjacencyGraph<V, Directed, C>;

/// An undirected adjacency graph.
pub type UndirectedAdjacencyGraph<V, C = HashSet<V>> = AdjacencyGraph<V, Undirected, C>;

impl<V, D, C> AdjacencyGraph<V, D, C>
where
    V: Vertex,
    D: Direction,
    C: AdjacencyList<V>,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `n` vertices.
    pub fn with_capacity(n: usize) -> Self {
        AdjacencyGraph {
            vertices: HashMap::with_capacity(n),
            direction: PhantomData,
        }
    }
}

impl<V, D, C> Default for AdjacencyGraph<V, D, C> {
    fn default() -> Self {
        AdjacencyGraph {
            vertices: HashMap::new(),
            direction: PhantomData,
        }
    }
}

impl<V, D, C> PartialEq for AdjacencyGraph<V, D, C>
where
    V: Vertex,
    C: PartialEq,
{
    /// Two graphs are equal if they have the same vertices and the same
    /// neighbor containers.
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<V, D, C> fmt::Debug for AdjacencyGraph<V, D, C>
where
    V: Vertex,
    D: Direction,
    C: AdjacencyList<V>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut edges: Vec<_> = self.edges_iter().collect();
        edges.sort();
        let mut isolated: Vec<_> = self
            .vertices
            .iter()
            .filter(|(_, adj)| adj.is_empty())
            .map(|(v, _)| v)
            .collect();
        isolated.sort();
        f.debug_struct("AdjacencyGraph")
            .field("edges", &edges)
            .field("isolated", &isolated)
            .finish()
    }
}

impl<V, D, C> Graph for AdjacencyGraph<V, D, C>
where
    V: Vertex,
    D: Direction,
    C: AdjacencyList<V>,
{
    type Vertex = V;
    type Edge = D::Edge<V>;
    type VertexIt<'a> = hash_map::Keys<'a, V, C> where Self: 'a;
    type AdjacentIt<'a> = C::Iter<'a> where Self: 'a;

    fn vertices_iter(&self) -> Self::VertexIt<'_> {
        self.vertices.keys()
    }

    fn adjacent_iter(&self, v: &V) -> Result<Self::AdjacentIt<'_>> {
        self.vertices
            .get(v)
            .map(|adj| adj.iter())
            .ok_or_else(|| GraphError::no_vertex(v))
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.vertices.contains_key(v)
    }

    fn has_edge(&self, u: &V, v: &V) -> bool {
        self.vertices.get(u).map_or(false, |adj| adj.contains(v))
    }

    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn out_degree(&self, v: &V) -> Result<usize> {
        self.vertices
            .get(v)
            .map(|adj| adj.len())
            .ok_or_else(|| GraphError::no_vertex(v))
    }
}

impl<V, D, C> MutableGraph for AdjacencyGraph<V, D, C>
where
    V: Vertex,
    D: Direction,
    C: AdjacencyList<V>,
{
    fn add_vertex(&mut self, v: V) {
        self.vertices.entry(v).or_default();
    }

    fn add_edge(&mut self, u: V, v: V) {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        D::insert_adjacency(&mut self.vertices, u, v);
    }

    fn remove_vertex(&mut self, v: &V) {
        if self.vertices.remove(v).is_some() {
            for adj in self.vertices.values_mut() {
                adj.remove(v);
            }
        }
    }

    fn remove_edge(&mut self, u: &V, v: &V) {
        D::remove_adjacency(&mut self.vertices, u, v);
    }
}

impl<V, D, C> FromIterator<(V, V)> for AdjacencyGraph<V, D, C>
where
    V: Vertex,
    D: Direction,
    C: AdjacencyList<V>,
{
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut g = Self::default();
        g.add_edges(edges);
        g
    }
}

impl<V, D, C> Extend<(V, V)> for AdjacencyGraph<V, D, C>
where
    V: Vertex,
    D: Direction,
    C: AdjacencyList<V>,
{
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        self.add_edges(edges);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::{DirectedEdge, UndirectedEdge};
    use std::collections::BTreeSet;

    fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
        v.sort();
        v
    }

    #[test]
    fn test_directed() {
        let mut g = DirectedAdjacencyGraph::<u32>::new();
        assert!(g.is_empty());
        assert!(g.is_directed());
        g.add_edge(1, 2);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_vertex(4);

        assert_eq!(g.num_vertices(), 4);
        assert_eq!(g.num_edges(), 2);
        assert!(g.has_vertex(&4));
        assert!(g.has_edge(&1, &2));
        assert!(!g.has_edge(&2, &1));
        assert_eq!(g.out_degree(&1), Ok(1));
        assert_eq!(sorted(g.adjacent_vertices(&2).unwrap()), vec![3]);
        assert_eq!(
            sorted(g.edges()),
            vec![DirectedEdge::new(1, 2), DirectedEdge::new(2, 3)]
        );
        assert_eq!(g.adjacent_vertices(&5), Err(GraphError::no_vertex(&5)));

        g.remove_edge(&1, &2);
        assert!(!g.has_edge(&1, &2));
        assert!(g.has_vertex(&1));
        g.remove_edge(&7, &8);
        assert_eq!(g.num_vertices(), 4);
    }

    #[test]
    fn test_undirected() {
        let mut g: UndirectedAdjacencyGraph<char> = vec![('a', 'b'), ('b', 'c'), ('c', 'a')]
            .into_iter()
            .collect();
        assert!(!g.is_directed());
        assert!(g.has_edge(&'b', &'a'));
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.out_degree(&'a'), Ok(2));
        assert_eq!(
            sorted(g.edges()),
            vec![
                UndirectedEdge::new('a', 'b'),
                UndirectedEdge::new('a', 'c'),
                UndirectedEdge::new('b', 'c')
            ]
        );

        g.remove_edge(&'c', &'a');
        assert!(!g.has_edge(&'a', &'c'));
        assert!(!g.has_edge(&'c', &'a'));
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn test_remove_vertex() {
        let mut g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 1), (3, 4)].into_iter().collect();
        g.remove_vertex(&3);
        assert!(!g.has_vertex(&3));
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.edges(), vec![DirectedEdge::new(1, 2)]);
        assert!(g.edges().iter().all(|e| e.source != 3 && e.target != 3));

        g.remove_vertices(&[1, 2]);
        assert_eq!(g.vertices(), vec![4]);
    }

    #[test]
    fn test_containers() {
        let mut g = DirectedAdjacencyGraph::<u32, Vec<u32>>::new();
        g.add_edge(1, 2);
        g.add_edge(1, 2);
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.out_degree(&1), Ok(2));
        g.remove_edge(&1, &2);
        assert_eq!(g.num_edges(), 0);

        let g: DirectedAdjacencyGraph<u32, BTreeSet<u32>> = vec![(1, 3), (1, 2), (1, 4)].into_iter().collect();
        assert_eq!(g.adjacent_vertices(&1), Ok(vec![2, 3, 4]));
    }

    #[test]
    fn test_eq_and_copy() {
        let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3)].into_iter().collect();
        let mut h = DirectedAdjacencyGraph::from_graph(&g);
        assert_eq!(g, h);
        h.add_vertex(4);
        assert_ne!(g, h);

        let u = UndirectedAdjacencyGraph::<u32>::from_graph(&g);
        assert!(u.has_edge(&2, &1));
        assert_eq!(u.num_edges(), 2);

        let mut e = g.clone();
        e.extend(vec![(3, 1)]);
        assert!(e.has_edge(&3, &1));
    }

    #[test]
    fn test_self_loop() {
        let mut g = UndirectedAdjacencyGraph::<u32>::new();
        g.add_edge(1, 1);
        assert!(g.has_edge(&1, &1));
        assert_eq!(g.num_edges(), 1);
        g.remove_vertex(&1);
        assert!(g.is_empty());

        let mut g = UndirectedAdjacencyGraph::<u32, Vec<u32>>::new();
        g.add_edge(1, 1);
        g.add_edge(1, 2);
        assert_eq!(g.out_degree(&1), Ok(2));
        assert_eq!(g.adjacent_vertices(&1).map(sorted), Ok(vec![1, 2]));
        assert_eq!(g.num_edges(), 2);
        g.remove_edge(&1, &1);
        assert_eq!(g.out_degree(&1), Ok(1));
        assert_eq!(g.num_edges(), 1);
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use crate::{DirectedAdjacencyGraph, Graph};
        use serde_json;

        #[test]
        fn test_serde() {
            let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 1)].into_iter().collect();
            let serialized = serde_json::to_string(&g).unwrap();
            let h: DirectedAdjacencyGraph<u32> = serde_json::from_str(&serialized).unwrap();
            assert_eq!(g, h);
            assert_eq!(h.num_edges(), 3);
        }
    }
}
