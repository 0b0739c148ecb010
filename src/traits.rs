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

//! Traits for graph data structures.
//!
//! A graph is anything that can enumerate its vertices and, for each vertex,
//! its out-neighbors. Everything else a graph answers (edges, counts,
//! degrees, membership tests) is derived from these two operations and may be
//! overridden by implementations that know better.

use crate::edge::Edge;
use crate::error::{GraphError, Result};

use either::Either;

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::Flatten;
use std::option;

/// A vertex of a graph.
///
/// Vertices are opaque client-supplied identifiers. Every type that can be
/// cloned, compared, hashed and printed qualifies.
pub trait Vertex: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + fmt::Debug {}

/// A graph with enumerable vertices and out-adjacencies.
///
/// Implementors provide [`vertices_iter`](Graph::vertices_iter) and
/// [`adjacent_iter`](Graph::adjacent_iter); all other methods are derived.
/// Whether the graph is directed is determined by its edge type.
pub trait Graph {
    /// Type of the vertices.
    type Vertex: Vertex;

    /// Type of the edges, directed or undirected.
    type Edge: Edge<Self::Vertex>;

    /// Iterator over all vertices.
    type VertexIt<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Iterator over the out-neighbors of a vertex.
    type AdjacentIt<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Return an iterator over all vertices.
    fn vertices_iter(&self) -> Self::VertexIt<'_>;

    /// Return an iterator over the out-neighbors of `v`.
    ///
    /// Fails with [`GraphError::NoVertex`] if `v` is not a vertex of the graph.
    fn adjacent_iter(&self, v: &Self::Vertex) -> Result<Self::AdjacentIt<'_>>;

    /// Return `true` if the edges of this graph are directed.
    fn is_directed(&self) -> bool {
        <Self::Edge as Edge<Self::Vertex>>::DIRECTED
    }

    /// Return `true` if `v` is a vertex of this graph.
    fn has_vertex(&self, v: &Self::Vertex) -> bool {
        self.vertices_iter().any(|u| u == v)
    }

    /// Return `true` if the graph contains an edge from `u` to `v`.
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        self.adjacent_iter(u).map_or(false, |mut it| it.any(|w| w == v))
    }

    /// Return `true` if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertices_iter().next().is_none()
    }

    /// Return the number of vertices.
    fn num_vertices(&self) -> usize {
        self.vertices_iter().count()
    }

    /// Return the number of edges.
    ///
    /// An undirected edge is counted once.
    fn num_edges(&self) -> usize
    where
        Self: Sized,
    {
        self.edges_iter().count()
    }

    /// Return the vertices as a vector.
    fn vertices(&self) -> Vec<Self::Vertex> {
        self.vertices_iter().cloned().collect()
    }

    /// Return an iterator over all edges.
    ///
    /// For undirected graphs every edge is reported once, in the
    /// orientation in which it is first encountered.
    fn edges_iter(&self) -> EdgeIter<'_, Self>
    where
        Self: Sized,
    {
        let edges = AllEdges {
            graph: self,
            vertices: self.vertices_iter(),
            current: None,
        };
        if self.is_directed() {
            Either::Left(edges)
        } else {
            Either::Right(UniqueEdges {
                edges,
                seen: HashSet::new(),
            })
        }
    }

    /// Return a snapshot of all edges.
    fn edges(&self) -> Vec<Self::Edge>
    where
        Self: Sized,
    {
        self.edges_iter().collect()
    }

    /// Return the out-neighbors of `v`.
    fn adjacent_vertices(&self, v: &Self::Vertex) -> Result<Vec<Self::Vertex>> {
        Ok(self.adjacent_iter(v)?.cloned().collect())
    }

    /// Return the number of out-neighbors of `v`.
    fn out_degree(&self, v: &Self::Vertex) -> Result<usize> {
        Ok(self.adjacent_iter(v)?.count())
    }
}

/// A graph that also knows the in-neighbors of each vertex.
pub trait Bidirectional: Graph {
    /// Iterator over the in-neighbors of a vertex.
    type InIt<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Return an iterator over the in-neighbors of `v`.
    fn in_iter(&self, v: &Self::Vertex) -> Result<Self::InIt<'_>>;

    /// Return the in-neighbors of `v`.
    fn in_neighbors(&self, v: &Self::Vertex) -> Result<Vec<Self::Vertex>> {
        Ok(self.in_iter(v)?.cloned().collect())
    }

    /// Return the number of in-neighbors of `v`.
    fn in_degree(&self, v: &Self::Vertex) -> Result<usize> {
        Ok(self.in_iter(v)?.count())
    }

    /// Return `in_degree(v) + out_degree(v)`.
    fn degree(&self, v: &Self::Vertex) -> Result<usize> {
        Ok(self.in_degree(v)? + self.out_degree(v)?)
    }

    /// Return `true` if `v` is an in-neighbor of `u`, i.e. there is an edge
    /// from `v` to `u`.
    fn has_in_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        self.in_iter(u).map_or(false, |mut it| it.any(|w| w == v))
    }

    /// Return `true` if `v` is an out-neighbor of `u`.
    fn has_out_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        self.has_edge(u, v)
    }
}

/// Iterator over the edges of a graph, see [`Graph::edges_iter`].
pub type EdgeIter<'a, G> = Either<AllEdges<'a, G>, UniqueEdges<'a, G>>;

/// Iterator over all adjacency entries of a graph as edges.
pub struct AllEdges<'a, G: Graph + 'a> {
    graph: &'a G,
    vertices: G::VertexIt<'a>,
    current: Option<(&'a G::Vertex, G::AdjacentIt<'a>)>,
}

impl<'a, G: Graph + 'a> Iterator for AllEdges<'a, G> {
    type Item = G::Edge;

    fn next(&mut self) -> Option<G::Edge> {
        loop {
            if let Some((u, neighs)) = &mut self.current {
                if let Some(v) = neighs.next() {
                    return Some(G::Edge::new((*u).clone(), v.clone()));
                }
            }
            let u = self.vertices.next()?;
            self.current = self.graph.adjacent_iter(u).ok().map(|neighs| (u, neighs));
        }
    }
}

/// Iterator over the edges of an undirected graph reporting each edge once.
pub struct UniqueEdges<'a, G: Graph + 'a> {
    edges: AllEdges<'a, G>,
    seen: HashSet<G::Edge>,
}

impl<'a, G: Graph + 'a> Iterator for UniqueEdges<'a, G> {
    type Item = G::Edge;

    fn next(&mut self) -> Option<G::Edge> {
        for e in self.edges.by_ref() {
            if self.seen.insert(e.clone()) {
                return Some(e);
            }
        }
        None
    }
}

/// Out-neighbors of a vertex that has been reached through the graph itself.
///
/// Such a vertex always has an adjacency record, so a lookup failure yields
/// the empty iterator.
pub(crate) type Neighbors<'a, G> = Flatten<option::IntoIter<<G as Graph>::AdjacentIt<'a>>>;

pub(crate) fn neighbors<'a, G: Graph>(g: &'a G, v: &G::Vertex) -> Neighbors<'a, G> {
    g.adjacent_iter(v).ok().into_iter().flatten()
}

/// Fail with [`GraphError::NoVertex`] unless `v` is a vertex of `g`.
pub(crate) fn ensure_vertex<G: Graph>(g: &G, v: &G::Vertex) -> Result<()> {
    if g.has_vertex(v) {
        Ok(())
    } else {
        Err(GraphError::no_vertex(v))
    }
}

/// Fail with [`GraphError::NotDirected`] unless `g` is directed.
pub(crate) fn ensure_directed<G: Graph>(g: &G, algorithm: &'static str) -> Result<()> {
    if g.is_directed() {
        Ok(())
    } else {
        Err(GraphError::NotDirected(algorithm))
    }
}

/// Fail with [`GraphError::NotUndirected`] unless `g` is undirected.
pub(crate) fn ensure_undirected<G: Graph>(g: &G, algorithm: &'static str) -> Result<()> {
    if g.is_directed() {
        Err(GraphError::NotUndirected(algorithm))
    } else {
        Ok(())
    }
}
