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

//! Graph views hiding some vertices or edges.
//!
//! A [`FilteredGraph`] borrows a graph and implements [`Graph`] itself, so
//! every algorithm can run on the view without copying the graph.
//!
//! # Example
//!
//! ```
//! use rs_adjgraph::{DirectedAdjacencyGraph, Graph};
//! use rs_adjgraph::filtered::{edges_filtered_by, vertices_filtered_by};
//! use rs_adjgraph::search::bfs;
//!
//! let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 4), (1, 4)].into_iter().collect();
//!
//! let without_two = vertices_filtered_by(&g, |&v: &u32| v != 2);
//! assert_eq!(without_two.num_vertices(), 3);
//! assert_eq!(without_two.num_edges(), 2);
//!
//! let long = edges_filtered_by(&g, |&u: &u32, &v: &u32| v - u > 1);
//! assert_eq!(long.num_edges(), 1);
//! assert_eq!(bfs::start(&long, &1).unwrap().count(), 2);
//! ```

use crate::error::{GraphError, Result};
use crate::traits::Graph;

/// Vertex filter accepting every vertex.
pub type AnyVertex<V> = fn(&V) -> bool;

/// Edge filter accepting every edge.
pub type AnyEdge<V> = fn(&V, &V) -> bool;

fn accept_vertex<V>(_: &V) -> bool {
    true
}

fn accept_edge<V>(_: &V, _: &V) -> bool {
    true
}

/// A view of a graph restricted to the vertices and edges accepted by two
/// predicates.
///
/// An edge is visible if both end vertices are. In an undirected view the
/// edge predicate is tried in both orientations and the edge is kept if
/// either is accepted.
pub struct FilteredGraph<'g, G, PV, PE> {
    graph: &'g G,
    vertex_filter: PV,
    edge_filter: PE,
}

impl<'g, G, PV, PE> FilteredGraph<'g, G, PV, PE>
where
    G: Graph,
    PV: Fn(&G::Vertex) -> bool,
    PE: Fn(&G::Vertex, &G::Vertex) -> bool,
{
    pub fn new(graph: &'g G, vertex_filter: PV, edge_filter: PE) -> Self {
        FilteredGraph {
            graph,
            vertex_filter,
            edge_filter,
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &'g G {
        self.graph
    }
}

/// Return a view of `g` containing only the vertices accepted by `filter`.
pub fn vertices_filtered_by<G, PV>(g: &G, filter: PV) -> FilteredGraph<'_, G, PV, AnyEdge<G::Vertex>>
where
    G: Graph,
    PV: Fn(&G::Vertex) -> bool,
{
    FilteredGraph::new(g, filter, accept_edge as AnyEdge<G::Vertex>)
}

/// Return a view of `g` containing only the edges accepted by `filter`.
pub fn edges_filtered_by<G, PE>(g: &G, filter: PE) -> FilteredGraph<'_, G, AnyVertex<G::Vertex>, PE>
where
    G: Graph,
    PE: Fn(&G::Vertex, &G::Vertex) -> bool,
{
    FilteredGraph::new(g, accept_vertex as AnyVertex<G::Vertex>, filter)
}

/// Iterator over the visible vertices of a view.
pub struct FilteredVertices<'a, I, PV> {
    it: I,
    filter: &'a PV,
}

impl<'a, V, I, PV> Iterator for FilteredVertices<'a, I, PV>
where
    V: 'a,
    I: Iterator<Item = &'a V>,
    PV: Fn(&V) -> bool,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        let filter = self.filter;
        self.it.find(|v| filter(v))
    }
}

/// Iterator over the visible out-neighbors of a vertex.
pub struct FilteredAdjacent<'a, I, V, PV, PE> {
    it: I,
    source: V,
    directed: bool,
    vertex_filter: &'a PV,
    edge_filter: &'a PE,
}

impl<'a, V, I, PV, PE> Iterator for FilteredAdjacent<'a, I, V, PV, PE>
where
    V: 'a,
    I: Iterator<Item = &'a V>,
    PV: Fn(&V) -> bool,
    PE: Fn(&V, &V) -> bool,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        let (vertex_filter, edge_filter) = (self.vertex_filter, self.edge_filter);
        let (u, directed) = (&self.source, self.directed);
        self.it
            .find(|v| vertex_filter(v) && (edge_filter(u, v) || (!directed && edge_filter(v, u))))
    }
}

impl<'g, G, PV, PE> Graph for FilteredGraph<'g, G, PV, PE>
where
    G: Graph,
    PV: Fn(&G::Vertex) -> bool,
    PE: Fn(&G::Vertex, &G::Vertex) -> bool,
{
    type Vertex = G::Vertex;
    type Edge = G::Edge;
    type VertexIt<'a> = FilteredVertices<'a, G::VertexIt<'a>, PV> where Self: 'a;
    type AdjacentIt<'a> = FilteredAdjacent<'a, G::AdjacentIt<'a>, G::Vertex, PV, PE> where Self: 'a;

    fn vertices_iter(&self) -> Self::VertexIt<'_> {
        FilteredVertices {
            it: self.graph.vertices_iter(),
            filter: &self.vertex_filter,
        }
    }

    fn adjacent_iter(&self, v: &G::Vertex) -> Result<Self::AdjacentIt<'_>> {
        if !(self.vertex_filter)(v) {
            return Err(GraphError::no_vertex(v));
        }
        Ok(FilteredAdjacent {
            it: self.graph.adjacent_iter(v)?,
            source: v.clone(),
            directed: self.graph.is_directed(),
            vertex_filter: &self.vertex_filter,
            edge_filter: &self.edge_filter,
        })
    }

    fn has_vertex(&self, v: &G::Vertex) -> bool {
        (self.vertex_filter)(v) && self.graph.has_vertex(v)
    }

    fn has_edge(&self, u: &G::Vertex, v: &G::Vertex) -> bool {
        let accepted = (self.edge_filter)(u, v) || (!self.graph.is_directed() && (self.edge_filter)(v, u));
        accepted && (self.vertex_filter)(u) && (self.vertex_filter)(v) && self.graph.has_edge(u, v)
    }
}

impl<'g, G, PV, PE> Clone for FilteredGraph<'g, G, PV, PE>
where
    PV: Clone,
    PE: Clone,
{
    fn clone(&self) -> Self {
        FilteredGraph {
            graph: self.graph,
            vertex_filter: self.vertex_filter.clone(),
            edge_filter: self.edge_filter.clone(),
        }
    }
}
