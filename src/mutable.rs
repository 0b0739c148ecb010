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

//! Traits for modifying graphs.

use crate::edge::Edge;
use crate::traits::Graph;

/// A graph that can be modified in place.
///
/// Implementors provide the four elementary operations; the bulk variants
/// and the constructors are derived from them.
pub trait MutableGraph: Graph + Default {
    /// Add a vertex.
    ///
    /// Adding an existing vertex does nothing.
    fn add_vertex(&mut self, v: Self::Vertex);

    /// Add the edge `(u, v)`.
    ///
    /// Both endpoints are added to the graph if they are not contained yet.
    fn add_edge(&mut self, u: Self::Vertex, v: Self::Vertex);

    /// Remove a vertex and all edges incident to it.
    ///
    /// Removing a vertex that is not contained does nothing.
    fn remove_vertex(&mut self, v: &Self::Vertex);

    /// Remove the edge `(u, v)`.
    ///
    /// Removing an edge that is not contained does nothing.
    fn remove_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex);

    /// Add all given vertices.
    fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = Self::Vertex>,
    {
        for v in vertices {
            self.add_vertex(v);
        }
    }

    /// Add all given edges.
    fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (Self::Vertex, Self::Vertex)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    /// Remove all given vertices.
    fn remove_vertices<'a, I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = &'a Self::Vertex>,
        Self::Vertex: 'a,
    {
        for v in vertices {
            self.remove_vertex(v);
        }
    }

    /// Create a new graph by passing an empty one to the callback `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_adjgraph::{DirectedAdjacencyGraph, Graph, MutableGraph};
    ///
    /// let g: DirectedAdjacencyGraph<char> = DirectedAdjacencyGraph::new_with(|g| {
    ///     g.add_edge('a', 'b');
    ///     g.add_vertex('c');
    /// });
    ///
    /// assert_eq!(g.num_vertices(), 3);
    /// assert_eq!(g.num_edges(), 1);
    /// ```
    fn new_with<F>(f: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut g = Self::default();
        f(&mut g);
        g
    }

    /// Create a copy of another graph with the same vertex type.
    ///
    /// All vertices and all edges of `h` are added to a new graph of this
    /// type. Copying an undirected graph into a directed one adds each edge
    /// in one orientation only.
    fn from_graph<H>(h: &H) -> Self
    where
        H: Graph<Vertex = Self::Vertex>,
    {
        let mut g = Self::default();
        g.add_vertices(h.vertices_iter().cloned());
        g.add_edges(h.edges_iter().map(Edge::into_pair));
        g
    }
}
