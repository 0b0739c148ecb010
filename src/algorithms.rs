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

//! General algorithms working on graphs.

use crate::adjacency::UndirectedAdjacencyGraph;
use crate::edge::Edge;
use crate::error::Result;
use crate::mutable::MutableGraph;
use crate::traits::{ensure_directed, Graph};

/// Returns the reverse of the directed graph `g`.
///
/// The reverse has the same vertices as `g` and the edge `(v, u)` for each
/// edge `(u, v)` of `g`.
///
/// # Example
///
/// ```
/// use rs_adjgraph::{DirectedAdjacencyGraph, Graph};
/// use rs_adjgraph::algorithms::reverse;
///
/// let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (4, 4)].into_iter().collect();
/// let h: DirectedAdjacencyGraph<u32> = reverse(&g).unwrap();
/// assert!(h.has_edge(&2, &1) && h.has_edge(&3, &2) && h.has_edge(&4, &4));
/// assert_eq!(h.num_edges(), 3);
/// assert_eq!(reverse::<_, DirectedAdjacencyGraph<u32>>(&h).unwrap(), g);
/// ```
pub fn reverse<G, H>(g: &G) -> Result<H>
where
    G: Graph,
    H: MutableGraph<Vertex = G::Vertex>,
{
    ensure_directed(g, "reverse")?;
    Ok(H::new_with(|h| {
        h.add_vertices(g.vertices_iter().cloned());
        h.add_edges(g.edges_iter().map(|e| {
            let (u, v) = e.into_pair();
            (v, u)
        }));
    }))
}

/// Returns an undirected copy of `g`.
///
/// Each edge `(u, v)` of `g` becomes the undirected edge `{u, v}`, so
/// antiparallel directed edges are merged.
///
/// # Example
///
/// ```
/// use rs_adjgraph::{DirectedAdjacencyGraph, Graph};
/// use rs_adjgraph::algorithms::to_undirected;
///
/// let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 1), (2, 3)].into_iter().collect();
/// let h = to_undirected(&g);
/// assert!(!h.is_directed());
/// assert_eq!(h.num_edges(), 2);
/// assert!(h.has_edge(&3, &2));
/// ```
pub fn to_undirected<G>(g: &G) -> UndirectedAdjacencyGraph<G::Vertex>
where
    G: Graph,
{
    UndirectedAdjacencyGraph::from_graph(g)
}

/// Returns a copy of `g` as an adjacency graph of type `H`.
///
/// This is how any graph, e.g. a filtered view, is turned into a concrete
/// graph that can be modified.
///
/// # Example
///
/// ```
/// use rs_adjgraph::{DirectedAdjacencyGraph, Graph};
/// use rs_adjgraph::algorithms::to_adjacency;
/// use rs_adjgraph::filtered::vertices_filtered_by;
/// use std::collections::BTreeSet;
///
/// let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 1)].into_iter().collect();
/// let h: DirectedAdjacencyGraph<u32, BTreeSet<u32>> = to_adjacency(&vertices_filtered_by(&g, |&v: &u32| v > 1));
/// assert_eq!(h.vertices().len(), 2);
/// assert_eq!(h.edges().len(), 1);
/// ```
pub fn to_adjacency<G, H>(g: &G) -> H
where
    G: Graph,
    H: MutableGraph<Vertex = G::Vertex>,
{
    H::from_graph(g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BidirectionalGraph, Bidirectional, DirectedAdjacencyGraph, GraphError};

    #[test]
    fn test_reverse() {
        let g: DirectedAdjacencyGraph<char> = vec![('a', 'b'), ('b', 'c'), ('a', 'c')].into_iter().collect();
        let h: BidirectionalGraph<char> = reverse(&g).unwrap();
        assert_eq!(h.in_neighbors(&'a').unwrap().len(), 2);
        assert_eq!(h.out_degree(&'a').unwrap(), 0);
        assert_eq!(h.num_vertices(), 3);

        let u = to_undirected(&g);
        let r: std::result::Result<DirectedAdjacencyGraph<char>, _> = reverse(&u);
        assert!(matches!(r, Err(GraphError::NotDirected(_))));
    }

    #[test]
    fn test_to_undirected() {
        let mut g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 1), (3, 3)].into_iter().collect();
        g.add_vertex(4);
        let h = to_undirected(&g);
        assert_eq!(h.num_vertices(), 4);
        assert_eq!(h.num_edges(), 2);
        assert!(h.has_edge(&1, &2) && h.has_edge(&2, &1) && h.has_edge(&3, &3));
        assert_eq!(to_undirected(&h), h);
    }
}
