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

//! Prim's algorithm for the *Minimum Spanning Tree* problem.
//!
//! Prim's algorithm is Dijkstra's algorithm with a different distance: the
//! key of a vertex outside the tree is the weight of the cheapest edge
//! connecting it to the tree, not the length of a path. Hence both share the
//! same engine and the same visitor events.

use crate::adjacency::UndirectedAdjacencyGraph;
use crate::error::Result;
use crate::mutable::MutableGraph;
use crate::num::traits::Zero;
use crate::properties::{EdgeProperties, EdgePropertiesMap};
use crate::shortestpath::dijkstra::DijkstraAlgorithm;
use crate::shortestpath::{Accumulator, PathRecorder, ShortestPathVisitor};
use crate::traits::Graph;

use tracing::debug;

/// Uses the weight of the edge as distance of its head.
pub struct WeightAccumulator;

impl<T> Accumulator<T> for WeightAccumulator {
    fn accum(_dist: T, weight: T) -> T {
        weight
    }
}

/// Run Prim's algorithm to solve the *Minimum Spanning Tree* problem.
///
/// The tree is grown from `start`, or from an arbitrary vertex if `start`
/// is `None`. If the graph is not connected, only the component containing
/// the start vertex is spanned. The returned tree always contains the start
/// vertex; it is empty only if the graph is. Negative weights are allowed.
///
/// Fails if `start` is not a vertex of `g` or if an edge touched by the
/// algorithm has no weight.
///
/// # Example
///
/// ```
/// use rs_adjgraph::{Graph, UndirectedAdjacencyGraph, UndirectedEdge};
/// use rs_adjgraph::mst::prim_minimum_spanning_tree;
/// use std::collections::HashMap;
///
/// let weights: HashMap<(u32, u32), u32> =
///     vec![((1, 2), 10), ((1, 3), 1), ((2, 3), 1), ((2, 4), 1), ((3, 4), 10)].into_iter().collect();
/// let g: UndirectedAdjacencyGraph<u32> = weights.keys().cloned().collect();
///
/// let tree = prim_minimum_spanning_tree(&g, &weights, Some(&1)).unwrap();
/// let mut edges = tree.edges();
/// edges.sort();
/// assert_eq!(edges, vec![UndirectedEdge::new(1, 3), UndirectedEdge::new(2, 3), UndirectedEdge::new(2, 4)]);
/// ```
pub fn prim_minimum_spanning_tree<G, P, W>(
    g: &G,
    weights: &P,
    start: Option<&G::Vertex>,
) -> Result<UndirectedAdjacencyGraph<G::Vertex>>
where
    G: Graph,
    P: EdgeProperties<G::Vertex, W> + ?Sized,
    W: Copy + PartialOrd + Zero,
{
    prim_with_visitor(g, weights, start, PathRecorder::new())
}

/// Like [`prim_minimum_spanning_tree`] but reporting to `visitor`.
pub fn prim_with_visitor<G, P, W, Vis>(
    g: &G,
    weights: &P,
    start: Option<&G::Vertex>,
    visitor: Vis,
) -> Result<UndirectedAdjacencyGraph<G::Vertex>>
where
    G: Graph,
    P: EdgeProperties<G::Vertex, W> + ?Sized,
    W: Copy + PartialOrd + Zero,
    Vis: ShortestPathVisitor<G::Vertex, W>,
{
    let start = match start.or_else(|| g.vertices_iter().next()) {
        Some(start) => start,
        None => return Ok(UndirectedAdjacencyGraph::new()),
    };

    let weights = EdgePropertiesMap::weights(weights, g.is_directed());
    let mut prim = DijkstraAlgorithm::<_, _, W, _, WeightAccumulator>::with_weights(g, weights, visitor);
    prim.find_shortest_paths(start)?;

    let mut tree = UndirectedAdjacencyGraph::new();
    tree.add_vertex(start.clone());
    for (v, u) in prim.visitor().parents_map() {
        tree.add_edge(u.clone(), v.clone());
    }
    debug!("prim spanned {} vertices from {:?}", tree.num_vertices(), start);
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::UndirectedEdge;
    use crate::visitor::CONTINUE;
    use crate::GraphError;
    use std::cell::RefCell;
    use std::collections::{BTreeSet, HashMap};

    fn weights() -> HashMap<(u32, u32), i32> {
        vec![((1, 2), 10), ((1, 3), 1), ((2, 3), 1), ((2, 4), 1), ((3, 4), 10)]
            .into_iter()
            .collect()
    }

    fn sorted_edges<G: Graph>(g: &G) -> Vec<G::Edge> {
        let mut edges = g.edges();
        edges.sort();
        edges
    }

    #[test]
    fn test_minimum_spanning_tree() {
        let weights = weights();
        let g: UndirectedAdjacencyGraph<u32> = weights.keys().cloned().collect();
        let tree = prim_minimum_spanning_tree(&g, &weights, None).unwrap();
        assert_eq!(
            sorted_edges(&tree),
            vec![UndirectedEdge::new(1, 3), UndirectedEdge::new(2, 3), UndirectedEdge::new(2, 4)]
        );
        assert_eq!(tree.num_vertices(), 4);
    }

    #[test]
    fn test_disconnected() {
        let mut weights = weights();
        weights.insert((5, 6), 1);
        weights.insert((6, 7), 2);
        let g: UndirectedAdjacencyGraph<u32> = weights.keys().cloned().collect();

        let tree = prim_minimum_spanning_tree(&g, &weights, Some(&1)).unwrap();
        assert_eq!(tree.num_edges(), 3);
        let tree = prim_minimum_spanning_tree(&g, &weights, Some(&6)).unwrap();
        assert_eq!(
            sorted_edges(&tree),
            vec![UndirectedEdge::new(5, 6), UndirectedEdge::new(6, 7)]
        );

        let mut g = g;
        g.add_vertex(8);
        let tree = prim_minimum_spanning_tree(&g, &weights, Some(&8)).unwrap();
        assert_eq!(tree.vertices(), vec![8]);
        assert_eq!(tree.num_edges(), 0);
    }

    #[test]
    fn test_self_loops() {
        let looped: HashMap<(u32, u32), i32> = vec![((1, 2), 10), ((2, 2), 1), ((1, 1), -5)].into_iter().collect();
        let g: UndirectedAdjacencyGraph<u32> = looped.keys().cloned().collect();
        let tree = prim_minimum_spanning_tree(&g, &looped, Some(&1)).unwrap();
        assert_eq!(sorted_edges(&tree), vec![UndirectedEdge::new(1, 2)]);

        let mut weights = weights();
        weights.insert((4, 4), 0);
        let g: UndirectedAdjacencyGraph<u32> = weights.keys().cloned().collect();
        let tree = prim_minimum_spanning_tree(&g, &weights, Some(&1)).unwrap();
        assert_eq!(
            sorted_edges(&tree),
            vec![UndirectedEdge::new(1, 3), UndirectedEdge::new(2, 3), UndirectedEdge::new(2, 4)]
        );
    }

    #[test]
    fn test_negative_weights() {
        let mut weights = weights();
        weights.insert((1, 3), -2);
        weights.insert((2, 3), -2);
        let g: UndirectedAdjacencyGraph<u32> = weights.keys().cloned().collect();
        let tree = prim_minimum_spanning_tree(&g, &weights, Some(&1)).unwrap();
        assert_eq!(
            sorted_edges(&tree),
            vec![UndirectedEdge::new(1, 3), UndirectedEdge::new(2, 3), UndirectedEdge::new(2, 4)]
        );
    }

    #[test]
    fn test_visitor() {
        let weights = weights();
        let g: UndirectedAdjacencyGraph<u32, BTreeSet<u32>> = weights.keys().cloned().collect();
        let events = RefCell::new(vec![]);
        let mut vis = PathRecorder::new();
        vis.set_examine_vertex_handler(|u: &u32| {
            events.borrow_mut().push(format!("examine_vertex {}", u));
            CONTINUE
        });
        vis.set_finish_vertex_handler(|u: &u32| {
            events.borrow_mut().push(format!("finish_vertex {}", u));
            CONTINUE
        });
        vis.set_examine_edge_handler(|u: &u32, v: &u32| {
            events.borrow_mut().push(format!("examine_edge {}-{}", u, v));
            CONTINUE
        });
        vis.set_edge_relaxed_handler(|u: &u32, v: &u32| {
            events.borrow_mut().push(format!("edge_relaxed {}-{}", u, v));
            CONTINUE
        });
        vis.set_edge_not_relaxed_handler(|u: &u32, v: &u32| {
            events.borrow_mut().push(format!("edge_not_relaxed {}-{}", u, v));
            CONTINUE
        });
        prim_with_visitor(&g, &weights, Some(&1), &mut vis).unwrap();
        drop(vis);

        assert_eq!(
            events.into_inner(),
            vec![
                "examine_vertex 1",
                "examine_edge 1-2",
                "edge_relaxed 1-2",
                "examine_edge 1-3",
                "edge_relaxed 1-3",
                "finish_vertex 1",
                "examine_vertex 3",
                "examine_edge 3-2",
                "edge_relaxed 3-2",
                "examine_edge 3-4",
                "edge_relaxed 3-4",
                "finish_vertex 3",
                "examine_vertex 2",
                "examine_edge 2-4",
                "edge_relaxed 2-4",
                "finish_vertex 2",
                "examine_vertex 4",
                "finish_vertex 4",
            ]
        );
    }

    #[test]
    fn test_errors() {
        let mut weights = weights();
        let g: UndirectedAdjacencyGraph<u32> = weights.keys().cloned().collect();
        assert_eq!(
            prim_minimum_spanning_tree(&g, &weights, Some(&9)),
            Err(GraphError::no_vertex(&9))
        );
        weights.remove(&(2, 4));
        assert_eq!(
            prim_minimum_spanning_tree(&g, &weights, Some(&1)),
            Err(GraphError::missing_property("weight", &2, &4))
        );

        let empty: UndirectedAdjacencyGraph<u32> = UndirectedAdjacencyGraph::new();
        assert!(prim_minimum_spanning_tree(&empty, &weights, None).unwrap().is_empty());
    }
}
