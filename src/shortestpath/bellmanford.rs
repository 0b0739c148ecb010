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

//! The shortest path algorithm of Bellman and Ford.
//!
//! In contrast to Dijkstra's algorithm negative weights are allowed. The
//! algorithm relaxes all edges in up to `n - 1` passes (stopping early if a
//! pass changes nothing) and then checks the optimality condition of every
//! edge. An edge whose distance could still be decreased lies on or behind
//! a negative cycle; such an edge is reported to
//! [`BellmanFordVisitor::edge_not_minimized`], which fails with
//! [`GraphError::NegativeCycle`](crate::GraphError::NegativeCycle) by default.
//!
//! On undirected graphs each edge is used in both directions, so any
//! reachable edge with a negative weight is a negative cycle.
//!
//! # Example
//!
//! ```
//! use rs_adjgraph::{DirectedAdjacencyGraph, GraphError};
//! use rs_adjgraph::shortestpath::bellmanford;
//! use std::collections::HashMap;
//!
//! let mut weights: HashMap<(u32, u32), i32> =
//!     vec![((1, 2), 10), ((1, 3), 1), ((3, 2), -3)].into_iter().collect();
//! let g: DirectedAdjacencyGraph<u32> = weights.keys().cloned().collect();
//!
//! let paths = bellmanford::shortest_paths(&g, &weights, &1).unwrap();
//! assert_eq!(paths[&2], Some(vec![1, 3, 2]));
//!
//! weights.insert((2, 3), 1);
//! let g: DirectedAdjacencyGraph<u32> = weights.keys().cloned().collect();
//! assert!(matches!(
//!     bellmanford::shortest_paths(&g, &weights, &1),
//!     Err(GraphError::NegativeCycle { .. })
//! ));
//! ```

use super::{Accumulator, BellmanFordVisitor, PathBuilder, PathRecorder, ShortestPaths, SumAccumulator};
use crate::edge::Edge;
use crate::error::Result;
use crate::num::traits::Zero;
use crate::properties::{EdgeProperties, EdgePropertiesMap};
use crate::traits::{ensure_vertex, Graph, Vertex};

use tracing::debug;

/// Return the shortest paths from `source` to all vertices.
///
/// Fails if `source` is not a vertex of `g`, if some edge has no weight or
/// if a negative cycle is reachable from `source`.
pub fn shortest_paths<G, P, W>(g: &G, weights: &P, source: &G::Vertex) -> Result<ShortestPaths<G::Vertex>>
where
    G: Graph,
    P: EdgeProperties<G::Vertex, W> + ?Sized,
    W: Copy + PartialOrd + Zero,
{
    shortest_paths_with_visitor(g, weights, source, PathRecorder::new())
}

/// Like [`shortest_paths`] but reporting to `visitor`.
///
/// If a hook of the visitor requests to stop during the relaxation passes,
/// the paths found so far are returned without checking for negative
/// cycles.
pub fn shortest_paths_with_visitor<G, P, W, Vis>(
    g: &G,
    weights: &P,
    source: &G::Vertex,
    mut visitor: Vis,
) -> Result<ShortestPaths<G::Vertex>>
where
    G: Graph,
    P: EdgeProperties<G::Vertex, W> + ?Sized,
    W: Copy + PartialOrd + Zero,
    Vis: BellmanFordVisitor<G::Vertex, W>,
{
    ensure_vertex(g, source)?;
    let weights = EdgePropertiesMap::weights(weights, g.is_directed());

    let mut arcs = Vec::with_capacity(g.num_edges());
    for e in g.edges_iter() {
        let (u, v) = (e.source(), e.target());
        arcs.push((u.clone(), v.clone(), weights.get(u, v)?));
        if !g.is_directed() && u != v {
            arcs.push((v.clone(), u.clone(), weights.get(v, u)?));
        }
    }
    debug!("bellman-ford from {:?} on {} arcs", source, arcs.len());

    visitor.set_source(source.clone());
    if relax(g.num_vertices(), &arcs, &mut visitor) {
        for (u, v, w) in &arcs {
            let du = match visitor.distance(u) {
                Some(du) => du,
                None => continue,
            };
            let minimized = match visitor.distance(v) {
                Some(dv) => !(SumAccumulator::accum(du, *w) < dv),
                None => false,
            };
            if minimized {
                if visitor.edge_minimized(u, v).is_break() {
                    break;
                }
            } else {
                visitor.edge_not_minimized(u, v)?;
            }
        }
    }

    Ok(PathBuilder::new(source.clone(), visitor.parents_map()).paths(g.vertices_iter()))
}

/// Run the relaxation passes, returns `false` if the visitor stopped them.
fn relax<V, W, Vis>(num_vertices: usize, arcs: &[(V, V, W)], visitor: &mut Vis) -> bool
where
    V: Vertex,
    W: Copy + PartialOrd + Zero,
    Vis: BellmanFordVisitor<V, W>,
{
    for pass in 1..num_vertices {
        let mut changed = false;
        for (u, v, w) in arcs {
            if visitor.examine_edge(u, v).is_break() {
                return false;
            }
            // skip arcs whose tail has not been reached yet
            let du = match visitor.distance(u) {
                Some(du) => du,
                None => continue,
            };
            let new_distance = SumAccumulator::accum(du, *w);
            let improves = match visitor.distance(v) {
                Some(dv) => new_distance < dv,
                None => true,
            };
            let control = if improves {
                visitor.distance_map_mut().insert(v.clone(), new_distance);
                visitor.parents_map_mut().insert(v.clone(), u.clone());
                changed = true;
                visitor.edge_relaxed(u, v)
            } else {
                visitor.edge_not_relaxed(u, v)
            };
            if control.is_break() {
                return false;
            }
        }
        if !changed {
            debug!("bellman-ford stable after {} passes", pass);
            break;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortestpath::{dijkstra, ShortestPathVisitor};
    use crate::visitor::BREAK;
    use crate::{DirectedAdjacencyGraph, GraphError, MutableGraph, UndirectedAdjacencyGraph};
    use std::collections::HashMap;

    fn negative_cycle() -> (DirectedAdjacencyGraph<u32>, HashMap<(u32, u32), i32>) {
        let weights: HashMap<(u32, u32), i32> = vec![((1, 2), 10), ((1, 3), 1), ((2, 3), 1), ((3, 2), -3)]
            .into_iter()
            .collect();
        (weights.keys().cloned().collect(), weights)
    }

    #[test]
    fn test_negative_weights() {
        let weights: HashMap<(char, char), i32> = vec![
            (('s', 'a'), 4),
            (('s', 'b'), 5),
            (('a', 'c'), -2),
            (('b', 'a'), -3),
            (('c', 't'), 1),
            (('b', 't'), 4),
        ]
        .into_iter()
        .collect();
        let g: DirectedAdjacencyGraph<char> = weights.keys().cloned().collect();

        let mut vis = PathRecorder::new();
        let paths = shortest_paths_with_visitor(&g, &weights, &'s', &mut vis).unwrap();
        assert_eq!(paths[&'t'], Some(vec!['s', 'b', 'a', 'c', 't']));
        assert_eq!(paths[&'s'], Some(vec!['s']));
        assert_eq!(vis.distance(&'t'), Some(1));
        assert_eq!(vis.distance(&'a'), Some(2));
    }

    #[test]
    fn test_negative_cycle() {
        let (g, weights) = negative_cycle();
        assert_eq!(
            shortest_paths(&g, &weights, &1).map_err(|e| matches!(e, GraphError::NegativeCycle { .. })),
            Err(true)
        );

        let mut g = g;
        let mut weights = weights;
        g.add_edge(0, 1);
        weights.insert((0, 1), 5);
        assert!(shortest_paths(&g, &weights, &0).is_err());

        // a negative cycle not reachable from the source is fine
        let g2: DirectedAdjacencyGraph<u32> = vec![(0, 1), (2, 3), (3, 2)].into_iter().collect();
        let w2: HashMap<(u32, u32), i32> = vec![((0, 1), 1), ((2, 3), 1), ((3, 2), -3)].into_iter().collect();
        let paths = shortest_paths(&g2, &w2, &0).unwrap();
        assert_eq!(paths[&1], Some(vec![0, 1]));
        assert_eq!(paths[&2], None);
    }

    #[test]
    fn test_undirected() {
        let g: UndirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (1, 3)].into_iter().collect();
        let weights: HashMap<(u32, u32), i32> = vec![((1, 2), 1), ((3, 2), 1), ((1, 3), 5)].into_iter().collect();
        let paths = shortest_paths(&g, &weights, &3).unwrap();
        assert_eq!(paths[&1], Some(vec![3, 2, 1]));

        let weights: HashMap<(u32, u32), i32> = vec![((1, 2), 1), ((3, 2), -1), ((1, 3), 5)].into_iter().collect();
        assert!(matches!(
            shortest_paths(&g, &weights, &1),
            Err(GraphError::NegativeCycle { .. })
        ));
    }

    #[test]
    fn test_agrees_with_dijkstra() {
        let weights: HashMap<(u32, u32), u32> = vec![
            ((1, 2), 7),
            ((1, 3), 9),
            ((1, 6), 14),
            ((2, 3), 10),
            ((2, 4), 15),
            ((3, 4), 11),
            ((3, 6), 2),
            ((4, 5), 6),
            ((6, 5), 10),
        ]
        .into_iter()
        .collect();
        let g: DirectedAdjacencyGraph<u32> = weights.keys().cloned().collect();

        let mut bf = PathRecorder::new();
        let mut dj = PathRecorder::new();
        shortest_paths_with_visitor(&g, &weights, &1, &mut bf).unwrap();
        dijkstra::shortest_paths_with_visitor(&g, &weights, &1, &mut dj).unwrap();
        assert_eq!(bf.distance_map(), dj.distance_map());
    }

    #[test]
    fn test_errors() {
        let (g, mut weights) = negative_cycle();
        assert_eq!(shortest_paths(&g, &weights, &7), Err(GraphError::no_vertex(&7)));
        weights.remove(&(2, 3));
        assert_eq!(
            shortest_paths(&g, &weights, &1),
            Err(GraphError::missing_property("weight", &2, &3))
        );
    }

    #[test]
    fn test_abort() {
        let (g, weights) = negative_cycle();
        let mut vis = PathRecorder::new();
        vis.set_edge_relaxed_handler(|_: &u32, _: &u32| BREAK);
        // stopped before the check, the cycle goes unnoticed
        let paths = shortest_paths_with_visitor(&g, &weights, &1, &mut vis).unwrap();
        assert_eq!(paths.values().filter(|p| p.is_some()).count(), 2);
    }
}
