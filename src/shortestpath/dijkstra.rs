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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start vertex to
//! all other vertices of a (directed or undirected) graph. Each edge is
//! assigned a non-negative weight (or length). The weight of every edge the
//! algorithm touches is validated: a missing or negative weight is an error.
//!
//! # Example
//!
//! ```
//! use rs_adjgraph::UndirectedAdjacencyGraph;
//! use rs_adjgraph::shortestpath::dijkstra;
//! use std::collections::HashMap;
//!
//! //     a-----9-----b
//! //    / \           \
//! //   |   2           6
//! //   |    \           \
//! //  14     c-----8-----d
//! //   |    / \         /
//! //   |   9  10      15
//! //    \ /     \     /
//! //     e----7--f----
//! let weights: HashMap<(char, char), u32> = vec![
//!     (('a', 'b'), 9), (('a', 'c'), 2), (('a', 'e'), 14), (('b', 'd'), 6), (('c', 'd'), 8),
//!     (('c', 'e'), 9), (('c', 'f'), 10), (('d', 'f'), 15), (('e', 'f'), 7),
//! ]
//! .into_iter()
//! .collect();
//! let g: UndirectedAdjacencyGraph<char> = weights.keys().cloned().collect();
//!
//! let path = dijkstra::shortest_path(&g, &weights, &'e', &'b').unwrap();
//! assert_eq!(path, Some(vec!['e', 'c', 'a', 'b']));
//!
//! let paths = dijkstra::shortest_paths(&g, &weights, &'e').unwrap();
//! assert_eq!(paths[&'d'], Some(vec!['e', 'c', 'd']));
//! assert_eq!(paths[&'e'], Some(vec!['e']));
//! ```

use super::{Accumulator, PathBuilder, PathRecorder, ShortestPathVisitor, ShortestPaths, SumAccumulator};
use crate::collections::{BinHeap, ItemPriQueue};
use crate::error::Result;
use crate::num::traits::Zero;
use crate::properties::{EdgeProperties, EdgePropertiesMap};
use crate::traits::{ensure_vertex, neighbors, Graph};
use crate::visitor::{Color, Control, BREAK, CONTINUE};

use std::collections::HashMap;
use std::marker::PhantomData;

use tracing::{debug, trace};

/// Dijkstra's algorithm with a configurable distance accumulator.
///
/// The accumulator combines the distance of a vertex with the weight of an
/// outgoing edge. [`SumAccumulator`] gives shortest paths; Prim's algorithm
/// uses the weight alone (see [`crate::mst::prim`]).
///
/// Events reported to the visitor: `examine_vertex` when a vertex is popped
/// from the queue, `examine_edge`, `edge_relaxed` or `edge_not_relaxed` for
/// each edge to a vertex that is not finished yet, and `finish_vertex`.
pub struct DijkstraAlgorithm<'g, 'p, G, P, W, Vis, Accum>
where
    G: Graph,
    P: ?Sized,
{
    graph: &'g G,
    weights: EdgePropertiesMap<'p, P>,
    visitor: Vis,
    queue: BinHeap<G::Vertex, W>,
    items: HashMap<G::Vertex, usize>,
    phantom: PhantomData<Accum>,
}

/// Dijkstra's shortest path algorithm.
pub type Dijkstra<'g, 'p, G, P, W, Vis> = DijkstraAlgorithm<'g, 'p, G, P, W, Vis, SumAccumulator>;

impl<'g, 'p, G, P, W, Vis, Accum> DijkstraAlgorithm<'g, 'p, G, P, W, Vis, Accum>
where
    G: Graph,
    P: EdgeProperties<G::Vertex, W> + ?Sized,
    W: Copy + PartialOrd + Zero,
    Vis: ShortestPathVisitor<G::Vertex, W>,
    Accum: Accumulator<W>,
{
    /// Prepare a run on `graph` with non-negative edge `weights`.
    pub fn new(graph: &'g G, weights: &'p P, visitor: Vis) -> Self {
        let weights = EdgePropertiesMap::non_negative_weights(weights, graph.is_directed());
        Self::with_weights(graph, weights, visitor)
    }

    /// Prepare a run with a custom validation of the weights.
    pub fn with_weights(graph: &'g G, weights: EdgePropertiesMap<'p, P>, visitor: Vis) -> Self {
        DijkstraAlgorithm {
            graph,
            weights,
            visitor,
            queue: BinHeap::new(),
            items: HashMap::new(),
            phantom: PhantomData,
        }
    }

    pub fn visitor(&self) -> &Vis {
        &self.visitor
    }

    pub fn into_visitor(self) -> Vis {
        self.visitor
    }

    /// Return the shortest path from `source` to `target`.
    ///
    /// The search stops as soon as `target` leaves the queue. Returns
    /// `None` if `target` is not reachable.
    pub fn shortest_path(&mut self, source: &G::Vertex, target: &G::Vertex) -> Result<Option<Vec<G::Vertex>>> {
        self.run(source, Some(target))?;
        Ok(PathBuilder::new(source.clone(), self.visitor.parents_map()).path(target))
    }

    /// Return the shortest paths from `source` to all vertices.
    pub fn shortest_paths(&mut self, source: &G::Vertex) -> Result<ShortestPaths<G::Vertex>> {
        self.run(source, None)?;
        Ok(PathBuilder::new(source.clone(), self.visitor.parents_map()).paths(self.graph.vertices_iter()))
    }

    /// Compute distances and parents of all vertices reachable from `source`.
    ///
    /// The results are stored in the visitor.
    pub fn find_shortest_paths(&mut self, source: &G::Vertex) -> Result<()> {
        self.run(source, None)
    }

    fn run(&mut self, source: &G::Vertex, target: Option<&G::Vertex>) -> Result<()> {
        ensure_vertex(self.graph, source)?;
        debug!("dijkstra from {:?} to {:?}", source, target);

        self.visitor.set_source(source.clone());
        self.queue.clear();
        self.items.clear();
        let item = self.queue.push(source.clone(), W::zero());
        self.items.insert(source.clone(), item);

        while let Some((u, _)) = self.queue.pop_min() {
            self.items.remove(&u);
            if target == Some(&u) {
                break;
            }
            if self.visitor.examine_vertex(&u).is_break() || self.relax_edges(&u)?.is_break() {
                break;
            }
            self.visitor.color_map_mut().set(u.clone(), Color::Black);
            if self.visitor.finish_vertex(&u).is_break() {
                break;
            }
        }

        debug!("dijkstra reached {} vertices", self.visitor.distance_map().len());
        Ok(())
    }

    fn relax_edges(&mut self, u: &G::Vertex) -> Result<Control> {
        let graph = self.graph;
        for v in neighbors(graph, u) {
            // a self loop would make `u` its own parent
            if v == u || self.visitor.is_finished(v) {
                continue;
            }
            if self.relax_edge(u, v)?.is_break() {
                return Ok(BREAK);
            }
        }
        Ok(CONTINUE)
    }

    fn relax_edge(&mut self, u: &G::Vertex, v: &G::Vertex) -> Result<Control> {
        if self.visitor.examine_edge(u, v).is_break() {
            return Ok(BREAK);
        }
        let weight = self.weights.get(u, v)?;
        let du = match self.visitor.distance(u) {
            Some(du) => du,
            None => return Ok(CONTINUE),
        };
        let new_distance = Accum::accum(du, weight);
        if let Some(dv) = self.visitor.distance(v) {
            if !(new_distance < dv) {
                return Ok(self.visitor.edge_not_relaxed(u, v));
            }
        }

        trace!("relax ({:?}, {:?})", u, v);
        self.visitor.distance_map_mut().insert(v.clone(), new_distance);
        self.visitor.parents_map_mut().insert(v.clone(), u.clone());
        match self.visitor.color_map().color(v) {
            Color::White => {
                self.visitor.color_map_mut().set(v.clone(), Color::Gray);
                let item = self.queue.push(v.clone(), new_distance);
                self.items.insert(v.clone(), item);
            }
            Color::Gray => {
                if let Some(item) = self.items.get_mut(v) {
                    self.queue.decrease_key(item, new_distance);
                }
            }
            Color::Black => {}
        }
        Ok(self.visitor.edge_relaxed(u, v))
    }
}

/// Return the shortest path from `source` to `target`.
///
/// Fails if `source` is not a vertex of `g` or if a touched edge has no or a
/// negative weight. Returns `None` if `target` is unreachable.
pub fn shortest_path<G, P, W>(
    g: &G,
    weights: &P,
    source: &G::Vertex,
    target: &G::Vertex,
) -> Result<Option<Vec<G::Vertex>>>
where
    G: Graph,
    P: EdgeProperties<G::Vertex, W> + ?Sized,
    W: Copy + PartialOrd + Zero,
{
    Dijkstra::new(g, weights, PathRecorder::new()).shortest_path(source, target)
}

/// Return the shortest paths from `source` to all vertices.
pub fn shortest_paths<G, P, W>(g: &G, weights: &P, source: &G::Vertex) -> Result<ShortestPaths<G::Vertex>>
where
    G: Graph,
    P: EdgeProperties<G::Vertex, W> + ?Sized,
    W: Copy + PartialOrd + Zero,
{
    Dijkstra::new(g, weights, PathRecorder::new()).shortest_paths(source)
}

/// Like [`shortest_path`] but reporting to `visitor`.
pub fn shortest_path_with_visitor<G, P, W, Vis>(
    g: &G,
    weights: &P,
    source: &G::Vertex,
    target: &G::Vertex,
    visitor: Vis,
) -> Result<Option<Vec<G::Vertex>>>
where
    G: Graph,
    P: EdgeProperties<G::Vertex, W> + ?Sized,
    W: Copy + PartialOrd + Zero,
    Vis: ShortestPathVisitor<G::Vertex, W>,
{
    Dijkstra::new(g, weights, visitor).shortest_path(source, target)
}

/// Like [`shortest_paths`] but reporting to `visitor`.
///
/// # Example
///
/// ```
/// use rs_adjgraph::DirectedAdjacencyGraph;
/// use rs_adjgraph::shortestpath::{dijkstra, PathRecorder, ShortestPathVisitor};
///
/// let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (1, 3)].into_iter().collect();
/// let weights = |u: &u32, v: &u32| Some(v * 10 - u);
///
/// let mut vis = PathRecorder::new();
/// dijkstra::shortest_paths_with_visitor(&g, &weights, &1, &mut vis).unwrap();
/// assert_eq!(vis.distance(&2), Some(19));
/// assert_eq!(vis.distance(&3), Some(29));
/// assert_eq!(vis.parents_map()[&3], 1);
/// ```
pub fn shortest_paths_with_visitor<G, P, W, Vis>(
    g: &G,
    weights: &P,
    source: &G::Vertex,
    visitor: Vis,
) -> Result<ShortestPaths<G::Vertex>>
where
    G: Graph,
    P: EdgeProperties<G::Vertex, W> + ?Sized,
    W: Copy + PartialOrd + Zero,
    Vis: ShortestPathVisitor<G::Vertex, W>,
{
    Dijkstra::new(g, weights, visitor).shortest_paths(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortestpath::PathRecorder;
    use crate::{DirectedAdjacencyGraph, GraphError, MutableGraph, UndirectedAdjacencyGraph};
    use std::cell::RefCell;

    fn graph() -> (DirectedAdjacencyGraph<u32>, HashMap<(u32, u32), u32>) {
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
        let mut g: DirectedAdjacencyGraph<u32> = weights.keys().cloned().collect();
        g.add_vertex(7);
        (g, weights)
    }

    #[test]
    fn test_shortest_paths() {
        let (g, weights) = graph();
        let paths = shortest_paths(&g, &weights, &1).unwrap();
        assert_eq!(paths.len(), 7);
        assert_eq!(paths[&1], Some(vec![1]));
        assert_eq!(paths[&2], Some(vec![1, 2]));
        assert_eq!(paths[&3], Some(vec![1, 3]));
        assert_eq!(paths[&4], Some(vec![1, 3, 4]));
        assert_eq!(paths[&5], Some(vec![1, 3, 6, 5]));
        assert_eq!(paths[&6], Some(vec![1, 3, 6]));
        assert_eq!(paths[&7], None);

        let mut vis = PathRecorder::new();
        shortest_paths_with_visitor(&g, &weights, &1, &mut vis).unwrap();
        assert_eq!(vis.distance(&5), Some(21));
        assert_eq!(vis.distance(&4), Some(20));
        assert_eq!(vis.distance(&7), None);
    }

    #[test]
    fn test_single_target() {
        let (g, weights) = graph();
        let popped = RefCell::new(vec![]);
        let mut vis = PathRecorder::new();
        vis.set_examine_vertex_handler(|&u: &u32| {
            popped.borrow_mut().push(u);
            CONTINUE
        });
        let path = shortest_path_with_visitor(&g, &weights, &1, &3, &mut vis).unwrap();
        assert_eq!(path, Some(vec![1, 3]));
        drop(vis);
        // the target is never examined, vertices farther away are not reached
        let popped = popped.into_inner();
        assert_eq!(popped, vec![1, 2]);

        assert_eq!(shortest_path(&g, &weights, &5, &1), Ok(None));
        assert_eq!(shortest_path(&g, &weights, &4, &4), Ok(Some(vec![4])));
        assert_eq!(shortest_path(&g, &weights, &1, &42), Ok(None));
        assert_eq!(shortest_path(&g, &weights, &42, &1), Err(GraphError::no_vertex(&42)));
    }

    #[test]
    fn test_events() {
        let (g, weights) = graph();
        let relaxed = RefCell::new(0);
        let not_relaxed = RefCell::new(0);
        let mut vis = PathRecorder::new();
        vis.set_edge_relaxed_handler(|_: &u32, _: &u32| {
            *relaxed.borrow_mut() += 1;
            CONTINUE
        });
        vis.set_edge_not_relaxed_handler(|_: &u32, _: &u32| {
            *not_relaxed.borrow_mut() += 1;
            CONTINUE
        });
        shortest_paths_with_visitor(&g, &weights, &1, &mut vis).unwrap();
        drop(vis);
        // 2-3 and 4-5 do not improve, 1-6 and 2-4 are improved later
        assert_eq!(relaxed.into_inner(), 7);
        assert_eq!(not_relaxed.into_inner(), 2);
    }

    #[test]
    fn test_invalid_weights() {
        let (g, mut weights) = graph();
        weights.remove(&(3, 6));
        assert_eq!(
            shortest_paths(&g, &weights, &1),
            Err(GraphError::missing_property("weight", &3, &6))
        );

        let g: UndirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3)].into_iter().collect();
        let weights: HashMap<(u32, u32), i32> = vec![((2, 1), 3), ((2, 3), -1)].into_iter().collect();
        assert_eq!(
            shortest_paths(&g, &weights, &1),
            Err(GraphError::negative_property("weight", &2, &3))
        );
        // an unreached negative edge is not touched
        assert_eq!(shortest_path(&g, &weights, &1, &2), Ok(Some(vec![1, 2])));
    }

    #[test]
    fn test_self_loop() {
        let (mut g, mut weights) = graph();
        g.add_edge(3, 3);
        weights.insert((3, 3), 0);
        g.add_edge(5, 5);
        let mut vis = PathRecorder::new();
        let paths = shortest_paths_with_visitor(&g, &weights, &1, &mut vis).unwrap();
        assert_eq!(paths[&3], Some(vec![1, 3]));
        assert_eq!(paths[&5], Some(vec![1, 3, 6, 5]));
        assert_eq!(vis.parents_map().get(&3), Some(&1));
    }

    #[test]
    fn test_float_weights() {
        let g: UndirectedAdjacencyGraph<&str> = vec![("a", "b"), ("b", "c"), ("a", "c")].into_iter().collect();
        let weights: HashMap<(&str, &str), f64> =
            vec![(("a", "b"), 0.5), (("c", "b"), 0.25), (("a", "c"), 1.0)].into_iter().collect();
        let path = shortest_path(&g, &weights, &"a", &"c").unwrap();
        assert_eq!(path, Some(vec!["a", "b", "c"]));
    }
}
