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

//! Shortest path algorithms.
//!
//! Both [`dijkstra`] and [`bellmanford`] report their progress to a
//! [`ShortestPathVisitor`], which owns the distance and parent maps of the
//! run. [`PathRecorder`] is the default visitor; it optionally forwards the
//! events to user supplied closures.
//!
//! Distances are only stored for reached vertices, an absent distance means
//! "infinity". Paths are reconstructed from the parent map by a
//! [`PathBuilder`].

pub mod bellmanford;
pub mod dijkstra;

use crate::error::{GraphError, Result};
use crate::num::traits::Zero;
use crate::search::path_from_incomings;
use crate::traits::Vertex;
use crate::visitor::{Color, ColorMap, Control, GraphVisitor, CONTINUE};

use std::collections::HashMap;
use std::ops::Add;

/// Shortest paths from a source to each vertex, `None` if unreachable.
pub type ShortestPaths<V> = HashMap<V, Option<Vec<V>>>;

/// Combination of the distance of a vertex and the weight of an outgoing
/// edge.
pub trait Accumulator<T> {
    fn accum(dist: T, weight: T) -> T;
}

/// Accumulates by adding distance and weight.
pub struct SumAccumulator;

impl<T> Accumulator<T> for SumAccumulator
where
    T: Add<Output = T>,
{
    fn accum(dist: T, weight: T) -> T {
        dist + weight
    }
}

/// Visitor of a shortest path algorithm.
///
/// Besides the color map, the visitor owns the tentative distances and the
/// parent of each reached vertex.
pub trait ShortestPathVisitor<V: Vertex, W>: GraphVisitor<V> {
    fn distance_map(&self) -> &HashMap<V, W>;

    fn distance_map_mut(&mut self) -> &mut HashMap<V, W>;

    fn parents_map(&self) -> &HashMap<V, V>;

    fn parents_map_mut(&mut self) -> &mut HashMap<V, V>;

    /// Current distance of `v`, `None` if `v` has not been reached.
    fn distance(&self, v: &V) -> Option<W>
    where
        W: Copy,
    {
        self.distance_map().get(v).copied()
    }

    /// Reset the visitor and start a new run at `source`.
    fn set_source(&mut self, source: V)
    where
        W: Zero,
    {
        self.reset();
        self.distance_map_mut().clear();
        self.parents_map_mut().clear();
        self.color_map_mut().set(source.clone(), Color::Gray);
        self.distance_map_mut().insert(source, W::zero());
    }

    /// The distance of `v` has been decreased via the edge `(u, v)`.
    fn edge_relaxed(&mut self, _u: &V, _v: &V) -> Control {
        CONTINUE
    }

    /// The edge `(u, v)` did not decrease the distance of `v`.
    fn edge_not_relaxed(&mut self, _u: &V, _v: &V) -> Control {
        CONTINUE
    }
}

/// Visitor of the Bellman-Ford algorithm.
pub trait BellmanFordVisitor<V: Vertex, W>: ShortestPathVisitor<V, W> {
    /// The edge `(u, v)` satisfies the optimality condition.
    fn edge_minimized(&mut self, _u: &V, _v: &V) -> Control {
        CONTINUE
    }

    /// The edge `(u, v)` violates the optimality condition after all
    /// relaxation passes, so it lies on (or is reachable from) a negative
    /// cycle.
    ///
    /// The default implementation fails with [`GraphError::NegativeCycle`].
    fn edge_not_minimized(&mut self, u: &V, v: &V) -> Result<()> {
        Err(GraphError::negative_cycle(u, v))
    }
}

impl<'a, V, W, T> ShortestPathVisitor<V, W> for &'a mut T
where
    V: Vertex,
    T: ShortestPathVisitor<V, W> + ?Sized,
{
    fn distance_map(&self) -> &HashMap<V, W> {
        (**self).distance_map()
    }

    fn distance_map_mut(&mut self) -> &mut HashMap<V, W> {
        (**self).distance_map_mut()
    }

    fn parents_map(&self) -> &HashMap<V, V> {
        (**self).parents_map()
    }

    fn parents_map_mut(&mut self) -> &mut HashMap<V, V> {
        (**self).parents_map_mut()
    }

    fn set_source(&mut self, source: V)
    where
        W: Zero,
    {
        (**self).set_source(source)
    }

    fn edge_relaxed(&mut self, u: &V, v: &V) -> Control {
        (**self).edge_relaxed(u, v)
    }

    fn edge_not_relaxed(&mut self, u: &V, v: &V) -> Control {
        (**self).edge_not_relaxed(u, v)
    }
}

impl<'a, V, W, T> BellmanFordVisitor<V, W> for &'a mut T
where
    V: Vertex,
    T: BellmanFordVisitor<V, W> + ?Sized,
{
    fn edge_minimized(&mut self, u: &V, v: &V) -> Control {
        (**self).edge_minimized(u, v)
    }

    fn edge_not_minimized(&mut self, u: &V, v: &V) -> Result<()> {
        (**self).edge_not_minimized(u, v)
    }
}

type VertexHandler<'h, V> = Box<dyn FnMut(&V) -> Control + 'h>;
type EdgeHandler<'h, V> = Box<dyn FnMut(&V, &V) -> Control + 'h>;
type CheckHandler<'h, V> = Box<dyn FnMut(&V, &V) -> Result<()> + 'h>;

/// The default shortest path visitor.
///
/// Records distances and parents and calls the handlers set for the events.
///
/// # Example
///
/// ```
/// use rs_adjgraph::DirectedAdjacencyGraph;
/// use rs_adjgraph::shortestpath::{bellmanford, PathRecorder};
/// use std::collections::HashMap;
///
/// let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 2)].into_iter().collect();
/// let weights: HashMap<_, _> = vec![((1, 2), 1), ((2, 3), 1), ((3, 2), -2)].into_iter().collect();
///
/// // report negative cycles instead of failing
/// let mut cycle_edges = vec![];
/// let mut vis = PathRecorder::new();
/// vis.set_edge_not_minimized_handler(|&u: &u32, &v: &u32| {
///     cycle_edges.push((u, v));
///     Ok(())
/// });
/// bellmanford::shortest_paths_with_visitor(&g, &weights, &1, &mut vis).unwrap();
/// drop(vis);
/// assert!(!cycle_edges.is_empty());
/// ```
pub struct PathRecorder<'h, V, W> {
    colors: ColorMap<V>,
    distances: HashMap<V, W>,
    parents: HashMap<V, V>,
    examine_vertex: Option<VertexHandler<'h, V>>,
    finish_vertex: Option<VertexHandler<'h, V>>,
    examine_edge: Option<EdgeHandler<'h, V>>,
    edge_relaxed: Option<EdgeHandler<'h, V>>,
    edge_not_relaxed: Option<EdgeHandler<'h, V>>,
    edge_minimized: Option<EdgeHandler<'h, V>>,
    edge_not_minimized: Option<CheckHandler<'h, V>>,
}

impl<'h, V, W> Default for PathRecorder<'h, V, W> {
    fn default() -> Self {
        PathRecorder {
            colors: ColorMap::default(),
            distances: HashMap::new(),
            parents: HashMap::new(),
            examine_vertex: None,
            finish_vertex: None,
            examine_edge: None,
            edge_relaxed: None,
            edge_not_relaxed: None,
            edge_minimized: None,
            edge_not_minimized: None,
        }
    }
}

impl<'h, V: Vertex, W> PathRecorder<'h, V, W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_examine_vertex_handler<F>(&mut self, f: F)
    where
        F: FnMut(&V) -> Control + 'h,
    {
        self.examine_vertex = Some(Box::new(f));
    }

    pub fn set_finish_vertex_handler<F>(&mut self, f: F)
    where
        F: FnMut(&V) -> Control + 'h,
    {
        self.finish_vertex = Some(Box::new(f));
    }

    pub fn set_examine_edge_handler<F>(&mut self, f: F)
    where
        F: FnMut(&V, &V) -> Control + 'h,
    {
        self.examine_edge = Some(Box::new(f));
    }

    pub fn set_edge_relaxed_handler<F>(&mut self, f: F)
    where
        F: FnMut(&V, &V) -> Control + 'h,
    {
        self.edge_relaxed = Some(Box::new(f));
    }

    pub fn set_edge_not_relaxed_handler<F>(&mut self, f: F)
    where
        F: FnMut(&V, &V) -> Control + 'h,
    {
        self.edge_not_relaxed = Some(Box::new(f));
    }

    pub fn set_edge_minimized_handler<F>(&mut self, f: F)
    where
        F: FnMut(&V, &V) -> Control + 'h,
    {
        self.edge_minimized = Some(Box::new(f));
    }

    /// Replace the default reaction to an edge violating the optimality
    /// condition, which is to fail with [`GraphError::NegativeCycle`].
    pub fn set_edge_not_minimized_handler<F>(&mut self, f: F)
    where
        F: FnMut(&V, &V) -> Result<()> + 'h,
    {
        self.edge_not_minimized = Some(Box::new(f));
    }
}

fn call_vertex<V>(handler: &mut Option<VertexHandler<'_, V>>, u: &V) -> Control {
    handler.as_mut().map_or(CONTINUE, |f| f(u))
}

fn call_edge<V>(handler: &mut Option<EdgeHandler<'_, V>>, u: &V, v: &V) -> Control {
    handler.as_mut().map_or(CONTINUE, |f| f(u, v))
}

impl<'h, V: Vertex, W> GraphVisitor<V> for PathRecorder<'h, V, W> {
    fn color_map(&self) -> &ColorMap<V> {
        &self.colors
    }

    fn color_map_mut(&mut self) -> &mut ColorMap<V> {
        &mut self.colors
    }

    fn examine_vertex(&mut self, u: &V) -> Control {
        call_vertex(&mut self.examine_vertex, u)
    }

    fn examine_edge(&mut self, u: &V, v: &V) -> Control {
        call_edge(&mut self.examine_edge, u, v)
    }

    fn finish_vertex(&mut self, u: &V) -> Control {
        call_vertex(&mut self.finish_vertex, u)
    }
}

impl<'h, V: Vertex, W> ShortestPathVisitor<V, W> for PathRecorder<'h, V, W> {
    fn distance_map(&self) -> &HashMap<V, W> {
        &self.distances
    }

    fn distance_map_mut(&mut self) -> &mut HashMap<V, W> {
        &mut self.distances
    }

    fn parents_map(&self) -> &HashMap<V, V> {
        &self.parents
    }

    fn parents_map_mut(&mut self) -> &mut HashMap<V, V> {
        &mut self.parents
    }

    fn edge_relaxed(&mut self, u: &V, v: &V) -> Control {
        call_edge(&mut self.edge_relaxed, u, v)
    }

    fn edge_not_relaxed(&mut self, u: &V, v: &V) -> Control {
        call_edge(&mut self.edge_not_relaxed, u, v)
    }
}

impl<'h, V: Vertex, W> BellmanFordVisitor<V, W> for PathRecorder<'h, V, W> {
    fn edge_minimized(&mut self, u: &V, v: &V) -> Control {
        call_edge(&mut self.edge_minimized, u, v)
    }

    fn edge_not_minimized(&mut self, u: &V, v: &V) -> Result<()> {
        match self.edge_not_minimized.as_mut() {
            Some(f) => f(u, v),
            None => Err(GraphError::negative_cycle(u, v)),
        }
    }
}

/// Reconstruction of paths from a parent map.
pub struct PathBuilder<'m, V> {
    source: V,
    parents: &'m HashMap<V, V>,
}

impl<'m, V: Vertex> PathBuilder<'m, V> {
    pub fn new(source: V, parents: &'m HashMap<V, V>) -> Self {
        PathBuilder { source, parents }
    }

    /// Return the path from the source to `target`.
    ///
    /// The path of the source is `[source]`. Returns `None` if `target` has
    /// not been reached (or the parents do not lead back to the source).
    ///
    /// # Example
    ///
    /// ```
    /// use rs_adjgraph::shortestpath::PathBuilder;
    /// use std::collections::HashMap;
    ///
    /// let parents: HashMap<char, char> = vec![('b', 'a'), ('c', 'b'), ('e', 'd')].into_iter().collect();
    /// let paths = PathBuilder::new('a', &parents);
    /// assert_eq!(paths.path(&'c'), Some(vec!['a', 'b', 'c']));
    /// assert_eq!(paths.path(&'a'), Some(vec!['a']));
    /// assert_eq!(paths.path(&'e'), None);
    /// assert_eq!(paths.path(&'z'), None);
    /// ```
    pub fn path(&self, target: &V) -> Option<Vec<V>> {
        let source = &self.source;
        let mut path = vec![];
        for v in path_from_incomings(target.clone(), |v| {
            if v == source {
                None
            } else {
                self.parents.get(v).cloned()
            }
        }) {
            path.push(v);
            // parents forming a cycle never reach the source
            if path.len() > self.parents.len() + 1 {
                return None;
            }
        }
        if path.last() != Some(source) {
            return None;
        }
        path.reverse();
        Some(path)
    }

    /// Return the paths to all given targets.
    pub fn paths<'a, I>(&self, targets: I) -> ShortestPaths<V>
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        targets.into_iter().map(|v| (v.clone(), self.path(v))).collect()
    }
}
