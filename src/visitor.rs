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

//! Graph visitors.
//!
//! A visitor observes a traversal through six events and owns the color map
//! of the run:
//!
//! - `examine_vertex(u)` when `u` is taken from the frontier,
//! - `examine_edge(u, v)` for each out-neighbor `v` of `u`,
//! - `tree_edge(u, v)` when `v` is reached for the first time via `u`,
//! - `back_edge(u, v)` when `v` is still on the frontier (gray),
//! - `forward_edge(u, v)` when `v` is finished (black),
//! - `finish_vertex(u)` when all neighbors of `u` have been examined.
//!
//! Depth-first search additionally reports `start_vertex(u)` for the root of
//! each search tree (see [`DfsVisitor`]).
//!
//! Every event returns a [`Control`]. Returning `ControlFlow::Break(())`
//! aborts the traversal. Because the visitor carries the color map, a
//! traversal can be continued from another start vertex while keeping the
//! already visited vertices.

use crate::traits::Vertex;

use std::collections::HashMap;
use std::ops::ControlFlow;

/// Result of a visitor event.
pub type Control = ControlFlow<()>;

/// Continue the traversal.
pub const CONTINUE: Control = ControlFlow::Continue(());

/// Abort the traversal.
pub const BREAK: Control = ControlFlow::Break(());

/// State of a vertex during a traversal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    /// Not visited yet.
    White,
    /// Reached but not finished, i.e. on the frontier.
    Gray,
    /// All out-neighbors have been examined.
    Black,
}

/// Color of each vertex, default [`Color::White`].
#[derive(Clone, Debug)]
pub struct ColorMap<V> {
    colors: HashMap<V, Color>,
}

impl<V> Default for ColorMap<V> {
    fn default() -> Self {
        ColorMap { colors: HashMap::new() }
    }
}

impl<V: Vertex> ColorMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make all vertices white again.
    pub fn reset(&mut self) {
        self.colors.clear();
    }

    pub fn color(&self, v: &V) -> Color {
        self.colors.get(v).copied().unwrap_or(Color::White)
    }

    pub fn set(&mut self, v: V, color: Color) {
        self.colors.insert(v, color);
    }

    /// Return an iterator over all vertices that are not white.
    pub fn visited(&self) -> impl Iterator<Item = &V> {
        self.colors.iter().filter(|&(_, &c)| c != Color::White).map(|(v, _)| v)
    }
}

/// Observer of a graph traversal.
///
/// All events have default no-op implementations. An implementor only has
/// to provide access to its color map.
pub trait GraphVisitor<V: Vertex> {
    fn color_map(&self) -> &ColorMap<V>;

    fn color_map_mut(&mut self) -> &mut ColorMap<V>;

    /// Forget all colors, e.g. before reusing the visitor.
    fn reset(&mut self) {
        self.color_map_mut().reset()
    }

    /// Return `true` if `v` has been finished.
    fn is_finished(&self, v: &V) -> bool {
        self.color_map().color(v) == Color::Black
    }

    /// Return `true` if the traversal should follow the edge `(u, v)`.
    ///
    /// By default an edge is followed iff `v` is white.
    fn follow_edge(&self, _u: &V, v: &V) -> bool {
        self.color_map().color(v) == Color::White
    }

    fn examine_vertex(&mut self, _u: &V) -> Control {
        CONTINUE
    }

    fn examine_edge(&mut self, _u: &V, _v: &V) -> Control {
        CONTINUE
    }

    fn tree_edge(&mut self, _u: &V, _v: &V) -> Control {
        CONTINUE
    }

    fn back_edge(&mut self, _u: &V, _v: &V) -> Control {
        CONTINUE
    }

    fn forward_edge(&mut self, _u: &V, _v: &V) -> Control {
        CONTINUE
    }

    fn finish_vertex(&mut self, _u: &V) -> Control {
        CONTINUE
    }
}

/// Visitor of a whole-graph depth-first search.
pub trait DfsVisitor<V: Vertex>: GraphVisitor<V> {
    /// Called for the root of each depth-first tree.
    fn start_vertex(&mut self, _u: &V) -> Control {
        CONTINUE
    }
}

/// A plain color map is the visitor ignoring all events.
impl<V: Vertex> GraphVisitor<V> for ColorMap<V> {
    fn color_map(&self) -> &ColorMap<V> {
        self
    }

    fn color_map_mut(&mut self) -> &mut ColorMap<V> {
        self
    }
}

impl<V: Vertex> DfsVisitor<V> for ColorMap<V> {}

impl<'a, V, T> GraphVisitor<V> for &'a mut T
where
    V: Vertex,
    T: GraphVisitor<V> + ?Sized,
{
    fn color_map(&self) -> &ColorMap<V> {
        (**self).color_map()
    }

    fn color_map_mut(&mut self) -> &mut ColorMap<V> {
        (**self).color_map_mut()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn is_finished(&self, v: &V) -> bool {
        (**self).is_finished(v)
    }

    fn follow_edge(&self, u: &V, v: &V) -> bool {
        (**self).follow_edge(u, v)
    }

    fn examine_vertex(&mut self, u: &V) -> Control {
        (**self).examine_vertex(u)
    }

    fn examine_edge(&mut self, u: &V, v: &V) -> Control {
        (**self).examine_edge(u, v)
    }

    fn tree_edge(&mut self, u: &V, v: &V) -> Control {
        (**self).tree_edge(u, v)
    }

    fn back_edge(&mut self, u: &V, v: &V) -> Control {
        (**self).back_edge(u, v)
    }

    fn forward_edge(&mut self, u: &V, v: &V) -> Control {
        (**self).forward_edge(u, v)
    }

    fn finish_vertex(&mut self, u: &V) -> Control {
        (**self).finish_vertex(u)
    }
}

impl<'a, V, T> DfsVisitor<V> for &'a mut T
where
    V: Vertex,
    T: DfsVisitor<V> + ?Sized,
{
    fn start_vertex(&mut self, u: &V) -> Control {
        (**self).start_vertex(u)
    }
}

type VertexHandler<'h, V> = Box<dyn FnMut(&V) -> Control + 'h>;
type EdgeHandler<'h, V> = Box<dyn FnMut(&V, &V) -> Control + 'h>;

/// A visitor calling user supplied closures.
///
/// Events without a handler are ignored.
///
/// # Example
///
/// ```
/// use rs_adjgraph::DirectedAdjacencyGraph;
/// use rs_adjgraph::search::bfs;
/// use rs_adjgraph::visitor::{EventHandlers, CONTINUE};
///
/// let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (1, 3), (2, 4)].into_iter().collect();
/// let mut tree = vec![];
/// {
///     let mut vis = EventHandlers::new();
///     vis.set_tree_edge_handler(|u: &u32, v: &u32| {
///         tree.push((*u, *v));
///         CONTINUE
///     });
///     bfs::start_with_visitor(&g, &1, vis).unwrap().run();
/// }
/// tree.sort();
/// assert_eq!(tree, vec![(1, 2), (1, 3), (2, 4)]);
/// ```
pub struct EventHandlers<'h, V> {
    colors: ColorMap<V>,
    examine_vertex: Option<VertexHandler<'h, V>>,
    finish_vertex: Option<VertexHandler<'h, V>>,
    start_vertex: Option<VertexHandler<'h, V>>,
    examine_edge: Option<EdgeHandler<'h, V>>,
    tree_edge: Option<EdgeHandler<'h, V>>,
    back_edge: Option<EdgeHandler<'h, V>>,
    forward_edge: Option<EdgeHandler<'h, V>>,
}

impl<'h, V> Default for EventHandlers<'h, V> {
    fn default() -> Self {
        EventHandlers {
            colors: ColorMap::default(),
            examine_vertex: None,
            finish_vertex: None,
            start_vertex: None,
            examine_edge: None,
            tree_edge: None,
            back_edge: None,
            forward_edge: None,
        }
    }
}

impl<'h, V: Vertex> EventHandlers<'h, V> {
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

    pub fn set_start_vertex_handler<F>(&mut self, f: F)
    where
        F: FnMut(&V) -> Control + 'h,
    {
        self.start_vertex = Some(Box::new(f));
    }

    pub fn set_examine_edge_handler<F>(&mut self, f: F)
    where
        F: FnMut(&V, &V) -> Control + 'h,
    {
        self.examine_edge = Some(Box::new(f));
    }

    pub fn set_tree_edge_handler<F>(&mut self, f: F)
    where
        F: FnMut(&V, &V) -> Control + 'h,
    {
        self.tree_edge = Some(Box::new(f));
    }

    pub fn set_back_edge_handler<F>(&mut self, f: F)
    where
        F: FnMut(&V, &V) -> Control + 'h,
    {
        self.back_edge = Some(Box::new(f));
    }

    pub fn set_forward_edge_handler<F>(&mut self, f: F)
    where
        F: FnMut(&V, &V) -> Control + 'h,
    {
        self.forward_edge = Some(Box::new(f));
    }
}

fn call_vertex<V>(handler: &mut Option<VertexHandler<'_, V>>, u: &V) -> Control {
    handler.as_mut().map_or(CONTINUE, |f| f(u))
}

fn call_edge<V>(handler: &mut Option<EdgeHandler<'_, V>>, u: &V, v: &V) -> Control {
    handler.as_mut().map_or(CONTINUE, |f| f(u, v))
}

impl<'h, V: Vertex> GraphVisitor<V> for EventHandlers<'h, V> {
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

    fn tree_edge(&mut self, u: &V, v: &V) -> Control {
        call_edge(&mut self.tree_edge, u, v)
    }

    fn back_edge(&mut self, u: &V, v: &V) -> Control {
        call_edge(&mut self.back_edge, u, v)
    }

    fn forward_edge(&mut self, u: &V, v: &V) -> Control {
        call_edge(&mut self.forward_edge, u, v)
    }

    fn finish_vertex(&mut self, u: &V) -> Control {
        call_vertex(&mut self.finish_vertex, u)
    }
}

impl<'h, V: Vertex> DfsVisitor<V> for EventHandlers<'h, V> {
    fn start_vertex(&mut self, u: &V) -> Control {
        call_vertex(&mut self.start_vertex, u)
    }
}

/// A visitor recording the depth of each vertex in the traversal tree.
///
/// All events are forwarded to the wrapped visitor.
///
/// # Example
///
/// ```
/// use rs_adjgraph::UndirectedAdjacencyGraph;
/// use rs_adjgraph::search::bfs;
/// use rs_adjgraph::visitor::DistanceRecorder;
///
/// let g: UndirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 4), (1, 5)].into_iter().collect();
/// let mut bfs = bfs::start_with_visitor(&g, &1, DistanceRecorder::new()).unwrap();
/// bfs.run();
/// let dist = bfs.into_visitor();
/// assert_eq!(dist.distance_to_root(&1), 0);
/// assert_eq!(dist.distance_to_root(&5), 1);
/// assert_eq!(dist.distance_to_root(&4), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DistanceRecorder<V, Vis = ColorMap<V>> {
    inner: Vis,
    distances: HashMap<V, usize>,
}

impl<V: Vertex> DistanceRecorder<V> {
    pub fn new() -> Self {
        Self::wrap(ColorMap::new())
    }
}

impl<V: Vertex> Default for DistanceRecorder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, Vis> DistanceRecorder<V, Vis>
where
    V: Vertex,
    Vis: GraphVisitor<V>,
{
    /// Attach a distance map to `inner`.
    pub fn wrap(inner: Vis) -> Self {
        DistanceRecorder {
            inner,
            distances: HashMap::new(),
        }
    }

    /// Number of tree edges from the root of the traversal to `v`.
    ///
    /// Vertices that have not been reached via a tree edge have distance 0.
    pub fn distance_to_root(&self, v: &V) -> usize {
        self.distances.get(v).copied().unwrap_or(0)
    }

    pub fn inner(&self) -> &Vis {
        &self.inner
    }

    pub fn into_inner(self) -> Vis {
        self.inner
    }
}

impl<V, Vis> GraphVisitor<V> for DistanceRecorder<V, Vis>
where
    V: Vertex,
    Vis: GraphVisitor<V>,
{
    fn color_map(&self) -> &ColorMap<V> {
        self.inner.color_map()
    }

    fn color_map_mut(&mut self) -> &mut ColorMap<V> {
        self.inner.color_map_mut()
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.distances.clear();
    }

    fn follow_edge(&self, u: &V, v: &V) -> bool {
        self.inner.follow_edge(u, v)
    }

    fn examine_vertex(&mut self, u: &V) -> Control {
        self.inner.examine_vertex(u)
    }

    fn examine_edge(&mut self, u: &V, v: &V) -> Control {
        self.inner.examine_edge(u, v)
    }

    fn tree_edge(&mut self, u: &V, v: &V) -> Control {
        let d = self.distance_to_root(u) + 1;
        self.distances.insert(v.clone(), d);
        self.inner.tree_edge(u, v)
    }

    fn back_edge(&mut self, u: &V, v: &V) -> Control {
        self.inner.back_edge(u, v)
    }

    fn forward_edge(&mut self, u: &V, v: &V) -> Control {
        self.inner.forward_edge(u, v)
    }

    fn finish_vertex(&mut self, u: &V) -> Control {
        self.inner.finish_vertex(u)
    }
}

impl<V, Vis> DfsVisitor<V> for DistanceRecorder<V, Vis>
where
    V: Vertex,
    Vis: DfsVisitor<V>,
{
    fn start_vertex(&mut self, u: &V) -> Control {
        self.inner.start_vertex(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_map() {
        let mut colors = ColorMap::new();
        assert_eq!(colors.color(&1), Color::White);
        colors.set(1, Color::Gray);
        colors.set(2, Color::Black);
        assert!(colors.is_finished(&2));
        assert!(!colors.is_finished(&1));
        assert!(colors.follow_edge(&1, &3));
        assert!(!colors.follow_edge(&3, &1));
        let mut visited: Vec<_> = colors.visited().cloned().collect();
        visited.sort();
        assert_eq!(visited, vec![1, 2]);
        colors.reset();
        assert_eq!(colors.color(&2), Color::White);
    }

    #[test]
    fn test_handlers() {
        let mut seen = vec![];
        {
            let mut vis = EventHandlers::new();
            vis.set_examine_vertex_handler(|&u: &u32| {
                seen.push(u);
                if u == 2 {
                    BREAK
                } else {
                    CONTINUE
                }
            });
            assert_eq!(vis.examine_vertex(&1), CONTINUE);
            assert_eq!(vis.examine_vertex(&2), BREAK);
            assert_eq!(vis.tree_edge(&1, &2), CONTINUE);
        }
        assert_eq!(seen, vec![1, 2]);
    }
}
