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

//! # Graph search algorithms.
//!
//! Breadth-first and depth-first search share one engine, [`Traversal`],
//! parameterized by the frontier container: a FIFO queue yields
//! breadth-first order ([`bfs`]), a LIFO stack depth-first order ([`dfs`]).
//!
//! All searches are iterators producing the vertices in the order in which
//! they are examined, starting with the start vertex. A [`GraphVisitor`]
//! observes the search and may abort it. [`dfs::depth_first_search`] is a
//! true recursive-order depth-first search over the whole graph.

pub mod bfs;
pub mod dfs;

use crate::collections::Frontier;
use crate::error::Result;
use crate::traits::{ensure_vertex, neighbors, Graph};
use crate::visitor::{Color, Control, GraphVisitor};

use std::iter::Iterator;

/// A visitor-driven graph traversal.
///
/// The traversal starts at a vertex, marks it gray and pushes it to the
/// frontier. Each step pops a vertex `u`, reports `examine_vertex(u)`, then
/// for each out-neighbor `v` reports `examine_edge(u, v)` followed by
///
/// - `tree_edge(u, v)` if the visitor follows the edge (by default iff `v`
///   is white), after which `v` is marked gray and pushed,
/// - `back_edge(u, v)` if `v` is gray,
/// - `forward_edge(u, v)` otherwise.
///
/// Finally `u` is marked black and `finish_vertex(u)` is reported.
pub struct Traversal<'g, G, F, Vis>
where
    G: Graph,
{
    graph: &'g G,
    start: G::Vertex,
    waiting: F,
    visitor: Vis,
    aborted: bool,
}

impl<'g, G, F, Vis> Traversal<'g, G, F, Vis>
where
    G: Graph,
    F: Frontier<G::Vertex>,
    Vis: GraphVisitor<G::Vertex>,
{
    /// Start a traversal at `start`.
    ///
    /// The color map of `visitor` is used as is, so vertices colored by a
    /// previous run are not visited again.
    pub fn new(graph: &'g G, start: &G::Vertex, visitor: Vis) -> Result<Self> {
        ensure_vertex(graph, start)?;
        let mut t = Traversal {
            graph,
            start: start.clone(),
            waiting: F::default(),
            visitor,
            aborted: false,
        };
        t.set_to_begin();
        Ok(t)
    }

    fn set_to_begin(&mut self) {
        self.waiting.clear();
        self.aborted = false;
        self.visitor.color_map_mut().set(self.start.clone(), Color::Gray);
        self.waiting.push(self.start.clone());
    }

    /// Continue the traversal from another start vertex.
    ///
    /// The coloring is kept, so only vertices not reached so far are visited.
    pub fn restart_at(&mut self, start: &G::Vertex) -> Result<()> {
        ensure_vertex(self.graph, start)?;
        self.start = start.clone();
        self.set_to_begin();
        Ok(())
    }

    /// The vertex the (last) run started at.
    pub fn start_vertex(&self) -> &G::Vertex {
        &self.start
    }

    /// Return `true` if the visitor aborted the traversal.
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Return `true` if no further vertex will be produced.
    pub fn is_done(&self) -> bool {
        self.aborted || self.waiting.is_empty()
    }

    pub fn visitor(&self) -> &Vis {
        &self.visitor
    }

    pub fn visitor_mut(&mut self) -> &mut Vis {
        &mut self.visitor
    }

    /// Return the visitor, e.g. to read the results it collected.
    pub fn into_visitor(self) -> Vis {
        self.visitor
    }

    /// Run the traversal completely.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }

    /// Run the traversal until `pred(visitor)` holds.
    ///
    /// The predicate is checked before each step. Returns `true` if the
    /// predicate became true, `false` if the traversal ended before.
    pub fn run_until<P>(&mut self, mut pred: P) -> bool
    where
        P: FnMut(&Vis) -> bool,
    {
        loop {
            if pred(&self.visitor) {
                return true;
            }
            if self.next().is_none() {
                return false;
            }
        }
    }

    fn visit(&mut self, u: &G::Vertex) -> Control {
        let graph = self.graph;
        self.visitor.examine_vertex(u)?;
        for v in neighbors(graph, u) {
            self.visitor.examine_edge(u, v)?;
            if self.visitor.follow_edge(u, v) {
                self.visitor.tree_edge(u, v)?;
                self.visitor.color_map_mut().set(v.clone(), Color::Gray);
                self.waiting.push(v.clone());
            } else if self.visitor.color_map().color(v) == Color::Gray {
                self.visitor.back_edge(u, v)?;
            } else {
                self.visitor.forward_edge(u, v)?;
            }
        }
        self.visitor.color_map_mut().set(u.clone(), Color::Black);
        self.visitor.finish_vertex(u)
    }
}

impl<'g, G, F, Vis> Iterator for Traversal<'g, G, F, Vis>
where
    G: Graph,
    F: Frontier<G::Vertex>,
    Vis: GraphVisitor<G::Vertex>,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<G::Vertex> {
        if self.aborted {
            return None;
        }
        let u = self.waiting.pop()?;
        if self.visit(&u).is_break() {
            self.aborted = true;
        }
        Some(u)
    }
}

/// Compute a path from a map of predecessors.
///
/// # Parameters
/// - `dst`: the destination vertex
/// - `incomings(v)`: return the predecessor of `v` (or `None` if it does not
///   exist)
///
/// # Return
/// An iterator over the vertices of the path, starting with `dst` and going
/// backwards. The iterator does not terminate if the predecessors form a
/// cycle.
///
/// # Example
///
/// ```
/// use rs_adjgraph::search::path_from_incomings;
/// use std::collections::HashMap;
///
/// let parents: HashMap<u32, u32> = vec![(2, 1), (3, 2), (4, 3)].into_iter().collect();
/// let path: Vec<_> = path_from_incomings(4, |v| parents.get(v).cloned()).collect();
/// assert_eq!(path, vec![4, 3, 2, 1]);
/// ```
pub fn path_from_incomings<V, I>(dst: V, incomings: I) -> impl Iterator<Item = V>
where
    V: Clone,
    I: Fn(&V) -> Option<V>,
{
    PathIter {
        incomings,
        u: Some(dst),
    }
}

#[doc(hidden)]
struct PathIter<V, I>
where
    I: Fn(&V) -> Option<V>,
{
    incomings: I,
    u: Option<V>,
}

impl<V, I> Iterator for PathIter<V, I>
where
    V: Clone,
    I: Fn(&V) -> Option<V>,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let u = self.u.take()?;
        self.u = (self.incomings)(&u);
        Some(u)
    }
}
