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

//! Breadth-first-search.
//!
//! # Example
//!
//! ```
//! use rs_adjgraph::DirectedAdjacencyGraph;
//! use rs_adjgraph::search::bfs;
//!
//! let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (1, 3), (2, 4), (3, 4), (4, 5), (6, 1)]
//!     .into_iter()
//!     .collect();
//! let order: Vec<_> = bfs::start(&g, &1).unwrap().collect();
//! assert_eq!(order.len(), 5);
//! assert_eq!(order[0], 1);
//! assert_eq!(order[3], 4);
//! assert_eq!(order[4], 5);
//! ```

use super::Traversal;
use crate::adjacency::DirectedAdjacencyGraph;
use crate::error::Result;
use crate::mutable::MutableGraph;
use crate::traits::{Graph, Vertex};
use crate::visitor::{ColorMap, Control, GraphVisitor, CONTINUE};

use std::collections::VecDeque;

use tracing::debug;

/// Breadth-first traversal.
pub type Bfs<'g, G, Vis = ColorMap<<G as Graph>::Vertex>> =
    Traversal<'g, G, VecDeque<<G as Graph>::Vertex>, Vis>;

/// Start a breadth-first traversal at `src` with a fresh color map.
///
/// Fails if `src` is not a vertex of `g`.
pub fn start<'g, G>(g: &'g G, src: &G::Vertex) -> Result<Bfs<'g, G>>
where
    G: Graph,
{
    start_with_visitor(g, src, ColorMap::new())
}

/// Start a breadth-first traversal at `src` observed by `visitor`.
pub fn start_with_visitor<'g, G, Vis>(g: &'g G, src: &G::Vertex, visitor: Vis) -> Result<Bfs<'g, G, Vis>>
where
    G: Graph,
    Vis: GraphVisitor<G::Vertex>,
{
    Traversal::new(g, src, visitor)
}

/// Collects the tree edges of a traversal.
struct TreeCollector<V: Vertex> {
    colors: ColorMap<V>,
    tree: DirectedAdjacencyGraph<V>,
}

impl<V: Vertex> GraphVisitor<V> for TreeCollector<V> {
    fn color_map(&self) -> &ColorMap<V> {
        &self.colors
    }

    fn color_map_mut(&mut self) -> &mut ColorMap<V> {
        &mut self.colors
    }

    fn tree_edge(&mut self, u: &V, v: &V) -> Control {
        self.tree.add_edge(u.clone(), v.clone());
        CONTINUE
    }
}

/// Return the breadth-first search tree rooted at `v`.
///
/// The tree is a directed graph containing `v` and every vertex reachable
/// from `v`. Each vertex but `v` has exactly one incoming edge, which comes
/// from the vertex that discovered it.
///
/// # Example
///
/// ```
/// use rs_adjgraph::{Graph, UndirectedAdjacencyGraph};
/// use rs_adjgraph::search::bfs;
///
/// let g: UndirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 1), (4, 5)].into_iter().collect();
/// let tree = bfs::search_tree_from(&g, &1).unwrap();
/// assert!(tree.is_directed());
/// assert_eq!(tree.num_vertices(), 3);
/// assert!(tree.has_edge(&1, &2) && tree.has_edge(&1, &3));
/// assert_eq!(tree.num_edges(), 2);
/// ```
pub fn search_tree_from<G>(g: &G, v: &G::Vertex) -> Result<DirectedAdjacencyGraph<G::Vertex>>
where
    G: Graph,
{
    let mut tree = DirectedAdjacencyGraph::new();
    tree.add_vertex(v.clone());
    let mut bfs = start_with_visitor(g, v, TreeCollector { colors: ColorMap::new(), tree })?;
    bfs.run();
    let tree = bfs.into_visitor().tree;
    debug!("bfs tree from {:?} with {} vertices", v, tree.num_vertices());
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use crate::search::bfs;
    use crate::visitor::{Color, EventHandlers, GraphVisitor, BREAK, CONTINUE};
    use crate::{DirectedAdjacencyGraph, Graph, GraphError};
    use std::cell::RefCell;

    fn graph() -> DirectedAdjacencyGraph<u32> {
        vec![(1, 2), (2, 3), (3, 1), (3, 4), (5, 4)].into_iter().collect()
    }

    #[test]
    fn test_reachable() {
        let g = graph();
        let mut order: Vec<_> = bfs::start(&g, &1).unwrap().collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
        order = bfs::start(&g, &5).unwrap().collect();
        assert_eq!(order, vec![5, 4]);
        assert!(matches!(bfs::start(&g, &7).err(), Some(GraphError::NoVertex(_))));
    }

    #[test]
    fn test_events() {
        let g = graph();
        let events = RefCell::new(vec![]);
        let mut vis = EventHandlers::new();
        vis.set_tree_edge_handler(|&u: &u32, &v: &u32| {
            events.borrow_mut().push(("tree", u, v));
            CONTINUE
        });
        vis.set_back_edge_handler(|&u: &u32, &v: &u32| {
            events.borrow_mut().push(("back", u, v));
            CONTINUE
        });
        vis.set_forward_edge_handler(|&u: &u32, &v: &u32| {
            events.borrow_mut().push(("forward", u, v));
            CONTINUE
        });
        let mut bfs = bfs::start_with_visitor(&g, &1, vis).unwrap();
        bfs.run();
        let vis = bfs.into_visitor();
        for v in 1..=4 {
            assert_eq!(vis.color_map().color(&v), Color::Black);
        }
        assert_eq!(vis.color_map().color(&5), Color::White);
        drop(vis);

        let mut events = events.into_inner();
        assert_eq!(events[..2], [("tree", 1, 2), ("tree", 2, 3)]);
        events[2..].sort();
        assert_eq!(events[2..], [("forward", 3, 1), ("tree", 3, 4)]);
    }

    #[test]
    fn test_abort() {
        let g = graph();
        let mut vis = EventHandlers::new();
        vis.set_examine_vertex_handler(|&u: &u32| if u == 2 { BREAK } else { CONTINUE });
        let mut bfs = bfs::start_with_visitor(&g, &1, vis).unwrap();
        assert_eq!(bfs.next(), Some(1));
        assert_eq!(bfs.next(), Some(2));
        assert!(bfs.is_aborted());
        assert_eq!(bfs.next(), None);
    }

    #[test]
    fn test_restart() {
        let g = graph();
        let mut bfs = bfs::start(&g, &1).unwrap();
        bfs.run();
        bfs.restart_at(&5).unwrap();
        let rest: Vec<_> = bfs.collect();
        assert_eq!(rest, vec![5]);
    }

    #[test]
    fn test_search_tree() {
        let g = graph();
        let tree = bfs::search_tree_from(&g, &1).unwrap();
        let mut edges: Vec<_> = tree.edges().into_iter().map(|e| (e.source, e.target)).collect();
        edges.sort();
        assert_eq!(edges, vec![(1, 2), (2, 3), (3, 4)]);
    }
}
