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

//! Depth-first-search.
//!
//! [`start`] returns a traversal iterator using a stack as frontier. It
//! produces each reachable vertex once, but the events are reported in
//! stack order, so tree edges do not form a recursive depth-first tree.
//! [`depth_first_search`] and [`depth_first_visit`] implement the classical
//! recursive depth-first search (with an explicit stack of adjacency
//! iterators) whose finish events are reported in post-order.
//!
//! # Example
//!
//! ```
//! use rs_adjgraph::DirectedAdjacencyGraph;
//! use rs_adjgraph::search::dfs;
//! use rs_adjgraph::visitor::{EventHandlers, CONTINUE};
//!
//! let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 4), (5, 3)].into_iter().collect();
//!
//! let mut finished = vec![];
//! {
//!     let mut vis = EventHandlers::new();
//!     vis.set_finish_vertex_handler(|&u: &u32| {
//!         finished.push(u);
//!         CONTINUE
//!     });
//!     let _ = dfs::depth_first_visit(&g, &1, &mut vis).unwrap();
//! }
//! assert_eq!(finished, vec![4, 3, 2, 1]);
//! ```

use super::Traversal;
use crate::error::Result;
use crate::traits::{ensure_vertex, neighbors, Graph, Neighbors};
use crate::visitor::{Color, ColorMap, Control, DfsVisitor, GraphVisitor, CONTINUE};

use tracing::trace;

/// Depth-first traversal iterator.
pub type Dfs<'g, G, Vis = ColorMap<<G as Graph>::Vertex>> = Traversal<'g, G, Vec<<G as Graph>::Vertex>, Vis>;

/// Start a depth-first traversal at `src` with a fresh color map.
pub fn start<'g, G>(g: &'g G, src: &G::Vertex) -> Result<Dfs<'g, G>>
where
    G: Graph,
{
    start_with_visitor(g, src, ColorMap::new())
}

/// Start a depth-first traversal at `src` observed by `visitor`.
pub fn start_with_visitor<'g, G, Vis>(g: &'g G, src: &G::Vertex, visitor: Vis) -> Result<Dfs<'g, G, Vis>>
where
    G: Graph,
    Vis: GraphVisitor<G::Vertex>,
{
    Traversal::new(g, src, visitor)
}

/// Depth-first search of the whole graph.
///
/// Every vertex that is not finished yet becomes the root of a new
/// depth-first tree: `start_vertex(u)` is reported, then
/// [`depth_first_visit`] runs from `u`. Returns `ControlFlow::Break` if the
/// visitor aborted the search.
pub fn depth_first_search<G, Vis>(g: &G, vis: &mut Vis) -> Control
where
    G: Graph,
    Vis: DfsVisitor<G::Vertex>,
{
    for u in g.vertices_iter() {
        if vis.color_map().color(u) == Color::White {
            trace!("new dfs tree at {:?}", u);
            vis.start_vertex(u)?;
            visit(g, u, vis)?;
        }
    }
    CONTINUE
}

/// Recursive-order depth-first visit starting at `u`.
///
/// Fails if `u` is not a vertex of `g`. Otherwise returns whether the
/// visitor aborted the search.
pub fn depth_first_visit<G, Vis>(g: &G, u: &G::Vertex, vis: &mut Vis) -> Result<Control>
where
    G: Graph,
    Vis: GraphVisitor<G::Vertex>,
{
    ensure_vertex(g, u)?;
    Ok(visit(g, u, vis))
}

fn visit<'g, G, Vis>(g: &'g G, u: &G::Vertex, vis: &mut Vis) -> Control
where
    G: Graph,
    Vis: GraphVisitor<G::Vertex>,
{
    let mut stack: Vec<(G::Vertex, Neighbors<'g, G>)> = Vec::new();

    vis.color_map_mut().set(u.clone(), Color::Gray);
    vis.examine_vertex(u)?;
    stack.push((u.clone(), neighbors(g, u)));

    while let Some((u, neighs)) = stack.last_mut() {
        if let Some(v) = neighs.next() {
            vis.examine_edge(u, v)?;
            if vis.follow_edge(u, v) {
                vis.tree_edge(u, v)?;
                vis.color_map_mut().set(v.clone(), Color::Gray);
                vis.examine_vertex(v)?;
                stack.push((v.clone(), neighbors(g, v)));
            } else if vis.color_map().color(v) == Color::Gray {
                vis.back_edge(u, v)?;
            } else {
                vis.forward_edge(u, v)?;
            }
        } else if let Some((u, _)) = stack.pop() {
            vis.color_map_mut().set(u.clone(), Color::Black);
            vis.finish_vertex(&u)?;
        }
    }

    CONTINUE
}
