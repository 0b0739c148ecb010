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

//! Bipartite graphs.

use crate::error::Result;
use crate::search::Traversal;
use crate::traits::{ensure_undirected, Graph, Vertex};
use crate::visitor::{Color, ColorMap, Control, GraphVisitor, BREAK, CONTINUE};

use std::collections::{HashMap, VecDeque};

use tracing::debug;

/// Two-colors the vertices along a breadth-first search.
struct BipartiteVisitor<V> {
    colors: ColorMap<V>,
    sides: HashMap<V, bool>,
    odd_cycle: bool,
}

impl<V: Vertex> BipartiteVisitor<V> {
    fn check(&mut self, u: &V, v: &V) -> Control {
        match (self.sides.get(u), self.sides.get(v)) {
            (Some(su), Some(sv)) if su == sv => {
                self.odd_cycle = true;
                BREAK
            }
            _ => CONTINUE,
        }
    }
}

impl<V: Vertex> GraphVisitor<V> for BipartiteVisitor<V> {
    fn color_map(&self) -> &ColorMap<V> {
        &self.colors
    }

    fn color_map_mut(&mut self) -> &mut ColorMap<V> {
        &mut self.colors
    }

    fn tree_edge(&mut self, u: &V, v: &V) -> Control {
        let side = self.sides.get(u).map_or(false, |&side| !side);
        self.sides.insert(v.clone(), side);
        CONTINUE
    }

    fn back_edge(&mut self, u: &V, v: &V) -> Control {
        self.check(u, v)
    }

    fn forward_edge(&mut self, u: &V, v: &V) -> Control {
        self.check(u, v)
    }
}

/// Split the vertices of an undirected graph into two sets such that every
/// edge connects vertices of different sets.
///
/// Returns `None` if this is impossible, i.e. if the graph contains a cycle
/// of odd length (a self loop included). Both sets are sorted; the first one
/// contains the smallest vertex of each connected component.
///
/// Fails with [`GraphError::NotUndirected`](crate::GraphError::NotUndirected)
/// for directed graphs.
///
/// # Example
///
/// ```
/// use rs_adjgraph::UndirectedAdjacencyGraph;
/// use rs_adjgraph::bipartite::bipartite_sets;
///
/// let square: UndirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 4), (4, 1)].into_iter().collect();
/// assert_eq!(bipartite_sets(&square).unwrap(), Some((vec![1, 3], vec![2, 4])));
///
/// let triangle: UndirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 1)].into_iter().collect();
/// assert_eq!(bipartite_sets(&triangle).unwrap(), None);
/// ```
pub fn bipartite_sets<G>(g: &G) -> Result<Option<(Vec<G::Vertex>, Vec<G::Vertex>)>>
where
    G: Graph,
{
    ensure_undirected(g, "bipartite_sets")?;

    let mut vis = BipartiteVisitor {
        colors: ColorMap::new(),
        sides: HashMap::with_capacity(g.num_vertices()),
        odd_cycle: false,
    };

    let mut starts = g.vertices();
    starts.sort();
    for u in &starts {
        if vis.colors.color(u) != Color::White {
            continue;
        }
        vis.sides.insert(u.clone(), false);
        Traversal::<_, VecDeque<_>, _>::new(g, u, &mut vis)?.run();
        if vis.odd_cycle {
            debug!("odd cycle found in component of {:?}", u);
            return Ok(None);
        }
    }

    let (mut first, mut second) = (vec![], vec![]);
    for (v, side) in vis.sides {
        if side {
            second.push(v);
        } else {
            first.push(v);
        }
    }
    first.sort();
    second.sort();
    Ok(Some((first, second)))
}

/// Return `true` if the undirected graph `g` is bipartite.
pub fn is_bipartite<G>(g: &G) -> Result<bool>
where
    G: Graph,
{
    Ok(bipartite_sets(g)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectedAdjacencyGraph, GraphError, MutableGraph, UndirectedAdjacencyGraph};

    #[test]
    fn test_even_cycle() {
        let g: UndirectedAdjacencyGraph<u32> =
            vec![(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1)].into_iter().collect();
        let (a, b) = bipartite_sets(&g).unwrap().unwrap();
        assert_eq!(a, vec![1, 3, 5]);
        assert_eq!(b, vec![2, 4, 6]);
        for e in g.edges() {
            let (u, v) = (e.source, e.target);
            assert_ne!(a.contains(&u), a.contains(&v));
        }
    }

    #[test]
    fn test_disconnected() {
        let mut g: UndirectedAdjacencyGraph<u32> = vec![(1, 2), (5, 4), (4, 3)].into_iter().collect();
        g.add_vertex(7);
        assert_eq!(bipartite_sets(&g), Ok(Some((vec![1, 3, 5, 7], vec![2, 4]))));

        g.add_edge(7, 8);
        g.add_edge(8, 9);
        g.add_edge(9, 7);
        assert_eq!(bipartite_sets(&g), Ok(None));
        assert_eq!(is_bipartite(&g), Ok(false));
    }

    #[test]
    fn test_self_loop() {
        let g: UndirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 2)].into_iter().collect();
        assert_eq!(is_bipartite(&g), Ok(false));
        let empty: UndirectedAdjacencyGraph<u32> = UndirectedAdjacencyGraph::new();
        assert_eq!(bipartite_sets(&empty), Ok(Some((vec![], vec![]))));
    }

    #[test]
    fn test_directed() {
        let g: DirectedAdjacencyGraph<u32> = vec![(1, 2)].into_iter().collect();
        assert!(matches!(bipartite_sets(&g), Err(GraphError::NotUndirected(_))));
    }
}
