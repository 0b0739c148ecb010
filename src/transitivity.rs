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

//! Transitive closure and transitive reduction of directed graphs.
//!
//! Both work on the condensation of the graph, so cycles are handled: the
//! members of a strongly connected component all reach each other.

use crate::adjacency::DirectedAdjacencyGraph;
use crate::components::{condensation_graph, Condensation};
use crate::error::Result;
use crate::mutable::MutableGraph;
use crate::search::dfs::depth_first_search;
use crate::traits::{ensure_directed, neighbors, Graph, Vertex};
use crate::visitor::{ColorMap, Control, DfsVisitor, GraphVisitor, CONTINUE};

use std::collections::BTreeSet;

use tracing::debug;

/// Records the vertices in the order they are finished.
struct FinishOrder {
    colors: ColorMap<usize>,
    order: Vec<usize>,
}

impl GraphVisitor<usize> for FinishOrder {
    fn color_map(&self) -> &ColorMap<usize> {
        &self.colors
    }

    fn color_map_mut(&mut self) -> &mut ColorMap<usize> {
        &mut self.colors
    }

    fn finish_vertex(&mut self, u: &usize) -> Control {
        self.order.push(*u);
        CONTINUE
    }
}

impl DfsVisitor<usize> for FinishOrder {}

/// The components of the condensation, successors before predecessors.
fn post_order<V: Vertex>(cond: &Condensation<V>) -> Vec<usize> {
    let mut vis = FinishOrder {
        colors: ColorMap::new(),
        order: Vec::with_capacity(cond.num_components()),
    };
    let _ = depth_first_search(cond.graph(), &mut vis);
    vis.order
}

fn successors(cond: &Condensation<impl Vertex>, c: usize) -> impl Iterator<Item = usize> + '_ {
    neighbors(cond.graph(), &c).copied()
}

/// Return the transitive closure of a directed graph.
///
/// The closure has an edge `(u, v)` for each path from `u` to `v` in `g`.
/// In particular every member of a cycle gets a self loop. Computing the
/// closure of a closure does not change it.
///
/// # Example
///
/// ```
/// use rs_adjgraph::{DirectedAdjacencyGraph, Graph};
/// use rs_adjgraph::transitivity::transitive_closure;
///
/// let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 4)].into_iter().collect();
/// let closure = transitive_closure(&g).unwrap();
/// assert_eq!(closure.num_edges(), 6);
/// assert!(closure.has_edge(&1, &4));
/// assert!(!closure.has_edge(&4, &1));
/// ```
pub fn transitive_closure<G>(g: &G) -> Result<DirectedAdjacencyGraph<G::Vertex>>
where
    G: Graph,
{
    ensure_directed(g, "transitive_closure")?;
    let cond = condensation_graph(g)?;

    // reach[c] are the components reachable from c by a non-empty path
    let mut reach = vec![BTreeSet::new(); cond.num_components()];
    for c in post_order(&cond) {
        let mut reached = BTreeSet::new();
        for d in successors(&cond, c) {
            reached.insert(d);
            reached.extend(reach[d].iter().copied());
        }
        reach[c] = reached;
    }

    let mut closure = DirectedAdjacencyGraph::with_capacity(g.num_vertices());
    for (c, reached) in reach.iter().enumerate() {
        let members = cond.members(c);
        for u in members {
            closure.add_vertex(u.clone());
            if members.len() > 1 || g.has_edge(u, u) {
                for v in members {
                    closure.add_edge(u.clone(), v.clone());
                }
            }
            for &d in reached {
                for v in cond.members(d) {
                    closure.add_edge(u.clone(), v.clone());
                }
            }
        }
    }

    debug!("transitive closure has {} edges", closure.num_edges());
    Ok(closure)
}

/// Return the transitive reduction of a directed graph.
///
/// The reduction is a graph with a minimal number of edges and the same
/// reachability as `g`. The members of a strongly connected component are
/// joined by a simple cycle (in ascending order), and two components are
/// joined by the smallest edge of `g` between them. For acyclic graphs the
/// reduction is unique and a subgraph of `g`.
///
/// # Example
///
/// ```
/// use rs_adjgraph::{DirectedAdjacencyGraph, Graph};
/// use rs_adjgraph::transitivity::transitive_reduction;
///
/// let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (1, 3)].into_iter().collect();
/// let reduction = transitive_reduction(&g).unwrap();
/// assert_eq!(reduction.num_edges(), 2);
/// assert!(!reduction.has_edge(&1, &3));
/// ```
pub fn transitive_reduction<G>(g: &G) -> Result<DirectedAdjacencyGraph<G::Vertex>>
where
    G: Graph,
{
    ensure_directed(g, "transitive_reduction")?;
    let cond = condensation_graph(g)?;

    // paths_from[c] are the components reachable from c in the reduction
    let mut paths_from = vec![BTreeSet::new(); cond.num_components()];
    let mut kept = vec![vec![]; cond.num_components()];
    for c in post_order(&cond) {
        let succs = successors(&cond, c).collect::<Vec<_>>();
        let mut reached = BTreeSet::new();
        for &d in &succs {
            if succs.iter().any(|&x| x != d && paths_from[x].contains(&d)) {
                continue;
            }
            kept[c].push(d);
            reached.insert(d);
            reached.extend(paths_from[d].iter().copied());
        }
        paths_from[c] = reached;
    }

    let mut reduction = DirectedAdjacencyGraph::with_capacity(g.num_vertices());
    for (c, targets) in kept.iter().enumerate() {
        let members = cond.members(c);
        reduction.add_vertices(members.iter().cloned());
        if let (Some(first), Some(last)) = (members.first(), members.last()) {
            if members.len() > 1 || g.has_edge(first, first) {
                for uv in members.windows(2) {
                    reduction.add_edge(uv[0].clone(), uv[1].clone());
                }
                reduction.add_edge(last.clone(), first.clone());
            }
        }
        for &d in targets {
            let edge = members
                .iter()
                .flat_map(|u| neighbors(g, u).map(move |v| (u, v)))
                .filter(|(_, v)| cond.component(v) == Some(d))
                .min();
            if let Some((u, v)) = edge {
                reduction.add_edge(u.clone(), v.clone());
            }
        }
    }

    debug!("transitive reduction has {} edges", reduction.num_edges());
    Ok(reduction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphError, UndirectedAdjacencyGraph};

    fn cyclic() -> DirectedAdjacencyGraph<u32> {
        let mut g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 1), (3, 4), (2, 4)].into_iter().collect();
        g.add_vertex(5);
        g
    }

    #[test]
    fn test_closure() {
        let g = cyclic();
        let closure = transitive_closure(&g).unwrap();
        assert_eq!(closure.num_vertices(), 5);
        assert_eq!(closure.num_edges(), 12);
        for u in 1..4 {
            for v in 1..5 {
                assert!(closure.has_edge(&u, &v));
            }
        }
        assert!(!closure.has_edge(&4, &4));
        assert_eq!(transitive_closure(&closure).unwrap(), closure);
    }

    #[test]
    fn test_closure_self_loop() {
        let g: DirectedAdjacencyGraph<u32> = vec![(1, 1), (1, 2)].into_iter().collect();
        let closure = transitive_closure(&g).unwrap();
        assert_eq!(closure, g);
    }

    #[test]
    fn test_reduction() {
        let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (1, 3), (3, 4), (1, 4), (2, 5)]
            .into_iter()
            .collect();
        let reduction = transitive_reduction(&g).unwrap();
        let expected: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 4), (2, 5)].into_iter().collect();
        assert_eq!(reduction, expected);
        assert_eq!(transitive_closure(&reduction), transitive_closure(&g));
    }

    #[test]
    fn test_reduction_cyclic() {
        let g = cyclic();
        let reduction = transitive_reduction(&g).unwrap();
        let mut expected: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 1), (2, 4)].into_iter().collect();
        expected.add_vertex(5);
        assert_eq!(reduction, expected);
        assert_eq!(transitive_closure(&reduction), transitive_closure(&g));
    }

    #[test]
    fn test_undirected() {
        let g: UndirectedAdjacencyGraph<u32> = vec![(1, 2)].into_iter().collect();
        assert!(matches!(transitive_closure(&g), Err(GraphError::NotDirected(_))));
        assert!(matches!(transitive_reduction(&g), Err(GraphError::NotDirected(_))));
    }
}
