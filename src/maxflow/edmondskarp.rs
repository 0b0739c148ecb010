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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! The network is a directed graph in which every edge `(u, v)` has a
//! reverse edge `(v, u)`, and of each such pair at least one edge has
//! capacity zero. The flow on every edge is non-negative. The residual
//! capacity of `(u, v)` is `cap(u, v) - flow(u, v) + flow(v, u)`, and
//! augmenting `(u, v)` first cancels flow on `(v, u)`, so unsigned
//! capacities work as well as signed ones.
//!
//! # Example
//!
//! ```
//! use rs_adjgraph::DirectedAdjacencyGraph;
//! use rs_adjgraph::maxflow::EdmondsKarp;
//! use std::collections::HashMap;
//!
//! let mut capacities = HashMap::new();
//! for &(u, v, c) in &[('s', 'a', 5), ('s', 'c', 5), ('a', 'b', 2), ('a', 'c', 1), ('a', 'd', 1),
//!                     ('c', 'd', 2), ('d', 'b', 2), ('b', 't', 4), ('d', 't', 5)] {
//!     capacities.insert((u, v), c);
//!     capacities.insert((v, u), 0);
//! }
//! let g: DirectedAdjacencyGraph<char> = capacities.keys().cloned().collect();
//!
//! let mut maxflow = EdmondsKarp::new(&g, &capacities).unwrap();
//! assert_eq!(maxflow.solve(&'s', &'t').unwrap(), 5);
//! assert_eq!(maxflow.value(), 5);
//! assert!(capacities.iter().all(|(&(u, v), &c)| maxflow.flow(&u, &v) <= c));
//!
//! let mut mincut = maxflow.mincut().to_vec();
//! mincut.sort();
//! assert_eq!(mincut, vec!['a', 'c', 's']);
//! ```

use crate::edge::{DirectedEdge, Edge};
use crate::error::{GraphError, Result};
use crate::num::traits::NumAssign;
use crate::properties::{EdgeProperties, EdgePropertiesMap};
use crate::search::{bfs, path_from_incomings};
use crate::traits::{ensure_directed, ensure_vertex, Graph, Vertex};
use crate::visitor::{Color, ColorMap, Control, GraphVisitor, CONTINUE};

use std::collections::HashMap;

use tracing::{debug, trace};

type EdgeMap<V, F> = HashMap<DirectedEdge<V>, F>;

/// Max-flow algorithm of Edmonds and Karp.
pub struct EdmondsKarp<'g, G, F>
where
    G: Graph,
{
    graph: &'g G,
    capacities: EdgeMap<G::Vertex, F>,
    flow: EdgeMap<G::Vertex, F>,
    value: F,
    mincut: Vec<G::Vertex>,
}

impl<'g, G, F> EdmondsKarp<'g, G, F>
where
    G: Graph,
    F: NumAssign + PartialOrd + Copy,
{
    /// Create a new Edmonds-Karp instance for a network.
    ///
    /// Fails if `graph` is not directed, if some edge has no reverse edge,
    /// if a capacity is missing or negative or if both edges of a pair have
    /// a positive capacity.
    pub fn new<P>(graph: &'g G, capacities: &P) -> Result<Self>
    where
        P: EdgeProperties<G::Vertex, F> + ?Sized,
    {
        ensure_directed(graph, "Edmonds-Karp")?;
        let properties = EdgePropertiesMap::capacities(capacities, true);

        let mut caps = HashMap::with_capacity(graph.num_edges());
        for e in graph.edges_iter() {
            let (u, v) = (e.source(), e.target());
            if !graph.has_edge(v, u) {
                return Err(GraphError::missing_reverse_edge(u, v));
            }
            let capacity = properties.get(u, v)?;
            let reverse_capacity = properties.get(v, u)?;
            if !capacity.is_zero() && !reverse_capacity.is_zero() {
                return Err(GraphError::unbalanced_capacities(u, v));
            }
            caps.insert(DirectedEdge::new(u.clone(), v.clone()), capacity);
        }

        Ok(EdmondsKarp {
            graph,
            flow: caps.keys().map(|e| (e.clone(), F::zero())).collect(),
            capacities: caps,
            value: F::zero(),
            mincut: vec![],
        })
    }

    /// Compute a maximum flow from `source` to `sink`.
    ///
    /// Returns the value of the flow. A previous solution is discarded.
    pub fn solve(&mut self, source: &G::Vertex, sink: &G::Vertex) -> Result<F> {
        ensure_vertex(self.graph, source)?;
        ensure_vertex(self.graph, sink)?;
        if source == sink {
            return Err(GraphError::SourceIsSink);
        }
        debug!("edmonds-karp from {:?} to {:?}", source, sink);

        for f in self.flow.values_mut() {
            *f = F::zero();
        }
        self.value = F::zero();

        let mut augmentations = 0usize;
        loop {
            let visitor = ResidualVisitor {
                colors: ColorMap::new(),
                parents: HashMap::new(),
                capacities: &self.capacities,
                flow: &self.flow,
            };
            let mut search = bfs::start_with_visitor(self.graph, source, visitor)?;
            let reached = search.run_until(|vis| vis.color_map().color(sink) != Color::White);
            let visitor = search.into_visitor();

            if !reached {
                self.mincut = visitor.colors.visited().cloned().collect();
                break;
            }

            let parents = &visitor.parents;
            let mut path: Vec<G::Vertex> = path_from_incomings(sink.clone(), |v| {
                if v == source {
                    None
                } else {
                    parents.get(v).cloned()
                }
            })
            .collect();
            path.reverse();

            let mut bottleneck = None;
            for uv in path.windows(2) {
                let r = visitor.residual(&uv[0], &uv[1]);
                bottleneck = match bottleneck {
                    Some(b) if b <= r => Some(b),
                    _ => Some(r),
                };
            }
            let bottleneck = match bottleneck {
                Some(b) => b,
                None => break,
            };
            drop(visitor);

            trace!("augmenting path {:?}", path);
            for uv in path.windows(2) {
                self.augment(&uv[0], &uv[1], bottleneck);
            }
            self.value += bottleneck;
            augmentations += 1;
        }

        debug!("edmonds-karp finished after {} augmentations", augmentations);
        Ok(self.value)
    }

    fn augment(&mut self, u: &G::Vertex, v: &G::Vertex, delta: F) {
        let mut rest = delta;
        if let Some(back) = self.flow.get_mut(&DirectedEdge::new(v.clone(), u.clone())) {
            let cancel = if *back < rest { *back } else { rest };
            *back -= cancel;
            rest -= cancel;
        }
        if rest.is_zero() {
            return;
        }
        if let Some(f) = self.flow.get_mut(&DirectedEdge::new(u.clone(), v.clone())) {
            *f += rest;
        }
    }

    /// The value of the last computed flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// The flow on the edge `(u, v)`, zero if there is no such edge.
    pub fn flow(&self, u: &G::Vertex, v: &G::Vertex) -> F {
        self.flow
            .get(&DirectedEdge::new(u.clone(), v.clone()))
            .copied()
            .unwrap_or_else(F::zero)
    }

    /// The flow on every edge of the network.
    pub fn flows(&self) -> &HashMap<DirectedEdge<G::Vertex>, F> {
        &self.flow
    }

    pub fn into_flows(self) -> HashMap<DirectedEdge<G::Vertex>, F> {
        self.flow
    }

    /// The source side of a minimum cut.
    ///
    /// These are the vertices reachable from the source in the residual
    /// network of the last computed flow.
    pub fn mincut(&self) -> &[G::Vertex] {
        &self.mincut
    }
}

/// BFS visitor following only edges with positive residual capacity.
struct ResidualVisitor<'a, V, F> {
    colors: ColorMap<V>,
    parents: HashMap<V, V>,
    capacities: &'a EdgeMap<V, F>,
    flow: &'a EdgeMap<V, F>,
}

impl<'a, V, F> ResidualVisitor<'a, V, F>
where
    V: Vertex,
    F: NumAssign + Copy,
{
    fn residual(&self, u: &V, v: &V) -> F {
        let e = DirectedEdge::new(u.clone(), v.clone());
        let capacity = self.capacities.get(&e).copied().unwrap_or_else(F::zero);
        let flow = self.flow.get(&e).copied().unwrap_or_else(F::zero);
        let back = self.flow.get(&e.reverse()).copied().unwrap_or_else(F::zero);
        // flow never exceeds capacity, so this does not underflow
        capacity - flow + back
    }
}

impl<'a, V, F> GraphVisitor<V> for ResidualVisitor<'a, V, F>
where
    V: Vertex,
    F: NumAssign + PartialOrd + Copy,
{
    fn color_map(&self) -> &ColorMap<V> {
        &self.colors
    }

    fn color_map_mut(&mut self) -> &mut ColorMap<V> {
        &mut self.colors
    }

    fn follow_edge(&self, u: &V, v: &V) -> bool {
        self.colors.color(v) == Color::White && self.residual(u, v) > F::zero()
    }

    fn tree_edge(&mut self, u: &V, v: &V) -> Control {
        self.parents.insert(v.clone(), u.clone());
        CONTINUE
    }
}

/// Compute a maximum flow from `source` to `sink`.
///
/// Returns the flow on every edge of the network (see [`EdmondsKarp::new`]
/// for the requirements on the network).
///
/// # Example
///
/// ```
/// use rs_adjgraph::{DirectedAdjacencyGraph, DirectedEdge};
/// use rs_adjgraph::maxflow::maximum_flow;
/// use std::collections::HashMap;
///
/// let capacities: HashMap<(u32, u32), u32> =
///     vec![((1, 2), 3), ((2, 1), 0), ((2, 3), 2), ((3, 2), 0)].into_iter().collect();
/// let g: DirectedAdjacencyGraph<u32> = capacities.keys().cloned().collect();
///
/// let flow = maximum_flow(&g, &capacities, &1, &3).unwrap();
/// assert_eq!(flow[&DirectedEdge::new(1, 2)], 2);
/// assert_eq!(flow[&DirectedEdge::new(2, 3)], 2);
/// ```
pub fn maximum_flow<G, P, F>(
    g: &G,
    capacities: &P,
    source: &G::Vertex,
    sink: &G::Vertex,
) -> Result<HashMap<DirectedEdge<G::Vertex>, F>>
where
    G: Graph,
    P: EdgeProperties<G::Vertex, F> + ?Sized,
    F: NumAssign + PartialOrd + Copy,
{
    let mut maxflow = EdmondsKarp::new(g, capacities)?;
    maxflow.solve(source, sink)?;
    Ok(maxflow.into_flows())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectedAdjacencyGraph, MutableGraph, UndirectedAdjacencyGraph};

    fn network(arcs: &[(u32, u32, i64)]) -> (DirectedAdjacencyGraph<u32>, HashMap<(u32, u32), i64>) {
        let mut capacities = HashMap::new();
        for &(u, v, c) in arcs {
            capacities.insert((u, v), c);
            capacities.entry((v, u)).or_insert(0);
        }
        (capacities.keys().cloned().collect(), capacities)
    }

    #[test]
    fn test_path() {
        let (g, capacities) = network(&[(1, 2, 3), (2, 3, 2)]);
        let mut maxflow = EdmondsKarp::new(&g, &capacities).unwrap();
        assert_eq!(maxflow.solve(&1, &3), Ok(2));
        assert_eq!(maxflow.flow(&1, &2), 2);
        assert_eq!(maxflow.flow(&2, &1), 0);
        assert_eq!(maxflow.flow(&3, &2), 0);
        assert_eq!(maxflow.flow(&1, &3), 0);
        assert_eq!(maxflow.flows().len(), 4);

        let mut mincut = maxflow.mincut().to_vec();
        mincut.sort();
        assert_eq!(mincut, vec![1, 2]);
    }

    #[test]
    fn test_network() {
        let (g, capacities) = network(&[
            (1, 2, 16),
            (1, 3, 13),
            (2, 4, 12),
            (3, 2, 4),
            (3, 5, 14),
            (4, 3, 9),
            (4, 6, 20),
            (5, 4, 7),
            (5, 6, 4),
        ]);
        let flow = maximum_flow(&g, &capacities, &1, &6).unwrap();
        let out_of_source: i64 = [2, 3].iter().map(|v| flow[&DirectedEdge::new(1, *v)]).sum();
        assert_eq!(out_of_source, 23);

        // capacity and conservation constraints
        for (e, f) in &flow {
            assert!(*f >= 0);
            assert!(*f <= capacities[&(e.source, e.target)]);
        }
        for v in 2..6 {
            let outflow: i64 = flow.iter().filter(|(e, _)| e.source == v).map(|(_, f)| *f).sum();
            let inflow: i64 = flow.iter().filter(|(e, _)| e.target == v).map(|(_, f)| *f).sum();
            assert_eq!(outflow, inflow);
        }
    }

    #[test]
    fn test_unsigned_capacities() {
        let capacities: HashMap<(u32, u32), u64> =
            vec![((1, 2), 3), ((2, 1), 0), ((2, 3), 2), ((3, 2), 0)].into_iter().collect();
        let g: DirectedAdjacencyGraph<u32> = capacities.keys().cloned().collect();
        let flow = maximum_flow(&g, &capacities, &1, &3).unwrap();
        assert_eq!(flow[&DirectedEdge::new(1, 2)], 2);
        assert_eq!(flow[&DirectedEdge::new(2, 3)], 2);
        assert_eq!(flow[&DirectedEdge::new(2, 1)], 0);
        assert_eq!(flow[&DirectedEdge::new(3, 2)], 0);
    }

    #[test]
    fn test_cancel_reverse_flow() {
        // if 1-2-4-6 is augmented first, the second path 1-3-4-2-5-6 runs
        // against the flow on (2, 4)
        let arcs = [(1u8, 2u8, 1u32), (1, 3, 1), (2, 4, 1), (3, 4, 1), (2, 5, 1), (4, 6, 1), (5, 6, 1)];
        let mut capacities = HashMap::new();
        for &(u, v, c) in &arcs {
            capacities.insert((u, v), c);
            capacities.entry((v, u)).or_insert(0);
        }
        let g: DirectedAdjacencyGraph<u8> = capacities.keys().cloned().collect();
        let mut maxflow = EdmondsKarp::new(&g, &capacities).unwrap();
        assert_eq!(maxflow.solve(&1, &6), Ok(2));
        for (e, &f) in maxflow.flows() {
            assert!(f <= capacities[&(e.source, e.target)]);
        }
        for v in 2..6 {
            let outflow: u32 = maxflow.flows().iter().filter(|(e, _)| e.source == v).map(|(_, f)| *f).sum();
            let inflow: u32 = maxflow.flows().iter().filter(|(e, _)| e.target == v).map(|(_, f)| *f).sum();
            assert_eq!(outflow, inflow);
        }
    }

    #[test]
    fn test_unreachable_sink() {
        let (mut g, capacities) = network(&[(1, 2, 3)]);
        g.add_vertex(3);
        let mut maxflow = EdmondsKarp::new(&g, &capacities).unwrap();
        assert_eq!(maxflow.solve(&1, &3), Ok(0));
        assert_eq!(maxflow.flow(&1, &2), 0);
        let mut mincut = maxflow.mincut().to_vec();
        mincut.sort();
        assert_eq!(mincut, vec![1, 2]);
    }

    #[test]
    fn test_errors() {
        let (g, capacities) = network(&[(1, 2, 3), (2, 3, 2)]);
        let mut maxflow = EdmondsKarp::new(&g, &capacities).unwrap();
        assert_eq!(maxflow.solve(&1, &1), Err(GraphError::SourceIsSink));
        assert_eq!(maxflow.solve(&1, &4), Err(GraphError::no_vertex(&4)));

        let u: UndirectedAdjacencyGraph<u32> = vec![(1, 2)].into_iter().collect();
        assert!(matches!(
            EdmondsKarp::new(&u, &capacities),
            Err(GraphError::NotDirected(_))
        ));

        let d: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 2)].into_iter().collect();
        assert!(matches!(
            EdmondsKarp::new(&d, &capacities),
            Err(GraphError::MissingReverseEdge { .. })
        ));

        let mut unbalanced = capacities.clone();
        unbalanced.insert((2, 1), 1);
        assert_eq!(
            maximum_flow(&g, &unbalanced, &1, &3).map_err(|e| matches!(e, GraphError::UnbalancedCapacities { .. })),
            Err(true)
        );

        let mut negative = capacities.clone();
        negative.insert((2, 3), -2);
        assert!(matches!(
            maximum_flow(&g, &negative, &1, &3),
            Err(GraphError::NegativeProperty { .. })
        ));

        let mut missing = capacities;
        missing.remove(&(3, 2));
        assert!(matches!(
            maximum_flow(&g, &missing, &1, &3),
            Err(GraphError::MissingProperty { .. })
        ));
    }
}
