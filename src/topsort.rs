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

//! Topological sorting.
//!
//! # Example
//!
//! ```
//! use rs_adjgraph::DirectedAdjacencyGraph;
//! use rs_adjgraph::topsort;
//!
//! let g: DirectedAdjacencyGraph<&str> = vec![("shirt", "tie"), ("tie", "jacket"), ("trousers", "shoes"), ("trousers", "jacket")]
//!     .into_iter()
//!     .collect();
//! let order: Vec<_> = topsort::start(&g).collect();
//! assert_eq!(order.len(), 5);
//! let pos = |v| order.iter().position(|&u| u == v).unwrap();
//! assert!(pos("shirt") < pos("tie"));
//! assert!(pos("tie") < pos("jacket"));
//! assert!(pos("trousers") < pos("shoes"));
//! assert!(topsort::is_acyclic(&g));
//! ```

use crate::traits::{neighbors, Graph};

use std::collections::HashMap;

use tracing::debug;

/// Lazy topological order of a graph (Kahn's algorithm).
///
/// Vertices with no remaining incoming edges are produced one at a time.
/// Vertices on a cycle, and vertices reachable from a cycle, are never
/// produced.
pub struct TopsortIterator<'g, G>
where
    G: Graph,
{
    graph: &'g G,
    waiting: Vec<&'g G::Vertex>,
    in_degrees: HashMap<&'g G::Vertex, usize>,
}

/// Start a topological sort of `g`.
pub fn start<G>(g: &G) -> TopsortIterator<'_, G>
where
    G: Graph,
{
    let mut in_degrees = HashMap::with_capacity(g.num_vertices());
    for u in g.vertices_iter() {
        in_degrees.entry(u).or_insert(0);
        for v in neighbors(g, u) {
            *in_degrees.entry(v).or_insert(0) += 1;
        }
    }
    let waiting = in_degrees.iter().filter(|&(_, &d)| d == 0).map(|(&u, _)| u).collect();
    TopsortIterator {
        graph: g,
        waiting,
        in_degrees,
    }
}

impl<'g, G> Iterator for TopsortIterator<'g, G>
where
    G: Graph,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<G::Vertex> {
        let u = self.waiting.pop()?;
        for v in neighbors(self.graph, u) {
            if let Some(d) = self.in_degrees.get_mut(v) {
                *d -= 1;
                if *d == 0 {
                    self.waiting.push(v);
                }
            }
        }
        Some(u.clone())
    }
}

/// Return `true` if the graph has no directed cycle.
///
/// For undirected graphs every edge is a cycle of length two, so only
/// graphs without edges are acyclic.
pub fn is_acyclic<G>(g: &G) -> bool
where
    G: Graph,
{
    let n = start(g).count();
    debug!("topsort produced {} of {} vertices", n, g.num_vertices());
    n == g.num_vertices()
}
