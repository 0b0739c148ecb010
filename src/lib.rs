// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//#![forbid(unsafe_code)]

//! Adjacency graphs and visitor-driven graph algorithms.
//!
//! Vertices are arbitrary client values (anything that is `Clone + Eq +
//! Hash + Ord + Debug`). A graph maps each vertex to its out-neighbors;
//! [`DirectedAdjacencyGraph`] and [`UndirectedAdjacencyGraph`] store them in
//! a configurable container, [`BidirectionalGraph`] additionally keeps the
//! in-neighbors.
//!
//! The traversals in [`search`] report every step to a
//! [`GraphVisitor`](visitor::GraphVisitor), and the algorithms built on them
//! (components, shortest paths, spanning trees, flows) can be observed and
//! stopped early the same way.
//!
//! # Example
//!
//! ```
//! use rs_adjgraph::{DirectedAdjacencyGraph, Graph, MutableGraph};
//! use rs_adjgraph::components::strongly_connected_components;
//! use rs_adjgraph::topsort;
//!
//! let mut g: DirectedAdjacencyGraph<&str> = vec![("shirt", "tie"), ("tie", "jacket"), ("trousers", "shoes")]
//!     .into_iter()
//!     .collect();
//! g.add_edge("trousers", "jacket");
//! assert!(topsort::is_acyclic(&g));
//!
//! let order: Vec<_> = topsort::start(&g).collect();
//! let pos = |v| order.iter().position(|&u| u == v).unwrap();
//! assert!(pos("shirt") < pos("tie") && pos("tie") < pos("jacket"));
//!
//! g.add_edge("jacket", "shirt");
//! assert!(!topsort::is_acyclic(&g));
//! assert_eq!(strongly_connected_components(&g).unwrap().num_components(), 3);
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod error;
pub use self::error::{GraphError, Result};

pub mod edge;
pub use self::edge::{DirectedEdge, Edge, UndirectedEdge};

pub mod traits;
pub use self::traits::{Bidirectional, Graph, Vertex};

pub mod mutable;
pub use self::mutable::MutableGraph;

pub mod adjacency;
pub use self::adjacency::{AdjacencyGraph, DirectedAdjacencyGraph, UndirectedAdjacencyGraph};

pub mod bidirectional;
pub use self::bidirectional::BidirectionalGraph;

pub mod filtered;

pub mod properties;

pub mod collections;

// # Algorithms

pub mod algorithms;
pub mod bipartite;
pub mod components;
pub mod maxflow;
pub mod mst;
pub mod path;
pub mod search;
pub mod shortestpath;
pub mod topsort;
pub mod transitivity;
pub mod visitor;
