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

//! Errors reported by graph operations and algorithms.

use std::fmt::Debug;

use thiserror::Error;

/// Error of a graph operation or algorithm.
///
/// Vertices involved in the failure are rendered with their `Debug`
/// representation, so the error type does not depend on the vertex type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The operation requires a directed graph.
    #[error("{0} only works for directed graphs")]
    NotDirected(&'static str),

    /// The operation requires an undirected graph.
    #[error("{0} only works for undirected graphs")]
    NotUndirected(&'static str),

    /// A vertex is not contained in the graph.
    #[error("no vertex {0}")]
    NoVertex(String),

    /// A property (weight, capacity) of an edge is not defined.
    #[error("{kind} of edge ({u}, {v}) is not defined")]
    MissingProperty { kind: &'static str, u: String, v: String },

    /// A property of an edge is negative but must not be.
    #[error("{kind} of edge ({u}, {v}) is negative")]
    NegativeProperty { kind: &'static str, u: String, v: String },

    /// The graph contains a cycle of negative weight.
    #[error("there is a negative-weight cycle including edge ({u}, {v})")]
    NegativeCycle { u: String, v: String },

    /// The reverse edge required by a flow network is missing.
    #[error("reverse edge for ({u}, {v}) is missing")]
    MissingReverseEdge { u: String, v: String },

    /// Both an edge and its reverse edge have positive capacity.
    #[error("either ({u}, {v}) or ({v}, {u}) should have 0 capacity")]
    UnbalancedCapacities { u: String, v: String },

    /// Source and sink of a flow problem coincide.
    #[error("source and sink can't be equal")]
    SourceIsSink,
}

impl GraphError {
    pub(crate) fn no_vertex<V: Debug>(v: &V) -> Self {
        GraphError::NoVertex(format!("{:?}", v))
    }

    pub(crate) fn missing_property<V: Debug>(kind: &'static str, u: &V, v: &V) -> Self {
        GraphError::MissingProperty {
            kind,
            u: format!("{:?}", u),
            v: format!("{:?}", v),
        }
    }

    pub(crate) fn negative_property<V: Debug>(kind: &'static str, u: &V, v: &V) -> Self {
        GraphError::NegativeProperty {
            kind,
            u: format!("{:?}", u),
            v: format!("{:?}", v),
        }
    }

    pub(crate) fn negative_cycle<V: Debug>(u: &V, v: &V) -> Self {
        GraphError::NegativeCycle {
            u: format!("{:?}", u),
            v: format!("{:?}", v),
        }
    }

    pub(crate) fn missing_reverse_edge<V: Debug>(u: &V, v: &V) -> Self {
        GraphError::MissingReverseEdge {
            u: format!("{:?}", u),
            v: format!("{:?}", v),
        }
    }

    pub(crate) fn unbalanced_capacities<V: Debug>(u: &V, v: &V) -> Self {
        GraphError::UnbalancedCapacities {
            u: format!("{:?}", u),
            v: format!("{:?}", v),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
