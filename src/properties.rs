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

//! Numeric edge properties such as weights and capacities.
//!
//! Algorithms receive edge properties from an [`EdgeProperties`] provider:
//! a `HashMap<(V, V), W>` or a closure `Fn(&V, &V) -> Option<W>`. Properties
//! are validated lazily, i.e. when an algorithm touches an edge.
//!
//! # Example
//!
//! ```
//! use rs_adjgraph::properties::EdgeProperties;
//! use std::collections::HashMap;
//!
//! let weights: HashMap<(u32, u32), i32> = vec![((1, 2), 5)].into_iter().collect();
//! assert_eq!(weights.edge_property(&1, &2), Some(5));
//! assert_eq!(weights.edge_property(&2, &1), None);
//!
//! let unit = |_: &u32, _: &u32| Some(1);
//! assert_eq!(unit.edge_property(&2, &1), Some(1));
//! ```

use crate::error::{GraphError, Result};
use crate::num::traits::Zero;
use crate::traits::Vertex;

use std::collections::HashMap;
use std::hash::BuildHasher;

/// Provider of a numeric property of edges.
pub trait EdgeProperties<V, W> {
    /// Return the property of the edge `(u, v)` if it is defined.
    fn edge_property(&self, u: &V, v: &V) -> Option<W>;
}

impl<V, W, S> EdgeProperties<V, W> for HashMap<(V, V), W, S>
where
    V: Vertex,
    W: Copy,
    S: BuildHasher,
{
    fn edge_property(&self, u: &V, v: &V) -> Option<W> {
        self.get(&(u.clone(), v.clone())).copied()
    }
}

impl<V, W, F> EdgeProperties<V, W> for F
where
    F: Fn(&V, &V) -> Option<W>,
{
    fn edge_property(&self, u: &V, v: &V) -> Option<W> {
        (self)(u, v)
    }
}

/// Validated access to edge properties.
///
/// For undirected graphs the property of `(u, v)` is looked up as `(u, v)`
/// first and `(v, u)` second.
pub struct EdgePropertiesMap<'p, P: ?Sized> {
    properties: &'p P,
    directed: bool,
    non_negative: bool,
    kind: &'static str,
}

impl<'p, P: ?Sized> Clone for EdgePropertiesMap<'p, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'p, P: ?Sized> Copy for EdgePropertiesMap<'p, P> {}

impl<'p, P: ?Sized> EdgePropertiesMap<'p, P> {
    /// Create a new validated property map.
    ///
    /// - `directed`: whether `(u, v)` and `(v, u)` are different edges,
    /// - `non_negative`: whether negative values are rejected,
    /// - `kind`: name of the property used in error messages.
    pub fn new(properties: &'p P, directed: bool, non_negative: bool, kind: &'static str) -> Self {
        EdgePropertiesMap {
            properties,
            directed,
            non_negative,
            kind,
        }
    }

    /// Edge weights, possibly negative.
    pub fn weights(properties: &'p P, directed: bool) -> Self {
        Self::new(properties, directed, false, "weight")
    }

    /// Edge weights that must not be negative.
    pub fn non_negative_weights(properties: &'p P, directed: bool) -> Self {
        Self::new(properties, directed, true, "weight")
    }

    /// Edge capacities, which must not be negative.
    pub fn capacities(properties: &'p P, directed: bool) -> Self {
        Self::new(properties, directed, true, "capacity")
    }

    /// Return the property of edge `(u, v)`.
    ///
    /// Fails with [`GraphError::MissingProperty`] if it is not defined and
    /// with [`GraphError::NegativeProperty`] if it is negative but must not
    /// be.
    pub fn get<V, W>(&self, u: &V, v: &V) -> Result<W>
    where
        P: EdgeProperties<V, W>,
        V: Vertex,
        W: PartialOrd + Zero,
    {
        let value = match self.properties.edge_property(u, v) {
            Some(value) => value,
            None if !self.directed => self
                .properties
                .edge_property(v, u)
                .ok_or_else(|| GraphError::missing_property(self.kind, u, v))?,
            None => return Err(GraphError::missing_property(self.kind, u, v)),
        };
        if self.non_negative && value < W::zero() {
            Err(GraphError::negative_property(self.kind, u, v))
        } else {
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EdgePropertiesMap;
    use crate::GraphError;
    use std::collections::HashMap;

    #[test]
    fn test_lookup() {
        let weights: HashMap<(char, char), i32> = vec![(('a', 'b'), 3), (('b', 'c'), -1)].into_iter().collect();

        let directed = EdgePropertiesMap::weights(&weights, true);
        assert_eq!(directed.get(&'a', &'b'), Ok(3));
        assert_eq!(directed.get(&'b', &'c'), Ok(-1));
        assert!(directed.get::<char, i32>(&'c', &'b').is_err());
        assert_eq!(
            directed.get::<char, i32>(&'b', &'a'),
            Err(GraphError::missing_property("weight", &'b', &'a'))
        );

        let undirected = EdgePropertiesMap::non_negative_weights(&weights, false);
        assert_eq!(undirected.get(&'b', &'a'), Ok(3));
        assert_eq!(
            undirected.get::<char, i32>(&'c', &'b'),
            Err(GraphError::negative_property("weight", &'c', &'b'))
        );
        assert_eq!(
            undirected.get::<char, i32>(&'a', &'c').unwrap_err().to_string(),
            "weight of edge ('a', 'c') is not defined"
        );
    }

    #[test]
    fn test_closure() {
        let capacity = |u: &u32, v: &u32| if u < v { Some(v - u) } else { None };
        let caps = EdgePropertiesMap::capacities(&capacity, true);
        assert_eq!(caps.get(&1, &4), Ok(3));
        assert!(caps.get::<u32, u32>(&4, &1).is_err());
    }
}
