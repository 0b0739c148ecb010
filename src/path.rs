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

//! Path existence.

use crate::search::bfs;
use crate::traits::Graph;
use crate::visitor::Color;

/// Return `true` if `g` contains a path from `source` to `target`.
///
/// Every vertex has a path to itself. If `source` is not a vertex of `g`
/// there is no path.
///
/// # Example
///
/// ```
/// use rs_adjgraph::DirectedAdjacencyGraph;
/// use rs_adjgraph::path::has_path;
///
/// let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (4, 3)].into_iter().collect();
/// assert!(has_path(&g, &1, &3));
/// assert!(!has_path(&g, &3, &1));
/// assert!(!has_path(&g, &1, &4));
/// ```
pub fn has_path<G>(g: &G, source: &G::Vertex, target: &G::Vertex) -> bool
where
    G: Graph,
{
    match bfs::start(g, source) {
        Ok(mut search) => search.run_until(|colors| colors.color(target) != Color::White),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::has_path;
    use crate::{DirectedAdjacencyGraph, UndirectedAdjacencyGraph};

    #[test]
    fn test_directed() {
        let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (3, 1), (3, 4), (5, 4)].into_iter().collect();
        assert!(has_path(&g, &1, &4));
        assert!(has_path(&g, &3, &2));
        assert!(has_path(&g, &4, &4));
        assert!(!has_path(&g, &4, &1));
        assert!(!has_path(&g, &1, &5));
        assert!(!has_path(&g, &6, &1));
        assert!(!has_path(&g, &1, &6));
    }

    #[test]
    fn test_undirected() {
        let g: UndirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (4, 5)].into_iter().collect();
        assert!(has_path(&g, &3, &1));
        assert!(!has_path(&g, &1, &5));
    }
}
