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

//! Containers used by graphs and algorithms.
//!
//! - [`AdjacencyList`]: the container holding the neighbors of one vertex,
//!   chosen by the graph's type parameter,
//! - [`Frontier`]: the waiting list of a traversal, FIFO for breadth-first and
//!   LIFO for depth-first search,
//! - [`ItemPriQueue`] and [`BinHeap`]: a priority queue with decrease-key
//!   used by Dijkstra's algorithm.

mod adjacency;
mod frontier;
mod priqueue;

pub use self::adjacency::AdjacencyList;
pub use self::frontier::Frontier;
pub use self::priqueue::{BinHeap, ItemPriQueue};
