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

use std::collections::VecDeque;

/// The waiting list of a graph traversal.
///
/// The order in which [`pop`](Frontier::pop) returns the pushed vertices
/// determines the traversal: a `VecDeque` is a FIFO queue (breadth-first
/// search), a `Vec` is a LIFO stack (depth-first search).
pub trait Frontier<I>: Default {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    fn clear(&mut self);

    fn push(&mut self, u: I);

    fn pop(&mut self) -> Option<I>;
}

impl<I> Frontier<I> for VecDeque<I> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }

    fn push(&mut self, u: I) {
        VecDeque::push_back(self, u)
    }

    fn pop(&mut self) -> Option<I> {
        VecDeque::pop_front(self)
    }
}

impl<I> Frontier<I> for Vec<I> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn push(&mut self, u: I) {
        Vec::push(self, u)
    }

    fn pop(&mut self) -> Option<I> {
        Vec::pop(self)
    }
}
