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

//! Binary heap implementation

use crate::collections::ItemPriQueue;

/// Heap item information.
struct BinHeapItem<K, V> {
    /// The key associated with this item.
    key: K,
    /// The value (priority) of the item.
    value: V,
    /// Position of this element on the heap. If this element is *not*
    /// on the heap, its the index of the next element in the free
    /// list.
    pos: usize,
}

/// Simple binary heap with decrease-key.
///
/// Handles are indices into an internal slot vector. Slots of popped
/// elements are recycled through a free list, so a handle must not be used
/// after its element has been popped.
pub struct BinHeap<K, V> {
    /// The heap elements.
    heap: Vec<usize>,
    /// The key and heap-index for each element.
    data: Vec<BinHeapItem<K, V>>,
    /// First free item.
    free: Option<usize>,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap {
            heap: vec![],
            data: vec![],
            free: None,
        }
    }
}

impl<K, V> ItemPriQueue<K, V> for BinHeap<K, V>
where
    K: Clone,
    V: PartialOrd + Clone,
{
    type Item = usize;

    fn clear(&mut self) {
        self.heap.clear();
        self.data.clear();
        self.free = None;
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn value(&self, item: &usize) -> &V {
        &self.data[*item].value
    }

    fn push(&mut self, key: K, value: V) -> usize {
        let pos = self.heap.len();
        let item = match self.free {
            Some(item) => {
                // take from free list, a self-reference marks its end
                let next = self.data[item].pos;
                self.free = if next == item { None } else { Some(next) };
                self.data[item] = BinHeapItem { key, value, pos };
                item
            }
            None => {
                self.data.push(BinHeapItem { key, value, pos });
                self.data.len() - 1
            }
        };
        self.heap.push(item);
        self.upheap(item);
        item
    }

    fn decrease_key(&mut self, item: &mut usize, value: V) -> bool {
        if self.data[*item].value > value {
            self.data[*item].value = value;
            self.upheap(*item);
            true
        } else {
            false
        }
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }

        // remove the smallest element from the heap
        let min_item = self.heap.swap_remove(0);
        // put its data slot in the free list
        self.data[min_item].pos = self.free.unwrap_or(min_item);
        self.free = Some(min_item);

        if let Some(&item) = self.heap.first() {
            self.downheap(item);
        }

        let min = &self.data[min_item];
        Some((min.key.clone(), min.value.clone()))
    }
}

impl<K, V> BinHeap<K, V>
where
    V: PartialOrd + Clone,
{
    /// Move the element `item` up in the heap until its parent does not have a
    /// larger key or the root node is reached.
    ///
    /// Note that this function assumes that its value is smaller than the value
    /// of its children.
    fn upheap(&mut self, item: usize) {
        let value = self.data[item].value.clone();
        let mut cur_pos = self.data[item].pos;
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            let parent = self.heap[parent_pos];
            // Using > instead of >= moves the item up as far as possible, so
            // among equal values the last one touched is considered next.
            if value > self.data[parent].value {
                break;
            }
            self.heap[cur_pos] = parent;
            self.data[parent].pos = cur_pos;
            cur_pos = parent_pos;
        }
        self.data[item].pos = cur_pos;
        self.heap[cur_pos] = item;
    }

    /// Move the element `item` at the root down until both children have a
    /// value that is not smaller.
    fn downheap(&mut self, item: usize) {
        let n = self.heap.len();
        let value = self.data[item].value.clone();
        let mut cur_pos = 0;
        loop {
            let left_pos = 2 * cur_pos + 1;
            let right_pos = left_pos + 1;
            if left_pos >= n {
                break;
            }
            let (next_pos, next) = if right_pos >= n {
                (left_pos, self.heap[left_pos])
            } else {
                let left = self.heap[left_pos];
                let right = self.heap[right_pos];
                if self.data[left].value < self.data[right].value {
                    (left_pos, left)
                } else {
                    (right_pos, right)
                }
            };

            if value <= self.data[next].value {
                break;
            }

            self.heap[cur_pos] = next;
            self.data[next].pos = cur_pos;
            cur_pos = next_pos;
        }
        self.heap[cur_pos] = item;
        self.data[item].pos = cur_pos;
    }
}

#[cfg(test)]
mod tests {
    use super::BinHeap;
    use crate::collections::ItemPriQueue;

    #[test]
    fn test_pop_order() {
        let mut heap = BinHeap::new();
        for (k, v) in vec![('a', 5), ('b', 3), ('c', 8), ('d', 1), ('e', 4)] {
            heap.push(k, v);
        }
        assert_eq!(heap.len(), 5);
        let mut order = vec![];
        while let Some((k, _)) = heap.pop_min() {
            order.push(k);
        }
        assert_eq!(order, vec!['d', 'b', 'e', 'a', 'c']);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_decrease_key() {
        let mut heap = BinHeap::new();
        let _a = heap.push("a", 10);
        let mut b = heap.push("b", 20);
        let _c = heap.push("c", 15);
        assert!(heap.decrease_key(&mut b, 5));
        assert!(!heap.decrease_key(&mut b, 7));
        assert_eq!(*heap.value(&b), 5);
        assert_eq!(heap.pop_min(), Some(("b", 5)));
        assert_eq!(heap.pop_min(), Some(("a", 10)));
    }

    #[test]
    fn test_reuse_slots() {
        let mut heap = BinHeap::new();
        heap.push(1, 1.0);
        heap.push(2, 2.0);
        assert_eq!(heap.pop_min(), Some((1, 1.0)));
        heap.push(3, 0.5);
        heap.push(4, 3.0);
        assert_eq!(heap.pop_min(), Some((3, 0.5)));
        assert_eq!(heap.pop_min(), Some((2, 2.0)));
        assert_eq!(heap.pop_min(), Some((4, 3.0)));
        assert_eq!(heap.pop_min(), None);
    }
}
