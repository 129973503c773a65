// Sort-on-insert array queue
//
// Keeps the array ascending by priority so the next item is always at the
// tail: O(1) dequeue, O(n) enqueue (binary search plus shift). A new item is
// placed before existing equal priorities, which leaves the oldest of each
// tier nearest the tail.

use crate::{Priority, PriorityQueue};

#[derive(Debug, Clone)]
pub struct SortedVecQueue<T, P: Priority = u32> {
   items: Vec<(P, T)>,
}

impl<T, P: Priority> SortedVecQueue<T, P> {
   pub fn new() -> Self {
      Self { items: Vec::new() }
   }

   pub fn with_capacity(cap: usize) -> Self {
      Self { items: Vec::with_capacity(cap) }
   }
}

impl<T, P: Priority> Default for SortedVecQueue<T, P> {
   fn default() -> Self {
      Self::new()
   }
}

impl<T, P: Priority> PriorityQueue<T> for SortedVecQueue<T, P> {
   type Priority = P;
   const FIFO_STABLE: bool = true;

   fn enqueue(&mut self, item: T, priority: P) {
      let at = self.items.partition_point(|(p, _)| *p < priority);
      self.items.insert(at, (priority, item));
   }

   #[inline]
   fn dequeue(&mut self) -> Option<T> {
      self.items.pop().map(|(_, item)| item)
   }

   #[inline]
   fn peek_priority(&self) -> Option<P> {
      self.items.last().map(|(p, _)| *p)
   }

   #[inline]
   fn len(&self) -> usize {
      self.items.len()
   }
}
