// Linear-scan array queue
//
// Items stay in arrival order; dequeue walks the whole array for the first
// maximum and removes it with an order-preserving shift. O(1) enqueue,
// O(n) dequeue.

use crate::{Priority, PriorityQueue};

#[derive(Debug, Clone)]
pub struct ScanVecQueue<T, P: Priority = u32> {
   items: Vec<(P, T)>,
}

impl<T, P: Priority> ScanVecQueue<T, P> {
   pub fn new() -> Self {
      Self { items: Vec::new() }
   }

   pub fn with_capacity(cap: usize) -> Self {
      Self { items: Vec::with_capacity(cap) }
   }

   /// Index of the earliest item holding the highest priority.
   fn top(&self) -> Option<usize> {
      let mut best: Option<(usize, P)> = None;
      for (i, (p, _)) in self.items.iter().enumerate() {
         match best {
            Some((_, bp)) if *p <= bp => {}
            _ => best = Some((i, *p)),
         }
      }
      best.map(|(i, _)| i)
   }
}

impl<T, P: Priority> Default for ScanVecQueue<T, P> {
   fn default() -> Self {
      Self::new()
   }
}

impl<T, P: Priority> PriorityQueue<T> for ScanVecQueue<T, P> {
   type Priority = P;
   const FIFO_STABLE: bool = true;

   #[inline]
   fn enqueue(&mut self, item: T, priority: P) {
      self.items.push((priority, item));
   }

   fn dequeue(&mut self) -> Option<T> {
      let i = self.top()?;
      Some(self.items.remove(i).1)
   }

   fn peek_priority(&self) -> Option<P> {
      self.items.iter().map(|(p, _)| *p).max()
   }

   #[inline]
   fn len(&self) -> usize {
      self.items.len()
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn first_maximum_wins() {
      let mut q = ScanVecQueue::<char, u8>::new();
      for (c, p) in [('a', 1), ('b', 4), ('c', 4), ('d', 2)] {
         q.enqueue(c, p);
      }
      assert_eq!(q.top(), Some(1));
      assert_eq!(q.drain().collect::<String>(), "bcda");
   }
}
