// Binary max-heap priority queue
//
// Array-backed heap of (priority, item) nodes: node i has children 2i+1 and
// 2i+2, and every node's priority is >= its children's. Enqueue and dequeue
// are O(log n).
//
// Sift comparisons look at priority only, so items sharing a priority come
// out in no particular order. Use `StableHeapQueue` when FIFO ties matter.

use crate::{Priority, PriorityQueue};

#[derive(Debug, Clone)]
pub struct HeapQueue<T, P: Priority = u32> {
   nodes: Vec<(P, T)>,
}

impl<T, P: Priority> HeapQueue<T, P> {
   pub fn new() -> Self {
      Self { nodes: Vec::new() }
   }

   pub fn with_capacity(cap: usize) -> Self {
      Self { nodes: Vec::with_capacity(cap) }
   }
}

impl<T, P: Priority> Default for HeapQueue<T, P> {
   fn default() -> Self {
      Self::new()
   }
}

/*──────────────────────────────────────────────────────────────────────────*/
/*  Sift helpers, shared with the stable heap                               */
/*──────────────────────────────────────────────────────────────────────────*/

/// Move `nodes[pos]` up while it outranks its parent.
#[inline]
pub(crate) fn sift_up<N>(nodes: &mut [N], mut pos: usize, above: impl Fn(&N, &N) -> bool) {
   while pos > 0 {
      let parent = (pos - 1) / 2;
      if !above(&nodes[pos], &nodes[parent]) {
         break;
      }
      nodes.swap(pos, parent);
      pos = parent;
   }
}

/// Move `nodes[pos]` down toward its higher-ranked child until neither child
/// outranks it.
#[inline]
pub(crate) fn sift_down<N>(nodes: &mut [N], mut pos: usize, above: impl Fn(&N, &N) -> bool) {
   let len = nodes.len();
   loop {
      let left = 2 * pos + 1;
      if left >= len {
         break;
      }
      let right = left + 1;
      let child = if right < len && above(&nodes[right], &nodes[left]) { right } else { left };
      if !above(&nodes[child], &nodes[pos]) {
         break;
      }
      nodes.swap(pos, child);
      pos = child;
   }
}

/// Swap the root with the last node, pop it, and restore the heap.
#[inline]
pub(crate) fn pop_root<N>(nodes: &mut Vec<N>, above: impl Fn(&N, &N) -> bool) -> Option<N> {
   if nodes.is_empty() {
      return None;
   }
   let last = nodes.len() - 1;
   nodes.swap(0, last);
   let root = nodes.pop();
   sift_down(nodes, 0, above);
   root
}

/*──────────────────────────── queue operations ────────────────────────────*/

#[inline]
fn outranks<T, P: Priority>(a: &(P, T), b: &(P, T)) -> bool {
   a.0 > b.0
}

impl<T, P: Priority> PriorityQueue<T> for HeapQueue<T, P> {
   type Priority = P;
   const FIFO_STABLE: bool = false;

   fn enqueue(&mut self, item: T, priority: P) {
      self.nodes.push((priority, item));
      let leaf = self.nodes.len() - 1;
      sift_up(&mut self.nodes, leaf, outranks);
   }

   fn dequeue(&mut self) -> Option<T> {
      pop_root(&mut self.nodes, outranks).map(|(_, item)| item)
   }

   #[inline]
   fn peek_priority(&self) -> Option<P> {
      self.nodes.first().map(|(p, _)| *p)
   }

   #[inline]
   fn len(&self) -> usize {
      self.nodes.len()
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   fn assert_heap<T, P: Priority>(q: &HeapQueue<T, P>) {
      for i in 1..q.nodes.len() {
         let parent = (i - 1) / 2;
         assert!(q.nodes[parent].0 >= q.nodes[i].0, "heap violated at node {i}");
      }
   }

   #[test]
   fn heap_property_holds_through_mixed_ops() {
      let mut q = HeapQueue::<usize, u32>::with_capacity(64);
      for i in 0..64usize {
         q.enqueue(i, ((i * 37) % 11) as u32);
         assert_heap(&q);
         if i % 5 == 0 {
            q.dequeue();
            assert_heap(&q);
         }
      }
   }

   #[test]
   fn priorities_come_out_non_increasing() {
      let mut q = HeapQueue::<u32, u32>::new();
      for (v, p) in [(1, 4), (2, 8), (3, 1), (4, 8), (5, 6), (6, 2)] {
         q.enqueue(v, p);
      }
      let mut last = u32::MAX;
      while let Some(p) = q.peek_priority() {
         assert!(p <= last);
         last = p;
         q.dequeue();
      }
      assert!(q.is_empty());
   }

   #[test]
   fn single_node_round_trip() {
      let mut q = HeapQueue::<&str, i64>::new();
      q.enqueue("only", -1);
      assert_eq!(q.peek_priority(), Some(-1));
      assert_eq!(q.dequeue(), Some("only"));
      assert_eq!(q.dequeue(), None);
   }
}
