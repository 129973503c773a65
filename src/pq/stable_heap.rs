// FIFO-stable binary heap
//
// `HeapQueue` with an insertion ticket on every node. Between equal
// priorities the lower ticket wins, which turns the heap's arbitrary tie
// order into first-in-first-out.

use crate::pq::heap::{pop_root, sift_up};
use crate::{Priority, PriorityQueue};

struct Node<T, P> {
   priority: P,
   seq: u64,
   item: T,
}

#[inline]
fn outranks<T, P: Priority>(a: &Node<T, P>, b: &Node<T, P>) -> bool {
   (a.priority, b.seq) > (b.priority, a.seq)
}

pub struct StableHeapQueue<T, P: Priority = u32> {
   nodes: Vec<Node<T, P>>,
   next_seq: u64,
}

impl<T, P: Priority> StableHeapQueue<T, P> {
   pub fn new() -> Self {
      Self { nodes: Vec::new(), next_seq: 0 }
   }

   pub fn with_capacity(cap: usize) -> Self {
      Self { nodes: Vec::with_capacity(cap), next_seq: 0 }
   }
}

impl<T, P: Priority> Default for StableHeapQueue<T, P> {
   fn default() -> Self {
      Self::new()
   }
}

impl<T, P: Priority> PriorityQueue<T> for StableHeapQueue<T, P> {
   type Priority = P;
   const FIFO_STABLE: bool = true;

   fn enqueue(&mut self, item: T, priority: P) {
      let seq = self.next_seq;
      self.next_seq += 1;
      self.nodes.push(Node { priority, seq, item });
      let leaf = self.nodes.len() - 1;
      sift_up(&mut self.nodes, leaf, outranks);
   }

   fn dequeue(&mut self) -> Option<T> {
      let node = pop_root(&mut self.nodes, outranks)?;
      if self.nodes.is_empty() {
         // no live tickets left to compare against
         self.next_seq = 0;
      }
      Some(node.item)
   }

   #[inline]
   fn peek_priority(&self) -> Option<P> {
      self.nodes.first().map(|n| n.priority)
   }

   #[inline]
   fn len(&self) -> usize {
      self.nodes.len()
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn equal_priorities_leave_in_arrival_order() {
      let mut q = StableHeapQueue::<u32, u8>::new();
      for v in 0..50 {
         q.enqueue(v, (v % 3) as u8);
      }
      let out: Vec<_> = q.drain().collect();
      let expected: Vec<u32> = [2u32, 1, 0]
         .iter()
         .flat_map(|&r| (0..50).filter(move |v| v % 3 == r))
         .collect();
      assert_eq!(out, expected);
   }

   #[test]
   fn ticket_counter_resets_when_drained() {
      let mut q = StableHeapQueue::<char, u32>::new();
      q.enqueue('a', 1);
      q.enqueue('b', 1);
      q.dequeue();
      q.dequeue();
      assert_eq!(q.next_seq, 0);
      q.enqueue('c', 1);
      q.enqueue('d', 1);
      assert_eq!(q.dequeue(), Some('c'));
   }
}
