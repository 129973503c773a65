// Ordered bucket priority queue
//
// Same FIFO buckets as `BucketQueue`, but keyed in a `BTreeMap` so the
// highest priority is the last entry: O(log k) dequeue instead of an O(k)
// key scan, paid for with O(log k) enqueue.

use crate::{Priority, PriorityQueue};
use std::collections::{BTreeMap, VecDeque};

#[derive(Debug, Clone)]
pub struct OrderedBucketQueue<T, P: Priority = u32> {
   buckets: BTreeMap<P, VecDeque<T>>,
   len: usize,
}

impl<T, P: Priority> OrderedBucketQueue<T, P> {
   pub fn new() -> Self {
      Self { buckets: BTreeMap::new(), len: 0 }
   }

   #[inline]
   pub fn bucket_count(&self) -> usize {
      self.buckets.len()
   }
}

impl<T, P: Priority> Default for OrderedBucketQueue<T, P> {
   fn default() -> Self {
      Self::new()
   }
}

impl<T, P: Priority> PriorityQueue<T> for OrderedBucketQueue<T, P> {
   type Priority = P;
   const FIFO_STABLE: bool = true;

   #[inline]
   fn enqueue(&mut self, item: T, priority: P) {
      self.buckets.entry(priority).or_default().push_back(item);
      self.len += 1;
   }

   fn dequeue(&mut self) -> Option<T> {
      let mut top = self.buckets.last_entry()?;
      let item = top.get_mut().pop_front()?;
      if top.get().is_empty() {
         top.remove();
      }
      self.len -= 1;
      Some(item)
   }

   #[inline]
   fn peek_priority(&self) -> Option<P> {
      self.buckets.last_key_value().map(|(p, _)| *p)
   }

   #[inline]
   fn len(&self) -> usize {
      self.len
   }
}
