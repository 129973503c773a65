// Bucket priority queue
//
// One FIFO bucket per distinct priority, held in a hash map. Enqueue is an
// amortised O(1) append; dequeue scans every live key for the maximum, so it
// costs O(k) in the number of distinct priorities currently queued. Suited to
// workloads with few priority levels and many items.

use crate::{Priority, PriorityQueue};
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone)]
pub struct BucketQueue<T, P: Priority = u32> {
   buckets: HashMap<P, VecDeque<T>>, // never holds an empty bucket
   len: usize,                       // sum of bucket lengths
}

impl<T, P: Priority> BucketQueue<T, P> {
   pub fn new() -> Self {
      Self { buckets: HashMap::new(), len: 0 }
   }

   /// Number of distinct priorities currently holding items.
   #[inline]
   pub fn bucket_count(&self) -> usize {
      self.buckets.len()
   }

   #[inline]
   fn max_key(&self) -> Option<P> {
      self.buckets.keys().max().copied()
   }
}

impl<T, P: Priority> Default for BucketQueue<T, P> {
   fn default() -> Self {
      Self::new()
   }
}

impl<T, P: Priority> PriorityQueue<T> for BucketQueue<T, P> {
   type Priority = P;
   const FIFO_STABLE: bool = true;

   #[inline]
   fn enqueue(&mut self, item: T, priority: P) {
      self.buckets.entry(priority).or_default().push_back(item);
      self.len += 1;
   }

   fn dequeue(&mut self) -> Option<T> {
      let key = self.max_key()?;
      let bucket = self.buckets.get_mut(&key)?;
      let item = bucket.pop_front()?;
      if bucket.is_empty() {
         self.buckets.remove(&key);
      }
      self.len -= 1;
      Some(item)
   }

   #[inline]
   fn peek_priority(&self) -> Option<P> {
      self.max_key()
   }

   #[inline]
   fn len(&self) -> usize {
      self.len
   }
}
