pub mod error;
pub mod pq;
pub mod priority;
pub mod workload;

pub use error::{ConfigError, PriorityError};
pub use pq::BucketQueue;
pub use pq::HeapQueue;
pub use pq::OrderedBucketQueue;
pub use pq::ScanVecQueue;
pub use pq::SortedVecQueue;
pub use pq::StableHeapQueue;
pub use priority::{FloatPriority, Priority};

/// Common interface for all priority queues.
///
/// Queues are plain owned containers: single-threaded, never blocking, and
/// every operation is total. Callers that share a queue across threads must
/// wrap it in their own lock.
pub trait PriorityQueue<T> {
   type Priority: Priority;

   /// True when items of equal priority come out in the order they went in.
   const FIFO_STABLE: bool;

   fn enqueue(&mut self, item: T, priority: Self::Priority);

   /// `None` when the queue is empty; an empty dequeue leaves the queue untouched.
   fn dequeue(&mut self) -> Option<T>;

   /// Priority of the item the next `dequeue` would return.
   fn peek_priority(&self) -> Option<Self::Priority>;

   /// Number of items held, not the number of distinct priorities.
   fn len(&self) -> usize;

   #[inline]
   fn is_empty(&self) -> bool {
      self.len() == 0
   }

   /// Enqueue at `Priority::DEFAULT` (1).
   #[inline]
   fn enqueue_default(&mut self, item: T) {
      self.enqueue(item, <Self::Priority as Priority>::DEFAULT);
   }

   /// Dequeue everything, highest priority first. Items not pulled from the
   /// iterator stay queued.
   fn drain(&mut self) -> Drain<'_, Self, T>
   where
      Self: Sized,
   {
      Drain { queue: self, _item: std::marker::PhantomData }
   }
}

/// Iterator returned by [`PriorityQueue::drain`].
pub struct Drain<'a, Q: PriorityQueue<T>, T> {
   queue: &'a mut Q,
   _item: std::marker::PhantomData<fn() -> T>,
}

impl<Q: PriorityQueue<T>, T> Iterator for Drain<'_, Q, T> {
   type Item = T;

   #[inline]
   fn next(&mut self) -> Option<T> {
      self.queue.dequeue()
   }

   fn size_hint(&self) -> (usize, Option<usize>) {
      let n = self.queue.len();
      (n, Some(n))
   }
}

impl<Q: PriorityQueue<T>, T> ExactSizeIterator for Drain<'_, Q, T> {}
