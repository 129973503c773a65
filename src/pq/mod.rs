mod bucket;
mod heap;
mod ordered_bucket;
mod scan;
mod sorted;
mod stable_heap;

pub use bucket::BucketQueue;
pub use heap::HeapQueue;
pub use ordered_bucket::OrderedBucketQueue;
pub use scan::ScanVecQueue;
pub use sorted::SortedVecQueue;
pub use stable_heap::StableHeapQueue;

// Bulk insert through the queue's own `enqueue`, so collected queues keep the
// same ordering guarantees as hand-filled ones.
macro_rules! impl_collect {
   ($($q:ident),* $(,)?) => {
      $(
         impl<T, P: crate::Priority> Extend<(T, P)> for $q<T, P> {
            fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
               for (item, priority) in iter {
                  crate::PriorityQueue::enqueue(self, item, priority);
               }
            }
         }

         impl<T, P: crate::Priority> FromIterator<(T, P)> for $q<T, P> {
            fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
               let mut q = Self::new();
               q.extend(iter);
               q
            }
         }
      )*
   };
}

impl_collect!(
   BucketQueue,
   OrderedBucketQueue,
   HeapQueue,
   StableHeapQueue,
   SortedVecQueue,
   ScanVecQueue,
);
