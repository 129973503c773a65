// Benchmark workloads
//
// Random (value, priority) streams and a two-phase driver: bulk insert, then
// bulk drain, each timed separately. The queues never depend on this module.

use crate::error::ConfigError;
use crate::{
   BucketQueue, HeapQueue, OrderedBucketQueue, PriorityQueue, ScanVecQueue, SortedVecQueue,
   StableHeapQueue,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::{fmt, str::FromStr, time::Duration, time::Instant};
use tracing::{debug, warn};

/// Items pushed by the console benchmark.
pub const DEFAULT_ITEMS: usize = 10_000_000;
pub const DEFAULT_MIN_PRIORITY: u32 = 1;
pub const DEFAULT_MAX_PRIORITY: u32 = 9;
pub const DEFAULT_SEED: u64 = 0x5eed_cafe;

/// Smoke-test input as (value, priority): three at priority 1, then 5, then 9.
pub const SAMPLE_SCENARIO: [(u32, u32); 5] = [(1, 1), (2, 1), (3, 1), (4, 5), (5, 9)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadConfig {
   pub items: usize,
   pub min_priority: u32,
   pub max_priority: u32,
   pub seed: u64,
}

impl Default for WorkloadConfig {
   fn default() -> Self {
      Self {
         items: DEFAULT_ITEMS,
         min_priority: DEFAULT_MIN_PRIORITY,
         max_priority: DEFAULT_MAX_PRIORITY,
         seed: DEFAULT_SEED,
      }
   }
}

impl WorkloadConfig {
   pub fn validate(&self) -> Result<(), ConfigError> {
      if self.items == 0 {
         return Err(ConfigError::NoItems);
      }
      if self.min_priority > self.max_priority {
         return Err(ConfigError::EmptyPriorityRange {
            min: self.min_priority,
            max: self.max_priority,
         });
      }
      Ok(())
   }
}

/// Pre-generated input, so generation cost stays outside the timed phases.
#[derive(Debug, Clone)]
pub struct Workload {
   pairs: Vec<(f64, u32)>,
}

impl Workload {
   pub fn generate(cfg: &WorkloadConfig) -> Result<Self, ConfigError> {
      cfg.validate()?;
      let mut rng = SmallRng::seed_from_u64(cfg.seed);
      let range = cfg.items as f64;
      let pairs = (0..cfg.items)
         .map(|_| {
            let value = rng.random::<f64>() * range;
            let priority = rng.random_range(cfg.min_priority..=cfg.max_priority);
            (value, priority)
         })
         .collect();
      debug!(items = cfg.items, seed = cfg.seed, "generated workload");
      Ok(Self { pairs })
   }

   #[inline]
   pub fn pairs(&self) -> &[(f64, u32)] {
      &self.pairs
   }

   #[inline]
   pub fn len(&self) -> usize {
      self.pairs.len()
   }

   #[inline]
   pub fn is_empty(&self) -> bool {
      self.pairs.is_empty()
   }
}

/*──────────────────────────────────────────────────────────────────────────*/
/*  Driver                                                                  */
/*──────────────────────────────────────────────────────────────────────────*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseReport {
   pub enqueued: usize,
   pub dequeued: usize,
   pub enqueue_time: Duration,
   pub dequeue_time: Duration,
}

impl PhaseReport {
   /// Every inserted item came back out.
   #[inline]
   pub fn is_complete(&self) -> bool {
      self.enqueued == self.dequeued
   }
}

/// Insert the whole workload into `queue`, then drain it.
pub fn run_workload<Q>(queue: &mut Q, workload: &Workload) -> PhaseReport
where
   Q: PriorityQueue<f64, Priority = u32>,
{
   let start = Instant::now();
   for &(value, priority) in workload.pairs() {
      queue.enqueue(value, priority);
   }
   let enqueue_time = start.elapsed();
   let enqueued = queue.len();
   debug!(enqueued, ?enqueue_time, "enqueue phase done");

   let start = Instant::now();
   let mut dequeued = 0usize;
   while queue.dequeue().is_some() {
      dequeued += 1;
   }
   let dequeue_time = start.elapsed();
   debug!(dequeued, ?dequeue_time, "dequeue phase done");

   let report = PhaseReport { enqueued, dequeued, enqueue_time, dequeue_time };
   if !report.is_complete() {
      warn!(enqueued, dequeued, "drain count does not match insert count");
   }
   report
}

/// Enqueue [`SAMPLE_SCENARIO`] and return the drain order.
pub fn sample_scenario<Q>(queue: &mut Q) -> Vec<u32>
where
   Q: PriorityQueue<u32, Priority = u32>,
{
   for (value, priority) in SAMPLE_SCENARIO {
      queue.enqueue(value, priority);
   }
   queue.drain().collect()
}

/*──────────────────────────────────────────────────────────────────────────*/
/*  Design selection                                                        */
/*──────────────────────────────────────────────────────────────────────────*/

/// Every queue design the harness can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Design {
   Bucket,
   OrderedBucket,
   Heap,
   StableHeap,
   Sorted,
   Scan,
}

impl Design {
   pub const ALL: [Design; 6] = [
      Design::Bucket,
      Design::OrderedBucket,
      Design::Heap,
      Design::StableHeap,
      Design::Sorted,
      Design::Scan,
   ];

   pub fn name(self) -> &'static str {
      match self {
         Design::Bucket => "bucket",
         Design::OrderedBucket => "ordered-bucket",
         Design::Heap => "heap",
         Design::StableHeap => "stable-heap",
         Design::Sorted => "sorted",
         Design::Scan => "scan",
      }
   }

   pub fn fifo_stable(self) -> bool {
      match self {
         Design::Bucket => <BucketQueue<u32> as PriorityQueue<u32>>::FIFO_STABLE,
         Design::OrderedBucket => <OrderedBucketQueue<u32> as PriorityQueue<u32>>::FIFO_STABLE,
         Design::Heap => <HeapQueue<u32> as PriorityQueue<u32>>::FIFO_STABLE,
         Design::StableHeap => <StableHeapQueue<u32> as PriorityQueue<u32>>::FIFO_STABLE,
         Design::Sorted => <SortedVecQueue<u32> as PriorityQueue<u32>>::FIFO_STABLE,
         Design::Scan => <ScanVecQueue<u32> as PriorityQueue<u32>>::FIFO_STABLE,
      }
   }

   /// Drive a fresh queue of this design through `workload`.
   pub fn run(self, workload: &Workload) -> PhaseReport {
      match self {
         Design::Bucket => run_workload(&mut BucketQueue::<f64, u32>::new(), workload),
         Design::OrderedBucket => run_workload(&mut OrderedBucketQueue::<f64, u32>::new(), workload),
         Design::Heap => run_workload(&mut HeapQueue::<f64, u32>::with_capacity(workload.len()), workload),
         Design::StableHeap => {
            run_workload(&mut StableHeapQueue::<f64, u32>::with_capacity(workload.len()), workload)
         }
         Design::Sorted => {
            run_workload(&mut SortedVecQueue::<f64, u32>::with_capacity(workload.len()), workload)
         }
         Design::Scan => run_workload(&mut ScanVecQueue::<f64, u32>::with_capacity(workload.len()), workload),
      }
   }

   /// Run [`SAMPLE_SCENARIO`] through a fresh queue of this design.
   pub fn sample(self) -> Vec<u32> {
      match self {
         Design::Bucket => sample_scenario(&mut BucketQueue::<u32, u32>::new()),
         Design::OrderedBucket => sample_scenario(&mut OrderedBucketQueue::<u32, u32>::new()),
         Design::Heap => sample_scenario(&mut HeapQueue::<u32, u32>::new()),
         Design::StableHeap => sample_scenario(&mut StableHeapQueue::<u32, u32>::new()),
         Design::Sorted => sample_scenario(&mut SortedVecQueue::<u32, u32>::new()),
         Design::Scan => sample_scenario(&mut ScanVecQueue::<u32, u32>::new()),
      }
   }
}

impl fmt::Display for Design {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.name())
   }
}

impl FromStr for Design {
   type Err = ConfigError;

   fn from_str(s: &str) -> Result<Self, Self::Err> {
      Design::ALL
         .into_iter()
         .find(|d| d.name().eq_ignore_ascii_case(s))
         .ok_or_else(|| ConfigError::UnknownDesign(s.to_owned()))
   }
}
