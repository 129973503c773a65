use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use prio_queues::workload::{Design, Workload, WorkloadConfig};
use prio_queues::{
   BucketQueue, HeapQueue, OrderedBucketQueue, PriorityQueue, ScanVecQueue, SortedVecQueue,
   StableHeapQueue,
};

// Sort-on-insert and linear-scan queues are quadratic; keep their sizes small.
const FAST_SIZES: [usize; 3] = [10_000, 100_000, 1_000_000];
const SLOW_SIZES: [usize; 2] = [1_000, 10_000];

fn workload(items: usize) -> Workload {
   Workload::generate(&WorkloadConfig { items, ..WorkloadConfig::default() })
      .expect("benchmark workload config is valid")
}

fn sizes(design: Design) -> &'static [usize] {
   match design {
      Design::Sorted | Design::Scan => &SLOW_SIZES,
      _ => &FAST_SIZES,
   }
}

// Insert phase only; the queue is built fresh per batch.
fn bench_enqueue_for<Q>(c: &mut Criterion, design: Design, make: impl Fn() -> Q)
where
   Q: PriorityQueue<f64, Priority = u32>,
{
   let mut group = c.benchmark_group(format!("enqueue/{design}"));
   for &n in sizes(design) {
      let input = workload(n);
      group.throughput(Throughput::Elements(n as u64));
      group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
         b.iter_batched(
            &make,
            |mut q| {
               for &(value, priority) in input.pairs() {
                  q.enqueue(black_box(value), priority);
               }
               q
            },
            BatchSize::LargeInput,
         );
      });
   }
   group.finish();
}

// Drain phase only; filling happens in the untimed setup closure.
fn bench_dequeue_for<Q>(c: &mut Criterion, design: Design, make: impl Fn() -> Q)
where
   Q: PriorityQueue<f64, Priority = u32>,
{
   let mut group = c.benchmark_group(format!("dequeue/{design}"));
   for &n in sizes(design) {
      let input = workload(n);
      group.throughput(Throughput::Elements(n as u64));
      group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
         b.iter_batched(
            || {
               let mut q = make();
               for &(value, priority) in input.pairs() {
                  q.enqueue(value, priority);
               }
               q
            },
            |mut q| {
               while let Some(v) = q.dequeue() {
                  black_box(v);
               }
            },
            BatchSize::LargeInput,
         );
      });
   }
   group.finish();
}

fn bench_enqueue(c: &mut Criterion) {
   bench_enqueue_for(c, Design::Bucket, BucketQueue::<f64, u32>::new);
   bench_enqueue_for(c, Design::OrderedBucket, OrderedBucketQueue::<f64, u32>::new);
   bench_enqueue_for(c, Design::Heap, HeapQueue::<f64, u32>::new);
   bench_enqueue_for(c, Design::StableHeap, StableHeapQueue::<f64, u32>::new);
   bench_enqueue_for(c, Design::Sorted, SortedVecQueue::<f64, u32>::new);
   bench_enqueue_for(c, Design::Scan, ScanVecQueue::<f64, u32>::new);
}

fn bench_dequeue(c: &mut Criterion) {
   bench_dequeue_for(c, Design::Bucket, BucketQueue::<f64, u32>::new);
   bench_dequeue_for(c, Design::OrderedBucket, OrderedBucketQueue::<f64, u32>::new);
   bench_dequeue_for(c, Design::Heap, HeapQueue::<f64, u32>::new);
   bench_dequeue_for(c, Design::StableHeap, StableHeapQueue::<f64, u32>::new);
   bench_dequeue_for(c, Design::Sorted, SortedVecQueue::<f64, u32>::new);
   bench_dequeue_for(c, Design::Scan, ScanVecQueue::<f64, u32>::new);
}

// Full insert-then-drain cycle, the same shape as the console harness.
fn bench_round_trip(c: &mut Criterion) {
   let input = workload(100_000);
   let mut group = c.benchmark_group("round_trip");
   group.throughput(Throughput::Elements(input.len() as u64));
   for design in Design::ALL {
      if matches!(design, Design::Sorted | Design::Scan) {
         continue;
      }
      group.bench_with_input(BenchmarkId::from_parameter(design), &input, |b, input| {
         b.iter(|| black_box(design.run(input)));
      });
   }
   group.finish();
}

// Criterion setup
fn custom_criterion() -> Criterion {
   Criterion::default()
      .warm_up_time(Duration::from_secs(3))
      .measurement_time(Duration::from_secs(10))
      .sample_size(20)
}

criterion_group! {
   name = benches;
   config = custom_criterion();
   targets =
      bench_enqueue,
      bench_dequeue,
      bench_round_trip
}
criterion_main!(benches);
