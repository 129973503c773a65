// Console benchmark: runs the sample scenario, then times a bulk insert and a
// bulk drain for each selected queue design.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use prio_queues::workload::{Design, Workload, WorkloadConfig, SAMPLE_SCENARIO};
use prio_queues::workload::{DEFAULT_ITEMS, DEFAULT_MAX_PRIORITY, DEFAULT_MIN_PRIORITY, DEFAULT_SEED};
use std::time::Instant;
use tracing::{info, warn};

/// Timing harness for the priority queue designs.
#[derive(Parser, Debug)]
#[clap(about = "Priority queue timing harness")]
struct App {
   /// Logging level to use: one of "error", "warn", "info", "debug", "trace"
   #[clap(short, long, default_value = "info")]
   log_level: tracing::Level,

   /// Number of (value, priority) pairs in the bulk phases
   #[clap(short = 'n', long, default_value_t = DEFAULT_ITEMS)]
   items: usize,

   #[clap(long, default_value_t = DEFAULT_MIN_PRIORITY)]
   min_priority: u32,

   #[clap(long, default_value_t = DEFAULT_MAX_PRIORITY)]
   max_priority: u32,

   #[clap(long, default_value_t = DEFAULT_SEED)]
   seed: u64,

   /// Designs to run, comma separated. `sorted` and `scan` are quadratic in
   /// the item count; pair them with a small `--items`.
   #[clap(
      short,
      long = "design",
      value_delimiter = ',',
      default_value = "bucket,ordered-bucket,heap,stable-heap"
   )]
   designs: Vec<Design>,
}

impl App {
   fn workload_config(&self) -> WorkloadConfig {
      WorkloadConfig {
         items: self.items,
         min_priority: self.min_priority,
         max_priority: self.max_priority,
         seed: self.seed,
      }
   }
}

fn main() -> Result<()> {
   let args = App::parse();

   let subscriber = tracing_subscriber::fmt()
      .with_timer(tracing_subscriber::fmt::time::Uptime::from(Instant::now()))
      .with_max_level(args.log_level)
      .finish();
   tracing::subscriber::set_global_default(subscriber)?;

   let cfg = args.workload_config();
   let workload = Workload::generate(&cfg).context("invalid workload parameters")?;
   info!(items = workload.len(), seed = cfg.seed, "workload ready");

   let enqueued: Vec<String> =
      SAMPLE_SCENARIO.iter().map(|(v, p)| format!("{v}:{p}")).collect();
   println!("Priority Enqueued {}", enqueued.join(","));

   let mut incomplete = Vec::new();
   for design in &args.designs {
      let order = design.sample();
      let rendered: Vec<String> = order.iter().map(u32::to_string).collect();
      println!("{design} dequeued: {}", rendered.join(" "));

      let report = design.run(&workload);
      println!("{design} enqueue time: {:.3}ms", report.enqueue_time.as_secs_f64() * 1e3);
      println!("{design} dequeued items: {}", report.dequeued);
      println!("{design} dequeue time: {:.3}ms", report.dequeue_time.as_secs_f64() * 1e3);
      println!("-----");

      if !report.is_complete() {
         warn!(%design, ?report, "queue lost items");
         incomplete.push(design.name());
      }
   }

   ensure!(incomplete.is_empty(), "incomplete drains: {}", incomplete.join(", "));
   Ok(())
}
