pub mod config;
mod runner;
mod types;

pub use config::{ChannelMap, JobConfig};
pub use runner::{process_pair, run_job, run_job_reported};
pub use types::{JobStage, JobSummary, PairOutput, ProgressReporter};
