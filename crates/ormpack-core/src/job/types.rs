use std::path::PathBuf;

/// Job processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug)]
pub enum JobStage {
    Scanning,
    Converting,
}

impl std::fmt::Display for JobStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scanning => write!(f, "Scanning inputs"),
            Self::Converting => write!(f, "Converting pairs"),
        }
    }
}

/// Output paths written for one converted pair.
#[derive(Clone, Debug)]
pub struct PairOutput {
    pub prefix: String,
    pub color: PathBuf,
    pub normal: PathBuf,
    pub orm: PathBuf,
}

/// What a finished job produced.
#[derive(Clone, Debug, Default)]
pub struct JobSummary {
    /// Complete pairs discovered in the input folder.
    pub pairs: usize,
    pub outputs: Vec<PairOutput>,
}

/// Thread-safe progress reporting for a conversion job.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new job stage has started. `total_items` is the number of work
    /// items in this stage (here, the pair count), if known.
    fn begin_stage(&self, _stage: JobStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// A human-readable status line (the prefix currently being converted).
    fn status(&self, _message: &str) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_job` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
