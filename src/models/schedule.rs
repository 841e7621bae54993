//! Stage schedule (solution) model.
//!
//! A stage schedule records, in processing order, when each job holds the
//! exclusive first-stage resource and when it finishes all three stages.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

/// Timing of one job within a stage schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCompletion {
    /// Job identifier.
    pub job_id: u32,
    /// When the job starts its first stage.
    pub stage1_start: i64,
    /// When the job releases the first-stage resource.
    pub stage1_end: i64,
    /// When the job finishes its last stage.
    pub completion: i64,
}

impl JobCompletion {
    /// Time spent after the first stage.
    #[inline]
    pub fn tail(&self) -> i64 {
        self.completion - self.stage1_end
    }
}

/// A complete processing order with per-job timings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSchedule {
    /// Job timings in processing order.
    pub completions: Vec<JobCompletion>,
}

impl StageSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a job timing.
    pub fn push(&mut self, completion: JobCompletion) {
        self.completions.push(completion);
    }

    /// Makespan: latest completion time, `0` if empty.
    pub fn makespan(&self) -> i64 {
        self.completions
            .iter()
            .map(|c| c.completion)
            .max()
            .unwrap_or(0)
    }

    /// Job IDs in processing order.
    pub fn sequence(&self) -> Vec<u32> {
        self.completions.iter().map(|c| c.job_id).collect()
    }

    /// Timing of a specific job.
    pub fn completion_for(&self, job_id: u32) -> Option<&JobCompletion> {
        self.completions.iter().find(|c| c.job_id == job_id)
    }

    /// The job whose completion defines the makespan (first one on ties).
    pub fn critical_job(&self) -> Option<&JobCompletion> {
        let makespan = self.makespan();
        self.completions.iter().find(|c| c.completion == makespan)
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.completions.len()
    }
}
