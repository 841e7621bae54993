//! Greedy completion-time scheduler.
//!
//! # Algorithm
//!
//! 1. Sort jobs by the sequencing rule (stable: ties keep input order).
//! 2. Run first stages back to back on the shared resource.
//! 3. Each job completes at its first-stage end plus stage 2 + stage 3.
//! 4. The makespan is the latest completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the scan.

use std::sync::Arc;

use log::{info, warn};

use super::{LongestTail, SequencingRule};
use crate::error::{Error, Result};
use crate::models::{Job, JobCompletion, StageSchedule};
use crate::validation::validate_jobs;

/// Sequences jobs on the shared first stage and times their completion.
///
/// # Example
///
/// ```
/// use u_flowsched::models::Job;
/// use u_flowsched::scheduler::CompletionScheduler;
///
/// let jobs = vec![Job::new(1, 3, 1, 1), Job::new(2, 2, 6, 0)];
/// let schedule = CompletionScheduler::new().schedule(&jobs).unwrap();
///
/// // Job 2 has the longer tail and goes first: 2 + 6, then 5 + 2.
/// assert_eq!(schedule.sequence(), vec![2, 1]);
/// assert_eq!(schedule.makespan(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct CompletionScheduler {
    rule: Arc<dyn SequencingRule>,
}

impl CompletionScheduler {
    /// Creates a scheduler using [`LongestTail`].
    pub fn new() -> Self {
        Self {
            rule: Arc::new(LongestTail),
        }
    }

    /// Replaces the sequencing rule.
    pub fn with_rule<R: SequencingRule + 'static>(mut self, rule: R) -> Self {
        self.rule = Arc::new(rule);
        self
    }

    /// Name of the active sequencing rule.
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Builds the stage schedule for `jobs`.
    ///
    /// Fails with [`Error::InvalidInput`] if any duration is negative or the
    /// schedule's horizon would exceed `i64::MAX`. Repeated job IDs are
    /// scheduled like any other jobs.
    pub fn schedule(&self, jobs: &[Job]) -> Result<StageSchedule> {
        if let Err(errors) = validate_jobs(jobs) {
            warn!("rejected job list: {} problem(s)", errors.len());
            return Err(Error::InvalidInput(errors));
        }

        let mut schedule = StageSchedule::new();
        let mut clock = 0i64;
        for idx in self.sort_jobs(jobs) {
            let job = &jobs[idx];
            let stage1_start = clock;
            clock += job.stage1;
            schedule.push(JobCompletion {
                job_id: job.id,
                stage1_start,
                stage1_end: clock,
                completion: clock + job.tail(),
            });
        }

        info!(
            "{} job(s) sequenced by {}; makespan {}",
            schedule.job_count(),
            self.rule.name(),
            schedule.makespan()
        );
        Ok(schedule)
    }

    /// Returns job indices sorted by the rule, ties by input index.
    fn sort_jobs(&self, jobs: &[Job]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by_key(|&i| self.rule.evaluate(&jobs[i]));
        indices
    }
}

impl Default for CompletionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimum total completion time for `jobs` under the longest-tail order.
///
/// # Example
///
/// ```
/// use u_flowsched::models::Job;
/// use u_flowsched::scheduler::shortest_completion;
///
/// let jobs = vec![Job::new(1, 8, 4, 10), Job::new(2, 6, 7, 11)];
/// assert_eq!(shortest_completion(&jobs).unwrap(), 28);
/// ```
pub fn shortest_completion(jobs: &[Job]) -> Result<i64> {
    CompletionScheduler::new()
        .schedule(jobs)
        .map(|s| s.makespan())
}
