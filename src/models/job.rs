//! Job model for the two-stage completion scheduler.
//!
//! A job has three stage durations. The first stage runs on a single
//! exclusive resource (e.g., the pool in a triathlon); the remaining two
//! stages run without contention once the first stage is done.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

/// A job to be sequenced on the shared first-stage resource.
///
/// Durations are signed so that malformed input can be represented and
/// rejected by [`validate_jobs`](crate::validation::validate_jobs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier.
    pub id: u32,
    /// Duration of the exclusive first stage.
    pub stage1: i64,
    /// Duration of the second stage.
    pub stage2: i64,
    /// Duration of the third stage.
    pub stage3: i64,
}

impl Job {
    /// Creates a job with the given stage durations.
    pub fn new(id: u32, stage1: i64, stage2: i64, stage3: i64) -> Self {
        Self {
            id,
            stage1,
            stage2,
            stage3,
        }
    }

    /// Work remaining after the first stage (stage 2 + stage 3).
    #[inline]
    pub fn tail(&self) -> i64 {
        self.stage2 + self.stage3
    }
}

impl From<(u32, i64, i64, i64)> for Job {
    fn from((id, stage1, stage2, stage3): (u32, i64, i64, i64)) -> Self {
        Self::new(id, stage1, stage2, stage3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail() {
        let job = Job::new(3, 7, 8, 12);
        assert_eq!(job.tail(), 20);
    }

    #[test]
    fn test_from_tuple() {
        let job: Job = (5, 9, 10, 9).into();
        assert_eq!(job, Job::new(5, 9, 10, 9));
    }

    #[test]
    fn test_serde_roundtrip() {
        let job = Job::new(1, 8, 4, 10);
        let json = serde_json::to_string(&job).unwrap();
        assert!(json.contains("\"stage1\":8"));
        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}
