//! Sequencing rules for the shared first-stage resource.
//!
//! # Score Convention
//! Lower score = processed earlier. Equal scores keep input order.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ex. 4.6

use std::fmt::Debug;

use crate::models::Job;

/// Rule that orders jobs for the exclusive first stage.
pub trait SequencingRule: Send + Sync + Debug {
    /// Rule name (e.g., "LTF").
    fn name(&self) -> &'static str;

    /// Sort key for `job`. Lower = earlier.
    fn evaluate(&self, job: &Job) -> i64;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Longest Tail First.
///
/// Orders jobs by descending stage 2 + stage 3 duration. An exchange
/// argument shows this minimizes the makespan when only the first stage
/// is contended: swapping an adjacent pair out of this order never
/// lowers the later of their two completions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestTail;

impl SequencingRule for LongestTail {
    fn name(&self) -> &'static str {
        "LTF"
    }

    fn evaluate(&self, job: &Job) -> i64 {
        -job.tail()
    }

    fn description(&self) -> &'static str {
        "Longest Tail First"
    }
}

/// Keeps jobs in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl SequencingRule for InputOrder {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, _job: &Job) -> i64 {
        0
    }

    fn description(&self) -> &'static str {
        "Input order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_tail_scores() {
        let long = Job::new(1, 1, 10, 10);
        let short = Job::new(2, 1, 1, 1);
        assert!(LongestTail.evaluate(&long) < LongestTail.evaluate(&short));
        assert_eq!(LongestTail.name(), "LTF");
        assert_eq!(LongestTail.description(), "Longest Tail First");
    }

    #[test]
    fn test_input_order_is_flat() {
        let a = Job::new(1, 5, 5, 5);
        let b = Job::new(2, 1, 1, 1);
        assert_eq!(InputOrder.evaluate(&a), InputOrder.evaluate(&b));
    }
}
