//! Greedy completion-time scheduling on a shared first stage.
//!
//! Every job runs three stages. Only the first stage is contended: one
//! exclusive resource processes first stages one at a time, after which each
//! job finishes its remaining two stages without waiting. The scheduler
//! picks the first-stage order and reports the resulting makespan.
//!
//! # Algorithm
//!
//! `CompletionScheduler` sorts jobs by a `SequencingRule`. The default,
//! `LongestTail`, releases jobs with the most remaining work first, which is
//! optimal for this model.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4 (exchange arguments)

mod completion;
mod rules;

pub use completion::{shortest_completion, CompletionScheduler};
pub use rules::{InputOrder, LongestTail, SequencingRule};
