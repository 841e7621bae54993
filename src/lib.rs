//! Maximum flow and two-stage completion scheduling.
//!
//! Two independent solvers sharing one validation and error layer:
//!
//! - **`flow`**: Edmonds-Karp maximum flow on a dense capacity matrix,
//!   with per-edge flow decomposition and the certifying minimum cut
//! - **`scheduler`**: greedy first-stage sequencing that minimizes the
//!   makespan when only the first of three stages is contended
//!
//! # Modules
//!
//! - **`models`**: Domain types: `FlowNetwork`, `Job`, `StageSchedule`
//! - **`validation`**: Input integrity checks (matrix shape, negative values,
//!   self-loops, terminal indices, duplicate job IDs)
//! - **`error`**: `Error::InvalidGraph` / `Error::InvalidInput`
//! - **`samples`**: Small fixed instances for demos and regression tests
//!
//! Both solvers are pure: each call owns its working state, so independent
//! inputs can be solved in parallel without coordination.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 26
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod flow;
pub mod models;
pub mod samples;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
