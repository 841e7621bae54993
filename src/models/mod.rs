//! Domain models.
//!
//! Provides the data types shared by the solvers: the flow network that
//! the max-flow solver consumes, and the job and schedule types of the
//! completion scheduler.
//!
//! # Domain Mappings
//!
//! | u-flowsched | Triathlon | Manufacturing | Logistics |
//! |-------------|-----------|---------------|-----------|
//! | Job | Contestant | Order | Shipment |
//! | Stage 1 | Swim (one lane) | Shared machine | Loading dock |
//! | FlowNetwork | - | Material routing | Road capacities |

mod job;
mod network;
mod schedule;

pub use job::Job;
pub use network::FlowNetwork;
pub use schedule::{JobCompletion, StageSchedule};
