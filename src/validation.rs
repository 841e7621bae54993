//! Input validation for flow networks and job lists.
//!
//! Checks structural integrity of inputs before any algorithm runs.
//! Detects:
//! - Non-square capacity matrices
//! - Negative capacities and durations
//! - Self-loops with non-zero capacity
//! - Source/sink indices out of range, or identical
//! - Label lists that do not match the vertex count
//! - Capacity or duration totals that do not fit in `i64`
//!
//! Every problem found is reported, not just the first.

use thiserror::Error;

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A capacity matrix row length differs from the row count.
    NonSquareMatrix,
    /// A capacity is below zero.
    NegativeCapacity,
    /// An edge from a vertex to itself carries capacity.
    SelfLoop,
    /// A vertex index is outside `0..vertex_count`.
    VertexOutOfBounds,
    /// Source and sink are the same vertex.
    SourceEqualsSink,
    /// Number of vertex labels differs from the vertex count.
    LabelCountMismatch,
    /// A job stage duration is below zero.
    NegativeDuration,
    /// Total capacity of the network exceeds `i64::MAX`.
    CapacityOverflow,
    /// Sum of first-stage durations plus the longest tail exceeds `i64::MAX`.
    DurationOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a dense capacity matrix.
///
/// Checks:
/// 1. Every row has exactly `rows.len()` entries
/// 2. No capacity is negative
/// 3. Diagonal entries (self-loops) are zero
/// 4. The sum of all capacities fits in `i64`
pub fn validate_capacity_matrix<R: AsRef<[i64]>>(rows: &[R]) -> ValidationResult {
    let mut errors = Vec::new();
    let n = rows.len();
    let mut total = Some(0i64);

    for (u, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != n {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonSquareMatrix,
                format!("Row {u} has {} entries, expected {n}", row.len()),
            ));
        }

        for (v, &cap) in row.iter().enumerate() {
            if cap < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeCapacity,
                    format!("Edge {u} -> {v} has negative capacity {cap}"),
                ));
            } else if u == v && cap != 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfLoop,
                    format!("Vertex {u} has a self-loop with capacity {cap}"),
                ));
            } else {
                total = total.and_then(|t| t.checked_add(cap));
            }
        }
    }

    if total.is_none() {
        errors.push(capacity_overflow());
    }

    finish(errors)
}

/// Checks that a set of non-negative capacities sums to at most `i64::MAX`.
///
/// Every flow value, cut capacity and residual capacity is bounded by this
/// total, so the solver never overflows on a network that passes.
pub fn validate_capacity_total(capacities: impl IntoIterator<Item = i64>) -> ValidationResult {
    let total = capacities
        .into_iter()
        .filter(|&c| c > 0)
        .try_fold(0i64, i64::checked_add);
    match total {
        Some(_) => Ok(()),
        None => Err(vec![capacity_overflow()]),
    }
}

fn capacity_overflow() -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::CapacityOverflow,
        format!("Total capacity exceeds {}", i64::MAX),
    )
}

/// Validates source and sink indices against a vertex count.
pub fn validate_terminals(vertex_count: usize, source: usize, sink: usize) -> ValidationResult {
    let mut errors = Vec::new();

    for (role, index) in [("Source", source), ("Sink", sink)] {
        if index >= vertex_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::VertexOutOfBounds,
                format!("{role} {index} is out of bounds for {vertex_count} vertices"),
            ));
        }
    }

    if source == sink {
        errors.push(ValidationError::new(
            ValidationErrorKind::SourceEqualsSink,
            format!("Source and sink are both vertex {source}"),
        ));
    }

    finish(errors)
}

/// Validates a single edge before it is added to a network.
pub fn validate_edge(
    vertex_count: usize,
    from: usize,
    to: usize,
    capacity: i64,
) -> ValidationResult {
    let mut errors = Vec::new();

    for index in [from, to] {
        if index >= vertex_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::VertexOutOfBounds,
                format!("Vertex {index} is out of bounds for {vertex_count} vertices"),
            ));
        }
    }
    if capacity < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeCapacity,
            format!("Edge {from} -> {to} has negative capacity {capacity}"),
        ));
    }
    if from == to && capacity != 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::SelfLoop,
            format!("Vertex {from} has a self-loop with capacity {capacity}"),
        ));
    }

    finish(errors)
}

/// Validates a vertex label list against a vertex count.
pub fn validate_labels<S: AsRef<str>>(vertex_count: usize, labels: &[S]) -> ValidationResult {
    if labels.len() == vertex_count {
        return Ok(());
    }
    Err(vec![ValidationError::new(
        ValidationErrorKind::LabelCountMismatch,
        format!("Got {} labels for {vertex_count} vertices", labels.len()),
    )])
}

/// Validates a full max-flow input: matrix plus terminals.
///
/// Terminal indices are checked against the row count even when the matrix
/// itself is malformed, so all problems surface in one pass.
pub fn validate_network<R: AsRef<[i64]>>(
    rows: &[R],
    source: usize,
    sink: usize,
) -> ValidationResult {
    let mut errors = Vec::new();
    if let Err(mut e) = validate_capacity_matrix(rows) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_terminals(rows.len(), source, sink) {
        errors.append(&mut e);
    }
    finish(errors)
}

/// Validates a job list for the completion scheduler.
///
/// Checks:
/// 1. No stage duration is negative
/// 2. The sum of first-stage durations plus the longest tail fits in `i64`,
///    which bounds every start, end and completion time
///
/// Job IDs are labels only; repeats are allowed.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    for job in jobs {
        for (stage, duration) in [(1, job.stage1), (2, job.stage2), (3, job.stage3)] {
            if duration < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeDuration,
                    format!("Job {} has negative stage {stage} duration {duration}", job.id),
                ));
            }
        }
    }

    if errors.is_empty() && horizon(jobs).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::DurationOverflow,
            format!("Total duration of {} job(s) exceeds {}", jobs.len(), i64::MAX),
        ));
    }

    finish(errors)
}

/// Upper bound on any completion time, `None` on overflow.
fn horizon(jobs: &[Job]) -> Option<i64> {
    let mut stage1_total = 0i64;
    let mut longest_tail = 0i64;
    for job in jobs {
        stage1_total = stage1_total.checked_add(job.stage1)?;
        longest_tail = longest_tail.max(job.stage2.checked_add(job.stage3)?);
    }
    stage1_total.checked_add(longest_tail)
}
