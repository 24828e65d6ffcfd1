// Session: the two owned state slots of an editing session.
//
// A session holds the problem being edited and the most recent solve result.
// The problem advances snapshot by snapshot; the result slot is replaced
// wholesale on success and left untouched on failure, so the last good
// result stays visible through any number of failed attempts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::application::mappers::build_request;
use crate::domain::{Problem, SolveResult, ValidationError};
use crate::infrastructure::client::{SolveError, SolverClient};

/// Why a submission produced no new result.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The problem snapshot failed validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request was sent but no usable result came back.
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// The result slot, guarded for real-thread use and stamped with a
/// generation so a slow response from an earlier submission can never
/// overwrite the result of a later one.
#[derive(Debug, Default)]
struct LatestResult {
    generation: AtomicU64,
    slot: Mutex<Option<SolveResult>>,
}

impl LatestResult {
    /// Stamp a new submission. Any response carrying an older stamp is
    /// stale from this point on.
    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn commit_if_current(&self, generation: u64, result: &SolveResult) -> bool {
        // The check and the write must share one critical section: checked
        // outside the guard, an old response could pass the check, lose the
        // CPU while a newer submission commits, and then clobber its result.
        let mut slot = self.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        *slot = Some(result.clone());
        true
    }

    fn snapshot(&self) -> Option<SolveResult> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<SolveResult>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One interactive editing session: the current problem and the current
/// result.
#[derive(Debug, Default)]
pub struct Session {
    problem: Problem,
    latest: LatestResult,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_problem(problem: Problem) -> Self {
        Self {
            problem,
            latest: LatestResult::default(),
        }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Install the next problem snapshot (the outcome of one edit).
    pub fn set_problem(&mut self, snapshot: Problem) {
        self.problem = snapshot;
    }

    /// The most recent successful solve result, if any.
    pub fn result(&self) -> Option<SolveResult> {
        self.latest.snapshot()
    }

    /// Validate, build the wire request, and submit it.
    ///
    /// Validation failures surface before any network traffic. On success
    /// the result slot is replaced, unless a newer submission was started
    /// while this one was in flight, in which case the stale result is
    /// still returned to the caller but not stored. On failure the slot is
    /// untouched.
    pub async fn submit(&self, client: &SolverClient) -> Result<SolveResult, SubmitError> {
        let request = build_request(&self.problem)?;
        let generation = self.latest.begin();

        let result = client.solve(&request).await?;
        if !self.latest.commit_if_current(generation, &result) {
            tracing::debug!(generation, "discarding response superseded by a newer submission");
        }
        Ok(result)
    }
}
