//! optstudio: client-side core for interactively building linear programs,
//! submitting them to a remote solver service, and shaping the answer for
//! display, including 2D feasible-region chart data for two-variable
//! problems.
//!
//! The solver itself is an external service; this crate only defines the
//! problem model, its validation rules, the JSON contract crossing the wire,
//! and the projections a UI renders.

// Domain layer: problem model, validation, and solve results
pub mod domain;

// Application layer: wire mapping and session orchestration
pub mod application;

// Infrastructure layer: HTTP transport to the solver service
pub mod infrastructure;

// Chart adapter: named point series for the rendering surface
pub mod chart;

// Re-export commonly used types
pub use domain::{
    Constraint, ConstraintTerm, EditError, NumericInput, ObjectiveSense, ObjectiveTerm, Point,
    Problem, Relation, SolveResult, SolveStatus, ValidationError, Variable,
};

pub use application::{build_request, Session, SolveRequest, SubmitError};

pub use infrastructure::{SolveError, SolverClient, DEFAULT_ENDPOINT};

pub use chart::{derive_series, ChartData, PointSeries};
