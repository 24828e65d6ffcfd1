use indexmap::IndexMap;

use super::value_objects::{Point, SolveStatus};

/// Outcome of one solve, as reported by the solver service.
///
/// A result replaces its predecessor wholesale; it is never merged with or
/// patched onto an earlier one. The numeric fields are `Some` only when the
/// status is optimal — for any other status the service's numbers (if it
/// sent any) are dropped during mapping so stale values are never shown.
///
/// `feasible_region` and `optimal_point` are present only for two-variable
/// problems. `None` means the service did not compute them, which is
/// distinct from an empty point set it did compute.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub status: SolveStatus,
    pub objective_value: Option<f64>,
    pub variable_values: IndexMap<String, f64>,
    pub feasible_region: Option<Vec<Point>>,
    pub optimal_point: Option<Point>,
}

impl SolveResult {
    pub fn is_optimal(&self) -> bool {
        self.status.is_optimal()
    }

    /// Whether the service attached anything a 2D chart could draw.
    pub fn has_plot_data(&self) -> bool {
        self.feasible_region.is_some() || self.optimal_point.is_some()
    }
}
