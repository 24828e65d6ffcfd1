// Chart adapter: reshape a solve result into named point series.
//
// This is a pure pass-through of whatever 2D points the solver service
// computed. No geometry happens here: no hulls, no polygon edges, no
// sampling. The rendering surface consumes the series as-is.

use crate::domain::{Point, SolveResult};

pub const FEASIBLE_REGION_SERIES: &str = "Feasible Region";
pub const OPTIMAL_SOLUTION_SERIES: &str = "Optimal Solution";

/// A named point cloud for the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSeries {
    pub name: &'static str,
    pub points: Vec<Point>,
}

/// The two series a 2D result chart draws.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub feasible_region: PointSeries,
    pub optimal_solution: PointSeries,
}

impl ChartData {
    pub fn series(&self) -> [&PointSeries; 2] {
        [&self.feasible_region, &self.optimal_solution]
    }
}

/// Derive the chart series for a result, or `None` when there is nothing 2D
/// to draw (no result yet, or a result for a problem with more than two
/// variables, which carries no plot data).
///
/// Derivation is total recomputation: every new result produces fresh
/// series, so the renderer can key a redraw on the data itself.
pub fn derive_series(result: Option<&SolveResult>) -> Option<ChartData> {
    let result = result?;
    if !result.has_plot_data() {
        return None;
    }

    Some(ChartData {
        feasible_region: PointSeries {
            name: FEASIBLE_REGION_SERIES,
            points: result.feasible_region.clone().unwrap_or_default(),
        },
        optimal_solution: PointSeries {
            name: OPTIMAL_SOLUTION_SERIES,
            points: result.optimal_point.iter().copied().collect(),
        },
    })
}
