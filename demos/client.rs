// Example client walking through a complete session against a running
// solver service.
//
// The problem is a small production planning LP:
// A factory produces two products: chairs and tables
// - Each chair yields $30 profit, each table $50
// - Each chair takes 2 hours of labor, each table 3; 100 hours available
// - At most 40 units fit in storage, and the market takes at most 30 tables
//
// Maximize: 30*chairs + 50*tables
// Subject to:
//   2*chairs + 3*tables <= 100  (labor hours)
//   chairs + tables <= 40       (storage)
//   chairs >= 0, 0 <= tables <= 30

use optstudio::{
    derive_series, Constraint, ObjectiveSense, ObjectiveTerm, Problem, Relation, Session,
    SolverClient, SubmitError, Variable, DEFAULT_ENDPOINT,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== Production Planning Problem ===\n");

    // Build the problem one snapshot at a time, the way a form would
    let problem = Problem::new()
        .set_objective_sense(ObjectiveSense::Maximize)
        .add_variable(Variable::new("chairs"))
        .add_variable(Variable::new("tables").with_bounds(0.0, Some(30.0)))
        .add_objective_term(ObjectiveTerm::new("chairs", 30.0))
        .add_objective_term(ObjectiveTerm::new("tables", 50.0))
        .add_constraint(
            Constraint::new(Relation::Le, 100.0)
                .with_term("chairs", 2.0)
                .with_term("tables", 3.0),
        )
        .add_constraint(
            Constraint::new(Relation::Le, 40.0)
                .with_term("chairs", 1.0)
                .with_term("tables", 1.0),
        );

    let session = Session::with_problem(problem);
    let client = SolverClient::new(DEFAULT_ENDPOINT);

    println!("Sending problem to {}...\n", client.endpoint());

    match session.submit(&client).await {
        Ok(result) => {
            println!("=== Solution ===\n");
            println!("Status: {}", result.status);

            if let Some(value) = result.objective_value {
                println!("Maximum profit: ${:.2}", value);
            }
            for (name, value) in &result.variable_values {
                println!("  {}: {:.2} units", name, value);
            }

            if let Some(chart) = derive_series(session.result().as_ref()) {
                for series in chart.series() {
                    println!("\n{} ({} points):", series.name, series.points.len());
                    for point in &series.points {
                        println!("  ({:.2}, {:.2})", point.x, point.y);
                    }
                }
            }
        }
        Err(SubmitError::Validation(err)) => {
            println!("✗ Problem is not submittable: {}", err);
        }
        Err(SubmitError::Solve(err)) => {
            // The last good result (none, on a fresh session) stays put.
            println!("✗ Solve failed: {}", err);
        }
    }

    Ok(())
}
