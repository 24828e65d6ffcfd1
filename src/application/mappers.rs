// Mappers: convert between the domain model and the solver service's JSON
// wire contract. Wire types live here so the serialization details stay
// isolated from business logic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Constraint, ObjectiveSense, Point, Problem, Relation, SolveResult, SolveStatus,
    ValidationError,
};

/// Variable as the service expects it: `{"name", "low_bound", "up_bound"}`,
/// with `up_bound` null for an unbounded variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireVariable {
    pub name: String,
    pub low_bound: f64,
    pub up_bound: Option<f64>,
}

/// Constraint term as the service expects it: `{"var", "coef"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireTerm {
    #[serde(rename = "var")]
    pub variable: String,
    #[serde(rename = "coef")]
    pub coefficient: f64,
}

/// One constraint of the wire document. The relation travels under the
/// `type` key with tokens `LE`, `GE`, `EQ`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireConstraint {
    pub expression: Vec<WireTerm>,
    #[serde(rename = "type")]
    pub relation: Relation,
    pub value: f64,
}

/// The complete solve request document.
///
/// Objective terms travel as `[name, coefficient]` pairs; everything else is
/// a keyed object. Built only from a validated problem snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub objective_type: ObjectiveSense,
    pub variables: Vec<WireVariable>,
    pub objective_function: Vec<(String, f64)>,
    pub constraints: Vec<WireConstraint>,
}

/// The raw response document. Optional keys may be missing entirely; a
/// service that computed nothing 2D simply omits `feasible_region` and
/// `optimal_point`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub status: String,
    #[serde(default)]
    pub objective_value: Option<f64>,
    #[serde(default)]
    pub variables: IndexMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feasible_region: Option<Vec<Point>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_point: Option<Point>,
}

/// Build the wire request for a problem snapshot.
///
/// Validates first; an invalid snapshot never produces a request. Duplicate
/// terms naming the same variable are combined additively, keeping the
/// position of the first occurrence. Pure and deterministic: the same
/// snapshot always serializes to the same document.
pub fn build_request(problem: &Problem) -> Result<SolveRequest, ValidationError> {
    problem.validate()?;

    let variables = problem
        .variables
        .iter()
        .map(|v| WireVariable {
            name: v.name.clone(),
            low_bound: v.lower_bound,
            up_bound: v.upper_bound,
        })
        .collect();

    let mut objective: IndexMap<&str, f64> = IndexMap::new();
    for term in &problem.objective {
        *objective.entry(term.variable.as_str()).or_insert(0.0) += term.coefficient;
    }
    let objective_function = objective
        .into_iter()
        .map(|(name, coefficient)| (name.to_string(), coefficient))
        .collect();

    let constraints = problem.constraints.iter().map(map_constraint).collect();

    Ok(SolveRequest {
        objective_type: problem.sense,
        variables,
        objective_function,
        constraints,
    })
}

fn map_constraint(constraint: &Constraint) -> WireConstraint {
    let mut combined: IndexMap<&str, f64> = IndexMap::new();
    for term in &constraint.expression {
        *combined.entry(term.variable.as_str()).or_insert(0.0) += term.coefficient;
    }

    WireConstraint {
        expression: combined
            .into_iter()
            .map(|(variable, coefficient)| WireTerm {
                variable: variable.to_string(),
                coefficient,
            })
            .collect(),
        relation: constraint.relation,
        value: constraint.rhs,
    }
}

/// Project a raw response document into the result model.
///
/// Pure coercion and defaulting: absent optional keys stay absent, and for
/// any non-optimal status the objective value and variable assignment are
/// dropped rather than carried as meaningless numbers.
pub fn result_from_response(response: SolveResponse) -> SolveResult {
    let status = SolveStatus::new(response.status);

    let (objective_value, variable_values) = if status.is_optimal() {
        (response.objective_value, response.variables)
    } else {
        (None, IndexMap::new())
    };

    SolveResult {
        status,
        objective_value,
        variable_values,
        feasible_region: response.feasible_region,
        optimal_point: response.optimal_point,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ObjectiveTerm, Variable};
    use approx::assert_relative_eq;
    use serde_json::json;

    fn production_planning() -> Problem {
        Problem::new()
            .add_variable(Variable::new("x1"))
            .add_variable(Variable::new("x2"))
            .add_objective_term(ObjectiveTerm::new("x1", 3.0))
            .add_objective_term(ObjectiveTerm::new("x2", 2.0))
            .add_constraint(
                Constraint::new(Relation::Le, 4.0)
                    .with_term("x1", 1.0)
                    .with_term("x2", 1.0),
            )
    }

    #[test]
    fn builds_the_documented_request_shape() {
        let request = build_request(&production_planning()).unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "objective_type": "maximize",
                "variables": [
                    { "name": "x1", "low_bound": 0.0, "up_bound": null },
                    { "name": "x2", "low_bound": 0.0, "up_bound": null },
                ],
                "objective_function": [["x1", 3.0], ["x2", 2.0]],
                "constraints": [
                    {
                        "expression": [
                            { "var": "x1", "coef": 1.0 },
                            { "var": "x2", "coef": 1.0 },
                        ],
                        "type": "LE",
                        "value": 4.0,
                    }
                ],
            })
        );
    }

    #[test]
    fn request_building_is_deterministic() {
        let problem = production_planning();
        let first = serde_json::to_string(&build_request(&problem).unwrap()).unwrap();
        let second = serde_json::to_string(&build_request(&problem).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_emitted_name_matches_a_known_variable() {
        let request = build_request(&production_planning()).unwrap();
        let known: Vec<&str> = request.variables.iter().map(|v| v.name.as_str()).collect();

        for (name, _) in &request.objective_function {
            assert!(known.contains(&name.as_str()));
        }
        for constraint in &request.constraints {
            for term in &constraint.expression {
                assert!(known.contains(&term.variable.as_str()));
            }
        }
    }

    #[test]
    fn duplicate_terms_combine_additively() {
        let problem = production_planning()
            .add_objective_term(ObjectiveTerm::new("x1", 2.5))
            .add_constraint(
                Constraint::new(Relation::Ge, 1.0)
                    .with_term("x2", 1.0)
                    .with_term("x2", 0.5),
            );
        let request = build_request(&problem).unwrap();

        assert_eq!(request.objective_function[0].0, "x1");
        assert_relative_eq!(request.objective_function[0].1, 5.5);
        assert_eq!(request.constraints[1].expression.len(), 1);
        assert_relative_eq!(request.constraints[1].expression[0].coefficient, 1.5);
    }

    #[test]
    fn invalid_problems_never_become_requests() {
        let dangling = production_planning().add_objective_term(ObjectiveTerm::new("zz", 1.0));
        assert_eq!(
            build_request(&dangling),
            Err(ValidationError::UnknownVariableReference("zz".into()))
        );

        assert_eq!(
            build_request(&Problem::new()),
            Err(ValidationError::EmptyVariableSet)
        );
    }

    #[test]
    fn bounded_variables_serialize_their_upper_bound() {
        let problem = production_planning().update_bounds(0, 1.0, Some(8.0)).unwrap();
        let request = build_request(&problem).unwrap();
        assert_eq!(request.variables[0].low_bound, 1.0);
        assert_eq!(request.variables[0].up_bound, Some(8.0));
    }

    #[test]
    fn parses_a_full_response_document() {
        let response: SolveResponse = serde_json::from_value(json!({
            "status": "optimal",
            "objective_value": 14.0,
            "variables": { "x1": 4.0, "x2": 0.0 },
            "feasible_region": [[0.0, 0.0], [0.0, 4.0], [4.0, 0.0]],
            "optimal_point": [4.0, 0.0],
        }))
        .unwrap();

        let result = result_from_response(response);
        assert!(result.is_optimal());
        assert_eq!(result.objective_value, Some(14.0));
        assert_eq!(result.variable_values.get("x1"), Some(&4.0));
        assert_eq!(result.feasible_region.as_ref().map(Vec::len), Some(3));
        assert_eq!(result.optimal_point, Some(Point::new(4.0, 0.0)));
    }

    #[test]
    fn missing_plot_keys_stay_absent() {
        let response: SolveResponse = serde_json::from_value(json!({
            "status": "optimal",
            "objective_value": 2.0,
            "variables": { "x1": 2.0 },
        }))
        .unwrap();

        let result = result_from_response(response);
        assert_eq!(result.feasible_region, None);
        assert_eq!(result.optimal_point, None);
        assert!(!result.has_plot_data());
    }

    #[test]
    fn non_optimal_status_drops_numeric_fields() {
        let response: SolveResponse = serde_json::from_value(json!({
            "status": "infeasible",
            "objective_value": 123.0,
            "variables": { "x1": 99.0 },
        }))
        .unwrap();

        let result = result_from_response(response);
        assert_eq!(result.status.as_str(), "infeasible");
        assert_eq!(result.objective_value, None);
        assert!(result.variable_values.is_empty());
    }
}
