// Submission-time validation for the problem model.
//
// Editing never validates; a half-typed problem is a legal snapshot. The
// rules below run once, when a snapshot is about to be serialized into a
// solve request.

use std::collections::HashSet;

use super::models::Problem;

/// Failure of a snapshot edit operation (an index the UI supplied does not
/// exist in this snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("no variable at index {0}")]
    VariableIndex(usize),

    #[error("no objective term at index {0}")]
    ObjectiveTermIndex(usize),

    #[error("no constraint at index {0}")]
    ConstraintIndex(usize),

    #[error("no term at index {term} in constraint {constraint}")]
    ConstraintTermIndex { constraint: usize, term: usize },
}

/// Why a problem snapshot cannot be submitted to the solver service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("the problem has no decision variables")]
    EmptyVariableSet,

    #[error("a variable has an empty name")]
    EmptyVariableName,

    #[error("duplicate variable name '{0}'")]
    DuplicateVariableName(String),

    #[error("term references unknown variable '{0}'")]
    UnknownVariableReference(String),

    #[error("variable '{name}' has lower bound {lower} greater than upper bound {upper}")]
    InvalidBounds {
        name: String,
        lower: f64,
        upper: f64,
    },

    #[error("{0} holds a non-finite value")]
    NonFiniteValue(String),
}

impl Problem {
    /// Check every submission invariant on this snapshot.
    ///
    /// Returns the first violation found: an empty variable set, a duplicate
    /// variable name, a term referencing an unknown variable, crossed bounds,
    /// or a non-finite number anywhere a number appears. A snapshot that
    /// passes is safe to serialize; no NaN can reach the wire payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.variables.is_empty() {
            return Err(ValidationError::EmptyVariableSet);
        }

        let mut names: HashSet<&str> = HashSet::with_capacity(self.num_variables());
        for var in &self.variables {
            if var.name.is_empty() {
                return Err(ValidationError::EmptyVariableName);
            }
            if !names.insert(var.name.as_str()) {
                return Err(ValidationError::DuplicateVariableName(var.name.clone()));
            }
        }

        for var in &self.variables {
            if !var.lower_bound.is_finite() {
                return Err(ValidationError::NonFiniteValue(format!(
                    "lower bound of variable '{}'",
                    var.name
                )));
            }
            if let Some(upper) = var.upper_bound {
                if !upper.is_finite() {
                    return Err(ValidationError::NonFiniteValue(format!(
                        "upper bound of variable '{}'",
                        var.name
                    )));
                }
                if var.lower_bound > upper {
                    return Err(ValidationError::InvalidBounds {
                        name: var.name.clone(),
                        lower: var.lower_bound,
                        upper,
                    });
                }
            }
        }

        for term in &self.objective {
            if !names.contains(term.variable.as_str()) {
                return Err(ValidationError::UnknownVariableReference(
                    term.variable.clone(),
                ));
            }
            if !term.coefficient.is_finite() {
                return Err(ValidationError::NonFiniteValue(format!(
                    "objective coefficient of '{}'",
                    term.variable
                )));
            }
        }

        for (i, constraint) in self.constraints.iter().enumerate() {
            for term in &constraint.expression {
                if !names.contains(term.variable.as_str()) {
                    return Err(ValidationError::UnknownVariableReference(
                        term.variable.clone(),
                    ));
                }
                if !term.coefficient.is_finite() {
                    return Err(ValidationError::NonFiniteValue(format!(
                        "coefficient of '{}' in constraint {}",
                        term.variable, i
                    )));
                }
            }
            if !constraint.rhs.is_finite() {
                return Err(ValidationError::NonFiniteValue(format!(
                    "right-hand side of constraint {}",
                    i
                )));
            }
        }

        Ok(())
    }
}
