use super::validation::EditError;
use super::value_objects::{ObjectiveSense, Relation};

/// Decision variable in a linear program.
///
/// Variables are non-negative by default; an absent upper bound means the
/// variable is unbounded above.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower_bound: 0.0,
            upper_bound: None,
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: Option<f64>) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }
}

/// One `coefficient * variable` term of the objective function
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveTerm {
    pub variable: String,
    pub coefficient: f64,
}

impl ObjectiveTerm {
    pub fn new(variable: impl Into<String>, coefficient: f64) -> Self {
        Self {
            variable: variable.into(),
            coefficient,
        }
    }
}

/// One `coefficient * variable` term on the left-hand side of a constraint
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintTerm {
    pub variable: String,
    pub coefficient: f64,
}

impl ConstraintTerm {
    pub fn new(variable: impl Into<String>, coefficient: f64) -> Self {
        Self {
            variable: variable.into(),
            coefficient,
        }
    }
}

/// Linear constraint: `expression relation rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub expression: Vec<ConstraintTerm>,
    pub relation: Relation,
    pub rhs: f64,
}

impl Constraint {
    pub fn new(relation: Relation, rhs: f64) -> Self {
        Self {
            expression: Vec::new(),
            relation,
            rhs,
        }
    }

    pub fn with_term(mut self, variable: impl Into<String>, coefficient: f64) -> Self {
        self.expression.push(ConstraintTerm::new(variable, coefficient));
        self
    }
}

/// A linear programming problem under interactive construction.
///
/// Every edit operation returns a fresh snapshot and leaves the receiver
/// untouched, so the UI layer can treat each edit as a discrete, replayable
/// state transition. Nothing is validated while editing; transient states
/// such as a dangling term reference are allowed until [`validate`] runs at
/// submission time.
///
/// [`validate`]: Problem::validate
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub variables: Vec<Variable>,
    pub sense: ObjectiveSense,
    pub objective: Vec<ObjectiveTerm>,
    pub constraints: Vec<Constraint>,
}

impl Default for Problem {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem {
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            sense: ObjectiveSense::Maximize,
            objective: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn add_variable(&self, variable: Variable) -> Problem {
        let mut next = self.clone();
        next.variables.push(variable);
        next
    }

    pub fn rename_variable(
        &self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<Problem, EditError> {
        let mut next = self.clone();
        let var = next
            .variables
            .get_mut(index)
            .ok_or(EditError::VariableIndex(index))?;
        var.name = name.into();
        Ok(next)
    }

    pub fn update_bounds(
        &self,
        index: usize,
        lower: f64,
        upper: Option<f64>,
    ) -> Result<Problem, EditError> {
        let mut next = self.clone();
        let var = next
            .variables
            .get_mut(index)
            .ok_or(EditError::VariableIndex(index))?;
        var.lower_bound = lower;
        var.upper_bound = upper;
        Ok(next)
    }

    pub fn set_objective_sense(&self, sense: ObjectiveSense) -> Problem {
        let mut next = self.clone();
        next.sense = sense;
        next
    }

    pub fn add_objective_term(&self, term: ObjectiveTerm) -> Problem {
        let mut next = self.clone();
        next.objective.push(term);
        next
    }

    pub fn update_objective_term(
        &self,
        index: usize,
        term: ObjectiveTerm,
    ) -> Result<Problem, EditError> {
        let mut next = self.clone();
        let slot = next
            .objective
            .get_mut(index)
            .ok_or(EditError::ObjectiveTermIndex(index))?;
        *slot = term;
        Ok(next)
    }

    pub fn add_constraint(&self, constraint: Constraint) -> Problem {
        let mut next = self.clone();
        next.constraints.push(constraint);
        next
    }

    pub fn add_constraint_term(
        &self,
        constraint: usize,
        term: ConstraintTerm,
    ) -> Result<Problem, EditError> {
        let mut next = self.clone();
        next.constraints
            .get_mut(constraint)
            .ok_or(EditError::ConstraintIndex(constraint))?
            .expression
            .push(term);
        Ok(next)
    }

    pub fn update_constraint_term(
        &self,
        constraint: usize,
        term_index: usize,
        term: ConstraintTerm,
    ) -> Result<Problem, EditError> {
        let mut next = self.clone();
        let expr = &mut next
            .constraints
            .get_mut(constraint)
            .ok_or(EditError::ConstraintIndex(constraint))?
            .expression;
        let slot = expr.get_mut(term_index).ok_or(EditError::ConstraintTermIndex {
            constraint,
            term: term_index,
        })?;
        *slot = term;
        Ok(next)
    }

    pub fn set_constraint_relation(
        &self,
        index: usize,
        relation: Relation,
    ) -> Result<Problem, EditError> {
        let mut next = self.clone();
        next.constraints
            .get_mut(index)
            .ok_or(EditError::ConstraintIndex(index))?
            .relation = relation;
        Ok(next)
    }

    pub fn set_constraint_rhs(&self, index: usize, rhs: f64) -> Result<Problem, EditError> {
        let mut next = self.clone();
        next.constraints
            .get_mut(index)
            .ok_or(EditError::ConstraintIndex(index))?
            .rhs = rhs;
        Ok(next)
    }
}
