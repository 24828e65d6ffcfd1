// Domain value objects representing core business concepts

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveSense {
    /// Maximize the objective function
    Maximize,
    /// Minimize the objective function
    Minimize,
}

impl fmt::Display for ObjectiveSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectiveSense::Maximize => write!(f, "maximize"),
            ObjectiveSense::Minimize => write!(f, "minimize"),
        }
    }
}

/// Comparison operator binding a constraint expression to its right-hand side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    /// Less than or equal (≤)
    #[serde(rename = "LE")]
    Le,
    /// Greater than or equal (≥)
    #[serde(rename = "GE")]
    Ge,
    /// Equal (=)
    #[serde(rename = "EQ")]
    Eq,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Le => write!(f, "≤"),
            Relation::Ge => write!(f, "≥"),
            Relation::Eq => write!(f, "="),
        }
    }
}

/// Solution status as reported by the solver service.
///
/// The status vocabulary belongs to the service; the client stores the raw
/// string and echoes it to the user. Only the `optimal` classification has
/// local meaning: it decides whether the objective value and the variable
/// assignment are meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolveStatus(String);

impl SolveStatus {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_optimal(&self) -> bool {
        self.0.eq_ignore_ascii_case("optimal")
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SolveStatus {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A 2D point, carried on the wire as a `[x, y]` array
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Typed boundary for raw numeric form input.
///
/// Form widgets hand the model raw strings. Parsing happens once, here, and
/// the outcome is explicit: a finite value, an intentionally empty field, or
/// garbage. NaN and infinities count as garbage so they can never enter a
/// problem snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput {
    /// A finite numeric value
    Value(f64),
    /// The field was left empty
    Empty,
    /// The field held text that does not parse to a finite number
    Invalid,
}

impl NumericInput {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return NumericInput::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => NumericInput::Value(v),
            _ => NumericInput::Invalid,
        }
    }

    /// Resolve against a required field: empty falls back to the default,
    /// garbage keeps the value the field last held.
    pub fn resolve(self, previous: f64, default: f64) -> f64 {
        match self {
            NumericInput::Value(v) => v,
            NumericInput::Empty => default,
            NumericInput::Invalid => previous,
        }
    }

    /// Resolve against an optional field where empty means "unset"
    /// (an unbounded variable, for example).
    pub fn resolve_optional(self, previous: Option<f64>) -> Option<f64> {
        match self {
            NumericInput::Value(v) => Some(v),
            NumericInput::Empty => None,
            NumericInput::Invalid => previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sense_serializes_to_lowercase_tokens() {
        assert_eq!(
            serde_json::to_string(&ObjectiveSense::Maximize).unwrap(),
            "\"maximize\""
        );
        assert_eq!(
            serde_json::to_string(&ObjectiveSense::Minimize).unwrap(),
            "\"minimize\""
        );
    }

    #[test]
    fn relation_uses_wire_tokens() {
        assert_eq!(serde_json::to_string(&Relation::Le).unwrap(), "\"LE\"");
        assert_eq!(serde_json::to_string(&Relation::Ge).unwrap(), "\"GE\"");
        assert_eq!(serde_json::to_string(&Relation::Eq).unwrap(), "\"EQ\"");
        assert_eq!(
            serde_json::from_str::<Relation>("\"GE\"").unwrap(),
            Relation::Ge
        );
    }

    #[test]
    fn point_round_trips_as_array() {
        let p: Point = serde_json::from_str("[2.0, 3.5]").unwrap();
        assert_eq!(p, Point::new(2.0, 3.5));
        assert_eq!(serde_json::to_string(&p).unwrap(), "[2.0,3.5]");
    }

    #[test]
    fn status_classifies_optimal_case_insensitively() {
        assert!(SolveStatus::new("optimal").is_optimal());
        assert!(SolveStatus::new("Optimal").is_optimal());
        assert!(!SolveStatus::new("infeasible").is_optimal());
        assert_eq!(SolveStatus::new("1").to_string(), "1");
    }

    #[test]
    fn numeric_input_parses_finite_values_only() {
        assert_eq!(NumericInput::parse("3.5"), NumericInput::Value(3.5));
        assert_eq!(NumericInput::parse(" -2 "), NumericInput::Value(-2.0));
        assert_eq!(NumericInput::parse(""), NumericInput::Empty);
        assert_eq!(NumericInput::parse("abc"), NumericInput::Invalid);
        assert_eq!(NumericInput::parse("NaN"), NumericInput::Invalid);
        assert_eq!(NumericInput::parse("inf"), NumericInput::Invalid);
    }

    #[test]
    fn invalid_input_keeps_the_previous_value() {
        assert_eq!(NumericInput::parse("x").resolve(4.0, 0.0), 4.0);
        assert_eq!(NumericInput::parse("").resolve(4.0, 0.0), 0.0);
        assert_eq!(NumericInput::parse("7").resolve(4.0, 0.0), 7.0);
        assert_eq!(
            NumericInput::parse("x").resolve_optional(Some(9.0)),
            Some(9.0)
        );
        assert_eq!(NumericInput::parse("").resolve_optional(Some(9.0)), None);
    }
}
