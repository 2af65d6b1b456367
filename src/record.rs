//! Registry entry model.
//!
//! A deck's registry maps string keys to [`DeckEntry`] values: ordinary
//! figures, the single problem-definition payload, and auto-numbered
//! interactive design points. Figures serialize with the viewer's
//! underscore-prefixed field names; the two special entry kinds serialize as
//! raw objects under their reserved keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PlotDeckResult;

/// Registry key reserved for the problem-definition payload.
pub const PROBLEM_DEFINITION_KEY: &str = "problem_definition";

/// Key prefix of auto-numbered interactive design points.
pub const DESIGN_POINT_PREFIX: &str = "INTERACTIVE_DESIGN_";

/// Description stored when a figure is added without one.
pub const DEFAULT_DESCRIPTION: &str = "No plot description provided.";

/// One named, storable figure as the viewer expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureRecord {
    /// Window title, also the registry key.
    #[serde(rename = "_title")]
    pub title: String,
    /// Whether the viewer lets the user close this window.
    #[serde(rename = "_closeable")]
    pub closeable: bool,
    /// Human-readable description shown alongside the figure.
    #[serde(rename = "_description")]
    pub description: String,
    /// Combined plot-type string driving the viewer's settings bar.
    #[serde(rename = "_showGraphSettingsBar")]
    pub settings_bar: String,
    /// The renderer's serialized figure document (itself JSON).
    #[serde(rename = "_data")]
    pub data: String,
}

/// One interactive design point with its first-class sequence number.
///
/// The number appears in the registry key (`INTERACTIVE_DESIGN_<n>`), parsed
/// once at load time and formatted back on save.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignPoint {
    /// Position in the deck's auto-numbered sequence.
    pub index: u32,
    /// Caller-supplied design values, stored untouched.
    pub values: Map<String, Value>,
}

impl DesignPoint {
    /// The registry key this point is stored under.
    pub fn key(&self) -> String {
        format!("{DESIGN_POINT_PREFIX}{}", self.index)
    }

    /// Extracts the sequence number from a design-point registry key.
    pub(crate) fn index_from_key(key: &str) -> Option<u32> {
        key.strip_prefix(DESIGN_POINT_PREFIX)?.parse().ok()
    }
}

/// One registry entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DeckEntry {
    /// An ordinary figure record.
    Figure(FigureRecord),
    /// The flat problem-definition payload.
    ProblemDefinition(Map<String, Value>),
    /// An auto-numbered interactive design point.
    DesignPoint(DesignPoint),
}

impl DeckEntry {
    /// The figure record, when this entry is one.
    pub fn as_figure(&self) -> Option<&FigureRecord> {
        match self {
            DeckEntry::Figure(record) => Some(record),
            _ => None,
        }
    }

    /// The problem-definition payload, when this entry is one.
    pub fn as_problem_definition(&self) -> Option<&Map<String, Value>> {
        match self {
            DeckEntry::ProblemDefinition(values) => Some(values),
            _ => None,
        }
    }

    /// The design point, when this entry is one.
    pub fn as_design_point(&self) -> Option<&DesignPoint> {
        match self {
            DeckEntry::DesignPoint(point) => Some(point),
            _ => None,
        }
    }

    /// The entry as it appears in the persisted registry document.
    pub(crate) fn to_value(&self) -> PlotDeckResult<Value> {
        match self {
            DeckEntry::Figure(record) => Ok(serde_json::to_value(record)?),
            DeckEntry::ProblemDefinition(values) => Ok(Value::Object(values.clone())),
            DeckEntry::DesignPoint(point) => Ok(Value::Object(point.values.clone())),
        }
    }
}

/// The objective a deck's problem definition describes.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveSpec {
    /// Objective function name.
    pub name: String,
    /// Extra named constants the objective was configured with.
    pub constants: Map<String, Value>,
}

impl ObjectiveSpec {
    /// Creates an objective with no extra constants.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constants: Map::new(),
        }
    }

    /// Adds one named constant.
    pub fn with_constant(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constants.insert(name.into(), value.into());
        self
    }
}

/// A dynamically-named constraint beyond the fixed geometric set.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomConstraint {
    /// Constraint name.
    pub name: String,
    /// Named parameters the constraint was configured with.
    pub parameters: Map<String, Value>,
}

impl CustomConstraint {
    /// Creates a constraint with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Map::new(),
        }
    }

    /// Adds one named parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

/// Geometric design constraints recorded in the problem definition.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignConstraints {
    /// Minimum edge length.
    pub min_edge_length: f64,
    /// Maximum edge length.
    pub max_edge_length: f64,
    /// Minimum face angle in degrees.
    pub min_face_angle: f64,
    /// Maximum number of scaffold basepairs.
    pub max_scaffold_basepairs: u64,
    /// Any number of additional named constraints.
    pub custom: Vec<CustomConstraint>,
}

impl DesignConstraints {
    /// Creates the fixed geometric constraint set.
    pub fn new(
        min_edge_length: f64,
        max_edge_length: f64,
        min_face_angle: f64,
        max_scaffold_basepairs: u64,
    ) -> Self {
        Self {
            min_edge_length,
            max_edge_length,
            min_face_angle,
            max_scaffold_basepairs,
            custom: Vec::new(),
        }
    }

    /// Appends one custom constraint.
    pub fn with_custom(mut self, constraint: CustomConstraint) -> Self {
        self.custom.push(constraint);
        self
    }
}

/// Flattens the problem definition into the payload stored in the registry.
///
/// Custom constraints contribute `custom_constraint_<i>_name` and
/// `custom_constraint_<i>_params` pairs, numbered from zero in order.
pub(crate) fn problem_definition_payload(
    objective: &ObjectiveSpec,
    constraints: &DesignConstraints,
) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert(
        "objective_name".to_string(),
        Value::String(objective.name.clone()),
    );
    payload.insert(
        "objective_constants".to_string(),
        Value::Object(objective.constants.clone()),
    );
    payload.insert(
        "constraint_edge_lengths".to_string(),
        Value::Array(vec![
            constraints.min_edge_length.into(),
            constraints.max_edge_length.into(),
        ]),
    );
    payload.insert(
        "constraint_min_angle".to_string(),
        constraints.min_face_angle.into(),
    );
    payload.insert(
        "constraint_max_basepairs".to_string(),
        constraints.max_scaffold_basepairs.into(),
    );
    for (i, constraint) in constraints.custom.iter().enumerate() {
        payload.insert(
            format!("custom_constraint_{i}_name"),
            Value::String(constraint.name.clone()),
        );
        payload.insert(
            format!("custom_constraint_{i}_params"),
            Value::Object(constraint.parameters.clone()),
        );
    }
    payload
}
