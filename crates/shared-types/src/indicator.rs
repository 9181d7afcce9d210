//! Indicator catalog types
//!
//! An indicator is a named public-safety metric (e.g. "CVLI") with two
//! attribute groups: calculation attributes feed the metric itself, context
//! attributes are the filterable dimensions around it.

use serde::{Deserialize, Serialize};

/// Data type of an indicator attribute
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttributeDataType {
    Text,
    Number,
    Date,
}

/// A single attribute declared by an indicator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndicatorAttribute {
    pub id: String,
    pub label: String,
    pub data_type: AttributeDataType,
}

impl IndicatorAttribute {
    pub fn new(id: &str, label: &str, data_type: AttributeDataType) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            data_type,
        }
    }
}

/// Whether an indicator is a raw count or a population-normalized rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndicatorKind {
    Absolute,
    Rate,
}

/// Static definition of an indicator.
///
/// Invariant: attribute ids are unique across the union of calculation and
/// context attributes. The catalog enforces this at construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndicatorConfig {
    pub id: String,
    pub label: String,
    pub kind: IndicatorKind,
    /// Present iff `kind == Rate` (e.g. 100 000 for per-100k-inhabitant rates).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<u32>,
    pub calculation_attributes: Vec<IndicatorAttribute>,
    pub context_attributes: Vec<IndicatorAttribute>,
}

impl IndicatorConfig {
    /// Look up an attribute by id in either group.
    pub fn attribute(&self, id: &str) -> Option<&IndicatorAttribute> {
        self.calculation_attributes
            .iter()
            .chain(self.context_attributes.iter())
            .find(|a| a.id == id)
    }

    /// The single metric charts aggregate over: the first calculation
    /// attribute, by catalog order.
    pub fn primary_metric(&self) -> Option<&str> {
        self.calculation_attributes.first().map(|a| a.id.as_str())
    }
}
