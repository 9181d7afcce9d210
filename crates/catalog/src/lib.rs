//! Indicator catalog and domain value provider
//!
//! The catalog is the static registry of indicators the dashboard can
//! chart; the domain value provider supplies the legal values of every
//! categorical attribute. Both are plain data passed explicitly into the
//! pipeline so that validation and spec generation stay pure.

pub mod domains;
mod indicators;

pub use domains::DomainValues;

use observatory_shared::IndicatorConfig;

/// Registry of indicator definitions, looked up by exact id.
pub struct IndicatorCatalog {
    indicators: Vec<IndicatorConfig>,
}

impl Default for IndicatorCatalog {
    fn default() -> Self {
        Self {
            indicators: indicators::builtin_indicators(),
        }
    }
}

impl IndicatorCatalog {
    /// Catalog with the built-in public-safety indicators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog over caller-supplied definitions.
    ///
    /// Attributes with ids duplicated across an indicator's calculation and
    /// context groups break downstream mapping, so later duplicates are
    /// dropped with a warning.
    pub fn from_indicators(indicators: Vec<IndicatorConfig>) -> Self {
        let indicators = indicators
            .into_iter()
            .map(|mut indicator| {
                let mut seen = std::collections::HashSet::new();
                indicator
                    .calculation_attributes
                    .retain(|a| seen.insert(a.id.clone()));
                indicator.context_attributes.retain(|a| {
                    let fresh = seen.insert(a.id.clone());
                    if !fresh {
                        log::warn!(
                            "[IndicatorCatalog] dropping duplicate attribute '{}' on indicator '{}'",
                            a.id,
                            indicator.id
                        );
                    }
                    fresh
                });
                indicator
            })
            .collect();
        Self { indicators }
    }

    /// Look up an indicator by id. `None` is a normal outcome the caller
    /// must handle by rendering a not-found state.
    pub fn get(&self, id: &str) -> Option<&IndicatorConfig> {
        self.indicators.iter().find(|i| i.id == id)
    }

    /// All indicators, in catalog order.
    pub fn all(&self) -> &[IndicatorConfig] {
        &self.indicators
    }
}
