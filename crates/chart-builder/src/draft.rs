//! Wizard state machine
//!
//! Linear three-step flow: choose type, configure dimensions, title and
//! finish. No skipping; `back` walks the same path in reverse. The draft
//! lives only while the wizard is open and is discarded on reset/finish.

use crate::generator;
use crate::validation::{validate_configure, StepBlocked};
use observatory_catalog::DomainValues;
use observatory_shared::{ChartConfig, ChartType, IndicatorAttribute, IndicatorConfig};
use serde::{Deserialize, Serialize};

/// In-progress chart configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DraftConfig {
    /// Primary (x-axis / slice / column) attribute id.
    pub x_axis_attribute: Option<String>,
    /// Values picked for the primary attribute.
    pub selected_values: Option<Vec<String>>,
    /// Measure attribute id; currently informational, the generator always
    /// uses the indicator's first calculation attribute.
    pub y_axis_attribute: Option<String>,
    /// Sub-series / row attribute id.
    pub secondary_attribute: Option<String>,
    /// Values picked for the secondary attribute.
    pub secondary_values: Option<Vec<String>>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

/// Shallow-merge patch for [`DraftConfig`]: `Some` fields overwrite, `None`
/// fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct DraftConfigPatch {
    pub x_axis_attribute: Option<String>,
    pub selected_values: Option<Vec<String>>,
    pub y_axis_attribute: Option<String>,
    pub secondary_attribute: Option<String>,
    pub secondary_values: Option<Vec<String>>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

/// Transient draft owned by the wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartDraft {
    pub chart_type: Option<ChartType>,
    pub config: DraftConfig,
    pub title: String,
}

/// Wizard steps, in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    ChooseType,
    Configure,
    Detail,
}

/// The three-step chart creation wizard.
#[derive(Debug, Clone, Default)]
pub struct DraftWizard {
    step: WizardStep,
    draft: ChartDraft,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::ChooseType
    }
}

impl DraftWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first step with an empty draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ChartDraft {
        &self.draft
    }

    /// Select the chart type. Changing it clears the entire config so
    /// fields from one type never leak into another (a pie chart's
    /// selected values must not become a heatmap's row axis).
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        if self.draft.chart_type != Some(chart_type) {
            self.draft.config = DraftConfig::default();
        }
        self.draft.chart_type = Some(chart_type);
    }

    /// Shallow-merge a config patch into the draft.
    pub fn update_config(&mut self, patch: DraftConfigPatch) {
        let config = &mut self.draft.config;
        if let Some(v) = patch.x_axis_attribute {
            config.x_axis_attribute = Some(v);
        }
        if let Some(v) = patch.selected_values {
            config.selected_values = Some(v);
        }
        if let Some(v) = patch.y_axis_attribute {
            config.y_axis_attribute = Some(v);
        }
        if let Some(v) = patch.secondary_attribute {
            config.secondary_attribute = Some(v);
        }
        if let Some(v) = patch.secondary_values {
            config.secondary_values = Some(v);
        }
        if let Some(v) = patch.start_year {
            config.start_year = Some(v);
        }
        if let Some(v) = patch.end_year {
            config.end_year = Some(v);
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.to_string();
    }

    /// "Select all" for the primary attribute: materialize the complete
    /// legal domain into the selection.
    pub fn select_all_primary(&mut self, domains: &DomainValues) {
        if let Some(attribute) = &self.draft.config.x_axis_attribute {
            self.draft.config.selected_values = Some(domains.values(attribute).to_vec());
        }
    }

    /// Candidate attributes for the secondary dimension: the indicator's
    /// context attributes minus the chosen primary.
    pub fn secondary_candidates<'a>(
        &self,
        indicator: &'a IndicatorConfig,
    ) -> Vec<&'a IndicatorAttribute> {
        let primary = self.draft.config.x_axis_attribute.as_deref();
        indicator
            .context_attributes
            .iter()
            .filter(|a| Some(a.id.as_str()) != primary)
            .collect()
    }

    /// Move one step forward. Blocked transitions leave the wizard where
    /// it is and carry a single advisory message.
    pub fn advance(&mut self) -> Result<WizardStep, StepBlocked> {
        match self.step {
            WizardStep::ChooseType => {
                if self.draft.chart_type.is_none() {
                    return Err(StepBlocked::new("choose a chart type to continue"));
                }
                self.step = WizardStep::Configure;
            }
            WizardStep::Configure => {
                validate_configure(&self.draft)?;
                self.step = WizardStep::Detail;
            }
            WizardStep::Detail => {
                return Err(StepBlocked::new("finish the wizard to save the chart"));
            }
        }
        Ok(self.step)
    }

    /// Move one step back; stays on the first step.
    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::ChooseType | WizardStep::Configure => WizardStep::ChooseType,
            WizardStep::Detail => WizardStep::Configure,
        };
        self.step
    }

    /// Forward transition out of the detail step: converts the draft into
    /// a persisted chart and resets the wizard. Requires a non-empty
    /// (untrimmed) title.
    pub fn finish(
        &mut self,
        indicator: &IndicatorConfig,
        domains: &DomainValues,
    ) -> Result<ChartConfig, StepBlocked> {
        if self.step != WizardStep::Detail {
            return Err(StepBlocked::new("complete the previous steps first"));
        }
        if self.draft.title.is_empty() {
            return Err(StepBlocked::new("give the chart a title to save it"));
        }

        let chart = generator::generate(&self.draft, indicator, domains)
            .map_err(|e| StepBlocked::new(&e.to_string()))?;
        self.reset();
        Ok(chart)
    }
}
