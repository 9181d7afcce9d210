//! Per-type wizard validation
//!
//! Gates the forward transition out of the configure step. A violation
//! surfaces a single advisory message and blocks navigation; a blocked
//! step is not an error condition.

use crate::draft::ChartDraft;
use observatory_shared::ChartType;

/// Advisory outcome of a blocked forward transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepBlocked {
    pub message: String,
}

impl StepBlocked {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for StepBlocked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

fn over_limit(limit: usize, selected: usize, noun: &str) -> StepBlocked {
    StepBlocked {
        message: format!("this chart has a limit of {limit} {noun}, you selected {selected}"),
    }
}

fn under_minimum(minimum: usize, selected: usize, noun: &str) -> StepBlocked {
    StepBlocked {
        message: format!("this chart needs at least {minimum} {noun}, you selected {selected}"),
    }
}

fn check_range(
    selected: usize,
    minimum: usize,
    limit: usize,
    noun: &str,
) -> Result<(), StepBlocked> {
    if selected < minimum {
        return Err(under_minimum(minimum, selected, noun));
    }
    if selected > limit {
        return Err(over_limit(limit, selected, noun));
    }
    Ok(())
}

/// Validate the configure step for the draft's chart type.
pub fn validate_configure(draft: &ChartDraft) -> Result<(), StepBlocked> {
    let Some(chart_type) = draft.chart_type else {
        return Err(StepBlocked::new("choose a chart type to continue"));
    };

    let primary = draft.config.selected_values.as_ref().map_or(0, Vec::len);
    let secondary_chosen = draft.config.secondary_attribute.is_some();
    let secondary = draft.config.secondary_values.as_ref().map_or(0, Vec::len);

    match chart_type {
        ChartType::Pie | ChartType::Donut => check_range(primary, 2, 10, "categories"),
        ChartType::Bar | ChartType::BarHorizontal => {
            check_range(primary, 1, 10, "categories")?;
            if secondary_chosen && secondary > 5 {
                return Err(over_limit(5, secondary, "sub-series"));
            }
            Ok(())
        }
        ChartType::Line | ChartType::Area => {
            if secondary_chosen && secondary > 5 {
                return Err(over_limit(5, secondary, "sub-series"));
            }
            Ok(())
        }
        ChartType::Heatmap => {
            check_range(primary, 1, 10, "categories")?;
            if !secondary_chosen {
                return Err(StepBlocked::new(
                    "this chart needs a second dimension for the rows",
                ));
            }
            check_range(secondary, 1, 10, "rows")
        }
        ChartType::Treemap => check_range(primary, 1, 20, "categories"),
        ChartType::GeoMap => {
            if primary < 1 {
                return Err(under_minimum(1, primary, "categories"));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftConfig;

    fn draft(chart_type: ChartType, primary: usize, secondary: Option<usize>) -> ChartDraft {
        ChartDraft {
            chart_type: Some(chart_type),
            config: DraftConfig {
                x_axis_attribute: Some("sexo".to_string()),
                selected_values: Some((0..primary).map(|i| format!("v{i}")).collect()),
                secondary_attribute: secondary.map(|_| "municipio".to_string()),
                secondary_values: secondary
                    .map(|n| (0..n).map(|i| format!("m{i}")).collect()),
                ..Default::default()
            },
            title: String::new(),
        }
    }

    #[test]
    fn test_pie_boundaries() {
        assert!(validate_configure(&draft(ChartType::Pie, 1, None)).is_err());
        assert!(validate_configure(&draft(ChartType::Pie, 2, None)).is_ok());
        assert!(validate_configure(&draft(ChartType::Pie, 10, None)).is_ok());
        assert!(validate_configure(&draft(ChartType::Pie, 11, None)).is_err());
        assert!(validate_configure(&draft(ChartType::Donut, 1, None)).is_err());
    }

    #[test]
    fn test_limit_message_phrasing() {
        let blocked = validate_configure(&draft(ChartType::Pie, 12, None)).unwrap_err();
        assert_eq!(
            blocked.message,
            "this chart has a limit of 10 categories, you selected 12"
        );

        let blocked = validate_configure(&draft(ChartType::Pie, 1, None)).unwrap_err();
        assert_eq!(
            blocked.message,
            "this chart needs at least 2 categories, you selected 1"
        );
    }

    #[test]
    fn test_bar_boundaries_and_sub_series_cap() {
        assert!(validate_configure(&draft(ChartType::Bar, 0, None)).is_err());
        assert!(validate_configure(&draft(ChartType::Bar, 1, None)).is_ok());
        assert!(validate_configure(&draft(ChartType::Bar, 10, Some(5))).is_ok());
        let blocked = validate_configure(&draft(ChartType::Bar, 3, Some(6))).unwrap_err();
        assert_eq!(
            blocked.message,
            "this chart has a limit of 5 sub-series, you selected 6"
        );
        assert!(validate_configure(&draft(ChartType::BarHorizontal, 11, None)).is_err());
    }

    #[test]
    fn test_line_is_unconstrained_without_sub_series() {
        assert!(validate_configure(&draft(ChartType::Line, 0, None)).is_ok());
        assert!(validate_configure(&draft(ChartType::Line, 0, Some(5))).is_ok());
        assert!(validate_configure(&draft(ChartType::Line, 0, Some(6))).is_err());
        assert!(validate_configure(&draft(ChartType::Area, 0, Some(6))).is_err());
    }

    #[test]
    fn test_heatmap_requires_secondary_dimension() {
        assert!(validate_configure(&draft(ChartType::Heatmap, 4, None)).is_err());
        assert!(validate_configure(&draft(ChartType::Heatmap, 4, Some(3))).is_ok());
        assert!(validate_configure(&draft(ChartType::Heatmap, 11, Some(3))).is_err());
        assert!(validate_configure(&draft(ChartType::Heatmap, 4, Some(11))).is_err());
        assert!(validate_configure(&draft(ChartType::Heatmap, 4, Some(0))).is_err());
    }

    #[test]
    fn test_treemap_and_geomap_bounds() {
        assert!(validate_configure(&draft(ChartType::Treemap, 0, None)).is_err());
        assert!(validate_configure(&draft(ChartType::Treemap, 20, None)).is_ok());
        assert!(validate_configure(&draft(ChartType::Treemap, 21, None)).is_err());

        assert!(validate_configure(&draft(ChartType::GeoMap, 0, None)).is_err());
        assert!(validate_configure(&draft(ChartType::GeoMap, 1, None)).is_ok());
        // No upper bound for maps.
        assert!(validate_configure(&draft(ChartType::GeoMap, 200, None)).is_ok());
    }
}
