//! Visual option generation
//!
//! Per-type rendering defaults: axis categories, legend placement, tooltip
//! formatting, palette, and the heatmap color scale. Presentation only;
//! none of this participates in data-shape correctness.

use crate::draft::DraftConfig;
use crate::generator::axis_categories;
use observatory_catalog::DomainValues;
use observatory_shared::chart::{
    ChartOptions, HeatBucket, LegendOptions, LegendPosition, TooltipOptions, ValueFormat,
};
use observatory_shared::{ChartType, IndicatorConfig, IndicatorKind};

const CATEGORICAL_PALETTE: [&str; 8] = [
    "#008FFB", "#00E396", "#FEB019", "#FF4560", "#775DD0", "#3F51B5", "#546E7A", "#D4526E",
];

const HEAT_PALETTE: [&str; 5] = ["#B3E5FC", "#4FC3F7", "#29B6F6", "#0288D1", "#01579B"];

fn heat_buckets() -> Vec<HeatBucket> {
    let thresholds = [0.0, 20.0, 40.0, 60.0, 80.0];
    thresholds
        .iter()
        .enumerate()
        .map(|(i, &from)| {
            let to = thresholds.get(i + 1).copied();
            let label = match to {
                Some(to) => format!("{from:.0}-{to:.0}"),
                None => format!("{from:.0}+"),
            };
            HeatBucket {
                from,
                to,
                color: HEAT_PALETTE[i].to_string(),
                label,
            }
        })
        .collect()
}

pub fn build(
    chart_type: ChartType,
    config: &DraftConfig,
    indicator: &IndicatorConfig,
    domains: &DomainValues,
) -> ChartOptions {
    let categories = axis_categories(chart_type, config, domains);

    let legend = match chart_type {
        ChartType::Pie | ChartType::Donut | ChartType::Treemap => LegendOptions {
            show: true,
            position: LegendPosition::Right,
        },
        ChartType::Line
        | ChartType::Area
        | ChartType::Bar
        | ChartType::BarHorizontal => LegendOptions {
            show: config.secondary_attribute.is_some(),
            position: LegendPosition::Bottom,
        },
        ChartType::Heatmap | ChartType::GeoMap => LegendOptions {
            show: true,
            position: LegendPosition::Bottom,
        },
    };

    let tooltip = match indicator.kind {
        IndicatorKind::Rate => TooltipOptions {
            value_format: ValueFormat::Decimal,
            suffix: indicator
                .multiplier
                .map(|m| format!("por {m} habitantes")),
        },
        IndicatorKind::Absolute => TooltipOptions {
            value_format: ValueFormat::Integer,
            suffix: None,
        },
    };

    ChartOptions {
        categories,
        legend,
        tooltip,
        colors: CATEGORICAL_PALETTE.iter().map(|c| c.to_string()).collect(),
        heat_buckets: matches!(chart_type, ChartType::Heatmap).then(heat_buckets),
        horizontal: chart_type == ChartType::BarHorizontal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use observatory_catalog::IndicatorCatalog;

    fn cvli() -> IndicatorConfig {
        IndicatorCatalog::new().get("cvli").unwrap().clone()
    }

    #[test]
    fn test_heat_buckets_cover_the_documented_scale() {
        let buckets = heat_buckets();
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[0].label, "0-20");
        assert_eq!(buckets[3].label, "60-80");
        assert_eq!(buckets[4].label, "80+");
        assert_eq!(buckets[4].to, None);
    }

    #[test]
    fn test_rate_indicator_gets_decimal_tooltip() {
        let options = build(
            ChartType::Pie,
            &DraftConfig {
                x_axis_attribute: Some("sexo".to_string()),
                selected_values: Some(vec!["Feminino".to_string(), "Masculino".to_string()]),
                ..Default::default()
            },
            &cvli(),
            &DomainValues::builtin(),
        );
        assert_eq!(options.tooltip.value_format, ValueFormat::Decimal);
        assert_eq!(
            options.tooltip.suffix.as_deref(),
            Some("por 100000 habitantes")
        );
    }

    #[test]
    fn test_only_heatmaps_carry_buckets() {
        let domains = DomainValues::builtin();
        let config = DraftConfig {
            x_axis_attribute: Some("tipo_arma".to_string()),
            selected_values: Some(vec!["Arma de fogo".to_string()]),
            secondary_attribute: Some("municipio".to_string()),
            ..Default::default()
        };
        let heatmap = build(ChartType::Heatmap, &config, &cvli(), &domains);
        assert!(heatmap.heat_buckets.is_some());

        let bar = build(ChartType::Bar, &config, &cvli(), &domains);
        assert!(bar.heat_buckets.is_none());
        assert!(!bar.horizontal);

        let barh = build(ChartType::BarHorizontal, &config, &cvli(), &domains);
        assert!(barh.horizontal);
    }

    #[test]
    fn test_temporal_categories_are_years() {
        let options = build(
            ChartType::Line,
            &DraftConfig::default(),
            &cvli(),
            &DomainValues::builtin(),
        );
        assert_eq!(options.categories.first().map(String::as_str), Some("2019"));
        assert_eq!(options.categories.last().map(String::as_str), Some("2025"));
    }
}
