//! Built-in indicator definitions

use observatory_shared::{
    AttributeDataType, IndicatorAttribute, IndicatorConfig, IndicatorKind,
};

fn attr(id: &str, label: &str, data_type: AttributeDataType) -> IndicatorAttribute {
    IndicatorAttribute::new(id, label, data_type)
}

pub(crate) fn builtin_indicators() -> Vec<IndicatorConfig> {
    vec![
        IndicatorConfig {
            id: "cvli".to_string(),
            label: "CVLI (Crimes Violentos Letais Intencionais)".to_string(),
            kind: IndicatorKind::Rate,
            multiplier: Some(100_000),
            calculation_attributes: vec![attr(
                "total_vitimas",
                "Total de vítimas",
                AttributeDataType::Number,
            )],
            context_attributes: vec![
                attr("ano", "Ano", AttributeDataType::Date),
                attr("municipio", "Município", AttributeDataType::Text),
                attr("sexo", "Sexo", AttributeDataType::Text),
                attr("faixa_etaria", "Faixa etária", AttributeDataType::Text),
                attr("bairro", "Bairro", AttributeDataType::Text),
            ],
        },
        IndicatorConfig {
            id: "feminicidio".to_string(),
            label: "Feminicídio".to_string(),
            kind: IndicatorKind::Rate,
            multiplier: Some(100_000),
            calculation_attributes: vec![attr(
                "total_vitimas",
                "Total de vítimas",
                AttributeDataType::Number,
            )],
            context_attributes: vec![
                attr("ano", "Ano", AttributeDataType::Date),
                attr("municipio", "Município", AttributeDataType::Text),
                attr("faixa_etaria", "Faixa etária", AttributeDataType::Text),
                attr("bairro", "Bairro", AttributeDataType::Text),
            ],
        },
        IndicatorConfig {
            id: "3".to_string(),
            label: "Apreensão de Armas".to_string(),
            kind: IndicatorKind::Absolute,
            multiplier: None,
            calculation_attributes: vec![attr(
                "total_armas",
                "Total de armas apreendidas",
                AttributeDataType::Number,
            )],
            context_attributes: vec![
                attr("ano", "Ano", AttributeDataType::Date),
                attr("municipio", "Município", AttributeDataType::Text),
                attr("tipo_arma", "Tipo de arma", AttributeDataType::Text),
            ],
        },
        IndicatorConfig {
            id: "cvp".to_string(),
            label: "CVP (Crimes Violentos Patrimoniais)".to_string(),
            kind: IndicatorKind::Absolute,
            multiplier: None,
            calculation_attributes: vec![attr(
                "total_ocorrencias",
                "Total de ocorrências",
                AttributeDataType::Number,
            )],
            context_attributes: vec![
                attr("ano", "Ano", AttributeDataType::Date),
                attr("municipio", "Município", AttributeDataType::Text),
                attr("natureza", "Natureza", AttributeDataType::Text),
            ],
        },
    ]
}
