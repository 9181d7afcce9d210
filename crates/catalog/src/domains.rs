//! Domain value provider
//!
//! Maps an attribute id to the complete, ordered list of its legal values.
//! The lists double as the "select all" source in the wizard, so they are
//! guaranteed duplicate-free: selected-count == domain-length is only a
//! sound select-all check when every value is unique.

use std::collections::BTreeMap;

use observatory_shared::YEAR_ATTRIBUTE;

/// Key-to-value-list lookup for categorical attributes.
pub struct DomainValues {
    tables: BTreeMap<String, Vec<String>>,
}

impl Default for DomainValues {
    fn default() -> Self {
        Self::new(builtin_tables())
    }
}

impl DomainValues {
    /// Provider over caller-supplied tables. Duplicate values are removed,
    /// first occurrence wins, order otherwise preserved.
    pub fn new(tables: BTreeMap<String, Vec<String>>) -> Self {
        let tables = tables
            .into_iter()
            .map(|(id, values)| {
                let mut seen = std::collections::HashSet::new();
                let values = values
                    .into_iter()
                    .filter(|v| seen.insert(v.clone()))
                    .collect();
                (id, values)
            })
            .collect();
        Self { tables }
    }

    /// Provider with the built-in public-safety tables.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Complete legal domain of `attribute_id`, in picker order.
    /// Unknown ids yield an empty slice, not an error.
    pub fn values(&self, attribute_id: &str) -> &[String] {
        self.tables
            .get(attribute_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// The legal year domain parsed to integers; non-numeric entries are
    /// skipped.
    pub fn years(&self) -> Vec<i32> {
        self.values(YEAR_ATTRIBUTE)
            .iter()
            .filter_map(|v| v.parse().ok())
            .collect()
    }
}

fn builtin_tables() -> BTreeMap<String, Vec<String>> {
    let mut tables = BTreeMap::new();

    tables.insert(
        YEAR_ATTRIBUTE.to_string(),
        (2019..=2025).map(|y| y.to_string()).collect(),
    );
    tables.insert(
        "municipio".to_string(),
        [
            "Fortaleza",
            "Caucaia",
            "Juazeiro do Norte",
            "Maracanaú",
            "Sobral",
            "Crato",
            "Itapipoca",
            "Maranguape",
            "Iguatu",
            "Quixadá",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    );
    tables.insert(
        "sexo".to_string(),
        ["Feminino", "Masculino", "Outros"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    tables.insert(
        "faixa_etaria".to_string(),
        ["0 a 11", "12 a 17", "18 a 24", "25 a 29", "30 a 34", "35 a 64", "65 ou mais"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    tables.insert(
        "tipo_arma".to_string(),
        ["Arma de fogo", "Arma branca", "Artefato explosivo", "Outros"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    tables.insert(
        "bairro".to_string(),
        ["Centro", "Messejana", "Barra do Ceará", "Aldeota", "Papicu", "Conjunto Ceará"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    tables.insert(
        "natureza".to_string(),
        ["Roubo a pessoa", "Roubo de veículo", "Roubo a estabelecimento", "Extorsão"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    tables
}
