use serde::{Deserialize, Serialize};

/// A canonical catalog entry.
///
/// Only `name` is required. The remaining fields are carried through from the
/// source record; `manufacturer` is the only one consulted during matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product name, the catalog key.
    #[serde(rename = "product_name")]
    pub name: String,
    pub manufacturer: Option<String>,
    pub family: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "announced-date")]
    pub announced_date: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, manufacturer: Option<&str>) -> Self {
        Self {
            name: name.into(),
            manufacturer: manufacturer.map(String::from),
            family: None,
            model: None,
            announced_date: None,
        }
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}
