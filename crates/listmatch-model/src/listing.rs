use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A free-text product listing to be resolved against the catalog.
///
/// Listings have no identity of their own; callers refer to them by their
/// position in the input sequence. Every field may be missing. Serializing a
/// listing emits exactly `title`, `manufacturer`, `currency` and `price`, in
/// that order, with missing values as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Listing {
    pub title: Option<String>,
    pub manufacturer: Option<String>,
    pub currency: Option<String>,
    /// Passed through unmodified; sources use both numbers and strings.
    pub price: Option<Value>,
}

impl Listing {
    pub fn new(title: &str, manufacturer: Option<&str>) -> Self {
        Self {
            title: Some(title.to_string()),
            manufacturer: manufacturer.map(String::from),
            currency: None,
            price: None,
        }
    }

    #[must_use]
    pub fn with_price(mut self, currency: &str, price: impl Into<Value>) -> Self {
        self.currency = Some(currency.to_string());
        self.price = Some(price.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }
}
