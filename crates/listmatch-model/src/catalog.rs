//! Product catalog keyed by product name.

use std::collections::HashMap;

use crate::error::{CatalogError, Result};
use crate::product::Product;

/// Read-only product catalog.
///
/// Products keep their load order, which is also the order result groups are
/// emitted in. Lookups by name go through a side index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product names.
    ///
    /// An empty catalog is accepted here; matching against it is what fails.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.name.clone()));
            }
        }
        Ok(Self { products, index })
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.index.get(name).map(|&position| &self.products[position])
    }

    /// Position of a product in load order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|product| product.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Fail with [`CatalogError::EmptyCatalog`] when there is nothing to match against.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(CatalogError::EmptyCatalog)
        } else {
            Ok(())
        }
    }
}
