use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{Barcode, UpsertPolicy};

/// Manual-entry form fields. Everything except the barcode is optional;
/// blank values are dropped before persisting.
pub struct CreateProductParams {
    pub barcode: Barcode,
    pub title: Option<String>,
    pub category: Option<String>,
    pub manufacturer: Option<String>,
    pub brand: Option<String>,
    pub image: Option<String>,
    pub mpn: Option<String>,
    pub model: Option<String>,
    pub asin: Option<String>,
    pub ingredients: Option<String>,
    pub nutrition_facts: Option<String>,
    pub description: Option<String>,
    pub policy: UpsertPolicy,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
