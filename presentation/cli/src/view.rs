use serde::Serialize;

use business::domain::product::model::Product;
use business::domain::product::use_cases::resolve::{ProductResolution, ResolutionSource};
use business::domain::product::value_objects::Barcode;

/// Product record as shown to the user. Absent attributes are omitted from
/// the JSON body, matching the lookup API's formatted records.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub barcode: Barcode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition_facts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            barcode: product.barcode.clone(),
            title: product.title.clone(),
            category: product.category.clone(),
            manufacturer: product.manufacturer.clone(),
            brand: product.brand.clone(),
            image: product.image.clone(),
            mpn: product.mpn.clone(),
            model: product.model.clone(),
            asin: product.asin.clone(),
            ingredients: product.ingredients.clone(),
            nutrition_facts: product.nutrition_facts.clone(),
            description: product.description.clone(),
        }
    }
}

/// Pretty-printed record for the terminal.
pub fn render(product: &Product) -> String {
    serde_json::to_string_pretty(&ProductView::from(product)).unwrap_or_else(|_| "{}".to_string())
}

/// One-line provenance note plus the rendered record.
pub fn render_resolution(resolution: &ProductResolution) -> String {
    let heading = match resolution.source {
        ResolutionSource::Catalog => "Product found in catalog",
        ResolutionSource::RemoteLookup => "Product fetched from remote lookup and saved",
    };
    format!("{}\n{}", heading, render(&resolution.product))
}
