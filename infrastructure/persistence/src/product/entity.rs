use business::domain::product::model::{CatalogRow, Product};
use business::domain::product::value_objects::Barcode;

use crate::db::CypherRow;

/// One product row as returned by the point-lookup statement.
#[derive(Debug)]
pub struct ProductEntity {
    pub barcode: Option<String>,
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
}

impl ProductEntity {
    pub fn from_row(row: &CypherRow<'_>) -> Self {
        Self {
            barcode: row.string("barcode"),
            title: row.string("title"),
            category: row.string("category"),
            manufacturer: row.string("manufacturer"),
            brand: row.string("brand"),
            image: row.string("image"),
            mpn: row.string("mpn"),
            model: row.string("model"),
            asin: row.string("asin"),
            ingredients: row.string("ingredients"),
            nutrition_facts: row.string("nutrition_facts"),
            description: row.string("description"),
        }
    }

    pub fn into_domain(self) -> Product {
        Product::from_repository(
            Barcode::new(self.barcode.unwrap_or_default()),
            self.title,
            self.category,
            self.manufacturer,
            self.brand,
            self.image,
            self.mpn,
            self.model,
            self.asin,
            self.ingredients,
            self.nutrition_facts,
            self.description,
        )
    }
}

/// Maps an export row, coalescing absent values to empty strings.
pub fn to_catalog_row(row: &CypherRow<'_>) -> CatalogRow {
    CatalogRow {
        title: row.string("title").unwrap_or_default(),
        category: row.string("category").unwrap_or_default(),
        manufacturer: row.string("manufacturer").unwrap_or_default(),
        brand: row.string("brand").unwrap_or_default(),
        image: row.string("image").unwrap_or_default(),
    }
}
