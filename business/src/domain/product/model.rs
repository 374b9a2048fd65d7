use serde::Serialize;

use super::errors::ProductError;
use super::value_objects::Barcode;

/// A catalog product. The barcode is the unique key; every other attribute
/// is optional and normalized so that blank strings never reach the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
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
}

pub struct NewProductProps {
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
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.barcode.is_blank() {
            return Err(ProductError::BarcodeEmpty);
        }

        Ok(Self {
            barcode: props.barcode,
            title: normalize(props.title),
            category: normalize(props.category),
            manufacturer: normalize(props.manufacturer),
            brand: normalize(props.brand),
            image: normalize(props.image),
            mpn: normalize(props.mpn),
            model: normalize(props.model),
            asin: normalize(props.asin),
            ingredients: normalize(props.ingredients),
            nutrition_facts: normalize(props.nutrition_facts),
            description: normalize(props.description),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        barcode: Barcode,
        title: Option<String>,
        category: Option<String>,
        manufacturer: Option<String>,
        brand: Option<String>,
        image: Option<String>,
        mpn: Option<String>,
        model: Option<String>,
        asin: Option<String>,
        ingredients: Option<String>,
        nutrition_facts: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            barcode,
            title,
            category,
            manufacturer,
            brand,
            image,
            mpn,
            model,
            asin,
            ingredients,
            nutrition_facts,
            description,
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// One flattened export row. Field names are the export file's header
/// columns: {Title, Category, Manufacturer, Brand, Image}.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogRow {
    pub title: String,
    pub category: String,
    pub manufacturer: String,
    pub brand: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(barcode: &str) -> NewProductProps {
        NewProductProps {
            barcode: Barcode::new(barcode),
            title: None,
            category: None,
            manufacturer: None,
            brand: None,
            image: None,
            mpn: None,
            model: None,
            asin: None,
            ingredients: None,
            nutrition_facts: None,
            description: None,
        }
    }

    #[test]
    fn should_create_product_when_barcode_present() {
        let mut p = props("012345678905");
        p.title = Some("Widget".to_string());

        let product = Product::new(p).unwrap();

        assert_eq!(product.barcode.as_str(), "012345678905");
        assert_eq!(product.title.as_deref(), Some("Widget"));
    }

    #[test]
    fn should_reject_product_when_barcode_blank() {
        let result = Product::new(props("   "));

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::BarcodeEmpty));
    }

    #[test]
    fn should_drop_blank_attributes_when_creating() {
        let mut p = props("012345678905");
        p.title = Some("  Widget  ".to_string());
        p.brand = Some("   ".to_string());
        p.category = Some("".to_string());

        let product = Product::new(p).unwrap();

        assert_eq!(product.title.as_deref(), Some("Widget"));
        assert!(product.brand.is_none());
        assert!(product.category.is_none());
    }

    #[test]
    fn should_keep_repository_data_verbatim() {
        let product = Product::from_repository(
            Barcode::new("036000291452"),
            Some("Juice".to_string()),
            None,
            None,
            Some("Acme".to_string()),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        );

        assert_eq!(product.barcode.as_str(), "036000291452");
        assert_eq!(product.brand.as_deref(), Some("Acme"));
        assert!(product.title.is_some());
    }
}
