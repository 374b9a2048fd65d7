use async_trait::async_trait;
use serde::Deserialize;

use business::domain::errors::LookupError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::services::ProductLookupService;
use business::domain::product::value_objects::Barcode;

use crate::client::LookupClient;

#[derive(Deserialize)]
struct LookupResponse {
    products: Option<Vec<LookupProduct>>,
}

#[derive(Deserialize)]
struct LookupProduct {
    barcode_number: Option<String>,
    title: Option<String>,
    category: Option<String>,
    manufacturer: Option<String>,
    brand: Option<String>,
    images: Option<Vec<String>>,
    mpn: Option<String>,
    model: Option<String>,
    asin: Option<String>,
    ingredients: Option<String>,
    nutrition_facts: Option<String>,
    description: Option<String>,
}

pub struct ProductLookupBarcodeApi {
    client: LookupClient,
}

impl ProductLookupBarcodeApi {
    pub fn new(client: LookupClient) -> Self {
        Self { client }
    }

    /// Builds a domain product from the first candidate. A candidate without
    /// a barcode_number is keyed by the barcode that was asked for.
    fn to_domain(requested: &Barcode, candidate: LookupProduct) -> Result<Product, LookupError> {
        let barcode = candidate
            .barcode_number
            .filter(|b| !b.trim().is_empty())
            .map(Barcode::new)
            .unwrap_or_else(|| requested.clone());

        let image = candidate.images.and_then(|images| images.into_iter().next());

        Product::new(NewProductProps {
            barcode,
            title: candidate.title,
            category: candidate.category,
            manufacturer: candidate.manufacturer,
            brand: candidate.brand,
            image,
            mpn: candidate.mpn,
            model: candidate.model,
            asin: candidate.asin,
            ingredients: candidate.ingredients,
            nutrition_facts: candidate.nutrition_facts,
            description: candidate.description,
        })
        .map_err(|_| LookupError::MalformedResponse)
    }
}

#[async_trait]
impl ProductLookupService for ProductLookupBarcodeApi {
    async fn lookup(&self, barcode: &Barcode) -> Result<Option<Product>, LookupError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .query(&[
                ("barcode", barcode.as_str()),
                ("formatted", "y"),
                ("key", self.client.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|_| LookupError::RequestFailed)?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let data: LookupResponse = response
            .json()
            .await
            .map_err(|_| LookupError::MalformedResponse)?;

        let candidate = match data.products.and_then(|products| products.into_iter().next()) {
            Some(candidate) => candidate,
            None => return Ok(None),
        };

        Ok(Some(Self::to_domain(barcode, candidate)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_candidate_fields_to_product() {
        let body = r#"{
            "products": [{
                "barcode_number": "012345678905",
                "title": "Widget",
                "category": "Tools",
                "brand": "Acme",
                "manufacturer": "Acme Corp",
                "images": ["https://images.example/widget.jpg", "https://images.example/widget-2.jpg"]
            }]
        }"#;

        let data: LookupResponse = serde_json::from_str(body).unwrap();
        let candidate = data.products.unwrap().into_iter().next().unwrap();
        let product =
            ProductLookupBarcodeApi::to_domain(&Barcode::new("012345678905"), candidate).unwrap();

        assert_eq!(product.barcode.as_str(), "012345678905");
        assert_eq!(product.title.as_deref(), Some("Widget"));
        assert_eq!(product.category.as_deref(), Some("Tools"));
        assert_eq!(product.brand.as_deref(), Some("Acme"));
        assert_eq!(product.manufacturer.as_deref(), Some("Acme Corp"));
        assert_eq!(
            product.image.as_deref(),
            Some("https://images.example/widget.jpg"),
            "first image wins"
        );
    }

    #[test]
    fn should_key_candidate_by_requested_barcode_when_barcode_number_missing() {
        let body = r#"{"products": [{"title": "Widget"}]}"#;

        let data: LookupResponse = serde_json::from_str(body).unwrap();
        let candidate = data.products.unwrap().into_iter().next().unwrap();
        let product =
            ProductLookupBarcodeApi::to_domain(&Barcode::new("036000291452"), candidate).unwrap();

        assert_eq!(product.barcode.as_str(), "036000291452");
    }

    #[test]
    fn should_parse_empty_candidate_list_as_no_products() {
        let data: LookupResponse = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert!(data.products.unwrap().is_empty());

        let data: LookupResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(data.products.is_none());
    }

    #[test]
    fn should_drop_blank_candidate_fields() {
        let body = r#"{
            "products": [{
                "barcode_number": "012345678905",
                "title": "  Widget  ",
                "brand": "   ",
                "images": []
            }]
        }"#;

        let data: LookupResponse = serde_json::from_str(body).unwrap();
        let candidate = data.products.unwrap().into_iter().next().unwrap();
        let product =
            ProductLookupBarcodeApi::to_domain(&Barcode::new("012345678905"), candidate).unwrap();

        assert_eq!(product.title.as_deref(), Some("Widget"));
        assert!(product.brand.is_none());
        assert!(product.image.is_none());
    }
}
