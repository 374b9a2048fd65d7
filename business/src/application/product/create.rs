use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Registering product: {}", params.barcode));

        let product = Product::new(NewProductProps {
            barcode: params.barcode,
            title: params.title,
            category: params.category,
            manufacturer: params.manufacturer,
            brand: params.brand,
            image: params.image,
            mpn: params.mpn,
            model: params.model,
            asin: params.asin,
            ingredients: params.ingredients,
            nutrition_facts: params.nutrition_facts,
            description: params.description,
        })?;

        self.repository.upsert(&product, params.policy).await?;

        self.logger
            .info(&format!("Product {} added to catalog", product.barcode));
        Ok(product)
    }
}
