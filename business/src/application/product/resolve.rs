use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ProductLookupService;
use crate::domain::product::use_cases::resolve::{
    ProductResolution, ResolutionSource, ResolveProductParams, ResolveProductUseCase,
};
use crate::domain::product::value_objects::UpsertPolicy;

pub struct ResolveProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub lookup: Arc<dyn ProductLookupService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveProductUseCase for ResolveProductUseCaseImpl {
    async fn execute(
        &self,
        params: ResolveProductParams,
    ) -> Result<ProductResolution, ProductError> {
        if params.barcode.is_blank() {
            return Err(ProductError::BarcodeEmpty);
        }

        self.logger
            .info(&format!("Resolving barcode: {}", params.barcode));

        if let Some(product) = self.repository.find_by_barcode(&params.barcode).await? {
            self.logger.info("Product found in catalog store");
            return Ok(ProductResolution {
                product,
                source: ResolutionSource::Catalog,
            });
        }

        self.logger
            .info("Product not in catalog store, querying remote lookup");

        let candidate = match self.lookup.lookup(&params.barcode).await {
            Ok(Some(candidate)) => candidate,
            Ok(None) => {
                self.logger.info(&format!(
                    "Barcode {} unknown to remote lookup",
                    params.barcode
                ));
                return Err(ProductError::NotFound);
            }
            Err(err) => {
                // Lookup failures are not retried; the caller sees a plain miss.
                self.logger
                    .warn(&format!("Remote lookup failed: {}", err));
                return Err(ProductError::NotFound);
            }
        };

        self.repository
            .upsert(&candidate, UpsertPolicy::CreateOnce)
            .await?;
        self.logger.info(&format!(
            "Product {} persisted from remote lookup",
            candidate.barcode
        ));

        Ok(ProductResolution {
            product: candidate,
            source: ResolutionSource::RemoteLookup,
        })
    }
}
