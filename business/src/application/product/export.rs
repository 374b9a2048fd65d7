use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::CatalogRow;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::export::{ExportCatalogParams, ExportCatalogUseCase};

pub struct ExportCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExportCatalogUseCase for ExportCatalogUseCaseImpl {
    async fn execute(&self, params: ExportCatalogParams) -> Result<Vec<CatalogRow>, ProductError> {
        self.logger
            .info(&format!("Exporting catalog (filter: {})", params.filter));

        let rows = self.repository.export_all(params.filter).await?;

        self.logger
            .info(&format!("Export produced {} rows", rows.len()));
        Ok(rows)
    }
}
