use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::CatalogRow;
use crate::domain::product::value_objects::ExportFilter;

pub struct ExportCatalogParams {
    pub filter: ExportFilter,
}

#[async_trait]
pub trait ExportCatalogUseCase: Send + Sync {
    async fn execute(&self, params: ExportCatalogParams) -> Result<Vec<CatalogRow>, ProductError>;
}
