use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{CatalogRow, Product};
use super::value_objects::{Barcode, ExportFilter, UpsertPolicy};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_barcode(&self, barcode: &Barcode) -> Result<Option<Product>, RepositoryError>;
    async fn upsert(&self, product: &Product, policy: UpsertPolicy) -> Result<(), RepositoryError>;
    async fn export_all(&self, filter: ExportFilter) -> Result<Vec<CatalogRow>, RepositoryError>;
}
