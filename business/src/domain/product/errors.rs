#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.barcode_empty")]
    BarcodeEmpty,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
