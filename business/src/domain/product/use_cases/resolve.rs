use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::Barcode;

pub struct ResolveProductParams {
    pub barcode: Barcode,
}

/// Where a resolution came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionSource {
    Catalog,
    RemoteLookup,
}

impl std::fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionSource::Catalog => write!(f, "catalog"),
            ResolutionSource::RemoteLookup => write!(f, "remote_lookup"),
        }
    }
}

/// A resolved product together with the source that supplied it.
#[derive(Debug, Clone)]
pub struct ProductResolution {
    pub product: Product,
    pub source: ResolutionSource,
}

#[async_trait]
pub trait ResolveProductUseCase: Send + Sync {
    async fn execute(&self, params: ResolveProductParams)
    -> Result<ProductResolution, ProductError>;
}
