use async_trait::async_trait;

use crate::domain::errors::LookupError;

use super::model::Product;
use super::value_objects::Barcode;

/// Service port for the remote barcode lookup API.
///
/// `Ok(Some(_))` carries the first candidate the service returned for the
/// barcode. `Ok(None)` means the service answered but knows nothing about
/// it (including non-success responses). Transport failures are errors.
#[async_trait]
pub trait ProductLookupService: Send + Sync {
    async fn lookup(&self, barcode: &Barcode) -> Result<Option<Product>, LookupError>;
}
