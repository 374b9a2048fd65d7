use anyhow::Result;

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::resolve::ResolveProductParams;
use business::domain::product::value_objects::Barcode;

use crate::setup::dependency_injection::DependencyContainer;
use crate::view;

/// One-shot resolution of a single barcode.
pub async fn run(container: &DependencyContainer, barcode: String) -> Result<()> {
    let barcode = Barcode::new(barcode);

    let result = container
        .resolve_use_case
        .execute(ResolveProductParams {
            barcode: barcode.clone(),
        })
        .await;

    match result {
        Ok(resolution) => {
            println!("{}", view::render_resolution(&resolution));
            Ok(())
        }
        Err(ProductError::NotFound) => {
            println!(
                "Product not found. Enter details manually with: catalog add {}",
                barcode
            );
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
