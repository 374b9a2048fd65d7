use anyhow::Result;

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::resolve::ResolveProductParams;

use crate::scanner::{BarcodeScanner, ScanError};
use crate::setup::dependency_injection::DependencyContainer;
use crate::view;

/// Interactive scan loop: resolves one barcode per scan until the stream
/// ends. A miss points the user at manual entry instead of aborting.
pub async fn run<S: BarcodeScanner>(
    container: &DependencyContainer,
    scanner: &mut S,
) -> Result<()> {
    println!("Scan a barcode (one per line, Ctrl-D to finish):");

    loop {
        match scanner.next_scan().await {
            Ok(Some(barcode)) => {
                let result = container
                    .resolve_use_case
                    .execute(ResolveProductParams {
                        barcode: barcode.clone(),
                    })
                    .await;

                match result {
                    Ok(resolution) => println!("{}", view::render_resolution(&resolution)),
                    Err(ProductError::NotFound) => println!(
                        "Product not found. Enter details manually with: catalog add {}",
                        barcode
                    ),
                    Err(err) => return Err(err.into()),
                }
            }
            Ok(None) => break,
            Err(ScanError::NoBarcode) => println!("No barcode detected."),
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
