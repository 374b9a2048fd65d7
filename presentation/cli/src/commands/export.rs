use anyhow::{Context, Result};

use business::domain::product::model::CatalogRow;
use business::domain::product::use_cases::export::ExportCatalogParams;
use business::domain::product::value_objects::ExportFilter;

use crate::setup::dependency_injection::DependencyContainer;

/// Writes the flattened catalog as a CSV file. An empty catalog warns the
/// user and writes nothing.
pub async fn run(
    container: &DependencyContainer,
    output: &str,
    complete_only: bool,
) -> Result<()> {
    let filter = if complete_only {
        ExportFilter::CompleteOnly
    } else {
        ExportFilter::All
    };

    let rows = container
        .export_use_case
        .execute(ExportCatalogParams { filter })
        .await?;

    if rows.is_empty() {
        println!("No products found in the catalog; nothing exported.");
        return Ok(());
    }

    write_rows(output, &rows)?;
    println!("Saved {} products to {}", rows.len(), output);

    Ok(())
}

fn write_rows(path: &str, rows: &[CatalogRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create export file {}", path))?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use async_trait::async_trait;
    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;
    use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
    use business::domain::product::use_cases::export::ExportCatalogUseCase;
    use business::domain::product::use_cases::resolve::{
        ProductResolution, ResolveProductParams, ResolveProductUseCase,
    };

    struct EmptyCatalog;

    #[async_trait]
    impl ExportCatalogUseCase for EmptyCatalog {
        async fn execute(
            &self,
            _params: ExportCatalogParams,
        ) -> Result<Vec<CatalogRow>, ProductError> {
            Ok(Vec::new())
        }
    }

    struct UnusedResolve;

    #[async_trait]
    impl ResolveProductUseCase for UnusedResolve {
        async fn execute(
            &self,
            _params: ResolveProductParams,
        ) -> Result<ProductResolution, ProductError> {
            unreachable!("export never resolves")
        }
    }

    struct UnusedCreate;

    #[async_trait]
    impl CreateProductUseCase for UnusedCreate {
        async fn execute(&self, _params: CreateProductParams) -> Result<Product, ProductError> {
            unreachable!("export never registers products")
        }
    }

    fn row(title: &str, image: &str) -> CatalogRow {
        CatalogRow {
            title: title.to_string(),
            category: "Tools".to_string(),
            manufacturer: "Acme Corp".to_string(),
            brand: "Acme".to_string(),
            image: image.to_string(),
        }
    }

    #[test]
    fn should_write_header_and_one_line_per_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        let rows = vec![
            row("Widget", ""),
            row("Gadget", "https://images.example/gadget.jpg"),
        ];

        write_rows(path.to_str().unwrap(), &rows).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Title,Category,Manufacturer,Brand,Image"
        );
        assert_eq!(lines.next().unwrap(), "Widget,Tools,Acme Corp,Acme,");
        assert_eq!(
            lines.next().unwrap(),
            "Gadget,Tools,Acme Corp,Acme,https://images.example/gadget.jpg"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn should_fail_when_export_path_is_not_writable() {
        let result = write_rows("/nonexistent-dir/catalog.csv", &[row("Widget", "")]);

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn should_not_create_file_when_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        let container = DependencyContainer {
            resolve_use_case: Arc::new(UnusedResolve),
            create_use_case: Arc::new(UnusedCreate),
            export_use_case: Arc::new(EmptyCatalog),
        };

        let result = run(&container, path.to_str().unwrap(), false).await;

        assert!(result.is_ok());
        assert!(!path.exists());
    }
}
