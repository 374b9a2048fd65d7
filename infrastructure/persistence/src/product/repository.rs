use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{CatalogRow, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{Barcode, ExportFilter, UpsertPolicy};

use crate::db::{CypherClient, GraphError};

use super::entity::{self, ProductEntity};
use super::statements;

pub struct ProductRepositoryNeo4j {
    client: CypherClient,
}

impl ProductRepositoryNeo4j {
    pub fn new(client: CypherClient) -> Self {
        Self { client }
    }
}

fn map_graph_error(error: GraphError) -> RepositoryError {
    match error {
        GraphError::ConnectionError => RepositoryError::Connection,
        GraphError::QueryError => RepositoryError::Query,
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryNeo4j {
    async fn find_by_barcode(&self, barcode: &Barcode) -> Result<Option<Product>, RepositoryError> {
        let result = self
            .client
            .run(statements::find_by_barcode(barcode))
            .await
            .map_err(map_graph_error)?;

        let product = result
            .rows()
            .first()
            .map(|row| ProductEntity::from_row(row).into_domain());

        Ok(product)
    }

    async fn upsert(&self, product: &Product, policy: UpsertPolicy) -> Result<(), RepositoryError> {
        self.client
            .run(statements::upsert(product, policy))
            .await
            .map_err(map_graph_error)?;

        Ok(())
    }

    async fn export_all(&self, filter: ExportFilter) -> Result<Vec<CatalogRow>, RepositoryError> {
        let result = self
            .client
            .run(statements::export_all(filter))
            .await
            .map_err(map_graph_error)?;

        Ok(result.rows().iter().map(entity::to_catalog_row).collect())
    }
}
