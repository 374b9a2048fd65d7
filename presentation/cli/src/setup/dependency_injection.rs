use std::sync::Arc;

use logger::TracingLogger;
use persistence::db::{CypherClient, GraphConfig};
use persistence::product::repository::ProductRepositoryNeo4j;

use barcodelookup::client::LookupClient;
use barcodelookup::product_lookup::ProductLookupBarcodeApi;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::export::ExportCatalogUseCaseImpl;
use business::application::product::resolve::ResolveProductUseCaseImpl;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::export::ExportCatalogUseCase;
use business::domain::product::use_cases::resolve::ResolveProductUseCase;

use crate::config::lookup_config::LookupConfig;

pub struct DependencyContainer {
    pub resolve_use_case: Arc<dyn ResolveProductUseCase>,
    pub create_use_case: Arc<dyn CreateProductUseCase>,
    pub export_use_case: Arc<dyn ExportCatalogUseCase>,
}

impl DependencyContainer {
    pub fn new(graph_config: GraphConfig, lookup_config: LookupConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let repository = Arc::new(ProductRepositoryNeo4j::new(CypherClient::new(&graph_config)));
        let lookup_client = LookupClient::new(lookup_config.api_key, lookup_config.api_url);
        let lookup = Arc::new(ProductLookupBarcodeApi::new(lookup_client));

        // Use cases
        let resolve_use_case = Arc::new(ResolveProductUseCaseImpl {
            repository: repository.clone(),
            lookup,
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let export_use_case = Arc::new(ExportCatalogUseCaseImpl { repository, logger });

        Self {
            resolve_use_case,
            create_use_case,
            export_use_case,
        }
    }
}
