use reqwest::Client;

/// Shared barcode-lookup HTTP client configuration.
pub struct LookupClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl LookupClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Returns the product search endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url.trim_end_matches('/'))
    }
}
