/// Configuration for barcode lookup API access.
pub struct LookupConfig {
    pub api_key: String,
    pub api_url: String,
}

impl LookupConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("BARCODE_API_KEY")
            .expect("BARCODE_API_KEY environment variable must be set");
        let api_url = std::env::var("BARCODE_API_URL")
            .unwrap_or_else(|_| "https://api.barcodelookup.com/v3".to_string());
        Self { api_key, api_url }
    }
}
