pub mod client;
pub mod product_lookup;
