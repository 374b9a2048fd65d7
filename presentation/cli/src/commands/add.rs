use anyhow::Result;
use clap::Args;

use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::value_objects::{Barcode, UpsertPolicy};

use crate::setup::dependency_injection::DependencyContainer;
use crate::view;

/// Manual product entry. Every field except the barcode is optional; blank
/// values are dropped before persisting.
#[derive(Args)]
pub struct AddArgs {
    /// Barcode of the product
    pub barcode: String,

    /// Product title (set once unless --overwrite)
    #[arg(long)]
    pub title: Option<String>,

    /// Category name
    #[arg(long)]
    pub category: Option<String>,

    /// Manufacturer name
    #[arg(long)]
    pub manufacturer: Option<String>,

    /// Brand name
    #[arg(long)]
    pub brand: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Manufacturer part number
    #[arg(long)]
    pub mpn: Option<String>,

    /// Model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Amazon standard identification number
    #[arg(long)]
    pub asin: Option<String>,

    /// Ingredient list
    #[arg(long)]
    pub ingredients: Option<String>,

    /// Nutrition facts text
    #[arg(long)]
    pub nutrition_facts: Option<String>,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,

    /// Re-set scalar fields already stored for this barcode
    #[arg(long)]
    pub overwrite: bool,
}

pub async fn run(container: &DependencyContainer, args: AddArgs) -> Result<()> {
    let policy = if args.overwrite {
        UpsertPolicy::Overwrite
    } else {
        UpsertPolicy::CreateOnce
    };

    let product = container
        .create_use_case
        .execute(CreateProductParams {
            barcode: Barcode::new(args.barcode),
            title: args.title,
            category: args.category,
            manufacturer: args.manufacturer,
            brand: args.brand,
            image: args.image,
            mpn: args.mpn,
            model: args.model,
            asin: args.asin,
            ingredients: args.ingredients,
            nutrition_facts: args.nutrition_facts,
            description: args.description,
            policy,
        })
        .await?;

    println!("{}", view::render(&product));
    Ok(())
}
