use serde_json::{Map, Value, json};

use business::domain::product::model::Product;
use business::domain::product::value_objects::{Barcode, ExportFilter, UpsertPolicy};

use crate::db::CypherStatement;

/// Point lookup of a product with its related attribute entities.
pub fn find_by_barcode(barcode: &Barcode) -> CypherStatement {
    let statement = r#"MATCH (p:Product {barcode: $barcode})
OPTIONAL MATCH (p)-[:BELONGS_TO]->(b:Brand)
OPTIONAL MATCH (p)-[:CLASSIFIED_AS]->(c:Category)
OPTIONAL MATCH (p)-[:MANUFACTURED_BY]->(m:Manufacturer)
OPTIONAL MATCH (p)-[:HAS_IMAGE]->(i:Image)
RETURN p.barcode AS barcode, p.title AS title, c.name AS category,
       m.name AS manufacturer, b.name AS brand, i.url AS image,
       p.mpn AS mpn, p.model AS model, p.asin AS asin,
       p.ingredients AS ingredients, p.nutrition_facts AS nutrition_facts,
       p.description AS description"#;

    CypherStatement::new(statement, json!({ "barcode": barcode.as_str() }))
}

/// Idempotent upsert of a product and its attribute entities. The statement
/// is assembled from the attributes actually present, so absent values never
/// create empty-keyed entities. Scalar properties follow the policy: set only
/// on node creation, or re-set on every call.
pub fn upsert(product: &Product, policy: UpsertPolicy) -> CypherStatement {
    let mut parameters = Map::new();
    parameters.insert("barcode".to_string(), json!(product.barcode.as_str()));

    let scalars = [
        ("title", &product.title),
        ("mpn", &product.mpn),
        ("model", &product.model),
        ("asin", &product.asin),
        ("ingredients", &product.ingredients),
        ("nutrition_facts", &product.nutrition_facts),
        ("description", &product.description),
    ];

    let mut assignments = Vec::new();
    for (name, value) in scalars {
        if let Some(value) = value {
            assignments.push(format!("p.{} = ${}", name, name));
            parameters.insert(name.to_string(), json!(value));
        }
    }

    let mut statement = String::from("MERGE (p:Product {barcode: $barcode})");
    if !assignments.is_empty() {
        let keyword = match policy {
            UpsertPolicy::CreateOnce => "ON CREATE SET",
            UpsertPolicy::Overwrite => "SET",
        };
        statement.push_str(&format!("\n{} {}", keyword, assignments.join(", ")));
    }

    if let Some(brand) = &product.brand {
        statement.push_str("\nMERGE (b:Brand {name: $brand})");
        statement.push_str("\nMERGE (p)-[:BELONGS_TO]->(b)");
        parameters.insert("brand".to_string(), json!(brand));
    }
    if let Some(category) = &product.category {
        statement.push_str("\nMERGE (c:Category {name: $category})");
        statement.push_str("\nMERGE (p)-[:CLASSIFIED_AS]->(c)");
        parameters.insert("category".to_string(), json!(category));
    }
    if let Some(manufacturer) = &product.manufacturer {
        statement.push_str("\nMERGE (m:Manufacturer {name: $manufacturer})");
        statement.push_str("\nMERGE (p)-[:MANUFACTURED_BY]->(m)");
        parameters.insert("manufacturer".to_string(), json!(manufacturer));
    }
    if let Some(image) = &product.image {
        statement.push_str("\nMERGE (i:Image {url: $image})");
        statement.push_str("\nMERGE (p)-[:HAS_IMAGE]->(i)");
        parameters.insert("image".to_string(), json!(image));
    }

    CypherStatement::new(statement, Value::Object(parameters))
}

/// Full-catalog scan flattened to export rows, ordered by barcode so export
/// files are deterministic.
pub fn export_all(filter: ExportFilter) -> CypherStatement {
    let statement = match filter {
        ExportFilter::All => {
            r#"MATCH (p:Product)
OPTIONAL MATCH (p)-[:CLASSIFIED_AS]->(c:Category)
OPTIONAL MATCH (p)-[:MANUFACTURED_BY]->(m:Manufacturer)
OPTIONAL MATCH (p)-[:BELONGS_TO]->(b:Brand)
OPTIONAL MATCH (p)-[:HAS_IMAGE]->(i:Image)
RETURN p.title AS title, c.name AS category, m.name AS manufacturer, b.name AS brand, i.url AS image
ORDER BY p.barcode"#
        }
        ExportFilter::CompleteOnly => {
            r#"MATCH (p:Product)-[:CLASSIFIED_AS]->(c:Category), (p)-[:MANUFACTURED_BY]->(m:Manufacturer), (p)-[:BELONGS_TO]->(b:Brand)
OPTIONAL MATCH (p)-[:HAS_IMAGE]->(i:Image)
RETURN p.title AS title, c.name AS category, m.name AS manufacturer, b.name AS brand, i.url AS image
ORDER BY p.barcode"#
        }
    };

    CypherStatement::new(statement, json!({}))
}
