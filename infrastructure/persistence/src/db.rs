use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("graph.connection_error")]
    ConnectionError,
    #[error("graph.query_error")]
    QueryError,
}

/// Configuration for the graph database connection
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

/// A Cypher statement with its parameters, in the shape the
/// transactional HTTP endpoint expects.
#[derive(Debug, Serialize)]
pub struct CypherStatement {
    pub statement: String,
    pub parameters: Value,
}

impl CypherStatement {
    pub fn new(statement: impl Into<String>, parameters: Value) -> Self {
        Self {
            statement: statement.into(),
            parameters,
        }
    }
}

#[derive(Serialize)]
struct TransactionRequest {
    statements: Vec<CypherStatement>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionResponse {
    #[serde(default)]
    pub results: Vec<StatementResult>,
    #[serde(default)]
    pub errors: Vec<Neo4jError>,
}

#[derive(Debug, Deserialize)]
pub struct StatementResult {
    pub columns: Vec<String>,
    pub data: Vec<RowData>,
}

#[derive(Debug, Deserialize)]
pub struct RowData {
    pub row: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct Neo4jError {
    pub code: String,
    pub message: String,
}

impl StatementResult {
    /// Pairs each returned row with the statement's column names.
    pub fn rows(&self) -> Vec<CypherRow<'_>> {
        self.data
            .iter()
            .map(|data| CypherRow {
                columns: &self.columns,
                values: &data.row,
            })
            .collect()
    }
}

/// One row of a statement result, addressable by column name.
pub struct CypherRow<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl CypherRow<'_> {
    pub fn get(&self, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.values.get(index)
    }

    /// Returns the column as an owned string, treating null as absent.
    pub fn string(&self, column: &str) -> Option<String> {
        self.get(column)?.as_str().map(|s| s.to_string())
    }
}

/// Shared client for the Neo4j transactional Cypher endpoint.
pub struct CypherClient {
    client: Client,
    endpoint: String,
    user: String,
    password: String,
}

impl CypherClient {
    pub fn new(config: &GraphConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        let endpoint = format!(
            "{}/db/{}/tx/commit",
            config.uri.trim_end_matches('/'),
            config.database
        );

        Self {
            client,
            endpoint,
            user: config.user.clone(),
            password: config.password.clone(),
        }
    }

    /// Commits the statements in a single transaction and returns one
    /// result per statement, in order.
    pub async fn commit(
        &self,
        statements: Vec<CypherStatement>,
    ) -> Result<Vec<StatementResult>, GraphError> {
        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.user, Some(&self.password))
            .json(&TransactionRequest { statements })
            .send()
            .await
            .map_err(|_| GraphError::ConnectionError)?;

        if !response.status().is_success() {
            tracing::error!("graph endpoint returned {}", response.status());
            return Err(GraphError::ConnectionError);
        }

        let transaction: TransactionResponse =
            response.json().await.map_err(|_| GraphError::QueryError)?;

        // The endpoint answers 200 OK even when a statement fails; the
        // failure shows up in the errors array.
        if let Some(error) = transaction.errors.first() {
            tracing::error!("graph transaction failed: {} {}", error.code, error.message);
            return Err(GraphError::QueryError);
        }

        Ok(transaction.results)
    }

    /// Runs a single statement and returns its result.
    pub async fn run(&self, statement: CypherStatement) -> Result<StatementResult, GraphError> {
        let results = self.commit(vec![statement]).await?;
        results.into_iter().next().ok_or(GraphError::QueryError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_pair_columns_with_row_values() {
        let payload = json!({
            "results": [{
                "columns": ["barcode", "title"],
                "data": [
                    {"row": ["012345678905", "Widget"]},
                    {"row": ["036000291452", null]}
                ]
            }],
            "errors": []
        });

        let transaction: TransactionResponse = serde_json::from_value(payload).unwrap();
        let result = &transaction.results[0];
        let rows = result.rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].string("barcode").unwrap(), "012345678905");
        assert_eq!(rows[0].string("title").unwrap(), "Widget");
        assert_eq!(rows[1].string("title"), None);
    }

    #[test]
    fn should_return_none_for_unknown_column() {
        let payload = json!({
            "results": [{
                "columns": ["barcode"],
                "data": [{"row": ["012345678905"]}]
            }]
        });

        let transaction: TransactionResponse = serde_json::from_value(payload).unwrap();
        let result = &transaction.results[0];
        let rows = result.rows();

        assert!(rows[0].get("brand").is_none());
    }

    #[test]
    fn should_parse_transaction_errors() {
        let payload = json!({
            "results": [],
            "errors": [{
                "code": "Neo.ClientError.Statement.SyntaxError",
                "message": "Invalid input"
            }]
        });

        let transaction: TransactionResponse = serde_json::from_value(payload).unwrap();

        assert_eq!(transaction.errors.len(), 1);
        assert_eq!(
            transaction.errors[0].code,
            "Neo.ClientError.Statement.SyntaxError"
        );
    }

    #[test]
    fn should_serialize_statements_in_endpoint_shape() {
        let request = TransactionRequest {
            statements: vec![CypherStatement::new(
                "MATCH (p:Product {barcode: $barcode}) RETURN p.barcode AS barcode",
                json!({"barcode": "012345678905"}),
            )],
        };

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body["statements"][0]["parameters"]["barcode"],
            "012345678905"
        );
        assert!(
            body["statements"][0]["statement"]
                .as_str()
                .unwrap()
                .starts_with("MATCH")
        );
    }

    #[test]
    fn should_build_commit_endpoint_from_config() {
        let config = GraphConfig {
            uri: "http://localhost:7474/".to_string(),
            user: "neo4j".to_string(),
            password: "secret".to_string(),
            database: "catalog".to_string(),
        };

        let client = CypherClient::new(&config);

        assert_eq!(
            client.endpoint,
            "http://localhost:7474/db/catalog/tx/commit"
        );
    }
}
