use persistence::db::GraphConfig;

/// Reads the graph store connection options from the environment.
///
/// Environment variables:
/// - NEO4J_URI: HTTP endpoint of the graph service (default http://localhost:7474)
/// - NEO4J_USER: user name (default neo4j)
/// - NEO4J_PASSWORD: password (required)
/// - NEO4J_DATABASE: database name (default neo4j)
pub fn from_env() -> GraphConfig {
    let uri = std::env::var("NEO4J_URI").unwrap_or_else(|_| "http://localhost:7474".to_string());
    let user = std::env::var("NEO4J_USER").unwrap_or_else(|_| "neo4j".to_string());
    let password =
        std::env::var("NEO4J_PASSWORD").expect("NEO4J_PASSWORD environment variable must be set");
    let database = std::env::var("NEO4J_DATABASE").unwrap_or_else(|_| "neo4j".to_string());

    GraphConfig {
        uri,
        user,
        password,
        database,
    }
}
