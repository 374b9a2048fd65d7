/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.connection")]
    Connection,
    #[error("repository.query")]
    Query,
}

/// Remote lookup errors. Communication failures land here; "the service
/// knows nothing about this barcode" is not an error (see the lookup port).
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup.request_failed")]
    RequestFailed,
    #[error("lookup.malformed_response")]
    MalformedResponse,
}
