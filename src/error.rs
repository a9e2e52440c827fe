// ============================================================================
// APP ERROR - Error taxonomy shared by services and views
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Credential absent, malformed or missing expected claims
    #[error("Invalid session: {0}")]
    Decode(String),

    #[error("User session expired. Log in again")]
    Expired,

    /// Network or HTTP failure talking to the GraphQL endpoint
    #[error("Network error: {0}")]
    Transport(String),

    /// The endpoint answered with a GraphQL `errors` payload
    #[error("{0}")]
    Remote(String),

    /// Form input rejected before any request is sent
    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
