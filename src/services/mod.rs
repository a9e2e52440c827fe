pub mod token_store;
pub mod session_decoder;
pub mod graphql_client;
pub mod gateway;
pub mod auth_service;
pub mod app_services;

#[cfg(test)]
pub(crate) mod testing;

pub use token_store::{LocalStorageTokenStore, MemoryTokenStore, TokenStore};
pub use session_decoder::{decode_session, validate_session};
pub use graphql_client::{GraphqlRequest, GraphqlTransport, HttpTransport};
pub use gateway::Gateway;
pub use auth_service::{check_credential, GuardOutcome, Rejection, SessionProvider};
pub use app_services::AppServices;
