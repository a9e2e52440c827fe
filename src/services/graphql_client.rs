// ============================================================================
// GRAPHQL CLIENT - Stateless HTTP transport
// ============================================================================
// Sends one document per request. No retry, cache or batching.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Body POSTed to the GraphQL endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: &'static str,
    pub variables: Value,
    pub operation_name: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorItem {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorItem>>,
}

impl GraphqlResponse {
    /// Any entry in `errors` fails the whole operation
    pub fn into_data(self) -> Result<Value, AppError> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            for error in &errors {
                log::error!(
                    "[GraphQL error]: Message: {}, Path: {:?}",
                    error.message,
                    error.path
                );
            }
            let message = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AppError::Remote(message));
        }

        match self.data {
            Some(Value::Null) | None => Err(AppError::Remote("Empty response from server".to_string())),
            Some(data) => Ok(data),
        }
    }
}

/// Seam between the gateway and the network
#[async_trait(?Send)]
pub trait GraphqlTransport {
    /// Executes `request` and returns its `data` object
    async fn execute(&self, request: &GraphqlRequest, bearer: Option<&str>) -> Result<Value, AppError>;
}

/// Real transport over `fetch`
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl GraphqlTransport for HttpTransport {
    async fn execute(&self, request: &GraphqlRequest, bearer: Option<&str>) -> Result<Value, AppError> {
        let mut builder = Request::post(&self.endpoint).header("Content-Type", "application/json");
        if let Some(token) = bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        log::debug!("📡 GraphQL {}", request.operation_name.unwrap_or("anonymous"));

        let response = builder
            .json(request)
            .map_err(|e| AppError::Transport(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| {
                log::error!("[Network error]: {}", e);
                AppError::Transport(e.to_string())
            })?;

        // GraphQL servers often report errors with a 4xx/5xx status and a JSON body
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            log::error!("[Network error]: {}", e);
            AppError::Transport(e.to_string())
        })?;

        match serde_json::from_str::<GraphqlResponse>(&body) {
            Ok(envelope) => envelope.into_data(),
            Err(_) if !(200..300).contains(&status) => {
                log::error!("[Network error]: HTTP {}", status);
                Err(AppError::Transport(format!("HTTP {}: {}", status, response.status_text())))
            }
            Err(e) => Err(AppError::Transport(format!("Parse error: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> GraphqlResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn data_is_returned_when_no_errors() {
        let data = envelope(json!({ "data": { "getShipments": [] } }))
            .into_data()
            .unwrap();
        assert_eq!(data, json!({ "getShipments": [] }));
    }

    #[test]
    fn errors_win_over_partial_data() {
        let result = envelope(json!({
            "data": { "login": null },
            "errors": [
                { "message": "Invalid credentials", "path": ["login"] },
                { "message": "Second" }
            ]
        }))
        .into_data();
        assert_eq!(result, Err(AppError::Remote("Invalid credentials; Second".into())));
    }

    #[test]
    fn empty_errors_array_is_ignored() {
        let data = envelope(json!({ "data": { "ok": true }, "errors": [] }))
            .into_data()
            .unwrap();
        assert_eq!(data["ok"], true);
    }

    #[test]
    fn missing_data_is_a_remote_error() {
        assert!(matches!(envelope(json!({})).into_data(), Err(AppError::Remote(_))));
        assert!(matches!(
            envelope(json!({ "data": null })).into_data(),
            Err(AppError::Remote(_))
        ));
    }

    #[test]
    fn request_body_uses_graphql_field_names() {
        let request = GraphqlRequest {
            query: "query { x }",
            variables: json!({ "id": 1 }),
            operation_name: Some("X"),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["operationName"], "X");
        assert_eq!(body["variables"]["id"], 1);
    }
}
