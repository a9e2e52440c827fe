// Test doubles for the network seam

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;
use crate::services::graphql_client::{GraphqlRequest, GraphqlTransport};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub operation: String,
    pub variables: Value,
    pub bearer: Option<String>,
}

/// Answers each operation with a canned result and records every call
#[derive(Default)]
pub struct RecordingTransport {
    responses: RefCell<HashMap<String, Result<Value, AppError>>>,
    calls: RefCell<Vec<RecordedCall>>,
    /// Runs inside `execute`, before the answer is produced
    during_call: RefCell<Option<Box<dyn Fn()>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, operation: &str, result: Result<Value, AppError>) {
        self.responses.borrow_mut().insert(operation.to_string(), result);
    }

    /// Simulates something happening while a request is in flight
    pub fn during_call(&self, action: impl Fn() + 'static) {
        *self.during_call.borrow_mut() = Some(Box::new(action));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.operation == operation).count()
    }
}

#[async_trait(?Send)]
impl GraphqlTransport for RecordingTransport {
    async fn execute(&self, request: &GraphqlRequest, bearer: Option<&str>) -> Result<Value, AppError> {
        let operation = request.operation_name.unwrap_or_default().to_string();
        self.calls.borrow_mut().push(RecordedCall {
            operation: operation.clone(),
            variables: request.variables.clone(),
            bearer: bearer.map(str::to_string),
        });

        if let Some(action) = self.during_call.borrow().as_ref() {
            action();
        }

        self.responses
            .borrow()
            .get(&operation)
            .cloned()
            .unwrap_or_else(|| Err(AppError::Transport(format!("no canned response for {}", operation))))
    }
}
