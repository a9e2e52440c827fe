// ============================================================================
// GATEWAY - Typed GraphQL operations
// ============================================================================
// Each operation binds one fixed document to its variables. The stored
// credential is attached to everything except login and register. Errors
// are handed back to the caller untouched.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::models::{
    AuthProfile, DeletedShipment, LoginPayload, Shipment, ShipmentInput, StatusUpdate, User, UserInput,
};
use crate::services::graphql_client::{GraphqlRequest, GraphqlTransport};
use crate::services::token_store::TokenStore;

const SHIPMENT_INFO_QUERY: &str = r#"
query ShipmentInfo($trackingNumber: String!) {
  getShipment(trackingNumber: $trackingNumber) {
    senderName
    senderAddress
    recipientName
    recipientAddress
    shipmentDate
    expectedDeliveryDate
    shipmentStatus
    shippingMethod
    statusHistory {
      status
      updatedAt
    }
  }
}"#;

const LOGIN_QUERY: &str = r#"
query Login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    userId
    token
    tokenExpiration
    role
  }
}"#;

const CREATE_USER_MUTATION: &str = r#"
mutation CreateUser($name: String!, $email: String!, $password: String!, $address: String!) {
  createUser(userInput: { name: $name, email: $email, password: $password, address: $address }) {
    id
    name
    email
    address
    createdAt
    role {
      name
    }
  }
}"#;

const GET_AUTH_QUERY: &str = r#"
query GetAuth($userId: Int!) {
  getAuth(userId: $userId) {
    name
    email
    role {
      id
    }
  }
}"#;

const SHIPMENTS_BY_USER_QUERY: &str = r#"
query GetShipmentsByUser($userId: Int!) {
  getShipmentsByUser(userId: $userId) {
    id
    senderName
    senderAddress
    recipientName
    recipientAddress
    packageWeight
    packageDescription
    packageDimensions
    expectedDeliveryDate
    shipmentStatus
    trackingNumber
    shippingMethod
    insuranceValue
    specialInstructions
    shipmentCost
    paymentMethod
  }
}"#;

const SHIPMENTS_QUERY: &str = r#"
query GetShipments {
  getShipments {
    id
    senderName
    senderAddress
    recipientName
    recipientAddress
    packageWeight
    packageDescription
    packageDimensions
    expectedDeliveryDate
    shipmentStatus
    trackingNumber
    shippingMethod
    insuranceValue
    specialInstructions
    shipmentCost
    paymentMethod
  }
}"#;

const DELETE_SHIPMENT_MUTATION: &str = r#"
mutation DeleteShipment($id: Int!) {
  deleteShipment(id: $id) {
    id
    shipmentStatus
    trackingNumber
  }
}"#;

const UPDATE_STATUS_MUTATION: &str = r#"
mutation UpdateShipmentStatus($id: ID!, $status: String!) {
  updateShipmentStatus(statusUpdateInput: { shipmentId: $id, status: $status }) {
    id
    shipmentStatus
    statusHistory {
      id
      status
      updatedAt
    }
  }
}"#;

const CREATE_SHIPMENT_MUTATION: &str = r#"
mutation CreateShipment(
  $recipientName: String!
  $recipientAddress: String!
  $packageDescription: String!
  $packageWeight: Float!
  $packageDimensions: String!
  $expectedDeliveryDate: String!
  $shipmentStatus: String!
  $trackingNumber: String!
  $shippingMethod: String!
  $insuranceValue: Float!
  $specialInstructions: String
  $shipmentCost: Float!
  $paymentMethod: String!
) {
  createShipment(
    shipmentInput: {
      recipientName: $recipientName
      recipientAddress: $recipientAddress
      packageDescription: $packageDescription
      packageWeight: $packageWeight
      packageDimensions: $packageDimensions
      expectedDeliveryDate: $expectedDeliveryDate
      shipmentStatus: $shipmentStatus
      trackingNumber: $trackingNumber
      shippingMethod: $shippingMethod
      insuranceValue: $insuranceValue
      specialInstructions: $specialInstructions
      shipmentCost: $shipmentCost
      paymentMethod: $paymentMethod
    }
  ) {
    id
    senderName
    senderAddress
    recipientName
    recipientAddress
    packageDescription
    packageWeight
    packageDimensions
    expectedDeliveryDate
    shipmentStatus
    trackingNumber
    shippingMethod
    insuranceValue
    specialInstructions
    shipmentCost
    paymentMethod
  }
}"#;

/// Whether an operation carries the stored credential
#[derive(Clone, Copy, Debug, PartialEq)]
enum Auth {
    Anonymous,
    Bearer,
}

/// Remote data gateway. Cheap to clone; holds no identity of its own
/// beyond the credential read from the injected store.
#[derive(Clone)]
pub struct Gateway {
    transport: Rc<dyn GraphqlTransport>,
    tokens: Rc<dyn TokenStore>,
}

impl PartialEq for Gateway {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport) && Rc::ptr_eq(&self.tokens, &other.tokens)
    }
}

impl Gateway {
    pub fn new(transport: Rc<dyn GraphqlTransport>, tokens: Rc<dyn TokenStore>) -> Self {
        Self { transport, tokens }
    }

    async fn run<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &'static str,
        variables: Value,
        field: &str,
        auth: Auth,
    ) -> Result<T, AppError> {
        let request = GraphqlRequest {
            query,
            variables,
            operation_name: Some(operation),
        };

        let bearer = match auth {
            Auth::Bearer => self.tokens.get_credential(),
            Auth::Anonymous => None,
        };

        let mut data = self.transport.execute(&request, bearer.as_deref()).await?;

        let value = data
            .get_mut(field)
            .map(Value::take)
            .filter(|v| !v.is_null())
            .ok_or_else(|| AppError::Remote(format!("No {} in response", field)))?;

        serde_json::from_value(value)
            .map_err(|e| AppError::Remote(format!("Unexpected {} response: {}", field, e)))
    }

    /// Public lookup by tracking number
    pub async fn get_shipment(&self, tracking_number: &str) -> Result<Shipment, AppError> {
        self.run(
            "ShipmentInfo",
            SHIPMENT_INFO_QUERY,
            json!({ "trackingNumber": tracking_number }),
            "getShipment",
            Auth::Anonymous,
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginPayload, AppError> {
        self.run(
            "Login",
            LOGIN_QUERY,
            json!({ "email": email, "password": password }),
            "login",
            Auth::Anonymous,
        )
        .await
    }

    pub async fn create_user(&self, input: &UserInput) -> Result<User, AppError> {
        self.run(
            "CreateUser",
            CREATE_USER_MUTATION,
            json!({
                "name": input.name,
                "email": input.email,
                "password": input.password,
                "address": input.address,
            }),
            "createUser",
            Auth::Anonymous,
        )
        .await
    }

    /// Server-side confirmation that the stored credential is still live
    pub async fn get_auth(&self, user_id: i64) -> Result<AuthProfile, AppError> {
        self.run(
            "GetAuth",
            GET_AUTH_QUERY,
            json!({ "userId": user_id }),
            "getAuth",
            Auth::Bearer,
        )
        .await
    }

    pub async fn get_shipments(&self) -> Result<Vec<Shipment>, AppError> {
        self.run("GetShipments", SHIPMENTS_QUERY, json!({}), "getShipments", Auth::Bearer)
            .await
    }

    pub async fn get_shipments_by_user(&self, user_id: i64) -> Result<Vec<Shipment>, AppError> {
        self.run(
            "GetShipmentsByUser",
            SHIPMENTS_BY_USER_QUERY,
            json!({ "userId": user_id }),
            "getShipmentsByUser",
            Auth::Bearer,
        )
        .await
    }

    pub async fn create_shipment(&self, input: &ShipmentInput) -> Result<Shipment, AppError> {
        let variables = serde_json::to_value(input)
            .map_err(|e| AppError::Validation(format!("Invalid shipment: {}", e)))?;
        self.run(
            "CreateShipment",
            CREATE_SHIPMENT_MUTATION,
            variables,
            "createShipment",
            Auth::Bearer,
        )
        .await
    }

    pub async fn update_shipment_status(&self, shipment_id: i64, status: &str) -> Result<StatusUpdate, AppError> {
        self.run(
            "UpdateShipmentStatus",
            UPDATE_STATUS_MUTATION,
            json!({ "id": shipment_id.to_string(), "status": status }),
            "updateShipmentStatus",
            Auth::Bearer,
        )
        .await
    }

    pub async fn delete_shipment(&self, shipment_id: i64) -> Result<DeletedShipment, AppError> {
        self.run(
            "DeleteShipment",
            DELETE_SHIPMENT_MUTATION,
            json!({ "id": shipment_id }),
            "deleteShipment",
            Auth::Bearer,
        )
        .await
    }
}
