use serde::{Deserialize, Serialize};

use super::flexible;

/// One entry of the append-only status log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusHistoryEntry {
    #[serde(default, deserialize_with = "flexible::opt_i64")]
    pub id: Option<i64>,
    pub status: String,
    /// Epoch milliseconds, as sent by the backend
    #[serde(deserialize_with = "flexible::string")]
    pub updated_at: String,
}

/// Shipment as returned by the backend. Each query selects a different
/// subset of fields, so everything but the history is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(default, deserialize_with = "flexible::opt_i64")]
    pub id: Option<i64>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub sender_address: Option<String>,
    #[serde(default)]
    pub recipient_name: Option<String>,
    #[serde(default)]
    pub recipient_address: Option<String>,
    #[serde(default)]
    pub package_weight: Option<f64>,
    #[serde(default)]
    pub package_description: Option<String>,
    #[serde(default)]
    pub package_dimensions: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    pub shipment_date: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    pub expected_delivery_date: Option<String>,
    #[serde(default)]
    pub shipment_status: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub shipping_method: Option<String>,
    #[serde(default)]
    pub insurance_value: Option<f64>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub shipment_cost: Option<f64>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub status_history: Vec<StatusHistoryEntry>,
}

/// Payload of `createShipment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentInput {
    pub recipient_name: String,
    pub recipient_address: String,
    pub package_description: String,
    pub package_weight: f64,
    pub package_dimensions: String,
    pub expected_delivery_date: String,
    pub shipment_status: String,
    pub tracking_number: String,
    pub shipping_method: String,
    pub insurance_value: f64,
    pub special_instructions: Option<String>,
    pub shipment_cost: f64,
    pub payment_method: String,
}

/// Result of `updateShipmentStatus`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    #[serde(default, deserialize_with = "flexible::opt_i64")]
    pub id: Option<i64>,
    pub shipment_status: String,
    #[serde(default)]
    pub status_history: Vec<StatusHistoryEntry>,
}

/// Result of `deleteShipment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedShipment {
    #[serde(default, deserialize_with = "flexible::opt_i64")]
    pub id: Option<i64>,
    #[serde(default)]
    pub shipment_status: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
}
