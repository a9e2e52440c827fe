// ============================================================================
// TRACKING VIEWMODEL - Public shipment lookup
// ============================================================================

use crate::error::AppError;
use crate::models::Shipment;
use crate::services::Gateway;
use crate::utils::{format_optional_timestamp, format_timestamp};
use crate::viewmodels::forms::validate_tracking_number;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryLine {
    pub at: String,
    pub status: String,
}

/// What the details panel renders
#[derive(Clone, Debug, PartialEq)]
pub struct TrackingDetails {
    pub tracking_number: String,
    pub fields: Vec<(&'static str, String)>,
    pub status: String,
    pub history: Vec<HistoryLine>,
}

impl TrackingDetails {
    /// History is kept in the order the backend returned it
    pub fn from_shipment(shipment: &Shipment) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        let fields = vec![
            ("Sender Name", text(&shipment.sender_name)),
            ("Sender Address", text(&shipment.sender_address)),
            ("Recipient Name", text(&shipment.recipient_name)),
            ("Recipient Address", text(&shipment.recipient_address)),
            ("Shipment Date", format_optional_timestamp(shipment.shipment_date.as_deref())),
            (
                "Expected Delivery Date",
                format_optional_timestamp(shipment.expected_delivery_date.as_deref()),
            ),
            ("Shipping Method", text(&shipment.shipping_method)),
        ];

        let history = shipment
            .status_history
            .iter()
            .map(|entry| HistoryLine {
                at: format_timestamp(&entry.updated_at),
                status: entry.status.clone(),
            })
            .collect();

        Self {
            tracking_number: shipment.tracking_number.clone().unwrap_or_default(),
            fields,
            status: text(&shipment.shipment_status),
            history,
        }
    }
}

#[derive(Clone)]
pub struct TrackingViewModel {
    gateway: Gateway,
}

impl TrackingViewModel {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn track(&self, tracking_number: &str) -> Result<TrackingDetails, AppError> {
        let tracking_number = validate_tracking_number(tracking_number)?;
        log::info!("🔍 Tracking shipment {}", tracking_number);
        let shipment = self.gateway.get_shipment(&tracking_number).await?;
        let mut details = TrackingDetails::from_shipment(&shipment);
        if details.tracking_number.is_empty() {
            details.tracking_number = tracking_number;
        }
        Ok(details)
    }
}
