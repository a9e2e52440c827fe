// ============================================================================
// DASHBOARD VIEWMODEL - Role-aware listing and shipment mutations
// ============================================================================
// Returns values only; the dashboard component owns the state.
// ============================================================================

use crate::error::AppError;
use crate::models::{DeletedShipment, Role, Session, Shipment, StatusUpdate};
use crate::services::Gateway;
use crate::utils::{format_amount, format_optional_timestamp};
use crate::viewmodels::forms::{validate_status, ShipmentForm};

/// Which listing query a session is allowed to run
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShipmentScope {
    Owned(i64),
    All,
}

impl ShipmentScope {
    pub fn for_session(session: &Session) -> Self {
        match session.role {
            Role::Customer => ShipmentScope::Owned(session.subject_id),
            Role::Admin | Role::Staff => ShipmentScope::All,
        }
    }
}

/// Actions offered in the dashboard for a role
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashboardPermissions {
    pub can_create: bool,
    pub can_delete: bool,
    pub can_update_status: bool,
}

impl DashboardPermissions {
    pub fn for_role(role: Role) -> Self {
        Self {
            can_create: role.can_create_shipments(),
            can_delete: role.can_delete_shipments(),
            can_update_status: role.can_update_status(),
        }
    }
}

pub const TABLE_COLUMNS: [&str; 16] = [
    "ID",
    "Sender Name",
    "Sender Address",
    "Recipient Name",
    "Recipient Address",
    "Package Weight(kg)",
    "Package Description",
    "Package Dimensions",
    "Expected Delivery Date",
    "Shipment Status",
    "Tracking Number",
    "Shipping Method",
    "Insurance Value",
    "Special Instructions",
    "Shipment Cost",
    "Payment Method",
];

/// Display cells for one table row, in `TABLE_COLUMNS` order
pub fn row_cells(shipment: &Shipment) -> Vec<String> {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    vec![
        shipment.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
        text(&shipment.sender_name),
        text(&shipment.sender_address),
        text(&shipment.recipient_name),
        text(&shipment.recipient_address),
        shipment
            .package_weight
            .map(|w| w.to_string())
            .unwrap_or_else(|| "-".to_string()),
        text(&shipment.package_description),
        text(&shipment.package_dimensions),
        format_optional_timestamp(shipment.expected_delivery_date.as_deref()),
        text(&shipment.shipment_status),
        text(&shipment.tracking_number),
        text(&shipment.shipping_method),
        format_amount(shipment.insurance_value),
        text(&shipment.special_instructions),
        format_amount(shipment.shipment_cost),
        text(&shipment.payment_method),
    ]
}

#[derive(Clone)]
pub struct DashboardViewModel {
    gateway: Gateway,
}

impl DashboardViewModel {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Customers get their own shipments; everyone else the full listing
    pub async fn load_shipments(&self, session: &Session) -> Result<Vec<Shipment>, AppError> {
        let shipments = match ShipmentScope::for_session(session) {
            ShipmentScope::Owned(user_id) => self.gateway.get_shipments_by_user(user_id).await?,
            ShipmentScope::All => self.gateway.get_shipments().await?,
        };
        log::info!("📦 {} shipments loaded", shipments.len());
        Ok(shipments)
    }

    pub async fn create_shipment(&self, form: &ShipmentForm) -> Result<Shipment, AppError> {
        let input = form.validate()?;
        let created = self.gateway.create_shipment(&input).await?;
        log::info!("✅ Shipment {} created", input.tracking_number);
        Ok(created)
    }

    pub async fn update_status(&self, shipment_id: i64, status: &str) -> Result<StatusUpdate, AppError> {
        let status = validate_status(status)?;
        let update = self.gateway.update_shipment_status(shipment_id, &status).await?;
        log::info!("✅ Shipment {} is now '{}'", shipment_id, update.shipment_status);
        Ok(update)
    }

    pub async fn delete_shipment(&self, shipment_id: i64) -> Result<DeletedShipment, AppError> {
        let deleted = self.gateway.delete_shipment(shipment_id).await?;
        log::info!("🗑️ Shipment {} deleted", shipment_id);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::RecordingTransport;
    use crate::services::MemoryTokenStore;
    use chrono::{DateTime, Utc};
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn session(subject_id: i64, role: Role) -> Session {
        Session {
            subject_id,
            role,
            expires_at: DateTime::<Utc>::from_timestamp(2_000_000_000, 0).unwrap(),
        }
    }

    fn viewmodel() -> (Rc<RecordingTransport>, DashboardViewModel) {
        let transport = Rc::new(RecordingTransport::new());
        transport.respond(
            "GetShipments",
            Ok(json!({ "getShipments": [{ "id": 1 }, { "id": 2 }] })),
        );
        transport.respond(
            "GetShipmentsByUser",
            Ok(json!({ "getShipmentsByUser": [{ "id": 2 }] })),
        );
        let gateway = Gateway::new(transport.clone(), Rc::new(MemoryTokenStore::with_credential("t")));
        (transport, DashboardViewModel::new(gateway))
    }

    #[test]
    fn customers_only_list_their_own_shipments() {
        let (transport, vm) = viewmodel();

        let shipments = block_on(vm.load_shipments(&session(42, Role::Customer))).unwrap();

        assert_eq!(shipments.len(), 1);
        assert_eq!(transport.count("GetShipments"), 0);
        let call = &transport.calls()[0];
        assert_eq!(call.operation, "GetShipmentsByUser");
        assert_eq!(call.variables["userId"], 42);
    }

    #[test]
    fn other_roles_get_the_unfiltered_listing() {
        for role in [Role::Admin, Role::Staff] {
            let (transport, vm) = viewmodel();
            let shipments = block_on(vm.load_shipments(&session(42, role))).unwrap();

            assert_eq!(shipments.len(), 2);
            assert_eq!(transport.count("GetShipments"), 1);
            assert_eq!(transport.count("GetShipmentsByUser"), 0);
        }
    }

    #[test]
    fn listing_errors_reach_the_view() {
        let transport = Rc::new(RecordingTransport::new());
        transport.respond("GetShipments", Err(AppError::Transport("offline".into())));
        let gateway = Gateway::new(transport.clone(), Rc::new(MemoryTokenStore::new()));
        let vm = DashboardViewModel::new(gateway);

        assert_eq!(
            block_on(vm.load_shipments(&session(1, Role::Admin))),
            Err(AppError::Transport("offline".into()))
        );
    }

    #[test]
    fn invalid_forms_never_reach_the_network() {
        let (transport, vm) = viewmodel();

        let result = block_on(vm.create_shipment(&ShipmentForm::default()));
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = block_on(vm.update_status(3, " "));
        assert!(matches!(result, Err(AppError::Validation(_))));

        assert!(transport.calls().is_empty());
    }

    #[test]
    fn permissions_follow_role() {
        let customer = DashboardPermissions::for_role(Role::Customer);
        assert!(customer.can_create && customer.can_delete && customer.can_update_status);

        let staff = DashboardPermissions::for_role(Role::Staff);
        assert!(!staff.can_create && !staff.can_delete && staff.can_update_status);
    }

    #[test]
    fn row_cells_match_columns() {
        let shipment = Shipment {
            id: Some(9),
            tracking_number: Some("TRK9".into()),
            shipment_cost: Some(3.0),
            expected_delivery_date: Some("0".into()),
            ..Shipment::default()
        };
        let cells = row_cells(&shipment);

        assert_eq!(cells.len(), TABLE_COLUMNS.len());
        assert_eq!(cells[0], "9");
        assert_eq!(cells[1], "-");
        assert_eq!(cells[8], "Thu Jan 01 1970 00:00 UTC");
        assert_eq!(cells[10], "TRK9");
        assert_eq!(cells[14], "3.00");
    }
}
