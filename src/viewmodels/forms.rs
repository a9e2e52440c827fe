// ============================================================================
// FORMS - Field validation for login, register and shipment forms
// ============================================================================
// Runs before any request is sent. Messages are shown as-is.
// ============================================================================

use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::{ShipmentInput, UserInput};

fn required(value: &str, label: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AppError::Validation(format!("{} is required", label)))
    } else {
        Ok(trimmed.to_string())
    }
}

fn numeric(value: &str, label: &str) -> Result<f64, AppError> {
    let text = required(value, label)?;
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::Validation(format!("{} should be numerical", label)))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Returns `(email, password)`
    pub fn validate(&self) -> Result<(String, String), AppError> {
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(AppError::Validation("Password is required".to_string()));
        }
        Ok((email, self.password.clone()))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub address: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<UserInput, AppError> {
        let name = required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?;
        if !email.contains('@') {
            return Err(AppError::Validation("Email is not valid".to_string()));
        }
        if self.password.is_empty() {
            return Err(AppError::Validation("Password is required".to_string()));
        }
        if self.password != self.confirm_password {
            return Err(AppError::Validation("Password doesn't match".to_string()));
        }
        let address = required(&self.address, "Address")?;

        Ok(UserInput {
            name,
            email,
            password: self.password.clone(),
            address,
        })
    }
}

/// Raw text of the create-shipment form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShipmentForm {
    pub recipient_name: String,
    pub recipient_address: String,
    pub package_weight: String,
    pub package_description: String,
    pub package_dimensions: String,
    pub expected_delivery_date: String,
    pub shipment_status: String,
    pub tracking_number: String,
    pub shipping_method: String,
    pub insurance_value: String,
    pub special_instructions: String,
    pub shipment_cost: String,
    pub payment_method: String,
}

impl ShipmentForm {
    pub fn validate(&self) -> Result<ShipmentInput, AppError> {
        let recipient_name = required(&self.recipient_name, "Recipient Name")?;
        let recipient_address = required(&self.recipient_address, "Recipient Address")?;
        let package_weight = numeric(&self.package_weight, "Package Weight")?;
        let package_description = required(&self.package_description, "Package Description")?;
        let package_dimensions = required(&self.package_dimensions, "Package Dimensions")?;

        // <input type="date"> yields YYYY-MM-DD; the backend wants a full timestamp
        let date_text = required(&self.expected_delivery_date, "Expected Delivery Date")?;
        let expected_delivery_date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc().to_rfc3339())
            .ok_or_else(|| AppError::Validation("Expected Delivery Date is not a valid date".to_string()))?;

        let shipment_status = required(&self.shipment_status, "Shipment Status")?;
        let tracking_number = required(&self.tracking_number, "Tracking Number")?;
        let shipping_method = required(&self.shipping_method, "Shipping Method")?;
        let insurance_value = numeric(&self.insurance_value, "Insurance Value")?;
        let shipment_cost = numeric(&self.shipment_cost, "Shipment Cost")?;
        let payment_method = required(&self.payment_method, "Payment Method")?;

        let special_instructions = Some(self.special_instructions.trim().to_string()).filter(|s| !s.is_empty());

        Ok(ShipmentInput {
            recipient_name,
            recipient_address,
            package_description,
            package_weight,
            package_dimensions,
            expected_delivery_date,
            shipment_status,
            tracking_number,
            shipping_method,
            insurance_value,
            special_instructions,
            shipment_cost,
            payment_method,
        })
    }
}

pub fn validate_status(status: &str) -> Result<String, AppError> {
    required(status, "Shipment Status")
}

pub fn validate_tracking_number(tracking_number: &str) -> Result<String, AppError> {
    required(tracking_number, "Tracking Number")
}
