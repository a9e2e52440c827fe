use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;

/// Roles known to the backend, decoded from the `role` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Customer,
    Staff,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Customer, Role::Staff];

    /// Maps the backend role code (`0`, `1`, `2`)
    pub fn from_code(code: &str) -> Result<Self, AppError> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.code() == code)
            .ok_or_else(|| AppError::Decode(format!("unknown role code '{}'", code)))
    }

    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "0",
            Role::Customer => "1",
            Role::Staff => "2",
        }
    }

    /// Customers only ever see the shipments they sent
    pub fn sees_own_shipments_only(&self) -> bool {
        match self {
            Role::Customer => true,
            Role::Admin | Role::Staff => false,
        }
    }

    pub fn can_create_shipments(&self) -> bool {
        match self {
            Role::Customer => true,
            Role::Admin | Role::Staff => false,
        }
    }

    pub fn can_delete_shipments(&self) -> bool {
        match self {
            Role::Customer => true,
            Role::Admin | Role::Staff => false,
        }
    }

    pub fn can_update_status(&self) -> bool {
        match self {
            Role::Admin | Role::Customer | Role::Staff => true,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
            Role::Staff => "staff",
        };
        f.write_str(label)
    }
}

/// Identity decoded from the stored credential. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub subject_id: i64,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn role_codes_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_code(role.code()), Ok(role));
        }
        assert_eq!(Role::from_code(" 1 "), Ok(Role::Customer));
    }

    #[test]
    fn unknown_role_code_is_a_decode_error() {
        assert!(matches!(Role::from_code("7"), Err(AppError::Decode(_))));
        assert!(matches!(Role::from_code("admin"), Err(AppError::Decode(_))));
    }

    #[test]
    fn customer_permissions() {
        assert!(Role::Customer.sees_own_shipments_only());
        assert!(Role::Customer.can_create_shipments());
        assert!(!Role::Admin.sees_own_shipments_only());
        assert!(!Role::Staff.can_delete_shipments());
        assert!(Role::Staff.can_update_status());
    }

    #[test]
    fn session_is_invalid_at_its_expiry_instant() {
        let now = Utc::now();
        let session = Session {
            subject_id: 42,
            role: Role::Admin,
            expires_at: now,
        };
        assert!(!session.is_valid_at(now));
        assert!(session.is_valid_at(now - Duration::seconds(1)));
    }
}
