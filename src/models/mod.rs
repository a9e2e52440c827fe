pub mod session;
pub mod shipment;
pub mod auth;

pub use session::{Role, Session};
pub use shipment::{DeletedShipment, Shipment, ShipmentInput, StatusHistoryEntry, StatusUpdate};
pub use auth::{AuthProfile, LoginPayload, RoleRef, User, UserInput};

/// Deserializers tolerant of GraphQL `ID`/`Int` fields arriving as strings or numbers
pub(crate) mod flexible {
    use serde::{de, Deserialize, Deserializer};
    use serde_json::Value;

    fn value_to_string(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        value_to_string(value).ok_or_else(|| de::Error::custom("expected string or number"))
    }

    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(value_to_string))
    }

    pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| de::Error::custom("expected an integer id")),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid id '{}'", s))),
            Some(_) => Err(de::Error::custom("expected string or number")),
        }
    }
}
