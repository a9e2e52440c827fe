use serde::{Deserialize, Serialize};

use super::flexible;

/// Result of the `login` query
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    #[serde(deserialize_with = "flexible::string")]
    pub user_id: String,
    pub token: String,
    /// Lifetime reported by the backend. The session itself trusts `exp`.
    #[serde(default)]
    pub token_expiration: Option<f64>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    pub role: Option<String>,
}

/// Registration form payload (`userInput`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RoleRef {
    #[serde(default, deserialize_with = "flexible::opt_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// User record echoed by `createUser`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "flexible::opt_i64")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub role: Option<RoleRef>,
}

/// Result of `getAuth`, used to confirm a live session server-side
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<RoleRef>,
}
