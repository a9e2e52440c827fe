// ============================================================================
// SESSION DECODER - Credential (JWT) -> Session, no network
// ============================================================================

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::flexible;
use crate::models::{Role, Session};

/// Claims the backend puts in its tokens. The signature is not checked here.
#[derive(Debug, Deserialize)]
struct TokenClaims {
    #[serde(rename = "userId", alias = "sub", default, deserialize_with = "flexible::opt_string")]
    user_id: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    role: Option<String>,
    #[serde(default)]
    exp: Option<f64>,
}

pub fn decode_session(credential: Option<&str>) -> Result<Session, AppError> {
    let token = credential
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Decode("no credential stored".to_string()))?;

    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return Err(AppError::Decode("credential is not a JWT".to_string())),
    };

    // Some issuers keep the padding; the no-pad engine rejects it
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AppError::Decode(format!("payload is not base64url: {}", e)))?;

    let claims: TokenClaims = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Decode(format!("payload is not valid claims JSON: {}", e)))?;

    let subject_id = claims
        .user_id
        .ok_or_else(|| AppError::Decode("missing user id claim".to_string()))?
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::Decode("user id claim is not numeric".to_string()))?;

    let role = Role::from_code(
        &claims
            .role
            .ok_or_else(|| AppError::Decode("missing role claim".to_string()))?,
    )?;

    let exp = claims
        .exp
        .ok_or_else(|| AppError::Decode("missing exp claim".to_string()))?;
    let expires_at = DateTime::<Utc>::from_timestamp(exp.floor() as i64, 0)
        .ok_or_else(|| AppError::Decode("exp claim out of range".to_string()))?;

    Ok(Session {
        subject_id,
        role,
        expires_at,
    })
}

/// A session is only usable strictly before its expiry
pub fn validate_session(session: Session, now: DateTime<Utc>) -> Result<Session, AppError> {
    if session.is_valid_at(now) {
        Ok(session)
    } else {
        Err(AppError::Expired)
    }
}


#[cfg(test)]
mod tests {
    use super::test_tokens::{token_for, token_with_claims};
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    #[test]
    fn decodes_identity_role_and_expiry() {
        let exp = Utc::now().timestamp() + 3600;
        let session = decode_session(Some(&token_for(42, "0", exp))).unwrap();

        assert_eq!(session.subject_id, 42);
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.expires_at.timestamp(), exp);
    }

    #[test]
    fn accepts_sub_and_string_claims() {
        let token = token_with_claims(json!({ "sub": "7", "role": 1, "exp": 2000000000 }));
        let session = decode_session(Some(&token)).unwrap();
        assert_eq!(session.subject_id, 7);
        assert_eq!(session.role, Role::Customer);
    }

    #[test]
    fn absent_or_blank_credential_fails() {
        assert!(matches!(decode_session(None), Err(AppError::Decode(_))));
        assert!(matches!(decode_session(Some("  ")), Err(AppError::Decode(_))));
    }

    #[test]
    fn malformed_credentials_fail() {
        for bad in ["not-a-token", "a.b", "a.b.c.d", "x.%%%.y", "x.aGVsbG8.y"] {
            assert!(
                matches!(decode_session(Some(bad)), Err(AppError::Decode(_))),
                "{} should not decode",
                bad
            );
        }
    }

    #[test]
    fn missing_claims_fail() {
        let no_role = token_with_claims(json!({ "userId": 1, "exp": 2000000000 }));
        let no_exp = token_with_claims(json!({ "userId": 1, "role": "0" }));
        let no_user = token_with_claims(json!({ "role": "0", "exp": 2000000000 }));
        let bad_role = token_with_claims(json!({ "userId": 1, "role": "9", "exp": 2000000000 }));

        for token in [no_role, no_exp, no_user, bad_role] {
            assert!(matches!(decode_session(Some(&token)), Err(AppError::Decode(_))));
        }
    }

    #[test]
    fn expiry_is_exclusive() {
        let now = Utc::now();
        let session = Session {
            subject_id: 1,
            role: Role::Staff,
            expires_at: now,
        };
        assert_eq!(validate_session(session.clone(), now), Err(AppError::Expired));
        assert_eq!(
            validate_session(session.clone(), now - Duration::seconds(1)),
            Ok(session)
        );
    }
}
