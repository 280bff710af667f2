use super::admin::AdminInfo;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
    pub admin: AdminInfo,
}

/// JWT claims for an admin session. `sub` carries the admin id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub jti: String,
    pub sub: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub username: String,
}

impl Claims {
    pub fn new(iss: String, admin_id: i32, username: String, expire_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            jti: Uuid::new_v4().to_string(),
            sub: admin_id.to_string(),
            iss,
            exp: now + expire_secs,
            iat: now,
            username,
        }
    }

    /// Admin id carried in `sub`, `None` when the subject is not numeric.
    #[inline]
    pub fn admin_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_expire_after_configured_seconds() {
        let claims = Claims::new("site-cms".into(), 7, "root".into(), 3600);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(claims.admin_id(), Some(7));
    }

    #[test]
    fn non_numeric_subject_has_no_admin_id() {
        let mut claims = Claims::new("site-cms".into(), 1, "root".into(), 60);
        claims.sub = "root".into();
        assert_eq!(claims.admin_id(), None);
    }
}
