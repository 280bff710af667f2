use crate::entities::admin::{ActiveModel, Model as AdminModel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Patch;

/// Admin as exposed over the API, without the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminInfo {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<AdminModel> for AdminInfo {
    fn from(admin: AdminModel) -> Self {
        AdminInfo {
            id: admin.id,
            username: admin.username,
            email: admin.email,
            full_name: admin.full_name,
            role: admin.role,
            is_active: admin.is_active,
            last_login: admin.last_login,
            created_at: admin.created_at,
            updated_at: admin.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
pub struct NewAdmin {
    #[validate(length(min = 3, max = 64, message = "username length must be 3..=64"))]
    pub username: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
}

/// Partial admin update. A new `password` is hashed by the repository.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateAdmin {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub full_name: Option<Option<String>>,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

impl Patch<ActiveModel> for UpdateAdmin {
    fn apply(self, model: &mut ActiveModel) {
        let patch = self;
        apply_patch!(patch => model { email, full_name, role, is_active });
    }
}
