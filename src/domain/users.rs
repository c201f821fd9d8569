//! User domain types
//!
//! Users are the authenticated actors of the platform. The entity carries
//! the stored credential hash, which never leaves the process: it is
//! skipped on serialization and endpoints expose [`UserResponse`] instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a user in the system
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Gestor,
    Auditor,
    Operador,
}

/// Account status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
    Suspended,
}

impl Default for UserStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub is_active: bool,
    /// Institution the user belongs to; None for platform staff
    pub institution_id: Option<i64>,
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,

    // LGPD consent tracking
    pub consent_given: bool,
    pub consent_date: Option<DateTime<Utc>>,
    pub data_retention_date: Option<DateTime<Utc>>,
}

impl User {
    /// Whether the user may perform `action` on `resource`.
    ///
    /// Resources: "institution", "project", "document".
    /// Actions: "read", "create", "update", "delete".
    pub fn has_permission(&self, resource: &str, action: &str) -> bool {
        match self.role {
            // Admins have full access
            UserRole::Admin => true,

            // Gestores manage their own institution and its projects
            UserRole::Gestor => match resource {
                "institution" => {
                    self.institution_id.is_some() && matches!(action, "read" | "update")
                }
                "project" => matches!(action, "read" | "create" | "update"),
                "document" => matches!(action, "read" | "create"),
                _ => false,
            },

            // Auditores have read access everywhere
            UserRole::Auditor => action == "read",

            // Operadores have limited access
            UserRole::Operador => {
                matches!(resource, "project" | "document") && matches!(action, "read" | "create")
            }
        }
    }

    /// Whether the user may access data of a specific institution.
    pub fn can_access_institution(&self, institution_id: i64) -> bool {
        match self.role {
            UserRole::Admin | UserRole::Auditor => true,
            UserRole::Gestor | UserRole::Operador => self.institution_id == Some(institution_id),
        }
    }
}

/// Request DTO for creating a user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(default)]
    pub institution_id: Option<i64>,
    pub password: String,
    #[serde(default)]
    pub consent_given: bool,
}

/// Request DTO for updating a user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub institution_id: Option<i64>,
}

/// Response DTO for user, credential hash excluded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub is_active: bool,
    pub institution_id: Option<i64>,
    pub last_login: Option<DateTime<Utc>>,
    pub consent_given: bool,
    pub consent_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            full_name: u.full_name,
            role: u.role,
            status: u.status,
            is_active: u.is_active,
            institution_id: u.institution_id,
            last_login: u.last_login,
            consent_given: u.consent_given,
            consent_date: u.consent_date,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_user(role: UserRole, institution_id: Option<i64>) -> User {
        User {
            id: 42,
            email: "gestor@apaecampinas.org.br".into(),
            full_name: "Ana Beatriz Costa".into(),
            role,
            status: UserStatus::Active,
            is_active: true,
            institution_id,
            hashed_password: "$2b$12$abcdefghijklmnopqrstuv".into(),
            last_login: None,
            created_at: "2024-01-15T08:00:00Z".parse().unwrap(),
            updated_at: None,
            consent_given: true,
            consent_date: Some("2024-01-15T08:00:00Z".parse().unwrap()),
            data_retention_date: None,
        }
    }

    #[test]
    fn test_hashed_password_never_serialized() {
        let user = sample_user(UserRole::Gestor, Some(1));
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("hashed_password").is_none());

        // And the entity still deserializes from payloads without it
        let back: User = serde_json::from_value(json).unwrap();
        assert!(back.hashed_password.is_empty());
        assert_eq!(back.email, user.email);
    }

    #[test]
    fn test_gestor_permissions_scoped_to_institution() {
        let gestor = sample_user(UserRole::Gestor, Some(1));
        assert!(gestor.has_permission("institution", "update"));
        assert!(!gestor.has_permission("institution", "delete"));
        assert!(gestor.has_permission("project", "create"));
        assert!(gestor.can_access_institution(1));
        assert!(!gestor.can_access_institution(2));
    }

    #[test]
    fn test_auditor_is_read_only_everywhere() {
        let auditor = sample_user(UserRole::Auditor, None);
        assert!(auditor.has_permission("project", "read"));
        assert!(!auditor.has_permission("project", "create"));
        assert!(auditor.can_access_institution(7));
    }

    #[test]
    fn test_admin_has_full_access() {
        let admin = sample_user(UserRole::Admin, None);
        assert!(admin.has_permission("institution", "delete"));
        assert!(admin.can_access_institution(99));
    }

    #[test]
    fn test_user_response_drops_lgpd_retention_field() {
        let user = sample_user(UserRole::Operador, Some(3));
        let resp = UserResponse::from(user);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["role"], "operador");
        assert!(json.get("hashed_password").is_none());
        assert!(json.get("data_retention_date").is_none());
    }
}
