//! Legacy pre-v1 API shapes
//!
//! The first iteration of the platform exposed flat summary resources and
//! username-based authentication. Those shapes are incompatible with the
//! canonical ones in [`crate::domain`] (different field sets, different
//! status domains, username instead of email) and are kept here, clearly
//! separated, for clients that still speak the old surface. Projections
//! from canonical entities are one-way and lossy; nothing in this module
//! deserializes back into a canonical type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain;
use crate::domain::users::UserRole;

/// Legacy institution status domain, narrower than
/// [`domain::institutions::CredentialStatus`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionStatus {
    Pending,
    Approved,
    Suspended,
    Rejected,
}

/// Flat institution summary of the pre-v1 surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub id: i64,
    pub cnpj: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub status: InstitutionStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&domain::Institution> for Institution {
    fn from(inst: &domain::Institution) -> Self {
        use domain::institutions::CredentialStatus;

        let status = match inst.credential_status {
            CredentialStatus::Pending => InstitutionStatus::Pending,
            CredentialStatus::Active => InstitutionStatus::Approved,
            // The old surface had no separate inactive/expired states
            CredentialStatus::Inactive | CredentialStatus::Expired => {
                InstitutionStatus::Suspended
            }
            CredentialStatus::Rejected => InstitutionStatus::Rejected,
        };

        Self {
            id: inst.id,
            cnpj: inst.cnpj.clone(),
            name: inst.name.clone(),
            city: inst.city.clone(),
            state: inst.state.clone(),
            status,
            created_at: inst.created_at,
        }
    }
}

/// Flat project summary of the pre-v1 surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub institution_id: i64,
    pub title: String,
    pub status: String,
    pub budget_total: Decimal,
    pub timeline_months: u32,
    pub created_at: DateTime<Utc>,
}

impl From<&domain::Project> for Project {
    fn from(p: &domain::Project) -> Self {
        use domain::projects::ProjectStatus;

        // Old clients received the status as a bare string
        let status = match p.status {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Submitted => "submitted",
            ProjectStatus::UnderReview => "under_review",
            ProjectStatus::Approved => "approved",
            ProjectStatus::Rejected => "rejected",
            ProjectStatus::InExecution => "in_execution",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        };

        Self {
            id: p.id,
            institution_id: p.institution_id,
            title: p.title.clone(),
            status: status.to_string(),
            budget_total: p.budget_total,
            timeline_months: p.timeline_months,
            created_at: p.created_at,
        }
    }
}

/// Legacy user: a username plus a flat permission list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub permissions: Vec<String>,
}

impl From<&domain::User> for User {
    fn from(u: &domain::User) -> Self {
        let permissions = match u.role {
            UserRole::Admin => vec!["read", "write", "admin"],
            UserRole::Gestor | UserRole::Operador => vec!["read", "write"],
            UserRole::Auditor => vec!["read"],
        };

        Self {
            // The old surface used the email's local part as username
            username: u
                .email
                .split('@')
                .next()
                .unwrap_or(u.email.as_str())
                .to_string(),
            permissions: permissions.into_iter().map(String::from).collect(),
        }
    }
}

/// Legacy login request, username-based
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Legacy login response with token expiry instead of a refresh token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}
