//! Priority area domain types
//!
//! The funding categories of Art. 10, each with its own eligibility and
//! budget rules. The guideline fields are loosely typed JSON on purpose:
//! their structure is owned by ministry regulation and changes without a
//! schema migration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority area entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityArea {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub requirements: Option<serde_json::Value>,
    pub typical_actions: Option<Vec<String>>,
    pub budget_guidelines: Option<serde_json::Value>,
    pub team_guidelines: Option<serde_json::Value>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for registering a priority area
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePriorityAreaRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<serde_json::Value>,
    #[serde(default)]
    pub typical_actions: Option<Vec<String>>,
    #[serde(default)]
    pub budget_guidelines: Option<serde_json::Value>,
    #[serde(default)]
    pub team_guidelines: Option<serde_json::Value>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
