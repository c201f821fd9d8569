//! Project monitoring domain types
//!
//! Periodic measurements reported against a project's goals during
//! execution.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monitoring entry for a project, optionally tied to a specific goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMonitoring {
    pub id: i64,
    pub project_id: i64,
    pub goal_id: Option<i64>,
    pub monitoring_date: DateTime<Utc>,
    pub achieved_value: Decimal,
    pub observations: Option<String>,
    pub challenges: Option<String>,
    pub corrective_actions: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for reporting a monitoring entry
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectMonitoringRequest {
    #[serde(default)]
    pub goal_id: Option<i64>,
    pub monitoring_date: DateTime<Utc>,
    pub achieved_value: Decimal,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub corrective_actions: Option<String>,
}
