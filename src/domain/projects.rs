//! Project domain types
//!
//! A project is a funding proposal tied to a credentialed institution. It
//! carries four nested collections: team members, budget line items, goals
//! and timeline phases. Monetary and quantity values use [`Decimal`]; the
//! arithmetic relations between them (line totals, budget sums, phases
//! inside `timeline_months`) are part of the contract and checked by the
//! backend validators, not here.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::institutions::Institution;

/// Project workflow status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    InExecution,
    Completed,
    Cancelled,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// Field of action (Art. 10 of the PRONAS/PCD regulation)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldOfAction {
    MedicoAssistencial,
    Formacao,
    Pesquisa,
}

/// Budget line item category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    Pessoal,
    MaterialConsumo,
    MaterialPermanente,
    DespesasAdministrativas,
    Reformas,
    CaptacaoRecursos,
    Auditoria,
    Outros,
}

/// Goal monitoring frequency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringFrequency {
    Mensal,
    Trimestral,
    Semestral,
    Anual,
}

/// Staff member assigned to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTeam {
    pub id: i64,
    pub project_id: i64,
    pub role: String,
    pub name: String,
    pub cpf: Option<String>,
    pub qualification: String,
    /// Professional registry number (CRM, CRF, ...)
    pub registration_number: Option<String>,
    pub weekly_hours: Decimal,
    pub monthly_salary: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Budget line item
///
/// `total_value` is declared by the proponent and expected to equal
/// `quantity * unit_value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectBudget {
    pub id: i64,
    pub project_id: i64,
    pub category: BudgetCategory,
    pub subcategory: Option<String>,
    pub description: String,
    /// Unit of measure (month, piece, ...)
    pub unit: Option<String>,
    pub quantity: Decimal,
    pub unit_value: Decimal,
    pub total_value: Decimal,
    /// Expense nature code (Portaria 448/2002)
    pub nature_expense_code: Option<String>,
    pub justification: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Measurable indicator for a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectGoal {
    pub id: i64,
    pub project_id: i64,
    pub indicator_name: String,
    pub target_value: Decimal,
    pub measurement_method: String,
    pub frequency: MonitoringFrequency,
    pub baseline_value: Option<Decimal>,
    pub current_value: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Execution phase of a project
///
/// `start_month` and `end_month` are 1-indexed months relative to the
/// project start and expected to fall within `timeline_months`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTimeline {
    pub id: i64,
    pub project_id: i64,
    pub phase_name: String,
    pub start_month: u32,
    pub end_month: u32,
    pub deliverables: Option<Vec<String>>,
    pub status: String,
    pub completion_percentage: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Project entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub institution_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub field_of_action: FieldOfAction,
    /// Priority area reference (Art. 10)
    pub priority_area_id: i64,
    pub general_objective: String,
    pub specific_objectives: Vec<String>,
    pub justification: String,
    pub target_audience: Option<String>,
    pub methodology: Option<String>,
    pub expected_results: Option<String>,
    pub sustainability_plan: Option<String>,
    pub budget_total: Decimal,
    pub budget_captacao: Option<Decimal>,
    pub budget_captacao_percentage: Option<Decimal>,
    /// Execution term in months
    pub timeline_months: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub submission_date: Option<DateTime<Utc>>,
    pub approval_date: Option<DateTime<Utc>>,
    pub execution_start_date: Option<DateTime<Utc>>,
    pub execution_end_date: Option<DateTime<Utc>>,
    pub evaluation_score: Option<Decimal>,
    pub compliance_score: Option<Decimal>,
    pub reviewer_comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,

    // Embedded relations, present when the endpoint expands them
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub institution: Option<Institution>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub team_members: Option<Vec<ProjectTeam>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub budget_items: Option<Vec<ProjectBudget>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub goals: Option<Vec<ProjectGoal>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timeline: Option<Vec<ProjectTimeline>>,
}

/// Team member payload inside project creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectTeamRequest {
    pub role: String,
    pub name: String,
    #[serde(default)]
    pub cpf: Option<String>,
    pub qualification: String,
    #[serde(default)]
    pub registration_number: Option<String>,
    pub weekly_hours: Decimal,
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Budget line payload inside project creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectBudgetRequest {
    pub category: BudgetCategory,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub description: String,
    #[serde(default)]
    pub unit: Option<String>,
    pub quantity: Decimal,
    pub unit_value: Decimal,
    pub total_value: Decimal,
    #[serde(default)]
    pub nature_expense_code: Option<String>,
    #[serde(default)]
    pub justification: Option<String>,
}

/// Goal payload inside project creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectGoalRequest {
    pub indicator_name: String,
    pub target_value: Decimal,
    pub measurement_method: String,
    pub frequency: MonitoringFrequency,
    #[serde(default)]
    pub baseline_value: Option<Decimal>,
}

/// Timeline phase payload inside project creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectTimelineRequest {
    pub phase_name: String,
    pub start_month: u32,
    pub end_month: u32,
    #[serde(default)]
    pub deliverables: Option<Vec<String>>,
}

/// Request DTO for creating a project, nested collections included
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub institution_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub field_of_action: FieldOfAction,
    pub priority_area_id: i64,
    pub general_objective: String,
    pub specific_objectives: Vec<String>,
    pub justification: String,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub methodology: Option<String>,
    #[serde(default)]
    pub expected_results: Option<String>,
    #[serde(default)]
    pub sustainability_plan: Option<String>,
    pub budget_total: Decimal,
    #[serde(default)]
    pub budget_captacao: Option<Decimal>,
    #[serde(default)]
    pub budget_captacao_percentage: Option<Decimal>,
    pub timeline_months: u32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub team_members: Vec<CreateProjectTeamRequest>,
    #[serde(default)]
    pub budget_items: Vec<CreateProjectBudgetRequest>,
    #[serde(default)]
    pub goals: Vec<CreateProjectGoalRequest>,
    #[serde(default)]
    pub timeline: Vec<CreateProjectTimelineRequest>,
}

/// Request DTO for updating a project
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub field_of_action: Option<FieldOfAction>,
    #[serde(default)]
    pub priority_area_id: Option<i64>,
    #[serde(default)]
    pub general_objective: Option<String>,
    #[serde(default)]
    pub specific_objectives: Option<Vec<String>>,
    #[serde(default)]
    pub justification: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub methodology: Option<String>,
    #[serde(default)]
    pub expected_results: Option<String>,
    #[serde(default)]
    pub sustainability_plan: Option<String>,
    #[serde(default)]
    pub budget_total: Option<Decimal>,
    #[serde(default)]
    pub budget_captacao: Option<Decimal>,
    #[serde(default)]
    pub budget_captacao_percentage: Option<Decimal>,
    #[serde(default)]
    pub timeline_months: Option<u32>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}
