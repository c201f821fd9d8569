//! Document domain types
//!
//! File metadata attached to institutions (credentialing paperwork) and
//! projects (submission annexes). The file bytes themselves are stored
//! elsewhere; only descriptors travel through the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document attached to an institution's credentialing record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionDocument {
    pub id: i64,
    pub institution_id: i64,
    pub document_type: String,
    pub document_name: String,
    pub file_path: Option<String>,
    pub file_size: Option<u64>,
    pub mime_type: Option<String>,
    pub upload_date: DateTime<Utc>,
    pub uploaded_by: Option<String>,
    /// Set once the registry team checks the document
    pub verified: bool,
}

/// Document attached to a project submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub id: i64,
    pub project_id: i64,
    pub document_type: String,
    pub document_name: String,
    pub file_path: Option<String>,
    pub file_size: Option<u64>,
    pub mime_type: Option<String>,
    pub upload_date: DateTime<Utc>,
    pub uploaded_by: Option<String>,
}

/// Request DTO for registering a document descriptor
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumentRequest {
    pub document_type: String,
    pub document_name: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
}
