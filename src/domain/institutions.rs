//! Institution domain types
//!
//! An institution is an organization credentialed to run PRONAS/PCD
//! projects. Formatted identifiers (CNPJ, CEP, CPF, phone) travel as the
//! masked strings the registry uses; format checks belong to the backend
//! validators, not to this contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Institution type enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionType {
    Hospital,
    Apae,
    Ong,
    Fundacao,
    Associacao,
    Instituto,
    Cooperativa,
    Oscip,
}

/// Credential status of an institution's registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CredentialStatus {
    Pending,
    Active,
    Inactive,
    Expired,
    Rejected,
}

impl Default for CredentialStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Institution entity
///
/// `credential_expiry` is expected to postdate `credential_date`; the
/// relation is part of the contract but enforced server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub id: i64,
    /// CNPJ in the `XX.XXX.XXX/XXXX-XX` format
    pub cnpj: String,
    /// Trade name
    pub name: String,
    /// Registered legal name
    pub legal_name: String,
    pub institution_type: InstitutionType,
    /// CEP in the `XXXXX-XXX` format
    pub cep: String,
    pub address: String,
    pub city: String,
    /// Two-letter state code (UF)
    pub state: String,
    pub phone: Option<String>,
    pub email: String,
    pub website: Option<String>,
    pub legal_representative: String,
    pub legal_representative_cpf: Option<String>,
    pub technical_responsible: Option<String>,
    pub technical_responsible_registration: Option<String>,
    pub experience_proof: Option<String>,
    pub services_offered: Option<String>,
    pub technical_capacity: Option<String>,
    pub partnership_history: Option<String>,
    pub credential_status: CredentialStatus,
    pub credential_date: Option<DateTime<Utc>>,
    pub credential_expiry: Option<DateTime<Utc>>,
    pub credential_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
}

/// Request DTO for registering an institution
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInstitutionRequest {
    pub cnpj: String,
    pub name: String,
    pub legal_name: String,
    pub institution_type: InstitutionType,
    pub cep: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    pub legal_representative: String,
    #[serde(default)]
    pub legal_representative_cpf: Option<String>,
    #[serde(default)]
    pub technical_responsible: Option<String>,
    #[serde(default)]
    pub technical_responsible_registration: Option<String>,
    #[serde(default)]
    pub experience_proof: Option<String>,
    #[serde(default)]
    pub services_offered: Option<String>,
    #[serde(default)]
    pub technical_capacity: Option<String>,
    #[serde(default)]
    pub partnership_history: Option<String>,
}

/// Request DTO for updating an institution
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInstitutionRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default)]
    pub institution_type: Option<InstitutionType>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub legal_representative: Option<String>,
    #[serde(default)]
    pub legal_representative_cpf: Option<String>,
    #[serde(default)]
    pub technical_responsible: Option<String>,
    #[serde(default)]
    pub technical_responsible_registration: Option<String>,
    #[serde(default)]
    pub experience_proof: Option<String>,
    #[serde(default)]
    pub services_offered: Option<String>,
    #[serde(default)]
    pub technical_capacity: Option<String>,
    #[serde(default)]
    pub partnership_history: Option<String>,
    #[serde(default)]
    pub credential_status: Option<CredentialStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_institution() -> Institution {
        Institution {
            id: 1,
            cnpj: "12.345.678/0001-90".into(),
            name: "APAE Campinas".into(),
            legal_name: "Associação de Pais e Amigos dos Excepcionais de Campinas".into(),
            institution_type: InstitutionType::Apae,
            cep: "13010-001".into(),
            address: "Rua Barão de Jaguara, 1000 - Centro".into(),
            city: "Campinas".into(),
            state: "SP".into(),
            phone: Some("(19) 3231-4455".into()),
            email: "contato@apaecampinas.org.br".into(),
            website: None,
            legal_representative: "Maria Aparecida Souza".into(),
            legal_representative_cpf: Some("123.456.789-00".into()),
            technical_responsible: Some("Dr. João Pereira".into()),
            technical_responsible_registration: Some("CRM 54321".into()),
            experience_proof: None,
            services_offered: Some("Reabilitação física e intelectual".into()),
            technical_capacity: None,
            partnership_history: None,
            credential_status: CredentialStatus::Active,
            credential_date: Some("2024-03-01T12:00:00Z".parse().unwrap()),
            credential_expiry: Some("2027-03-01T12:00:00Z".parse().unwrap()),
            credential_number: Some("PRONAS-2024-0123".into()),
            created_at: "2024-02-10T09:30:00Z".parse().unwrap(),
            updated_at: None,
            created_by: Some("admin@saude.gov.br".into()),
        }
    }

    #[test]
    fn test_institution_round_trip_keeps_all_fields() {
        let inst = sample_institution();
        let json = serde_json::to_string(&inst).unwrap();
        let back: Institution = serde_json::from_str(&json).unwrap();

        assert_eq!(back.cnpj, inst.cnpj);
        assert_eq!(back.credential_status, inst.credential_status);
        assert_eq!(back.credential_expiry, inst.credential_expiry);
        assert_eq!(back.partnership_history, inst.partnership_history);
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(
            serde_json::to_value(InstitutionType::Fundacao).unwrap(),
            "fundacao"
        );
        assert_eq!(
            serde_json::to_value(CredentialStatus::Expired).unwrap(),
            "expired"
        );
        // "under_review" belongs to the project status domain, not this one
        assert!(serde_json::from_str::<CredentialStatus>("\"under_review\"").is_err());
    }

    #[test]
    fn test_create_request_defaults_optional_fields() {
        let req: CreateInstitutionRequest = serde_json::from_value(serde_json::json!({
            "cnpj": "12.345.678/0001-90",
            "name": "Instituto Ver",
            "legal_name": "Instituto Ver de Apoio à Pessoa com Deficiência",
            "institution_type": "instituto",
            "cep": "01310-100",
            "address": "Av. Paulista, 1500 - Bela Vista",
            "city": "São Paulo",
            "state": "SP",
            "email": "contato@institutover.org.br",
            "legal_representative": "Carlos Lima"
        }))
        .unwrap();

        assert_eq!(req.institution_type, InstitutionType::Instituto);
        assert!(req.phone.is_none());
        assert!(req.experience_proof.is_none());
    }
}
