//! FHIR R4 rendering of mappings.
//!
//! Only the subset of `Condition` needed to carry a dual-coded diagnosis is
//! modelled.

use crate::mapping::MappingResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coding system URI of the local AYUSH catalog
pub const NAMASTE_SYSTEM_URI: &str = "http://namstp.ayush.gov.in";

/// Coding system URI of the ICD-11 MMS linearization
pub const ICD11_SYSTEM_URI: &str = "http://id.who.int/icd11/mms";

/// Profile declared in `Condition.meta`
pub const CONDITION_PROFILE: &str = "http://hl7.org/fhir/StructureDefinition/Condition";

/// Remote matches included as codings per concept
pub const MAX_REMOTE_CODINGS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    pub system: String,
    pub code: String,
    pub display: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_selected: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CodeableConcept {
    /// Local coding first (marked user-selected), then the best remote matches.
    pub fn from_mapping(mapping: &MappingResult) -> Self {
        let local = &mapping.local_term;
        let mut coding = vec![Coding {
            system: NAMASTE_SYSTEM_URI.to_string(),
            code: local.id.clone(),
            display: local.term.clone(),
            user_selected: Some(true),
        }];
        coding.extend(
            mapping
                .remote_matches
                .iter()
                .take(MAX_REMOTE_CODINGS)
                .map(|remote| Coding {
                    system: ICD11_SYSTEM_URI.to_string(),
                    code: remote.code.clone(),
                    display: remote.title.clone(),
                    user_selected: None,
                }),
        );

        Self {
            coding,
            text: Some(local.description.clone().unwrap_or_else(|| local.term.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub profile: Vec<String>,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub reference: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
}

/// FHIR R4 `Condition` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub resource_type: String,
    pub id: String,
    pub meta: Meta,
    pub code: CodeableConcept,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
    pub recorded_date: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,
}

impl Condition {
    /// Build a condition for `mapping` recorded at `now`.
    pub fn from_mapping(
        mapping: &MappingResult,
        patient_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Self {
        let timestamp = now.to_rfc3339();
        Self {
            resource_type: "Condition".to_string(),
            id: format!("condition-{}-{}", mapping.local_term.id, now.timestamp()),
            meta: Meta {
                profile: vec![CONDITION_PROFILE.to_string()],
                last_updated: timestamp.clone(),
            },
            code: CodeableConcept::from_mapping(mapping),
            subject: patient_id.map(|id| Reference {
                reference: format!("Patient/{}", id),
                kind: "Patient".to_string(),
            }),
            recorded_date: timestamp,
            note: vec![Annotation {
                text: format!(
                    "Mapping confidence: {:.2} ({})",
                    mapping.confidence_score, mapping.mapping_method
                ),
            }],
        }
    }
}
