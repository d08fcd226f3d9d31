//! Output formatter trait

use serde::Serialize;
use termbridge_domain::{
    AggregateResult, BulkMappingReport, CodeableConcept, Condition, MappingResult,
    TerminologySystem,
};

/// Trait for rendering command results
pub trait OutputFormatter {
    /// Format a search envelope
    fn format_search(&self, result: &AggregateResult) -> String;

    /// Format a single mapping, optionally with its FHIR concept
    fn format_mapping(&self, mapping: &MappingResult, concept: Option<&CodeableConcept>)
    -> String;

    /// Format a FHIR Condition
    fn format_condition(&self, condition: &Condition) -> String;

    /// Format a bulk mapping report
    fn format_bulk(&self, report: &BulkMappingReport) -> String;

    /// Format the supported terminology systems
    fn format_systems(&self, systems: &[TerminologySystem]) -> String;
}

/// Pretty-printed JSON; the wire shapes are the serde shapes of the domain types
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Serialize)]
struct MappingWithConcept<'a> {
    #[serde(flatten)]
    mapping: &'a MappingResult,
    fhir_concept: &'a CodeableConcept,
}

impl OutputFormatter for JsonFormatter {
    fn format_search(&self, result: &AggregateResult) -> String {
        Self::to_json(result)
    }

    fn format_mapping(
        &self,
        mapping: &MappingResult,
        concept: Option<&CodeableConcept>,
    ) -> String {
        match concept {
            Some(fhir_concept) => Self::to_json(&MappingWithConcept {
                mapping,
                fhir_concept,
            }),
            None => Self::to_json(mapping),
        }
    }

    fn format_condition(&self, condition: &Condition) -> String {
        Self::to_json(condition)
    }

    fn format_bulk(&self, report: &BulkMappingReport) -> String {
        Self::to_json(report)
    }

    fn format_systems(&self, systems: &[TerminologySystem]) -> String {
        Self::to_json(&serde_json::json!({ "systems": systems }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termbridge_domain::{LocalTerm, SourceScope, supported_systems};

    #[test]
    fn test_search_envelope_field_names() {
        let result = AggregateResult::merged("fever", SourceScope::Both, vec![], vec![], 3);
        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_search(&result)).unwrap();

        assert_eq!(json["query"], "fever");
        assert_eq!(json["source"], "both");
        assert_eq!(json["total_results"], 0);
        assert_eq!(json["status"], "no_results");
        assert!(json["namaste_results"].is_array());
        assert!(json["icd11_results"].is_array());
    }

    #[test]
    fn test_mapping_with_concept_is_flattened() {
        let mapping = MappingResult::failed(LocalTerm {
            id: "NAM101".to_string(),
            term: "Jwara".to_string(),
            ..Default::default()
        });
        let concept = CodeableConcept::from_mapping(&mapping);
        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_mapping(&mapping, Some(&concept))).unwrap();

        assert_eq!(json["mapping_method"], "error");
        assert_eq!(json["fhir_concept"]["coding"][0]["code"], "NAM101");
    }

    #[test]
    fn test_systems_listing() {
        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_systems(supported_systems())).unwrap();
        assert_eq!(json["systems"].as_array().unwrap().len(), 3);
    }
}
