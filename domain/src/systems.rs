//! Supported terminology systems

use serde::Serialize;

/// Descriptor of a terminology system the bridge works with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminologySystem {
    pub name: &'static str,
    pub full_name: &'static str,
    pub url: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

const SYSTEMS: &[TerminologySystem] = &[
    TerminologySystem {
        name: "NAMASTE",
        full_name: "National AYUSH Morbidity and Standardized Terminologies Electronic Portal",
        url: "http://namstp.ayush.gov.in",
        version: "2024",
        description: "Indian traditional medicine terminology system covering Ayurveda, Yoga, Unani, Siddha, and Homeopathy.",
    },
    TerminologySystem {
        name: "ICD-11",
        full_name: "International Classification of Diseases, 11th Revision",
        url: "http://id.who.int/icd11/mms",
        version: "2024-01",
        description: "WHO's global standard for diagnostic health information",
    },
    TerminologySystem {
        name: "FHIR",
        full_name: "Fast Healthcare Interoperability Resources",
        url: "http://hl7.org/fhir",
        version: "R4",
        description: "Healthcare data exchange standard for EMR integration",
    },
];

pub fn supported_systems() -> &'static [TerminologySystem] {
    SYSTEMS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fhir::{ICD11_SYSTEM_URI, NAMASTE_SYSTEM_URI};

    #[test]
    fn test_system_urls_match_coding_systems() {
        let systems = supported_systems();
        assert_eq!(systems.len(), 3);
        assert_eq!(systems[0].url, NAMASTE_SYSTEM_URI);
        assert_eq!(systems[1].url, ICD11_SYSTEM_URI);
    }
}
