//! Normalization of remote classification payloads.
//!
//! The remote service exposes several API surfaces whose responses carry the
//! same logical fields under different keys. Extraction is driven by ordered
//! rule tables ([`FieldRule`]) evaluated against a generic [`serde_json::Value`],
//! so it can be tested without any network code.

mod entities;
mod rules;

pub use entities::{ENTITY_LIST_KEYS, entity_list_key, normalize_entity, parse_remote_entities};
pub use rules::{FieldRule, first_match};
