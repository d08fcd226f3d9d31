//! ICD-11 remote classification adapter

mod resolver;

pub use resolver::{DEFAULT_BASE_URL, ENDPOINT_CANDIDATES, EndpointCandidate, IcdRemoteResolver};
