//! Terminology records.
//!
//! Each resolver owns its record variant; [`CanonicalTerm`] is the shape both
//! are merged into.

mod canonical;
mod local;
mod remote;

pub use canonical::CanonicalTerm;
pub use local::LocalTerm;
pub use remote::RemoteTerm;
