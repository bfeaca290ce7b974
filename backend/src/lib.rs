//! POI finder library modules.
//!
//! The domain layer ranks points of interest by great-circle distance from a
//! search origin; inbound and outbound adapters connect it to HTTP and to a
//! process-local store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

#[cfg(test)]
mod test_support;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
