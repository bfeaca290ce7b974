//! Outbound adapters implementing domain ports for storage.
//!
//! - **memory**: process-local POI store backed by a locked ordered map,
//!   optionally seeded from a JSON file at start-up.
//!
//! Adapters translate between domain types and their storage representation.
//! They contain no search or validation logic.

pub mod memory;
