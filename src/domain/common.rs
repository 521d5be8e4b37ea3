//! Shared traits for budgeting primitives.

use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the ledger.
///
/// Identifiers are opaque strings: freshly created entities carry UUIDv4
/// ids, while data persisted by earlier app versions may carry arbitrary
/// short ids.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Generates a fresh opaque identifier for a new entity.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}
