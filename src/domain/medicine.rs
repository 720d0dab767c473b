use serde::{Deserialize, Serialize};

/// Catalog entry returned by the gateway medicine search.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medicine {
    pub name: String,
    /// Availability status reported by the catalog (e.g. "Active").
    pub status: String,
}
