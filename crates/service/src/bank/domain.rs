use serde::{Deserialize, Serialize};

/// Domain bank (business view). Carries no storage identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub name: String,
    pub location: String,
}

impl Bank {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self { name: name.into(), location: location.into() }
    }
}

/// A stored bank: the domain attributes plus the id they live under.
/// Serializes flat as `{"id", "name", "location"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRecord {
    pub id: String,
    #[serde(flatten)]
    pub bank: Bank,
}
