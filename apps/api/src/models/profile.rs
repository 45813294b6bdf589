use serde::{Deserialize, Serialize};

/// Candidate profile supplied by the caller per request. Never persisted.
///
/// `name` is required; every other field may be empty and is then omitted
/// from the assembled prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}
