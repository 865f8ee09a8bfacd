//! App Privacy Record Model
//! One record per app, deserialized from the static JSON dataset.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Privacy metadata for a single app.
///
/// Every field defaults when absent so a malformed record degrades to
/// placeholder display values instead of failing the dataset load.
/// Unrecognized JSON fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppPrivacyRecord {
    /// Unique identifier. Uniqueness and non-emptiness are a data-quality
    /// assumption of the dataset, not checked at load.
    pub app_id: String,
    pub app_name: Option<String>,
    pub collected: Vec<String>,
    pub shared_with: Vec<String>,
    pub encrypted: Option<String>,
    pub user_control: Option<String>,
    pub purpose: Vec<String>,
    pub retention_period: Option<String>,
    /// Free text in some records, a bare number in others.
    #[serde(deserialize_with = "stringly")]
    pub third_party_sdk_count: Option<String>,
}

impl AppPrivacyRecord {
    /// Human-facing name: `app_name` if present and non-empty, else
    /// `app_id`, capitalized for display only.
    pub fn display_name(&self) -> String {
        let raw = self
            .app_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.app_id);
        capitalize(raw)
    }
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Accept a JSON string or number, yielding its string form.
fn stringly<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
