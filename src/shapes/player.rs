use crate::constants::NOT_AVAILABLE;
use serde::{Deserialize, Deserializer, Serialize};

/// A roster record as the data service stores it.
///
/// `id` is assigned by whoever creates the player and never changes
/// afterwards. The remaining foreign-key-like fields are free-form and may be
/// missing.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PlayerEntry {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub position_id: Option<String>,
    #[serde(default)]
    pub position_display_name: Option<String>,
    #[serde(default)]
    pub sport_id: Option<String>,
}

// names are raw columns on the service side and may come back as null
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl PlayerEntry {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn sport_label(&self) -> &str {
        or_not_available(&self.sport_id)
    }

    pub fn team_label(&self) -> &str {
        or_not_available(&self.team_id)
    }

    pub fn position_label(&self) -> &str {
        or_not_available(&self.position_display_name)
    }
}

impl std::fmt::Display for PlayerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.id)
    }
}

// empty strings come back from the service when a form field was left blank
fn or_not_available(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}
