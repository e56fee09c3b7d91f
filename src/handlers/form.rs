use serde::{de, Deserialize, Deserializer};

/// Form-encoded body accepted by create and update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassroomForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "isActive", deserialize_with = "deserialize_flag")]
    pub is_active: Option<bool>,
}

/// Parse the spellings HTML forms and scripts use for booleans
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

// An empty value counts as absent
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_flag(value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid boolean for isActive: `{}`", value))),
    }
}
