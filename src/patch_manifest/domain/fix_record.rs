use serde::{Deserialize, Deserializer};

/// One element of the report's fix-plan array
///
/// Missing or `null` fields decode to their empty value; unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FixRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_component_purl: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_component_purl: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fixed_vuln: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vulnerability_id: String,
}

impl FixRecord {
    /// A record is only worth converting when both component PURLs are present
    pub fn is_qualifying(&self) -> bool {
        !self.current_component_purl.is_empty() && !self.target_component_purl.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
