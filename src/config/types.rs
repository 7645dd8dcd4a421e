use serde::{Deserialize, Deserializer, Serialize};

/// A substring that identifies MX hostnames owned by a well-known provider.
///
/// Several entries may share the same `parent_server`. Missing JSON fields
/// deserialize to empty strings instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KnownServerPattern {
    #[serde(rename = "parentServer", default, deserialize_with = "null_as_empty")]
    pub parent_server: String,
    #[serde(rename = "serverPattern", default, deserialize_with = "null_as_empty")]
    pub pattern: String,
}

impl KnownServerPattern {
    pub fn new(parent_server: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            parent_server: parent_server.into(),
            pattern: pattern.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "knownServers", alias = "KnownServers", default)]
    pub known_servers: Vec<KnownServerPattern>,
}

impl Settings {
    pub fn new(known_servers: Vec<KnownServerPattern>) -> Self {
        Self { known_servers }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
