use serde::{Deserialize, Deserializer, Serialize};

/// Configuration for the catalog module.
///
/// Held by the domain service; nothing in the pipeline reads ambient
/// global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Fixed number of items per list page. Must be at least 1; the
    /// pagination math assumes a non-zero page size.
    #[serde(default = "default_page_size", deserialize_with = "de_page_size")]
    pub page_size: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u64 {
    10
}

fn de_page_size<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let size = u64::deserialize(deserializer)?;
    if size == 0 {
        return Err(serde::de::Error::custom("page_size must be at least 1"));
    }
    Ok(size)
}
