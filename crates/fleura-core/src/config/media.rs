//! Media URL resolution configuration.

use serde::{Deserialize, Serialize};

/// Settings for resolving stored media references into display URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Public origin serving media to browsers (CDN / object-store worker),
    /// e.g. `https://media.fleura.example`.
    #[serde(default = "default_public_origin")]
    pub public_origin: String,
    /// Path prefix under which the application proxies stored media itself.
    #[serde(default = "default_storage_prefix")]
    pub storage_prefix: String,
    /// Placeholder image served when an entity has no usable media reference.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            public_origin: default_public_origin(),
            storage_prefix: default_storage_prefix(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_public_origin() -> String {
    "http://localhost:8787".to_string()
}

fn default_storage_prefix() -> String {
    "/storage".to_string()
}

fn default_placeholder() -> String {
    "/images/placeholder.jpg".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = MediaConfig::default();
        assert_eq!(cfg.storage_prefix, "/storage");
        assert_eq!(cfg.placeholder, "/images/placeholder.jpg");
        assert!(!cfg.public_origin.is_empty());
    }
}
