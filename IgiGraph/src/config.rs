//! Tool configuration
//!
//! An optional TOML file with `[parse]` and `[export]` tables:
//!
//! ```toml
//! [parse]
//! strict = false
//!
//! [export]
//! indent = 4
//! include_edge_types = true
//! criteria_key = "description"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::converter::JsonOptions;
use crate::error::{Error, Result};
use crate::formats::graph::ParseOptions;

/// Parse and export settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub parse: ParseOptions,
    pub export: JsonOptions,
}

impl GraphConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text).map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::CriteriaKey;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(GraphConfig::from_toml_str("").unwrap(), GraphConfig::default());
        assert_eq!(GraphConfig::default().export.indent, 4);
    }

    #[test]
    fn test_partial_config() {
        let config = GraphConfig::from_toml_str(
            "[parse]\nstrict = true\n\n[export]\ncriteria_key = \"description\"\n",
        )
        .unwrap();
        assert!(config.parse.strict);
        assert_eq!(config.export.criteria_key, CriteriaKey::Description);
        assert_eq!(config.export.indent, 4);
        assert!(!config.export.include_edge_types);
    }

    #[test]
    fn test_bad_config() {
        assert!(GraphConfig::from_toml_str("[export]\nindent = \"wide\"\n").is_err());
    }
}
