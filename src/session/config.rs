//! Session configuration loaded from TOML
//!
//! ```toml
//! [session]
//! master = "local[4]"
//! app_name = "cells"
//!
//! [conf]
//! "spark.default.parallelism" = "8"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings for building a [`SparkSession`](super::SparkSession)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Master URL and application name
    pub session: SessionSection,
    /// Free-form `spark.*` style settings
    pub conf: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSection {
    pub master: Option<String>,
    pub app_name: Option<String>,
}

impl SessionConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        log::debug!("loading session config from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_sections() {
        let config = SessionConfig::from_toml_str(
            r#"
            [session]
            master = "local[2]"

            [conf]
            "spark.default.parallelism" = "3"
            "#,
        )
        .unwrap();
        assert_eq!(config.session.master.as_deref(), Some("local[2]"));
        assert_eq!(config.session.app_name, None);
        assert_eq!(
            config.conf.get("spark.default.parallelism").map(String::as_str),
            Some("3")
        );
    }

    #[test]
    fn test_empty_and_malformed() {
        assert_eq!(SessionConfig::from_toml_str("").unwrap(), SessionConfig::default());
        assert!(matches!(
            SessionConfig::from_toml_str("[session]\nmaster = 3"),
            Err(Error::Config(_))
        ));
    }
}
