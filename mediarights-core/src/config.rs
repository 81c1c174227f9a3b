//! Client configuration: search field aliases and the rights category catalogue.

use crate::query::AliasTable;
use crate::types::{FieldAlias, UsageRightsCategory};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(default)]
    pub field_aliases: Vec<FieldAlias>,
    #[serde(default)]
    pub usage_rights_categories: Vec<UsageRightsCategory>,
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn alias_table(&self) -> AliasTable {
        AliasTable::new(&self.field_aliases)
    }

    pub fn category(&self, key: &str) -> Option<&UsageRightsCategory> {
        self.usage_rights_categories.iter().find(|c| c.value == key)
    }
}
