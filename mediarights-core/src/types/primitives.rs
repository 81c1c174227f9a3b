use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of access a lease grants or denies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessKind {
    /// Image may be used
    AllowUse,
    /// Image must not be used
    DenyUse,
    /// Image may be syndicated to partners
    AllowSyndication,
    /// Image must not be syndicated
    DenySyndication,
}

impl AccessKind {
    pub const ALL: [AccessKind; 4] = [
        AccessKind::AllowUse,
        AccessKind::DenyUse,
        AccessKind::AllowSyndication,
        AccessKind::DenySyndication,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AccessKind::AllowUse => "allow-use",
            AccessKind::DenyUse => "deny-use",
            AccessKind::AllowSyndication => "allow-syndication",
            AccessKind::DenySyndication => "deny-syndication",
        }
    }
}

impl std::fmt::Display for AccessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccessKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Where a lease's start date comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StartDateRule {
    /// The moment the lease is derived
    Today,
    /// The image's upload time
    Upload,
    /// The image's capture time
    Taken,
    /// The programme's original transmission date
    TxDate,
}

impl StartDateRule {
    pub fn as_str(self) -> &'static str {
        match self {
            StartDateRule::Today => "TODAY",
            StartDateRule::Upload => "UPLOAD",
            StartDateRule::Taken => "TAKEN",
            StartDateRule::TxDate => "TXDATE",
        }
    }
}

impl FromStr for StartDateRule {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODAY" => Ok(StartDateRule::Today),
            "UPLOAD" => Ok(StartDateRule::Upload),
            "TAKEN" => Ok(StartDateRule::Taken),
            "TXDATE" => Ok(StartDateRule::TxDate),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// A configured value that names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value '{0}'")]
pub struct UnknownVariant(pub String);

/// A user-facing search field name and the index path it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAlias {
    /// Short name typed by users (e.g. "photographer")
    pub alias: String,
    /// Canonical path in the search index (e.g. "metadata.byline")
    pub elasticsearch_path: String,
    /// Only hinted fields take part in query rewriting
    #[serde(default)]
    pub display_search_hint: bool,
}

impl FieldAlias {
    pub fn new(alias: impl Into<String>, elasticsearch_path: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            elasticsearch_path: elasticsearch_path.into(),
            display_search_hint: true,
        }
    }
}
