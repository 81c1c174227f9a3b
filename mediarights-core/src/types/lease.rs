use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccessKind, StartDateRule};

/// Value of `leasedBy` on every lease derived from a rights category.
pub const CATEGORY_LEASED_BY: &str = "Usage_Rights_Category";

/// A declarative lease template attached to a usage-rights category.
///
/// `type` and `startDate` are kept as configured text so that a catalogue
/// with values this build does not know still loads; they are parsed on use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseDefinition {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Lease length in whole years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LeaseDefinition {
    pub fn new(access: AccessKind, start_date: StartDateRule) -> Self {
        Self {
            kind: access.to_string(),
            start_date: Some(start_date.as_str().to_string()),
            duration: None,
            notes: None,
        }
    }

    pub fn with_duration(mut self, years: u32) -> Self {
        self.duration = Some(years);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The access kind, if the configured `type` is recognized.
    pub fn access(&self) -> Option<AccessKind> {
        self.kind.parse().ok()
    }

    /// The start date rule, if one is configured and recognized.
    pub fn start_rule(&self) -> Option<StartDateRule> {
        self.start_date.as_deref().and_then(|s| s.parse().ok())
    }
}

/// A time-bounded access grant on a single image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    /// Assigned by the backing store; never set on derived leases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub access: AccessKind,
    pub created_at: DateTime<Utc>,
    pub leased_by: String,
    pub start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: String,
    pub media_id: String,
}

/// The leases held on an image, as last reported by the media API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseCollection {
    /// `None` until the collection has been written at least once
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub leases: Vec<Lease>,
}

/// A named bundle of lease templates selectable in the rights editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRightsCategory {
    /// Display name
    pub name: String,
    /// Key stored on the image's usage rights ("" for "no rights")
    pub value: String,
    #[serde(default)]
    pub leases: Vec<LeaseDefinition>,
}

impl UsageRightsCategory {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            leases: Vec::new(),
        }
    }

    pub fn with_lease(mut self, definition: LeaseDefinition) -> Self {
        self.leases.push(definition);
        self
    }
}
