//! Parameters of a media API search request.

use crate::query::{self, AliasTable};
use serde::{Deserialize, Serialize};

/// Page size when the caller does not ask for one
pub const DEFAULT_PAGE_LENGTH: u32 = 50;

/// Result ordering understood by the search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Most recently uploaded first
    #[default]
    NewestUpload,
    OldestUpload,
    /// Order of addition to the collection being browsed
    DateAddedToCollection,
}

impl SortOrder {
    /// Map a requested `orderBy` value; anything unrecognized sorts newest first.
    pub fn from_order_by(order_by: Option<&str>) -> Self {
        match order_by {
            Some("dateAddedToCollection") => SortOrder::DateAddedToCollection,
            Some("oldest") => SortOrder::OldestUpload,
            _ => SortOrder::NewestUpload,
        }
    }

    /// The `orderBy` value to request for a sort dropdown selection.
    /// The default ordering is requested by sending none.
    pub fn from_selection(selection: &str) -> Option<&'static str> {
        match selection {
            "oldest" => Some("oldest"),
            "dateAddedToCollection" => Some("dateAddedToCollection"),
            _ => None,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::NewestUpload => "-uploadTime",
            SortOrder::OldestUpload => "uploadTime",
            SortOrder::DateAddedToCollection => "dateAddedToCollection",
        }
    }
}

/// `"true"` and `"false"` become booleans; anything else is dropped.
pub fn parse_tri_state(value: Option<&str>) -> Option<bool> {
    match value? {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    pub ids: Option<String>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub archived: Option<bool>,
    pub valid: Option<bool>,
    pub free: Option<bool>,
    pub pay_type: Option<String>,
    pub uploaded_by: Option<String>,
    pub offset: Option<u32>,
    pub length: Option<u32>,
    pub order_by: Option<String>,
    pub taken_since: Option<String>,
    pub taken_until: Option<String>,
    pub modified_since: Option<String>,
    pub modified_until: Option<String>,
    /// Raw filter value, see [`parse_tri_state`]
    pub has_rights_acquired: Option<String>,
    /// Raw filter value, sent as `hasExports`
    pub has_crops: Option<String>,
    pub syndication_status: Option<String>,
}

impl SearchParams {
    /// The request's query parameters in send order, with `q` rewritten
    /// through `aliases` and unset filters left out.
    pub fn to_query_pairs(&self, query: &str, aliases: &AliasTable) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", query::rewrite(query, aliases))];

        let mut push = |name: &'static str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((name, value));
            }
        };

        push("since", self.since.clone());
        push("free", self.free.map(|b| b.to_string()));
        push("payType", self.pay_type.clone());
        push("until", self.until.clone());
        push("takenSince", self.taken_since.clone());
        push("takenUntil", self.taken_until.clone());
        push("modifiedSince", self.modified_since.clone());
        push("modifiedUntil", self.modified_until.clone());
        push("ids", self.ids.clone());
        push("uploadedBy", self.uploaded_by.clone());
        push("valid", self.valid.map(|b| b.to_string()));
        push("archived", self.archived.map(|b| b.to_string()));
        push("offset", self.offset.map(|n| n.to_string()));
        push(
            "length",
            Some(self.length.unwrap_or(DEFAULT_PAGE_LENGTH).to_string()),
        );
        push(
            "orderBy",
            Some(SortOrder::from_order_by(self.order_by.as_deref()).as_param().to_string()),
        );
        push(
            "hasRightsAcquired",
            parse_tri_state(self.has_rights_acquired.as_deref()).map(|b| b.to_string()),
        );
        push(
            "hasExports",
            parse_tri_state(self.has_crops.as_deref()).map(|b| b.to_string()),
        );
        push("syndicationStatus", self.syndication_status.clone());

        pairs
    }
}
