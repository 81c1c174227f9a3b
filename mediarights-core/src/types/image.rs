use chrono::{DateTime, NaiveDate, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// The parts of an image record that lease derivation reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub upload_time: DateTime<Utc>,
    #[serde(default)]
    pub metadata: ImageMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_taken: Option<DateTime<Utc>>,
    /// Free-form metadata grouped by domain, then by field
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub domain_metadata: HashMap<String, HashMap<String, serde_json::Value>>,
}

impl Image {
    pub fn new(id: impl Into<String>, upload_time: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            upload_time,
            metadata: ImageMetadata::default(),
        }
    }

    pub fn with_date_taken(mut self, taken: DateTime<Utc>) -> Self {
        self.metadata.date_taken = Some(taken);
        self
    }

    pub fn with_domain_field(
        mut self,
        domain: impl Into<String>,
        field: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        self.metadata
            .domain_metadata
            .entry(domain.into())
            .or_default()
            .insert(field.into(), value);
        self
    }

    /// Original transmission date of the programme the image belongs to.
    /// A missing or unparseable value yields `None`.
    pub fn original_tx_date(&self) -> Option<DateTime<Utc>> {
        self.metadata
            .domain_metadata
            .get("programmes")?
            .get("originalTxDate")?
            .as_str()
            .and_then(parse_timestamp)
    }
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as
/// midnight UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = value.parse::<DateTime<Utc>>() {
        return Some(timestamp);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw)))
        })
        .transpose()
}
