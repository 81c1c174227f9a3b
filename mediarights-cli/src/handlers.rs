use mediarights_core::search::SearchParams;
use mediarights_core::types::{Image, Lease};
use serde::{Deserialize, Serialize};

// ─── Validation Helpers ─────────────────────────────────────────────────────

pub fn validate_image(image: &Image) -> Result<(), String> {
    if image.id.trim().is_empty() {
        return Err("image.id is required".to_string());
    }
    Ok(())
}

// ─── Request Types ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(flatten)]
    pub params: SearchParams,
}

#[derive(Deserialize)]
pub struct LeasesRequest {
    pub image: Image,
    pub category: String,
}

impl LeasesRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_image(&self.image)
    }
}

#[derive(Deserialize)]
pub struct PlanRequest {
    pub image: Image,
    pub category: String,
    #[serde(default)]
    pub previous: String,
}

impl PlanRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_image(&self.image)?;
        if self.category.is_empty() && self.previous.is_empty() {
            return Err("category or previous must name a rights category".to_string());
        }
        Ok(())
    }
}

// ─── Response Types ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub query: String,
}

#[derive(Serialize)]
pub struct SearchParam {
    pub name: String,
    pub value: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeasesResponse {
    pub media_id: String,
    pub category: String,
    pub leases: Vec<Lease>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub aliases: usize,
    pub categories: usize,
    pub version: String,
}
