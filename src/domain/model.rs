use serde::{Deserialize, Serialize};

/// One row of an economic region table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomicRegionRecord {
    pub province: String,
    pub economic_region_code: i64,
    pub economic_region_name: String,
    pub unemployment_rate: f64,
    pub insured_hours_required: i64,
    pub min_weeks_payable: i64,
    pub max_weeks_payable: i64,
    pub best_weeks_required: i64,
}

impl EconomicRegionRecord {
    /// True when no field carries data (header and spacer rows).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestPayload {
    #[serde(default)]
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub postal_code: String,
    pub data: Vec<EconomicRegionRecord>,
}

/// Envelope shared by every `/process` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: "success".to_string(),
            data: Some(data),
            code: None,
        }
    }

    pub fn failure(message: impl Into<String>, code: &str) -> Self {
        Self {
            message: message.into(),
            data: None,
            code: Some(code.to_string()),
        }
    }
}
