use crate::headers::HeaderMap;
use serde::{Deserialize, Serialize};

/// Response generated at the edge instead of forwarding to the origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeResponse {
    pub status_code: u16,
    pub headers: HeaderMap,
    pub body: String,
}
