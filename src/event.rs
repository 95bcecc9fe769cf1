use crate::request::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Lambda@Edge invocation payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<CloudFrontRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontRecord {
    pub cf: CloudFrontPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontPayload {
    /// Distribution metadata (`distributionId`, `eventType`, ...); carried, never read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    pub request: Request,
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("event carries no records")]
    MissingRecord,
    #[error("malformed event payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl CloudFrontEvent {
    pub fn new(request: Request) -> Self {
        Self {
            records: vec![CloudFrontRecord {
                cf: CloudFrontPayload {
                    config: None,
                    request,
                },
            }],
        }
    }

    pub fn from_json(input: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Request of the first record; later records are ignored.
    pub fn into_request(self) -> Result<Request, EventError> {
        self.records
            .into_iter()
            .next()
            .map(|record| record.cf.request)
            .ok_or(EventError::MissingRecord)
    }
}

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;
