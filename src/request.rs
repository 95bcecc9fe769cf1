use crate::headers::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request record carried by an origin-request event.
///
/// Attributes the handlers do not interpret (`uri`, `querystring`, `clientIp`, ...) are
/// kept in `extra` so the record is handed back to the platform intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    #[serde(default)]
    pub headers: HeaderMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Request {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: HeaderMap::new(),
            origin: None,
            body: None,
            extra: Map::new(),
        }
    }
}

/// Origin the request will be forwarded to. Only custom origins expose a domain name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomOrigin>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OriginDescriptor {
    pub fn custom(domain_name: impl Into<String>) -> Self {
        Self {
            custom: Some(CustomOrigin {
                domain_name: Some(domain_name.into()),
                extra: Map::new(),
            }),
            extra: Map::new(),
        }
    }

    /// Domain name of a custom origin. An empty name counts as absent.
    pub fn custom_domain(&self) -> Option<&str> {
        self.custom
            .as_ref()
            .and_then(|custom| custom.domain_name.as_deref())
            .filter(|domain| !domain.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomOrigin {
    #[serde(
        rename = "domainName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub domain_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body exposed when the distribution includes it; `data` is base64 when
/// `encoding` says so.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestBody {
    pub const BASE64: &'static str = "base64";

    pub fn text(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            encoding: None,
            extra: Map::new(),
        }
    }

    pub fn base64(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            encoding: Some(Self::BASE64.to_string()),
            extra: Map::new(),
        }
    }

    pub fn is_base64(&self) -> bool {
        self.encoding.as_deref() == Some(Self::BASE64)
    }

    /// Payload as transmitted; missing or empty data reads as the empty string.
    pub fn payload(&self) -> &str {
        self.data.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
