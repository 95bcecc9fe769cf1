use crate::constants::{header, method, origin};
use crate::util::is_http_token;
use thiserror::Error;

/// Settings for [`crate::OriginRequestHandler`]. The default reproduces the stock
/// CloudFront behavior: forward `Authorization`, sign POST/PUT/PATCH bodies bound for
/// Lambda function URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OriginRequestOptions {
    /// Copy `authorization` into [`Self::forwarded_auth_header`] on every request.
    pub forward_authorization: bool,
    /// Canonical name of the header receiving the forwarded credentials.
    pub forwarded_auth_header: String,
    /// Methods whose payload is hashed. Compared case-sensitively.
    pub signed_methods: Vec<String>,
    /// Substring of the custom origin domain that marks a function URL.
    pub function_url_marker: String,
}

impl Default for OriginRequestOptions {
    fn default() -> Self {
        Self {
            forward_authorization: true,
            forwarded_auth_header: header::X_FORWARDED_AUTH.to_string(),
            signed_methods: vec![method::POST.into(), method::PUT.into(), method::PATCH.into()],
            function_url_marker: origin::FUNCTION_URL_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("forwarded auth header name must not be empty")]
    EmptyHeaderName,
    #[error("forwarded auth header name `{0}` is not a valid HTTP header name")]
    InvalidHeaderName(String),
    #[error("forwarded auth header `{0}` would overwrite the header it copies")]
    ForwardedHeaderIsAuthorization(String),
    #[error("forwarded auth header `{0}` would be trusted as the payload hash")]
    ForwardedHeaderIsContentHash(String),
    #[error("at least one signed method is required")]
    EmptySignedMethods,
    #[error("signed method `{0}` is not a valid HTTP method token")]
    InvalidSignedMethod(String),
    #[error("function URL marker must not be empty")]
    EmptyOriginMarker,
}

impl OriginRequestOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.forwarded_auth_header.is_empty() {
            return Err(ValidationError::EmptyHeaderName);
        }
        if !is_http_token(&self.forwarded_auth_header) {
            return Err(ValidationError::InvalidHeaderName(
                self.forwarded_auth_header.clone(),
            ));
        }
        if self
            .forwarded_auth_header
            .eq_ignore_ascii_case(header::AUTHORIZATION)
        {
            return Err(ValidationError::ForwardedHeaderIsAuthorization(
                self.forwarded_auth_header.clone(),
            ));
        }
        if self
            .forwarded_auth_header
            .eq_ignore_ascii_case(header::X_AMZ_CONTENT_SHA256)
        {
            return Err(ValidationError::ForwardedHeaderIsContentHash(
                self.forwarded_auth_header.clone(),
            ));
        }

        if self.signed_methods.is_empty() {
            return Err(ValidationError::EmptySignedMethods);
        }
        if let Some(invalid) = self
            .signed_methods
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidSignedMethod(invalid.clone()));
        }

        if self.function_url_marker.is_empty() {
            return Err(ValidationError::EmptyOriginMarker);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
