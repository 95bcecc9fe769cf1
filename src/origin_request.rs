use crate::constants::header;
use crate::digest::content_sha256;
use crate::event::{CloudFrontEvent, EventError};
use crate::headers::HeaderMap;
use crate::options::{OriginRequestOptions, ValidationError};
use crate::request::{OriginDescriptor, Request};
use tracing::{debug, error};

/// Origin-request interceptor.
///
/// Forwards the viewer's `Authorization` under a header the origin-access-control
/// signer leaves alone, and adds `x-amz-content-sha256` to body-carrying requests bound
/// for a Lambda function URL so SigV4 verification succeeds. The request is always
/// handed back; nothing here can block delivery.
#[derive(Debug, Clone, Default)]
pub struct OriginRequestHandler {
    options: OriginRequestOptions,
}

impl OriginRequestHandler {
    pub fn new(options: OriginRequestOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &OriginRequestOptions {
        &self.options
    }

    pub fn handle(&self, mut request: Request) -> Request {
        if self.options.forward_authorization {
            self.forward_authorization(&mut request.headers);
        }

        if !self.is_signed_method(&request.method) {
            debug!(method = %request.method, "method carries no signed payload");
            return request;
        }

        if request.headers.contains(header::X_AMZ_CONTENT_SHA256) {
            debug!("content hash already present, leaving it untouched");
            return request;
        }

        if !self.targets_function_url(request.origin.as_ref()) {
            debug!("origin is not a function URL");
            return request;
        }

        match content_sha256(request.body.as_ref()) {
            Ok(hash) => {
                debug!(%hash, "injecting content hash");
                request.headers.insert(header::X_AMZ_CONTENT_SHA256, hash);
            }
            Err(err) => {
                error!(error = %err, "error calculating content sha256, forwarding request unsigned");
            }
        }

        request
    }

    pub fn handle_event(&self, event: CloudFrontEvent) -> Result<Request, EventError> {
        Ok(self.handle(event.into_request()?))
    }

    /// Parse a raw invocation payload, run [`Self::handle`], and serialize the request.
    pub fn handle_json(&self, input: &str) -> Result<String, EventError> {
        let request = self.handle_event(CloudFrontEvent::from_json(input)?)?;
        Ok(serde_json::to_string(&request)?)
    }

    fn forward_authorization(&self, headers: &mut HeaderMap) {
        let Some(value) = headers.get(header::AUTHORIZATION).map(str::to_owned) else {
            return;
        };
        headers.insert(self.options.forwarded_auth_header.as_str(), value);
    }

    fn is_signed_method(&self, method: &str) -> bool {
        self.options
            .signed_methods
            .iter()
            .any(|signed| signed == method)
    }

    fn targets_function_url(&self, origin: Option<&OriginDescriptor>) -> bool {
        origin
            .and_then(OriginDescriptor::custom_domain)
            .is_some_and(|domain| domain.contains(self.options.function_url_marker.as_str()))
    }
}

pub fn handle_origin_request_json(input: &str) -> Result<String, EventError> {
    OriginRequestHandler::default().handle_json(input)
}

#[cfg(test)]
#[path = "origin_request_test.rs"]
mod origin_request_test;
