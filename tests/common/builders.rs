#![allow(dead_code)]

use edge_origin_rs::constants::{header, method};
use edge_origin_rs::{
    CloudFrontEvent, OriginDescriptor, OriginRequestHandler, OriginRequestOptions, Request,
    RequestBody,
};

pub const FUNCTION_URL: &str = "xyz.lambda-url.us-east-1.on.aws";

#[derive(Default)]
pub struct HandlerBuilder {
    forward_authorization: Option<bool>,
    forwarded_auth_header: Option<String>,
    signed_methods: Option<Vec<String>>,
    function_url_marker: Option<String>,
}

impl HandlerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forward_authorization(mut self, enabled: bool) -> Self {
        self.forward_authorization = Some(enabled);
        self
    }

    pub fn forwarded_auth_header(mut self, name: impl Into<String>) -> Self {
        self.forwarded_auth_header = Some(name.into());
        self
    }

    pub fn signed_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.signed_methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn function_url_marker(mut self, marker: impl Into<String>) -> Self {
        self.function_url_marker = Some(marker.into());
        self
    }

    pub fn build(self) -> OriginRequestHandler {
        let OriginRequestOptions {
            forward_authorization: default_forward_authorization,
            forwarded_auth_header: default_forwarded_auth_header,
            signed_methods: default_signed_methods,
            function_url_marker: default_function_url_marker,
        } = OriginRequestOptions::default();

        OriginRequestHandler::new(OriginRequestOptions {
            forward_authorization: self
                .forward_authorization
                .unwrap_or(default_forward_authorization),
            forwarded_auth_header: self
                .forwarded_auth_header
                .unwrap_or(default_forwarded_auth_header),
            signed_methods: self.signed_methods.unwrap_or(default_signed_methods),
            function_url_marker: self
                .function_url_marker
                .unwrap_or(default_function_url_marker),
        })
        .expect("valid origin request configuration")
    }
}

pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            request: Request::new(method::GET),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.request.method = method.into();
        self
    }

    pub fn header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.request.headers.insert(key, value);
        self
    }

    pub fn authorization(self, value: impl Into<String>) -> Self {
        self.header(header::AUTHORIZATION, value)
    }

    pub fn custom_origin(mut self, domain: impl Into<String>) -> Self {
        self.request.origin = Some(OriginDescriptor::custom(domain));
        self
    }

    pub fn function_url(self) -> Self {
        self.custom_origin(FUNCTION_URL)
    }

    pub fn text_body(mut self, data: impl Into<String>) -> Self {
        self.request.body = Some(RequestBody::text(data));
        self
    }

    pub fn base64_body(mut self, data: impl Into<String>) -> Self {
        self.request.body = Some(RequestBody::base64(data));
        self
    }

    pub fn build(self) -> Request {
        self.request
    }

    pub fn event(self) -> CloudFrontEvent {
        CloudFrontEvent::new(self.request)
    }

    pub fn handle(self, handler: &OriginRequestHandler) -> Request {
        handler.handle(self.request)
    }
}

pub fn handler() -> HandlerBuilder {
    HandlerBuilder::new()
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}

pub fn post_to_function_url() -> RequestBuilder {
    request().method(method::POST).function_url()
}
