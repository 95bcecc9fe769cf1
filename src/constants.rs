pub mod header {
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CACHE_CONTROL: &str = "Cache-Control";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const X_AMZ_CONTENT_SHA256: &str = "X-Amz-Content-Sha256";
    pub const X_FORWARDED_AUTH: &str = "X-Forwarded-Auth";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod origin {
    /// Substring identifying a Lambda function URL host, e.g. `xyz.lambda-url.us-east-1.on.aws`.
    pub const FUNCTION_URL_MARKER: &str = "lambda-url";
}

pub mod digest {
    /// SHA-256 of the empty payload.
    pub const EMPTY_SHA256: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
}
