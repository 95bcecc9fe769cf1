pub mod constants;
pub mod default_route;
mod digest;
mod event;
mod headers;
mod options;
mod origin_request;
mod request;
mod result;
mod util;

pub use default_route::{handle_default_route_json, not_found};
pub use digest::{DigestError, content_sha256};
pub use event::{CloudFrontEvent, CloudFrontPayload, CloudFrontRecord, EventError};
pub use headers::{HeaderEntry, HeaderMap};
pub use options::{OriginRequestOptions, ValidationError};
pub use origin_request::{OriginRequestHandler, handle_origin_request_json};
pub use request::{CustomOrigin, OriginDescriptor, Request, RequestBody};
pub use result::EdgeResponse;
