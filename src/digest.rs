use crate::request::RequestBody;
use base64::engine::{DecodePaddingMode, GeneralPurpose, general_purpose};
use base64::{Engine as _, alphabet};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Standard alphabet; trailing `=` padding is optional on input.
const B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Failure while computing the payload hash.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DigestError {
    #[error("request body is marked base64 but could not be decoded: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Hex-encoded SHA-256 of the request payload, as expected in `x-amz-content-sha256`.
///
/// A missing body or missing `data` hashes as the empty payload. Base64 bodies are
/// decoded before hashing so the digest covers the bytes the origin receives.
pub fn content_sha256(body: Option<&RequestBody>) -> Result<String, DigestError> {
    let mut hasher = Sha256::new();
    match body {
        Some(body) if body.is_base64() => {
            let decoded = B64.decode(body.payload().as_bytes())?;
            hasher.update(&decoded);
        }
        Some(body) => hasher.update(body.payload().as_bytes()),
        None => {}
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
#[path = "digest_test.rs"]
mod digest_test;
