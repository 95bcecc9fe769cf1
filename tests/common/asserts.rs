#![allow(dead_code)]

use edge_origin_rs::Request;
use edge_origin_rs::constants::header;

pub fn assert_signed(request: &Request) -> &str {
    match request.headers.get(header::X_AMZ_CONTENT_SHA256) {
        Some(hash) => hash,
        None => panic!("expected content hash header, got {:?}", request.headers),
    }
}

pub fn assert_unsigned(request: &Request) {
    assert!(
        !request.headers.contains(header::X_AMZ_CONTENT_SHA256),
        "content hash header should be absent, got {:?}",
        request.headers,
    );
}
