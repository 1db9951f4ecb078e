//! Fuzz target: `Response::decode` / `Request::decode`
//!
//! Hostile daemon output must become a `ProtocolError`, never a panic.
//! Anything that does decode must re-encode to something that decodes to
//! the same value.
//!
//! cargo fuzz run fuzz_response_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use mbtool_client::{Request, Response};

fuzz_target!(|data: &[u8]| {
    if let Ok(response) = Response::decode(data) {
        let again = Response::decode(&response.encode()).expect("re-encoded response decodes");
        assert_eq!(again, response);
    }
    if let Ok(request) = Request::decode(data) {
        let again = Request::decode(&request.encode()).expect("re-encoded request decodes");
        assert_eq!(again, request);
    }
});
