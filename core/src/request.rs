// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::Result;
use http::header::HeaderName;
use http::header::CONTENT_LENGTH;
use http::header::TRANSFER_ENCODING;
use http::HeaderMap;
use http::Method;
use http::Uri;

/// SignableRequest is the view of a request that signers and verifiers need.
///
/// The trait is object safe, signers take `&mut dyn SignableRequest` so that
/// any request type can be signed without monomorphizing the signing logic.
pub trait SignableRequest {
    /// HTTP method.
    fn method(&self) -> &Method;

    /// HTTP uri, only path and query are used for signing.
    fn uri(&self) -> &Uri;

    /// HTTP headers.
    fn headers(&self) -> &HeaderMap;

    /// Mutable HTTP headers, signers insert the `Authorization` header here.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Whether the request carries a body.
    fn has_body(&self) -> bool;

    /// Get header value by name.
    ///
    /// Returns empty string if header not found. Repeated headers yield their
    /// first value. Values with bytes outside of visible ASCII are rejected
    /// with [`crate::ErrorKind::RequestInvalid`].
    fn header_get_or_default(&self, key: &HeaderName) -> Result<&str> {
        match self.headers().get(key) {
            Some(v) => Ok(v.to_str()?),
            None => Ok(""),
        }
    }
}

impl<B: AsRef<[u8]>> SignableRequest for http::Request<B> {
    fn method(&self) -> &Method {
        let this = self as &http::Request<B>;
        this.method()
    }

    fn uri(&self) -> &Uri {
        let this = self as &http::Request<B>;
        this.uri()
    }

    fn headers(&self) -> &HeaderMap {
        let this = self as &http::Request<B>;
        this.headers()
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        let this = self as &mut http::Request<B>;
        this.headers_mut()
    }

    fn has_body(&self) -> bool {
        !self.body().as_ref().is_empty()
    }
}

/// `Parts` have no body attached, so the body is inferred from the framing
/// headers: a non-zero `Content-Length` or any `Transfer-Encoding`.
impl SignableRequest for http::request::Parts {
    fn method(&self) -> &Method {
        &self.method
    }

    fn uri(&self) -> &Uri {
        &self.uri
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn has_body(&self) -> bool {
        if self.headers.contains_key(TRANSFER_ENCODING) {
            return true;
        }

        self.headers
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .is_some_and(|v| v > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use http::header::CONTENT_TYPE;
    use http::HeaderValue;
    use http::Request;

    #[test]
    fn test_request_has_body() {
        let req = Request::get("http://example.com").body("").unwrap();
        assert!(!req.has_body());

        let req = Request::post("http://example.com")
            .body(b"post body".to_vec())
            .unwrap();
        assert!(req.has_body());
    }

    #[test]
    fn test_parts_has_body() {
        let (parts, _) = Request::get("http://example.com")
            .body(())
            .unwrap()
            .into_parts();
        assert!(!parts.has_body());

        let (parts, _) = Request::post("http://example.com")
            .header(CONTENT_LENGTH, "0")
            .body(())
            .unwrap()
            .into_parts();
        assert!(!parts.has_body());

        let (parts, _) = Request::post("http://example.com")
            .header(CONTENT_LENGTH, "9")
            .body(())
            .unwrap()
            .into_parts();
        assert!(parts.has_body());

        let (parts, _) = Request::post("http://example.com")
            .header(TRANSFER_ENCODING, "chunked")
            .body(())
            .unwrap()
            .into_parts();
        assert!(parts.has_body());
    }

    #[test]
    fn test_header_get_or_default() {
        let req = Request::get("http://example.com")
            .header("content-type", "text/plain")
            .header("Content-Type", "application/json")
            .body("")
            .unwrap();

        // Lookup is case-insensitive and takes the first value.
        assert_eq!(req.header_get_or_default(&CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(
            req.header_get_or_default(&HeaderName::from_static("content-md5"))
                .unwrap(),
            ""
        );
    }

    #[test]
    fn test_header_get_or_default_rejects_opaque_bytes() {
        let req = Request::get("http://example.com")
            .header(
                CONTENT_TYPE,
                HeaderValue::from_bytes(b"text/plain; x=\xff").unwrap(),
            )
            .body("")
            .unwrap();

        let err = req.header_get_or_default(&CONTENT_TYPE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
}
