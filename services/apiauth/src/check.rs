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

use apiauth_core::{Error, Result, SignableRequest};
use http::header::{HeaderName, CONTENT_TYPE, DATE};

use crate::constants::CONTENT_MD5;

/// Check that the request carries every header the canonical string needs.
///
/// `Date` is always required. `Content-Type` and `Content-MD5` are required
/// only when the request carries a body. Empty values count as absent.
///
/// The `Content-MD5` value is never checked against the body.
pub fn sufficient_headers(req: &dyn SignableRequest) -> Result<()> {
    if is_absent(req, &DATE) {
        return Err(Error::missing_date("No Date header present"));
    }

    if req.has_body() {
        if is_absent(req, &CONTENT_TYPE) {
            return Err(Error::missing_content_type(
                "No Content-Type header present",
            ));
        }

        if is_absent(req, &CONTENT_MD5) {
            return Err(Error::missing_content_md5("No Content-MD5 header present"));
        }
    }

    Ok(())
}

fn is_absent(req: &dyn SignableRequest, key: &HeaderName) -> bool {
    req.headers().get(key).map_or(true, |v| v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiauth_core::ErrorKind;
    use http::{HeaderValue, Request};

    const DATE_VALUE: &str = "Fri, 20 Mar 2015 19:37:40 GMT";

    #[test]
    fn test_missing_date() {
        let req = Request::get("http://example.com").body("").unwrap();
        let err = sufficient_headers(&req).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingDate);

        let req = Request::get("http://example.com")
            .header(DATE, "")
            .body("")
            .unwrap();
        let err = sufficient_headers(&req).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingDate);
    }

    #[test]
    fn test_date_is_enough_without_body() {
        let req = Request::get("http://example.com")
            .header("date", DATE_VALUE)
            .body("")
            .unwrap();
        assert!(sufficient_headers(&req).is_ok());
    }

    #[test]
    fn test_body_requires_content_headers_in_order() {
        let req = Request::post("http://example.com")
            .header(DATE, DATE_VALUE)
            .body("post body")
            .unwrap();
        let err = sufficient_headers(&req).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingContentType);

        let req = Request::post("http://example.com")
            .header(DATE, DATE_VALUE)
            .header(CONTENT_MD5, "j1GIzrR58rJYl7j4fBEEHw==")
            .body("post body")
            .unwrap();
        let err = sufficient_headers(&req).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingContentType);

        let req = Request::post("http://example.com")
            .header(DATE, DATE_VALUE)
            .header(CONTENT_TYPE, "text/plain")
            .body("post body")
            .unwrap();
        let err = sufficient_headers(&req).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingContentMd5);

        let req = Request::post("http://example.com")
            .header(DATE, DATE_VALUE)
            .header(CONTENT_TYPE, "text/plain")
            .header(CONTENT_MD5, "j1GIzrR58rJYl7j4fBEEHw==")
            .body("post body")
            .unwrap();
        assert!(sufficient_headers(&req).is_ok());
    }

    #[test]
    fn test_opaque_header_bytes_count_as_present() {
        let req = Request::get("http://example.com")
            .header(DATE, HeaderValue::from_bytes(b"Fri, 20 Mar 2015 \xff").unwrap())
            .body("")
            .unwrap();
        assert!(sufficient_headers(&req).is_ok());
    }

    #[test]
    fn test_date_is_checked_before_body_headers() {
        let req = Request::post("http://example.com")
            .body("post body")
            .unwrap();
        let err = sufficient_headers(&req).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingDate);
    }
}
