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

use apiauth_core::{Context, Error, Result, SignableRequest, VerifyRequest};
use http::header::AUTHORIZATION;
use log::debug;

use crate::authorization;
use crate::canonical::CanonicalForm;
use crate::check::sufficient_headers;
use crate::signature::verify_signature;
use crate::Credential;

/// Canonical forms a signature is accepted for by [`verify`].
///
/// Legacy signatures do not cover the method, so a request accepted under
/// that form can be replayed with another method.
pub const ACCEPTED_FORMS: [CanonicalForm; 2] = [CanonicalForm::Legacy, CanonicalForm::WithMethod];

/// Check the request headers and split its `Authorization` header into
/// access id and signature.
fn decode_authorization(req: &dyn SignableRequest) -> Result<(String, String)> {
    sufficient_headers(req)?;

    let header = req.header_get_or_default(&AUTHORIZATION)?;
    if header.is_empty() {
        return Err(Error::authorization_missing("Authorization header not set"));
    }

    let (access_id, signature) = authorization::parse(header)?;
    Ok((access_id.to_string(), signature.to_string()))
}

fn verify_with_forms(
    req: &dyn SignableRequest,
    secret_key: &str,
    forms: &[CanonicalForm],
) -> Result<()> {
    let (access_id, signature) = decode_authorization(req)?;

    for form in forms {
        let string_to_sign = form.build(req)?;
        if verify_signature(&signature, &string_to_sign, secret_key) {
            debug!("signature of {access_id} accepted with {form:?} canonical string");
            return Ok(());
        }
        debug!("signature of {access_id} rejected with {form:?} canonical string: {string_to_sign}");
    }

    Err(Error::signature_mismatch("Signature mismatch"))
}

/// Verify the signature carried by the request's `Authorization` header.
///
/// The request must pass the same header checks as signing. The signature is
/// accepted if it matches any of [`ACCEPTED_FORMS`].
///
/// Only the headers are checked: the `Content-MD5` value is not compared
/// with the body, and the `Date` is not checked for freshness.
pub fn verify(req: &dyn SignableRequest, secret_key: &str) -> Result<()> {
    verify_with_forms(req, secret_key, &ACCEPTED_FORMS)
}

/// RequestVerifier verifies requests signed with the APIAuth scheme.
#[derive(Debug, Clone, Copy)]
pub struct RequestVerifier {
    forms: &'static [CanonicalForm],
}

impl Default for RequestVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestVerifier {
    /// Create a verifier accepting [`ACCEPTED_FORMS`], as [`verify`] does.
    pub fn new() -> Self {
        Self {
            forms: &ACCEPTED_FORMS,
        }
    }

    /// Create a verifier accepting method-bound signatures only.
    pub fn strict() -> Self {
        Self {
            forms: &[CanonicalForm::WithMethod],
        }
    }

    /// Canonical forms this verifier accepts.
    pub fn forms(&self) -> &'static [CanonicalForm] {
        self.forms
    }
}

impl VerifyRequest for RequestVerifier {
    type Credential = Credential;

    fn access_id(&self, req: &dyn SignableRequest) -> Result<String> {
        let (access_id, _) = decode_authorization(req)?;
        Ok(access_id)
    }

    fn verify_request(
        &self,
        _: &Context,
        req: &dyn SignableRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid("credential is required"));
        };

        verify_with_forms(req, &cred.secret_key, self.forms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONTENT_MD5;
    use crate::{sign, sign_with_method};
    use apiauth_core::ErrorKind;
    use http::header::{CONTENT_TYPE, DATE};
    use http::Request;
    use pretty_assertions::assert_eq;

    const DATE_VALUE: &str = "Fri, 20 Mar 2015 19:37:40 GMT";

    fn get(authorization: Option<&str>) -> Request<&'static str> {
        let mut builder = Request::get("http://example.com").header(DATE, DATE_VALUE);
        if let Some(v) = authorization {
            builder = builder.header(AUTHORIZATION, v);
        }
        builder.body("").unwrap()
    }

    #[test]
    fn test_verify_legacy() {
        let _ = env_logger::builder().is_test(true).try_init();

        let req = get(Some("APIAuth me:N7N1BXAWv6+RXos4vSAAd7D0XJY="));
        assert!(verify(&req, "secret").is_ok());
    }

    #[test]
    fn test_verify_with_method() {
        let req = get(Some("APIAuth me:4ZVi8vChyIWKwRUxmZsFKp5E3RU="));
        assert!(verify(&req, "secret").is_ok());
    }

    #[test]
    fn test_verify_wrong_secret() {
        let req = get(Some("APIAuth me:N7N1BXAWv6+RXos4vSAAd7D0XJY="));
        let err = verify(&req, "not-the-secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SignatureMismatch);
        assert_eq!(err.to_string(), "Signature mismatch");
    }

    #[test]
    fn test_verify_missing_authorization() {
        let err = verify(&get(None), "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthorizationMissing);

        let err = verify(&get(Some("")), "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthorizationMissing);
    }

    #[test]
    fn test_verify_malformed_authorization() {
        let err = verify(&get(Some("Bearer token")), "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedHeader);
        assert_eq!(err.to_string(), "Malformed header: Bearer token");
    }

    #[test]
    fn test_verify_checks_headers_first() {
        let req = Request::get("http://example.com")
            .header(AUTHORIZATION, "garbage")
            .body("")
            .unwrap();
        let err = verify(&req, "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingDate);

        let req = Request::post("http://example.com")
            .header(DATE, DATE_VALUE)
            .header(AUTHORIZATION, "APIAuth me:sig")
            .body("hello")
            .unwrap();
        let err = verify(&req, "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingContentType);
    }

    #[test]
    fn test_verify_does_not_check_body_digest() {
        let mut req = Request::post("http://example.com/upload")
            .header(DATE, DATE_VALUE)
            .header(CONTENT_TYPE, "text/plain")
            .header(CONTENT_MD5, "WnNni3tnQAUFZDSkgFRwfQ==")
            .body("hello")
            .unwrap();
        sign(&mut req, "me", "secret").unwrap();
        assert!(verify(&req, "secret").is_ok());
    }

    #[test]
    fn test_verify_rejects_tampered_uri() {
        let mut req = get(None);
        sign(&mut req, "me", "secret").unwrap();
        *req.uri_mut() = "http://example.com/other".parse().unwrap();

        let err = verify(&req, "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SignatureMismatch);
    }

    #[test]
    fn test_verify_rejects_tampered_header_bytes() {
        let mut req = Request::get("http://example.com")
            .header(DATE, DATE_VALUE)
            .header(CONTENT_TYPE, "text/plain; x=1")
            .body("")
            .unwrap();
        sign(&mut req, "me", "secret").unwrap();

        req.headers_mut().insert(
            CONTENT_TYPE,
            http::HeaderValue::from_bytes(b"text/plain; x=\xff").unwrap(),
        );
        let err = verify(&req, "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);

        req.headers_mut().insert(
            CONTENT_TYPE,
            http::HeaderValue::from_static("text/plain; x=2"),
        );
        let err = verify(&req, "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SignatureMismatch);
    }

    #[test]
    fn test_request_verifier_access_id() {
        let verifier = RequestVerifier::new();
        let req = get(Some("APIAuth client-1:sig"));
        assert_eq!(verifier.access_id(&req).unwrap(), "client-1");

        let err = verifier.access_id(&get(None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthorizationMissing);
    }

    #[test]
    fn test_request_verifier_strict() {
        let ctx = Context::new();
        let cred = Credential::new("me", "secret");

        let mut legacy = get(None);
        sign(&mut legacy, "me", "secret").unwrap();
        let mut bound = get(None);
        sign_with_method(&mut bound, "me", "secret").unwrap();

        let verifier = RequestVerifier::new();
        assert!(verifier.verify_request(&ctx, &legacy, Some(&cred)).is_ok());
        assert!(verifier.verify_request(&ctx, &bound, Some(&cred)).is_ok());

        let strict = RequestVerifier::strict();
        let err = strict
            .verify_request(&ctx, &legacy, Some(&cred))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SignatureMismatch);
        assert!(strict.verify_request(&ctx, &bound, Some(&cred)).is_ok());

        let err = strict.verify_request(&ctx, &bound, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }
}
