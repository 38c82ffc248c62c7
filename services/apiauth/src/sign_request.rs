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

use apiauth_core::{Context, Error, Result, SignRequest, SignableRequest, SigningCredential};
use http::header::AUTHORIZATION;
use http::HeaderValue;
use log::debug;

use crate::authorization;
use crate::canonical::CanonicalForm;
use crate::check::sufficient_headers;
use crate::signature::compute;
use crate::{Config, Credential};

/// Sign the request with the legacy canonical string, which omits the
/// method, and set its `Authorization` header.
///
/// Kept for verifiers that predate method-bound signatures, prefer
/// [`sign_with_method`] otherwise.
pub fn sign(req: &mut dyn SignableRequest, access_id: &str, secret_key: &str) -> Result<()> {
    sign_with_form(req, access_id, secret_key, CanonicalForm::Legacy)
}

/// Sign the request as [`sign`] does, except that the canonical string
/// includes the request method.
pub fn sign_with_method(
    req: &mut dyn SignableRequest,
    access_id: &str,
    secret_key: &str,
) -> Result<()> {
    sign_with_form(req, access_id, secret_key, CanonicalForm::WithMethod)
}

fn sign_with_form(
    req: &mut dyn SignableRequest,
    access_id: &str,
    secret_key: &str,
    form: CanonicalForm,
) -> Result<()> {
    sufficient_headers(req)?;

    if req
        .headers()
        .get(AUTHORIZATION)
        .is_some_and(|v| !v.is_empty())
    {
        return Err(Error::authorization_already_present(
            "Authorization header already present",
        ));
    }

    if access_id.is_empty() || access_id.contains(':') {
        return Err(Error::credential_invalid(format!(
            "access id {access_id:?} cannot be carried by the Authorization header"
        )));
    }

    let string_to_sign = form.build(req)?;
    debug!("string to sign ({form:?}): {string_to_sign}");
    let signature = compute(&string_to_sign, secret_key);

    let mut value: HeaderValue = authorization::encode(access_id, &signature).parse()?;
    value.set_sensitive(true);
    req.headers_mut().insert(AUTHORIZATION, value);

    Ok(())
}

/// RequestSigner signs requests with the APIAuth scheme.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestSigner {
    form: CanonicalForm,
}

impl RequestSigner {
    /// Create a signer producing legacy signatures, see [`sign`].
    pub fn new() -> Self {
        Self {
            form: CanonicalForm::Legacy,
        }
    }

    /// Create a signer producing method-bound signatures, see [`sign_with_method`].
    pub fn with_method() -> Self {
        Self {
            form: CanonicalForm::WithMethod,
        }
    }

    /// Create a signer following `sign_with_method` of the config.
    pub fn from_config(config: &Config) -> Self {
        if config.sign_with_method.unwrap_or_default() {
            Self::with_method()
        } else {
            Self::new()
        }
    }

    /// Canonical form this signer signs.
    pub fn form(&self) -> CanonicalForm {
        self.form
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        _: &Context,
        req: &mut dyn SignableRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid("credential is required"));
        };
        if !cred.is_valid() {
            return Err(Error::credential_invalid(format!(
                "credential is not valid for signing: {cred:?}"
            )));
        }

        sign_with_form(req, &cred.access_id, &cred.secret_key, self.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONTENT_MD5;
    use apiauth_core::hash::base64_md5;
    use apiauth_core::ErrorKind;
    use http::header::{CONTENT_TYPE, DATE};
    use http::Request;
    use pretty_assertions::assert_eq;

    const DATE_VALUE: &str = "Fri, 20 Mar 2015 19:37:40 GMT";

    #[test]
    fn test_sign_get() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut req = Request::get("http://example.com")
            .header(DATE, DATE_VALUE)
            .body("")
            .unwrap();

        sign(&mut req, "me", "secret").unwrap();
        assert_eq!(
            "APIAuth me:N7N1BXAWv6+RXos4vSAAd7D0XJY=",
            req.headers()[AUTHORIZATION]
        );
        assert!(req.headers()[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_sign_post() {
        let mut req = Request::post("http://example.com")
            .header(DATE, DATE_VALUE)
            .header(CONTENT_TYPE, "text/plain")
            .header(CONTENT_MD5, "WnNni3tnQAUFZDSkgFRwfQ==")
            .body("")
            .unwrap();

        sign(&mut req, "me", "secret").unwrap();
        assert_eq!(
            "APIAuth me:/Z/MqEW+v23Cm3w3Ra2mMGH9KFw=",
            req.headers()[AUTHORIZATION]
        );
    }

    #[test]
    fn test_sign_with_method() {
        let mut get = Request::get("http://example.com")
            .header(DATE, DATE_VALUE)
            .body("")
            .unwrap();
        sign_with_method(&mut get, "me", "secret").unwrap();
        assert_eq!(
            "APIAuth me:4ZVi8vChyIWKwRUxmZsFKp5E3RU=",
            get.headers()[AUTHORIZATION]
        );

        let mut delete = Request::delete("http://example.com")
            .header(DATE, DATE_VALUE)
            .body("")
            .unwrap();
        sign_with_method(&mut delete, "me", "secret").unwrap();
        assert_eq!(
            "APIAuth me:1xxaABmtJQcUyqquYseInBmgCs8=",
            delete.headers()[AUTHORIZATION]
        );
    }

    #[test]
    fn test_sign_authorization_header_present() {
        let mut req = Request::get("http://example.com")
            .header(DATE, DATE_VALUE)
            .header(AUTHORIZATION, "anything")
            .body("")
            .unwrap();

        let err = sign(&mut req, "me", "key").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthorizationAlreadyPresent);
        assert_eq!("anything", req.headers()[AUTHORIZATION]);
    }

    #[test]
    fn test_sign_get_no_date() {
        let mut req = Request::get("http://example.com").body("").unwrap();

        let err = sign(&mut req, "me", "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingDate);
        assert!(req.headers().get(AUTHORIZATION).is_none());

        req.headers_mut()
            .insert("date", HeaderValue::from_static(DATE_VALUE));
        assert!(sign(&mut req, "me", "secret").is_ok());
    }

    #[test]
    fn test_sign_with_body() {
        let body = b"post body".to_vec();
        let md5 = base64_md5(&body);
        let mut req = Request::post("http://example.com")
            .header(DATE, DATE_VALUE)
            .body(body)
            .unwrap();

        let err = sign(&mut req, "me", "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingContentType);

        req.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        let err = sign(&mut req, "me", "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingContentMd5);

        req.headers_mut().insert(CONTENT_MD5, md5.parse().unwrap());
        assert!(sign(&mut req, "me", "secret").is_ok());
    }

    #[test]
    fn test_sign_invalid_access_id() {
        let mut req = Request::get("http://example.com")
            .header(DATE, DATE_VALUE)
            .body("")
            .unwrap();

        let err = sign(&mut req, "me\n", "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_request_signer() {
        let ctx = Context::new();
        let cred = Credential::new("me", "secret");

        let mut req = Request::get("http://example.com")
            .header(DATE, DATE_VALUE)
            .body("")
            .unwrap();
        RequestSigner::with_method()
            .sign_request(&ctx, &mut req, Some(&cred))
            .unwrap();
        assert_eq!(
            "APIAuth me:4ZVi8vChyIWKwRUxmZsFKp5E3RU=",
            req.headers()[AUTHORIZATION]
        );

        let mut req = Request::get("http://example.com")
            .header(DATE, DATE_VALUE)
            .body("")
            .unwrap();
        let err = RequestSigner::new()
            .sign_request(&ctx, &mut req, None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }

    #[test]
    fn test_sign_rejects_unusable_access_id() {
        for access_id in ["", "a:b"] {
            let mut req = Request::get("http://example.com")
                .header(DATE, DATE_VALUE)
                .body("")
                .unwrap();

            let err = sign(&mut req, access_id, "secret").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
            assert!(req.headers().get(AUTHORIZATION).is_none());
        }
    }

    #[test]
    fn test_sign_rejects_opaque_header_bytes() {
        let mut req = Request::get("http://example.com")
            .header(DATE, DATE_VALUE)
            .header(
                CONTENT_TYPE,
                HeaderValue::from_bytes(b"text/plain; x=\xff").unwrap(),
            )
            .body("")
            .unwrap();

        let err = sign(&mut req, "me", "secret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_request_signer_rejects_invalid_credential() {
        let ctx = Context::new();

        for cred in [
            Credential::new("a:b", "secret"),
            Credential::new("me", ""),
            Credential::default(),
        ] {
            let mut req = Request::get("http://example.com")
                .header(DATE, DATE_VALUE)
                .body("")
                .unwrap();
            let err = RequestSigner::new()
                .sign_request(&ctx, &mut req, Some(&cred))
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
            assert!(req.headers().get(AUTHORIZATION).is_none());
        }
    }

    #[test]
    fn test_request_signer_from_config() {
        let config = Config {
            sign_with_method: Some(true),
            ..Default::default()
        };
        assert_eq!(
            RequestSigner::from_config(&config).form(),
            CanonicalForm::WithMethod
        );
        assert_eq!(
            RequestSigner::from_config(&Config::default()).form(),
            CanonicalForm::Legacy
        );
    }
}
