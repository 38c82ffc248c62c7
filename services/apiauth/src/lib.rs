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

//! APIAuth request signing and verification.
//!
//! A client and a server share a secret key, identified by a public access
//! id. The client signs a canonical string built from a few request fields
//! with HMAC-SHA1 and sends the result as
//!
//! ```text
//! Authorization: APIAuth <access_id>:<base64 signature>
//! ```
//!
//! The server rebuilds the canonical string and compares.
//!
//! ## Quick Start
//!
//! ```
//! use apiauth::{date, sign_with_method, verify};
//!
//! # fn main() -> apiauth_core::Result<()> {
//! let mut req = http::Request::get("https://example.com/resource?id=1")
//!     .header(http::header::DATE, date())
//!     .body("")
//!     .unwrap();
//!
//! sign_with_method(&mut req, "client-1", "secret")?;
//! verify(&req, "secret")?;
//! # Ok(())
//! # }
//! ```
//!
//! Requests with a body must carry `Content-Type` and `Content-MD5` as well,
//! see [`sufficient_headers`]. [`apiauth_core::hash::base64_md5`] computes
//! the latter.
//!
//! ## Canonical strings
//!
//! - [`CanonicalForm::Legacy`]: `Content-Type,Content-MD5,URI,Date`
//! - [`CanonicalForm::WithMethod`]: `METHOD,Content-Type,Content-MD5,URI,Date`
//!
//! [`sign`] produces the first, [`sign_with_method`] the second. [`verify`]
//! accepts both.
//!
//! ## Signer and Verifier
//!
//! [`default_signer`] loads the credential from the environment and signs
//! with [`RequestSigner`]. [`default_verifier`] resolves credentials through a
//! [`apiauth_core::LookupCredential`] such as [`StaticCredentialStore`].
//!
//! ```
//! use apiauth::{default_verifier, Credential, StaticCredentialStore};
//!
//! let verifier = default_verifier(
//!     StaticCredentialStore::new().with_credential(Credential::new("client-1", "secret")),
//! );
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! export APIAUTH_ACCESS_ID=your-access-id
//! export APIAUTH_SECRET_KEY=your-secret-key
//! export APIAUTH_SIGN_WITH_METHOD=true  # Optional, method-bound signatures
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

use apiauth_core::time::{format_http_date, now};
use apiauth_core::{Context, LookupCredential, OsEnv, Signer, Verifier};
use chrono::TimeZone;

mod constants;
pub use constants::{
    APIAUTH_ACCESS_ID, APIAUTH_SECRET_KEY, APIAUTH_SIGN_WITH_METHOD, AUTHORIZATION_PREFIX,
    CONTENT_MD5,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod canonical;
pub use canonical::{canonical_string, canonical_string_with_method, CanonicalForm};

mod signature;
pub use signature::{compute, verify_signature};

pub mod authorization;

mod check;
pub use check::sufficient_headers;

mod sign_request;
pub use sign_request::{sign, sign_with_method, RequestSigner};

mod verify_request;
pub use verify_request::{verify, RequestVerifier, ACCEPTED_FORMS};

mod provide_credential;
pub use provide_credential::*;

/// Current time as a `Date` header value, e.g. `Thu, 19 Mar 2015 19:34:03 GMT`.
pub fn date() -> String {
    format_http_date(now())
}

/// Format `time` as a `Date` header value, converting it to GMT first.
pub fn date_for_time<Tz: TimeZone>(time: chrono::DateTime<Tz>) -> String {
    format_http_date(time)
}

/// Create a [`Signer`] that loads its credential from the process
/// environment and signs as configured by [`APIAUTH_SIGN_WITH_METHOD`].
pub fn default_signer() -> Signer<Credential> {
    let ctx = Context::new().with_env(OsEnv);
    let config = Config::default().from_env(&ctx);

    Signer::new(
        ctx,
        DefaultCredentialProvider::new(),
        RequestSigner::from_config(&config),
    )
}

/// Create a [`Verifier`] resolving credentials with `lookup`, accepting
/// every form in [`ACCEPTED_FORMS`].
pub fn default_verifier(
    lookup: impl LookupCredential<Credential = Credential>,
) -> Verifier<Credential> {
    Verifier::new(
        Context::new().with_env(OsEnv),
        lookup,
        RequestVerifier::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_for_time() {
        let chicago = FixedOffset::west_opt(5 * 3600).unwrap();
        let t = chicago.with_ymd_and_hms(2015, 3, 19, 14, 34, 3).unwrap();
        assert_eq!("Thu, 19 Mar 2015 19:34:03 GMT", date_for_time(t));

        let t = Utc.with_ymd_and_hms(2015, 3, 20, 19, 37, 40).unwrap();
        assert_eq!("Fri, 20 Mar 2015 19:37:40 GMT", date_for_time(t));
    }

    #[test]
    fn test_date() {
        let d = date();
        assert_eq!(29, d.len());
        assert!(d.ends_with(" GMT"));
    }
}
