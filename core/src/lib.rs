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

//! Core components for signing and verifying API requests.
//!
//! This crate provides the foundational types and traits the `apiauth` scheme
//! is built on. It carries no scheme specific logic itself.
//!
//! ## Overview
//!
//! - **Request**: [`SignableRequest`] abstracts over `http::Request<B>` and
//!   `http::request::Parts`
//! - **Context**: A container holding the environment credentials are read from
//! - **Traits**: Credential loading (`ProvideCredential`), credential resolution
//!   by access id (`LookupCredential`), signing (`SignRequest`) and
//!   verification (`VerifyRequest`)
//! - **Signer** / **Verifier**: orchestrators that wire the traits together
//!
//! ## Example
//!
//! ```
//! use apiauth_core::{Context, ProvideCredential, Result, SignRequest, SignableRequest, Signer, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct Token(String);
//!
//! impl SigningCredential for Token {
//!     fn is_valid(&self) -> bool {
//!         !self.0.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Loader;
//!
//! impl ProvideCredential for Loader {
//!     type Credential = Token;
//!
//!     fn provide_credential(&self, _: &Context) -> Result<Option<Token>> {
//!         Ok(Some(Token("token".to_string())))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Bearer;
//!
//! impl SignRequest for Bearer {
//!     type Credential = Token;
//!
//!     fn sign_request(
//!         &self,
//!         _: &Context,
//!         req: &mut dyn SignableRequest,
//!         credential: Option<&Token>,
//!     ) -> Result<()> {
//!         if let Some(token) = credential {
//!             req.headers_mut()
//!                 .insert(http::header::AUTHORIZATION, format!("Bearer {}", token.0).parse()?);
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let signer = Signer::new(Context::new(), Loader, Bearer);
//!
//! let mut req = http::Request::get("https://example.com").body("").unwrap();
//! signer.sign(&mut req)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA1, MD5 and base64 helpers
//! - [`time`]: http date formatting in the reference zone
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod context;
pub use context::Context;

mod request;
pub use request::SignableRequest;

mod api;
pub use api::{LookupCredential, ProvideCredential, SignRequest, SigningCredential, VerifyRequest};
mod chain;
pub use chain::ProvideCredentialChain;

mod signer;
pub use signer::Signer;
mod verifier;
pub use verifier::Verifier;
