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

use crate::{Context, Result, SignableRequest};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from
/// the environment.
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load the signing credential.
    ///
    /// Returns `Ok(None)` when this provider has nothing to offer, so that a
    /// chain can move on to the next one.
    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// LookupCredential is the trait used by verifier to resolve the credential
/// that belongs to an access id taken from a signed request.
///
/// Storage and caching are left to the implementation.
pub trait LookupCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this lookup.
    type Credential: Send + Sync + Unpin + 'static;

    /// Resolve the credential for `access_id`, `Ok(None)` if it is unknown.
    fn lookup_credential(
        &self,
        ctx: &Context,
        access_id: &str,
    ) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign the request.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// ## Credential
    ///
    /// The `credential` parameter is the credential loaded by the provider,
    /// `None` if no provider could offer one. Implementations decide whether
    /// that is an error.
    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut dyn SignableRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}

/// VerifyRequest is the trait used by verifier to check a signed request.
pub trait VerifyRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this verifier.
    type Credential: Send + Sync + Unpin + 'static;

    /// Extract the access id the request claims to be signed by.
    ///
    /// The returned id is not authenticated yet, it is only used to resolve
    /// the credential to verify with.
    fn access_id(&self, req: &dyn SignableRequest) -> Result<String>;

    /// Verify the request against the given credential.
    fn verify_request(
        &self,
        ctx: &Context,
        req: &dyn SignableRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}
