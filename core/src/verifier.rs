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

use crate::{Context, Error, LookupCredential, Result, SignableRequest, VerifyRequest};
use log::debug;
use std::sync::Arc;

/// Verifier is the main struct used to verify signed requests.
///
/// It resolves the credential belonging to the access id a request claims,
/// then delegates the signature check to the scheme specific verifier.
#[derive(Clone, Debug)]
pub struct Verifier<K> {
    ctx: Context,
    lookup: Arc<dyn LookupCredential<Credential = K>>,
    verifier: Arc<dyn VerifyRequest<Credential = K>>,
}

impl<K: Send + Sync + Unpin + 'static> Verifier<K> {
    /// Create a new verifier.
    pub fn new(
        ctx: Context,
        lookup: impl LookupCredential<Credential = K>,
        verifier: impl VerifyRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            lookup: Arc::new(lookup),
            verifier: Arc::new(verifier),
        }
    }

    /// Verify the request, returning the authenticated access id.
    pub fn verify(&self, req: &dyn SignableRequest) -> Result<String> {
        let access_id = self.verifier.access_id(req)?;

        let Some(credential) = self.lookup.lookup_credential(&self.ctx, &access_id)? else {
            debug!("no credential found for access id {access_id}");
            return Err(Error::credential_invalid(format!(
                "no credential found for access id {access_id}"
            )));
        };

        self.verifier
            .verify_request(&self.ctx, req, Some(&credential))?;
        Ok(access_id)
    }
}
