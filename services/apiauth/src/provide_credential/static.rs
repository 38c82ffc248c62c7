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

use crate::Credential;
use apiauth_core::{Context, LookupCredential, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed APIAuth credential.
///
/// Used for signing, it always offers its credential. Used for verifying,
/// it only knows its own access id.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with access id and secret key.
    pub fn new(access_id: &str, secret_key: &str) -> Self {
        Self {
            credential: Credential::new(access_id, secret_key),
        }
    }
}

impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

impl LookupCredential for StaticCredentialProvider {
    type Credential = Credential;

    fn lookup_credential(
        &self,
        _: &Context,
        access_id: &str,
    ) -> Result<Option<Self::Credential>> {
        if self.credential.access_id == access_id {
            Ok(Some(self.credential.clone()))
        } else {
            Ok(None)
        }
    }
}
