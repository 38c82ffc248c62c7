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

use apiauth_core::utils::Redact;
use apiauth_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the access id and secret key.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Public identifier, sent along with every signature.
    pub access_id: String,
    /// Shared secret keying the signature, never sent.
    pub secret_key: String,
}

impl Credential {
    /// Create a credential from an access id and secret key.
    pub fn new(access_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_id: access_id.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_id", &Redact::from(&self.access_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    /// A credential can sign iff both parts are set and the access id can be
    /// carried by the `Authorization` header, which separates it with `:`.
    fn is_valid(&self) -> bool {
        !self.access_id.is_empty() && !self.access_id.contains(':') && !self.secret_key.is_empty()
    }
}
