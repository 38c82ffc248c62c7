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
use apiauth_core::{Context, LookupCredential, Result};
use std::collections::HashMap;

/// StaticCredentialStore resolves credentials from a fixed set of clients,
/// keyed by access id.
///
/// ```
/// use apiauth::{Credential, StaticCredentialStore};
///
/// let store = StaticCredentialStore::new()
///     .with_credential(Credential::new("client-1", "secret-1"))
///     .with_credential(Credential::new("client-2", "secret-2"));
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct StaticCredentialStore {
    credentials: HashMap<String, Credential>,
}

impl StaticCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a credential, replacing the one with the same access id.
    pub fn insert(&mut self, credential: Credential) -> Option<Credential> {
        self.credentials
            .insert(credential.access_id.clone(), credential)
    }

    /// Builder style [`StaticCredentialStore::insert`].
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.insert(credential);
        self
    }

    /// Number of credentials in the store.
    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    /// Whether the store holds no credential.
    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl FromIterator<Credential> for StaticCredentialStore {
    fn from_iter<T: IntoIterator<Item = Credential>>(iter: T) -> Self {
        let mut store = Self::new();
        for credential in iter {
            store.insert(credential);
        }
        store
    }
}

impl LookupCredential for StaticCredentialStore {
    type Credential = Credential;

    fn lookup_credential(
        &self,
        _: &Context,
        access_id: &str,
    ) -> Result<Option<Self::Credential>> {
        Ok(self.credentials.get(access_id).cloned())
    }
}
