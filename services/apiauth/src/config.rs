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

use super::constants::*;
use apiauth_core::utils::Redact;
use apiauth_core::Context;
use std::fmt::{Debug, Formatter};

/// Config carries all the configuration for apiauth signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`APIAUTH_ACCESS_ID`]
    pub access_id: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`APIAUTH_SECRET_KEY`]
    pub secret_key: Option<String>,
    /// `sign_with_method` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`APIAUTH_SIGN_WITH_METHOD`], enabled by `true`, `1` or `on`
    ///
    /// Signing without the method is the default, for verifiers that only
    /// know the legacy canonical string.
    pub sign_with_method: Option<bool>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_id", &Redact::from(&self.access_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("sign_with_method", &self.sign_with_method)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(APIAUTH_ACCESS_ID) {
            self.access_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(APIAUTH_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(APIAUTH_SIGN_WITH_METHOD) {
            self.sign_with_method.get_or_insert(parse_bool(&v));
        }

        self
    }
}

fn parse_bool(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on")
}
