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

//! Encoding and decoding of the `Authorization` header value.
//!
//! ```text
//! APIAuth <access_id>:<signature>
//! ```

use apiauth_core::{Error, Result};

use crate::constants::AUTHORIZATION_PREFIX;

/// Build the `Authorization` header value for an access id and signature.
pub fn encode(access_id: &str, signature: &str) -> String {
    format!("{AUTHORIZATION_PREFIX}{access_id}:{signature}")
}

/// Split an `Authorization` header value into access id and signature.
///
/// The value must start with `APIAuth ` exactly (case-sensitive, a single
/// space), and the rest must be two non-empty tokens around a single `:`.
/// Whitespace is not trimmed.
pub fn parse(header: &str) -> Result<(&str, &str)> {
    let malformed = || Error::malformed_header(format!("Malformed header: {header}"));

    let Some(credentials) = header.strip_prefix(AUTHORIZATION_PREFIX) else {
        return Err(malformed());
    };

    let mut tokens = credentials.split(':');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(access_id), Some(signature), None)
            if !access_id.is_empty() && !signature.is_empty() =>
        {
            Ok((access_id, signature))
        }
        _ => Err(malformed()),
    }
}
