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

use apiauth_core::hash::base64_hmac_sha1;

/// Compute the signature of a canonical string: standard base64 of the
/// HMAC-SHA1 keyed with `secret_key`.
pub fn compute(canonical_string: &str, secret_key: &str) -> String {
    base64_hmac_sha1(secret_key.as_bytes(), canonical_string.as_bytes())
}

/// Check `signature` against the one computed for `canonical_string`.
///
/// Comparison is exact string equality: a differently padded or url-safe
/// encoding of the same digest does not match.
pub fn verify_signature(signature: &str, canonical_string: &str, secret_key: &str) -> bool {
    compute(canonical_string, secret_key) == signature
}
