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

use http::header::HeaderName;

// Env values used by apiauth.
/// Env holding the access id.
pub const APIAUTH_ACCESS_ID: &str = "APIAUTH_ACCESS_ID";
/// Env holding the secret key.
pub const APIAUTH_SECRET_KEY: &str = "APIAUTH_SECRET_KEY";
/// Env switching to method-bound signatures.
pub const APIAUTH_SIGN_WITH_METHOD: &str = "APIAUTH_SIGN_WITH_METHOD";

// Headers not covered by `http::header`.
/// `Content-MD5`: base64 MD5 digest of the body.
pub const CONTENT_MD5: HeaderName = HeaderName::from_static("content-md5");

/// Scheme token of the `Authorization` header, followed by exactly one space.
pub const AUTHORIZATION_PREFIX: &str = "APIAuth ";
