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

use std::borrow::Cow;

use apiauth_core::{Result, SignableRequest};
use http::header::{CONTENT_TYPE, DATE};
use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::constants::CONTENT_MD5;

/// Bytes kept as-is when escaping a path, anything else is percent-encoded.
static PATH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'@');

/// CanonicalForm selects which request fields make up the string to sign.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CanonicalForm {
    /// `Content-Type,Content-MD5,URI,Date`, see [`canonical_string`].
    ///
    /// The method is not covered, so a signature for one verb is also valid
    /// for any other verb on the same uri.
    #[default]
    Legacy,
    /// `METHOD,Content-Type,Content-MD5,URI,Date`, see [`canonical_string_with_method`].
    WithMethod,
}

impl CanonicalForm {
    /// Build the canonical string of this form for the request.
    pub fn build(self, req: &dyn SignableRequest) -> Result<String> {
        match self {
            CanonicalForm::Legacy => canonical_string(req),
            CanonicalForm::WithMethod => canonical_string_with_method(req),
        }
    }
}

/// Construct the canonical string of the request.
///
/// # Format
///
/// ```text
///   Content-Type + ","
/// + Content-MD5 + ","
/// + URI + ","
/// + Date
/// ```
///
/// URI is the escaped path, `/` if the path is empty, followed by `?` and
/// the raw query iff the query is non-empty. Absent headers are kept as
/// empty fields.
///
/// Header presence is not checked here, run [`crate::sufficient_headers`]
/// first. Header values with bytes outside of visible ASCII are rejected
/// with `RequestInvalid`.
pub fn canonical_string(req: &dyn SignableRequest) -> Result<String> {
    let uri = req.uri();
    let mut resource = match uri.path() {
        "" => "/".to_string(),
        path => escape_path(path).into_owned(),
    };
    if let Some(query) = uri.query().filter(|q| !q.is_empty()) {
        resource.push('?');
        resource.push_str(query);
    }

    Ok([
        req.header_get_or_default(&CONTENT_TYPE)?,
        req.header_get_or_default(&CONTENT_MD5)?,
        resource.as_str(),
        req.header_get_or_default(&DATE)?,
    ]
    .join(","))
}

/// Construct the canonical string of the request with the upper-cased method
/// as its first field.
///
/// # Format
///
/// ```text
///   METHOD + ","
/// + canonical_string
/// ```
pub fn canonical_string_with_method(req: &dyn SignableRequest) -> Result<String> {
    Ok(format!(
        "{},{}",
        req.method().as_str().to_ascii_uppercase(),
        canonical_string(req)?
    ))
}

/// Escape the path for the canonical string.
///
/// A path that is already validly escaped is kept verbatim, including its
/// choice of escapes. Otherwise it is decoded and re-encoded, so `/a{b`
/// becomes `/a%7Bb`.
fn escape_path(path: &str) -> Cow<'_, str> {
    if path.bytes().all(is_valid_path_byte) {
        return Cow::Borrowed(path);
    }

    let decoded: Vec<u8> = percent_decode_str(path).collect();
    Cow::Owned(percent_encode(&decoded, &PATH_ENCODE_SET).to_string())
}

/// Bytes an escaped path may carry: the ones [`PATH_ENCODE_SET`] keeps, the
/// remaining sub-delims, brackets and `%`.
fn is_valid_path_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'_'
                | b'.'
                | b'~'
                | b'$'
                | b'&'
                | b'+'
                | b','
                | b'/'
                | b':'
                | b';'
                | b'='
                | b'@'
                | b'!'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'['
                | b']'
                | b'%'
        )
}
