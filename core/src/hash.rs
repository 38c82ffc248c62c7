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

//! Hash related utils.

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use md5::Digest;
use md5::Md5;
use sha1::Sha1;

/// Base64 encode with the standard, padded alphabet.
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Base64 encoded HMAC with SHA1 hash.
pub fn base64_hmac_sha1(key: &[u8], content: &[u8]) -> String {
    // HMAC's new_from_slice never fails: it handles any key length.
    let mut h = Hmac::<Sha1>::new_from_slice(key).expect("hmac accepts keys of any length");
    h.update(content);

    base64_encode(&h.finalize().into_bytes())
}

/// Base64 encoded MD5 digest, the value expected in a `Content-MD5` header.
///
/// Use this to populate `Content-MD5` before signing a request with a body.
pub fn base64_md5(content: &[u8]) -> String {
    base64_encode(Md5::digest(content).as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base64_hmac_sha1() {
        let content = "text/plain,WnNni3tnQAUFZDSkgFRwfQ==,/a?b=c,Thu, 19 Mar 2015 19:34:03 GMT";
        assert_eq!(
            "cMgmUVsq4IiT7baALMM1euHnpCo=",
            base64_hmac_sha1(b"secret", content.as_bytes())
        );
    }

    #[test]
    fn test_base64_hmac_sha1_depends_on_key() {
        let content = b"WnNni";
        assert_eq!("zanU1MSvEZp/REk/RB4ohuMtJ/A=", base64_hmac_sha1(b"other", content));
        assert_ne!(
            base64_hmac_sha1(b"other", content),
            base64_hmac_sha1(b"secret", content)
        );
    }

    #[test]
    fn test_base64_md5() {
        assert_eq!("1B2M2Y8AsgTpgAmY7PhCfg==", base64_md5(b""));
        assert_eq!("j1GIzrR58rJYl7j4fBEEHw==", base64_md5(b"post body"));
    }
}
