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

use std::fmt;
use thiserror::Error;

/// The error type for apiauth operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request carries no `Date` header
    MissingDate,

    /// Request carries a body but no `Content-Type` header
    MissingContentType,

    /// Request carries a body but no `Content-MD5` header
    MissingContentMd5,

    /// Request has been signed already
    AuthorizationAlreadyPresent,

    /// Request carries no `Authorization` header to verify
    AuthorizationMissing,

    /// `Authorization` header does not have the `APIAuth id:signature` shape
    MalformedHeader,

    /// Signature matches none of the accepted canonical strings
    SignatureMismatch,

    /// No usable credential could be provided or resolved
    CredentialInvalid,

    /// Request cannot carry the computed values (invalid header value, etc.)
    RequestInvalid,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error reports a header the request must carry.
    pub fn is_missing_header(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MissingDate
                | ErrorKind::MissingContentType
                | ErrorKind::MissingContentMd5
                | ErrorKind::AuthorizationMissing
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a missing date error
    pub fn missing_date(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingDate, message)
    }

    /// Create a missing content type error
    pub fn missing_content_type(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingContentType, message)
    }

    /// Create a missing content md5 error
    pub fn missing_content_md5(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingContentMd5, message)
    }

    /// Create an authorization already present error
    pub fn authorization_already_present(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AuthorizationAlreadyPresent, message)
    }

    /// Create an authorization missing error
    pub fn authorization_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AuthorizationMissing, message)
    }

    /// Create a malformed header error
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedHeader, message)
    }

    /// Create a signature mismatch error
    pub fn signature_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SignatureMismatch, message)
    }

    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingDate => write!(f, "missing date header"),
            ErrorKind::MissingContentType => write!(f, "missing content-type header"),
            ErrorKind::MissingContentMd5 => write!(f, "missing content-md5 header"),
            ErrorKind::AuthorizationAlreadyPresent => {
                write!(f, "authorization header already present")
            }
            ErrorKind::AuthorizationMissing => write!(f, "missing authorization header"),
            ErrorKind::MalformedHeader => write!(f, "malformed authorization header"),
            ErrorKind::SignatureMismatch => write!(f, "signature mismatch"),
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid("header value contains bytes outside of visible ASCII")
            .with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_and_message() {
        let err = Error::missing_date("No Date header present");
        assert_eq!(err.kind(), ErrorKind::MissingDate);
        assert_eq!(err.to_string(), "No Date header present");
        assert!(err.is_missing_header());

        let err = Error::signature_mismatch("Signature mismatch");
        assert_eq!(err.kind(), ErrorKind::SignatureMismatch);
        assert!(!err.is_missing_header());
    }

    #[test]
    fn test_invalid_header_value_is_request_invalid() {
        let err: Error = http::HeaderValue::from_str("APIAuth me\n:sig")
            .map_err(Error::from)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_to_str_error_is_request_invalid() {
        let value = http::HeaderValue::from_bytes(b"caf\xe9").unwrap();
        let err: Error = value.to_str().map_err(Error::from).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
}
