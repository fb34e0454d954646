// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors created during credentials construction.

use std::path::{Path, PathBuf};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for the [Credentials] builders.
///
/// Building credentials fails when the key material cannot be found or
/// understood. These problems are permanent: fix the configuration and try
/// again.
///
/// [Credentials]: crate::credentials::Credentials
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("cannot read the credentials file {}", path.display())]
    Loading {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed credentials JSON: {0}")]
    Parsing(#[source] BoxError),
    #[error("unsupported credentials type {0:?}")]
    UnknownType(String),
    #[error("the credentials JSON has no {0:?} field")]
    MissingField(&'static str),
}

impl Error {
    /// The credentials file could not be read.
    pub fn is_loading(&self) -> bool {
        matches!(self.0, ErrorKind::Loading { .. })
    }

    /// The credentials are not valid JSON, or a field has the wrong type.
    pub fn is_parsing(&self) -> bool {
        matches!(self.0, ErrorKind::Parsing(_))
    }

    /// The `type` field names a kind of credentials this crate does not
    /// support.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.0, ErrorKind::UnknownType(_))
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self.0, ErrorKind::MissingField(_))
    }

    pub(crate) fn loading(path: &Path, source: std::io::Error) -> Self {
        Self(ErrorKind::Loading {
            path: path.to_path_buf(),
            source,
        })
    }

    pub(crate) fn parsing<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Parsing(source.into()))
    }

    pub(crate) fn unknown_type<T: Into<String>>(name: T) -> Self {
        Self(ErrorKind::UnknownType(name.into()))
    }

    pub(crate) fn missing_field(field: &'static str) -> Self {
        Self(ErrorKind::MissingField(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn loading() {
        let error = Error::loading(
            Path::new("/no/such/key.json"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(error.is_loading(), "{error:?}");
        assert!(!error.is_parsing(), "{error:?}");
        assert!(error.to_string().contains("/no/such/key.json"), "{error}");
        let source = error.source().and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(source.is_some(), "{error:?}");
    }

    #[test]
    fn parsing() {
        let error = Error::parsing("test message");
        assert!(error.is_parsing(), "{error:?}");
        assert!(error.to_string().contains("test message"), "{error}");
    }

    #[test]
    fn unknown_type() {
        let error = Error::unknown_type("impersonated_service_account");
        assert!(error.is_unknown_type(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(
            error.to_string().contains("impersonated_service_account"),
            "{error}"
        );
    }

    #[test]
    fn missing_field() {
        let error = Error::missing_field("client_email");
        assert!(error.is_missing_field(), "{error:?}");
        assert!(error.to_string().contains("client_email"), "{error}");
    }
}
