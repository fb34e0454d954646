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

use std::error::Error;
use std::fmt::{Display, Formatter, Result};
use std::sync::Arc;

/// Represents an error creating or using credentials.
///
/// Credentials may fail to load (a missing key file), or fail to refresh a
/// token (the token endpoint is unreachable). Some of these problems are
/// transient, and future attempts may succeed.
#[derive(Clone, Debug)]
pub struct CredentialsError {
    is_transient: bool,
    message: Option<String>,
    source: Option<Arc<dyn Error + Send + Sync>>,
}

impl CredentialsError {
    /// Creates a new error wrapping `source`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_gax::error::CredentialsError;
    /// let source = std::io::Error::other("cannot read file");
    /// let err = CredentialsError::new(false, source);
    /// assert!(!err.is_transient());
    /// ```
    pub fn new<T: Error + Send + Sync + 'static>(is_transient: bool, source: T) -> Self {
        Self {
            is_transient,
            message: None,
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new error with a message and no source.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_gax::error::CredentialsError;
    /// let err = CredentialsError::from_msg(true, "token endpoint unavailable");
    /// assert!(err.is_transient());
    /// assert!(err.to_string().contains("token endpoint unavailable"));
    /// ```
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        Self {
            is_transient,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Creates a new error with a message and a source.
    pub fn from_source<M, T>(is_transient: bool, message: M, source: T) -> Self
    where
        M: Into<String>,
        T: Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            message: Some(message.into()),
            source: Some(Arc::new(source)),
        }
    }

    /// Returns `true` if future attempts to use the credentials may succeed.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn Error))
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let suffix = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        match (&self.message, &self.source) {
            (Some(m), Some(s)) => write!(f, "{m}: {s}, {suffix}"),
            (Some(m), None) => write!(f, "{m}, {suffix}"),
            (None, Some(s)) => write!(f, "{s}, {suffix}"),
            (None, None) => write!(f, "unknown credentials error, {suffix}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true, TRANSIENT_MSG)]
    #[test_case(false, PERMANENT_MSG)]
    fn display(transient: bool, want: &str) {
        let e = CredentialsError::from_msg(transient, "test-only-message");
        let got = e.to_string();
        assert!(got.contains("test-only-message"), "{got}");
        assert!(got.contains(want), "{got}");
        assert_eq!(e.is_transient(), transient);
        assert!(e.source().is_none(), "{e:?}");
    }

    #[test]
    fn with_source() {
        let e = CredentialsError::from_source(false, "loading key", std::io::Error::other("eof"));
        let got = e.to_string();
        assert!(got.contains("loading key"), "{got}");
        assert!(got.contains("eof"), "{got}");
        let source = e.source().and_then(|s| s.downcast_ref::<std::io::Error>());
        assert!(source.is_some(), "{e:?}");
    }
}
