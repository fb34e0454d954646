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

use crate::Result;
use crate::errors;
use crate::token::Token;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};

pub(crate) const API_KEY_HEADER_KEY: &str = "x-goog-api-key";

/// Creates the `authorization` header for a bearer token.
pub(crate) fn build_bearer_headers(token: &Token) -> Result<HeaderMap> {
    let value = HeaderValue::from_str(&token.authorization())
        .map_err(errors::non_retryable)?;
    Ok(sensitive_header(AUTHORIZATION, value))
}

/// Creates the `x-goog-api-key` header.
pub(crate) fn build_api_key_headers(api_key: &str) -> Result<HeaderMap> {
    let value = HeaderValue::from_str(api_key).map_err(errors::non_retryable)?;
    Ok(sensitive_header(
        HeaderName::from_static(API_KEY_HEADER_KEY),
        value,
    ))
}

fn sensitive_header(name: HeaderName, mut value: HeaderValue) -> HeaderMap {
    value.set_sensitive(true);
    HeaderMap::from_iter([(name, value)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer() -> anyhow::Result<()> {
        let token = Token::bearer("test-token", None);
        let headers = build_bearer_headers(&token)?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, "Bearer test-token");
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    fn bearer_bad_value() {
        let token = Token::bearer("bad\ntoken", None);
        let err = build_bearer_headers(&token).unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
    }

    #[test]
    fn api_key() -> anyhow::Result<()> {
        let headers = build_api_key_headers("test-api-key")?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(API_KEY_HEADER_KEY).unwrap();
        assert_eq!(value, "test-api-key");
        assert!(value.is_sensitive());
        Ok(())
    }
}
