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

//! Access tokens and the providers that fetch them.

use crate::Result;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::Instant;

/// An access token, sent in the `authorization` header.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub token: String,

    /// Typically `"Bearer"`.
    pub token_type: String,

    /// `None` for tokens without a known expiration.
    pub expires_at: Option<Instant>,
}

impl Token {
    /// A bearer token expiring `expires_in` from now.
    pub(crate) fn bearer<T: Into<String>>(token: T, expires_in: Option<Duration>) -> Self {
        Self {
            token: token.into(),
            token_type: "Bearer".to_string(),
            expires_at: expires_in.map(|d| Instant::now() + d),
        }
    }

    /// Returns `true` if the token expires in less than `margin`.
    pub(crate) fn expires_within(&self, margin: Duration) -> bool {
        self.expires_at
            .is_some_and(|e| e <= Instant::now() + margin)
    }

    /// The value of the `authorization` header.
    pub(crate) fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token", &"[censored]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// The JSON body returned by OAuth 2.0 token endpoints and the metadata
/// server.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    access_token: String,
    token_type: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

impl From<TokenResponse> for Token {
    fn from(value: TokenResponse) -> Self {
        Self {
            token: value.access_token,
            token_type: value.token_type,
            expires_at: value
                .expires_in
                .map(|s| Instant::now() + Duration::from_secs(s)),
        }
    }
}

#[async_trait::async_trait]
pub(crate) trait TokenProvider: std::fmt::Debug + Send + Sync {
    async fn token(&self) -> Result<Token>;
}
