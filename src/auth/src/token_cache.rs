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
use crate::token::{Token, TokenProvider};
use std::time::Duration;
use tokio::sync::RwLock;

/// Tokens are refreshed this long before they expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Caches the token returned by a [TokenProvider].
///
/// The cache refreshes the token when it is missing or about to expire.
/// Errors are not cached, the next call tries again.
#[derive(Debug)]
pub(crate) struct TokenCache<T> {
    token: RwLock<Option<Token>>,
    inner: T,
}

impl<T: TokenProvider> TokenCache<T> {
    pub(crate) fn new(inner: T) -> Self {
        Self {
            token: RwLock::new(None),
            inner,
        }
    }
}

fn usable(token: &Token) -> bool {
    !token.expires_within(EXPIRY_MARGIN)
}

#[async_trait::async_trait]
impl<T: TokenProvider> TokenProvider for TokenCache<T> {
    async fn token(&self) -> Result<Token> {
        if let Some(token) = self.token.read().await.as_ref().filter(|t| usable(t)) {
            return Ok(token.clone());
        }
        let mut guard = self.token.write().await;
        // Another task may have refreshed the token while we waited.
        if let Some(token) = guard.as_ref().filter(|t| usable(t)) {
            return Ok(token.clone());
        }
        tracing::debug!("refreshing token");
        let token = self.inner.token().await?;
        *guard = Some(token.clone());
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors;
    use crate::token::tests::MockTokenProvider;
    use std::sync::Arc;
    use tokio::time::Instant;

    const TOKEN_VALID_DURATION: Duration = Duration::from_secs(3600);

    fn token(name: &str, expires_at: Option<Instant>) -> Token {
        Token {
            token: name.to_string(),
            token_type: "Bearer".to_string(),
            expires_at,
        }
    }

    #[tokio::test]
    async fn initial_token_success() -> anyhow::Result<()> {
        let expected = token("test-token", None);
        let response = expected.clone();
        let mut mock = MockTokenProvider::new();
        mock.expect_token().times(1).return_once(|| Ok(response));

        let cache = TokenCache::new(mock);
        let got = cache.token().await?;
        assert_eq!(got, expected);
        // The second call uses the cached token.
        let got = cache.token().await?;
        assert_eq!(got, expected);
        Ok(())
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(2)
            .returning(|| Err(errors::non_retryable_from_str("fail")));

        let cache = TokenCache::new(mock);
        assert!(cache.token().await.is_err());
        assert!(cache.token().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_before_expiration() -> anyhow::Result<()> {
        let now = Instant::now();
        let initial = token("initial-token", Some(now + TOKEN_VALID_DURATION));
        let refresh = token("refresh-token", Some(now + 2 * TOKEN_VALID_DURATION));

        let mut seq = mockall::Sequence::new();
        let mut mock = MockTokenProvider::new();
        let response = initial.clone();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(response));
        let response = refresh.clone();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(response));

        let cache = TokenCache::new(mock);
        assert_eq!(cache.token().await?, initial);

        // Still outside the refresh margin.
        tokio::time::advance(TOKEN_VALID_DURATION - EXPIRY_MARGIN - Duration::from_secs(1)).await;
        assert_eq!(cache.token().await?, initial);

        // Inside the refresh margin.
        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(cache.token().await?, refresh);
        assert_eq!(cache.token().await?, refresh);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_callers_share_refresh() -> anyhow::Result<()> {
        let expected = token("test-token", None);
        let response = expected.clone();
        let mut mock = MockTokenProvider::new();
        mock.expect_token().times(1).return_once(|| Ok(response));

        let cache = Arc::new(TokenCache::new(mock));
        let tasks = (0..8)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.token().await })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            assert_eq!(task.await??, expected);
        }
        Ok(())
    }
}
