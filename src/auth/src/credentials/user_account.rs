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

//! [User Account] credentials.
//!
//! These credentials are created by `gcloud auth application-default login`.
//! They contain an OAuth 2.0 refresh token, which is exchanged for access
//! tokens at the Google token endpoint.
//!
//! [User Account]: https://cloud.google.com/docs/authentication#user-accounts

use crate::Result;
use crate::build_errors::Error as BuildError;
use crate::constants::OAUTH2_TOKEN_SERVER_URL;
use crate::credentials::{BuildResult, Credentials, CredentialsProvider};
use crate::errors;
use crate::headers_util::build_bearer_headers;
use crate::token::{Token, TokenProvider, TokenResponse};
use crate::token_cache::TokenCache;
use http::HeaderMap;
use serde::Deserialize;
use serde_json::Value;

/// Creates authorized user credentials from a parsed JSON specification.
#[derive(Debug)]
pub(crate) struct Builder {
    json: Value,
    scopes: Option<Vec<String>>,
    quota_project_id: Option<String>,
    token_uri: Option<String>,
}

impl Builder {
    pub(crate) fn new(json: Value) -> Self {
        Self {
            json,
            scopes: None,
            quota_project_id: None,
            token_uri: None,
        }
    }

    pub(crate) fn with_scopes(mut self, scopes: Option<Vec<String>>) -> Self {
        self.scopes = scopes;
        self
    }

    pub(crate) fn with_quota_project_id(mut self, quota_project_id: Option<String>) -> Self {
        self.quota_project_id = quota_project_id;
        self
    }

    #[cfg(test)]
    fn with_token_uri<S: Into<String>>(mut self, token_uri: S) -> Self {
        self.token_uri = Some(token_uri.into());
        self
    }

    pub(crate) fn build(self) -> BuildResult<Credentials> {
        #[derive(Deserialize)]
        struct Raw {
            client_id: Option<String>,
            client_secret: Option<String>,
            refresh_token: Option<String>,
            quota_project_id: Option<String>,
            token_uri: Option<String>,
        }
        let raw = serde_json::from_value::<Raw>(self.json).map_err(BuildError::parsing)?;
        let required = |v: Option<String>, name: &'static str| {
            v.filter(|v| !v.is_empty())
                .ok_or_else(|| BuildError::missing_field(name))
        };
        let token_provider = UserTokenProvider {
            client_id: required(raw.client_id, "client_id")?,
            client_secret: required(raw.client_secret, "client_secret")?,
            refresh_token: required(raw.refresh_token, "refresh_token")?,
            endpoint: self
                .token_uri
                .or(raw.token_uri)
                .unwrap_or_else(|| OAUTH2_TOKEN_SERVER_URL.to_string()),
            scopes: self.scopes.map(|s| s.join(" ")),
            client: reqwest::Client::new(),
        };
        Ok(Credentials::from(UserCredentials {
            token_provider: TokenCache::new(token_provider),
            quota_project_id: self.quota_project_id.or(raw.quota_project_id),
        }))
    }
}

struct UserTokenProvider {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    endpoint: String,
    scopes: Option<String>,
    client: reqwest::Client,
}

impl std::fmt::Debug for UserTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserTokenProvider")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[censored]")
            .field("refresh_token", &"[censored]")
            .field("endpoint", &self.endpoint)
            .field("scopes", &self.scopes)
            .finish()
    }
}

#[async_trait::async_trait]
impl TokenProvider for UserTokenProvider {
    async fn token(&self) -> Result<Token> {
        let mut form = vec![
            ("grant_type", "refresh_token"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", self.refresh_token.as_str()),
        ];
        if let Some(scopes) = &self.scopes {
            form.push(("scope", scopes.as_str()));
        }
        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(errors::retryable)?;
        if !response.status().is_success() {
            return Err(errors::from_http_response(response, "user account token").await);
        }
        let response = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| errors::CredentialsError::new(!e.is_decode(), e))?;
        Ok(Token::from(response))
    }
}

#[derive(Debug)]
struct UserCredentials<T> {
    token_provider: T,
    quota_project_id: Option<String>,
}

impl<T> CredentialsProvider for UserCredentials<T>
where
    T: TokenProvider,
{
    async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token_provider.token().await?;
        build_bearer_headers(&token)
    }

    fn quota_project_id(&self) -> Option<String> {
        self.quota_project_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::AUTHORIZATION;
    use httptest::matchers::{all_of, contains, request, url_decoded};
    use httptest::responders::{json_encoded, status_code};
    use httptest::{Expectation, Server};
    use serde_json::json;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    fn user_json() -> Value {
        json!({
            "type": "authorized_user",
            "client_id": "test-client-id",
            "client_secret": "test-client-secret",
            "refresh_token": "test-refresh-token",
        })
    }

    #[test_case("client_id")]
    #[test_case("client_secret")]
    #[test_case("refresh_token")]
    fn missing_field(field: &str) {
        let mut json = user_json();
        json.as_object_mut().unwrap().remove(field);
        let err = Builder::new(json).build().unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        assert!(err.to_string().contains(field), "{err}");
    }

    #[test]
    fn debug_censors_secrets() -> TestResult {
        let creds = Builder::new(user_json()).build()?;
        let fmt = format!("{creds:?}");
        assert!(!fmt.contains("test-client-secret"), "{fmt}");
        assert!(!fmt.contains("test-refresh-token"), "{fmt}");
        assert!(fmt.contains("test-client-id"), "{fmt}");
        Ok(())
    }

    #[tokio::test]
    async fn refresh_success() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/token"),
                request::body(url_decoded(contains(("grant_type", "refresh_token")))),
                request::body(url_decoded(contains(("client_id", "test-client-id")))),
                request::body(url_decoded(contains((
                    "refresh_token",
                    "test-refresh-token"
                )))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "access_token": "test-access-token",
                "expires_in": 3600,
                "token_type": "Bearer",
            }))),
        );

        let creds = Builder::new(user_json())
            .with_token_uri(server.url("/token").to_string())
            .build()?;
        let headers = creds.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap(),
            "Bearer test-access-token"
        );
        // The token is cached.
        let headers = creds.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap(),
            "Bearer test-access-token"
        );
        Ok(())
    }

    #[tokio::test]
    async fn refresh_with_scopes() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/token"),
                request::body(url_decoded(contains(("scope", "scope1 scope2")))),
            ])
            .respond_with(json_encoded(json!({
                "access_token": "test-access-token",
                "token_type": "Bearer",
            }))),
        );

        let creds = Builder::new(user_json())
            .with_scopes(Some(vec!["scope1".to_string(), "scope2".to_string()]))
            .with_token_uri(server.url("/token").to_string())
            .build()?;
        creds.headers().await?;
        Ok(())
    }

    #[test_case(503, true)]
    #[test_case(401, false)]
    #[tokio::test]
    async fn refresh_failure(code: u16, transient: bool) -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/token"))
                .respond_with(status_code(code).body("test-only-error")),
        );

        let creds = Builder::new(user_json())
            .with_token_uri(server.url("/token").to_string())
            .build()?;
        let err = creds.headers().await.unwrap_err();
        assert_eq!(err.is_transient(), transient, "{err:?}");
        assert!(err.to_string().contains("test-only-error"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn refresh_bad_response() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/token"))
                .respond_with(status_code(200).body("not json")),
        );

        let creds = Builder::new(user_json())
            .with_token_uri(server.url("/token").to_string())
            .build()?;
        let err = creds.headers().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        Ok(())
    }
}
