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

//! [Service Account] credentials.
//!
//! Service account keys are JSON files containing an RSA private key. These
//! credentials sign a JWT with the key and use it directly as the bearer
//! token, without a round trip to a token endpoint.
//!
//! When the application does not request scopes, the JWT audience is the
//! service host, e.g. `https://bigquery.googleapis.com/`. Regional endpoints
//! (a `-` in the first host label) and explicit scopes use a `scope` claim
//! instead.
//!
//! [Service Account]: https://cloud.google.com/iam/docs/service-account-overview

mod jws;

use crate::Result;
use crate::build_errors::Error as BuildError;
use crate::constants::DEFAULT_SCOPE;
use crate::credentials::{BuildResult, Credentials, CredentialsProvider};
use crate::errors;
use crate::headers_util::build_bearer_headers;
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;
use base64::prelude::{BASE64_URL_SAFE_NO_PAD, Engine as _};
use http::HeaderMap;
use jws::{CLOCK_SKEW_FUDGE, DEFAULT_TOKEN_TIMEOUT, JwsClaims, JwsHeader, Target};
use rustls::SignatureScheme;
use rustls::crypto::{CryptoProvider, KeyProvider};
use rustls::pki_types::PrivateKeyDer;
use rustls::pki_types::pem::PemObject;
use rustls::sign::Signer;
use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

/// The fields of a service account key file.
#[derive(Clone, Deserialize, Default)]
struct ServiceAccountKey {
    client_email: String,
    private_key_id: Option<String>,
    private_key: String,
    project_id: Option<String>,
    quota_project_id: Option<String>,
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"[censored]")
            .field("project_id", &self.project_id)
            .field("quota_project_id", &self.quota_project_id)
            .finish()
    }
}

impl ServiceAccountKey {
    fn from_json(json: Value) -> BuildResult<Self> {
        #[derive(Deserialize)]
        struct Raw {
            client_email: Option<String>,
            private_key_id: Option<String>,
            private_key: Option<String>,
            project_id: Option<String>,
            quota_project_id: Option<String>,
        }
        let raw = serde_json::from_value::<Raw>(json).map_err(BuildError::parsing)?;
        Ok(Self {
            client_email: raw
                .client_email
                .filter(|v| !v.is_empty())
                .ok_or_else(|| BuildError::missing_field("client_email"))?,
            private_key: raw
                .private_key
                .filter(|v| !v.is_empty())
                .ok_or_else(|| BuildError::missing_field("private_key"))?,
            private_key_id: raw.private_key_id,
            project_id: raw.project_id,
            quota_project_id: raw.quota_project_id,
        })
    }
}

/// Creates service account credentials from a parsed key file.
#[derive(Debug)]
pub(crate) struct Builder {
    json: Value,
    scopes: Option<Vec<String>>,
    quota_project_id: Option<String>,
    endpoint: Option<String>,
}

impl Builder {
    pub(crate) fn new(json: Value) -> Self {
        Self {
            json,
            scopes: None,
            quota_project_id: None,
            endpoint: None,
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

    pub(crate) fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub(crate) fn build(self) -> BuildResult<Credentials> {
        let key = ServiceAccountKey::from_json(self.json)?;
        let target = target(self.scopes, self.endpoint.as_deref());
        tracing::debug!(
            "service account credentials for {}, target={target:?}",
            key.client_email
        );
        let quota_project_id = self.quota_project_id.or_else(|| key.quota_project_id.clone());
        let client_email = key.client_email.clone();
        Ok(Credentials::from(ServiceAccountCredentials {
            token_provider: TokenCache::new(ServiceAccountTokenProvider { key, target }),
            quota_project_id,
            client_email,
        }))
    }
}

fn target(scopes: Option<Vec<String>>, endpoint: Option<&str>) -> Target {
    if let Some(scopes) = scopes.filter(|s| !s.is_empty()) {
        return Target::Scopes(scopes.join(" "));
    }
    endpoint
        .and_then(audience)
        .map(Target::Audience)
        .unwrap_or_else(|| Target::Scopes(DEFAULT_SCOPE.to_string()))
}

// Returns `https://{host}/` for global endpoints.
fn audience(endpoint: &str) -> Option<String> {
    let uri = endpoint.parse::<http::Uri>().ok()?;
    let host = uri.host()?;
    let first = host.split('.').next()?;
    if first.is_empty() || first.contains('-') {
        return None;
    }
    Some(format!("https://{host}/"))
}

#[derive(Debug)]
struct ServiceAccountCredentials<T> {
    token_provider: T,
    quota_project_id: Option<String>,
    client_email: String,
}

impl<T> CredentialsProvider for ServiceAccountCredentials<T>
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

    fn issuer(&self) -> Option<String> {
        Some(self.client_email.clone())
    }
}

#[derive(Debug)]
struct ServiceAccountTokenProvider {
    key: ServiceAccountKey,
    target: Target,
}

#[async_trait::async_trait]
impl TokenProvider for ServiceAccountTokenProvider {
    async fn token(&self) -> Result<Token> {
        let signer = signer(&self.key.private_key)?;
        // The claims need wall-clock time, the expiration uses the monotonic clock.
        let claims = JwsClaims::new(
            &self.key.client_email,
            &self.target,
            OffsetDateTime::now_utc(),
        );
        let header = JwsHeader {
            alg: "RS256",
            typ: "JWT",
            kid: self.key.private_key_id.as_deref(),
        };
        let encoded = format!("{}.{}", header.encode()?, claims.encode()?);
        let sig = signer
            .sign(encoded.as_bytes())
            .map_err(errors::non_retryable)?;
        Ok(Token::bearer(
            format!("{encoded}.{}", BASE64_URL_SAFE_NO_PAD.encode(sig)),
            Some(DEFAULT_TOKEN_TIMEOUT - CLOCK_SKEW_FUDGE),
        ))
    }
}

fn key_provider() -> Result<&'static dyn KeyProvider> {
    if let Some(provider) = CryptoProvider::get_default() {
        return Ok(provider.key_provider);
    }
    #[cfg(feature = "default-rustls-provider")]
    return Ok(rustls::crypto::aws_lc_rs::default_provider().key_provider);
    #[cfg(not(feature = "default-rustls-provider"))]
    Err(errors::non_retryable_from_str(
        "no rustls crypto provider is installed, call `rustls::CryptoProvider::install_default()`",
    ))
}

// Creates a signer using the private key stored in the service account file.
fn signer(private_key: &str) -> Result<Box<dyn Signer>> {
    let key = PrivateKeyDer::from_pem_slice(private_key.as_bytes()).map_err(|e| {
        errors::CredentialsError::from_source(false, "cannot parse service account private key", e)
    })?;
    let key = key_provider()?
        .load_private_key(key)
        .map_err(errors::non_retryable)?;
    key.choose_scheme(&[SignatureScheme::RSA_PKCS1_SHA256])
        .ok_or_else(|| {
            errors::non_retryable_from_str(
                "the service account private key does not support RSA_PKCS1_SHA256 signatures",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::tests::{b64_decode_to_json, generate_pkcs8_private_key};
    use crate::token::tests::MockTokenProvider;
    use http::header::AUTHORIZATION;
    use serde_json::json;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    fn key_json(private_key: &str) -> Value {
        json!({
            "type": "service_account",
            "client_email": "test-sa@test-project.iam.gserviceaccount.com",
            "private_key_id": "test-private-key-id",
            "private_key": private_key,
            "project_id": "test-project",
        })
    }

    fn decode_token(token: &str) -> (Value, Value) {
        let parts = token.split('.').collect::<Vec<_>>();
        assert_eq!(parts.len(), 3, "{token}");
        (b64_decode_to_json(parts[0]), b64_decode_to_json(parts[1]))
    }

    #[test]
    fn debug_censors_private_key() -> TestResult {
        let key = ServiceAccountKey::from_json(key_json("test-only-private-key"))?;
        let fmt = format!("{key:?}");
        assert!(!fmt.contains("test-only-private-key"), "{fmt}");
        assert!(fmt.contains("[censored]"), "{fmt}");
        assert!(fmt.contains("test-private-key-id"), "{fmt}");
        Ok(())
    }

    #[test_case("client_email")]
    #[test_case("private_key")]
    fn missing_field(field: &str) {
        let mut json = key_json("test-only");
        json.as_object_mut().unwrap().remove(field);
        let err = Builder::new(json).build().unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
    }

    #[test]
    fn bad_field_type() {
        let mut json = key_json("test-only");
        json["client_email"] = json!(42);
        let err = Builder::new(json).build().unwrap_err();
        assert!(err.is_parsing(), "{err:?}");
    }

    #[test_case(None, None, Target::Scopes(DEFAULT_SCOPE.to_string()); "defaults")]
    #[test_case(None, Some("https://bigquery.googleapis.com"), Target::Audience("https://bigquery.googleapis.com/".to_string()); "global endpoint")]
    #[test_case(None, Some("https://cloudtrace.googleapis.com:443/v1"), Target::Audience("https://cloudtrace.googleapis.com/".to_string()); "endpoint with port and path")]
    #[test_case(None, Some("https://us-central1-dataflow.googleapis.com"), Target::Scopes(DEFAULT_SCOPE.to_string()); "regional endpoint")]
    #[test_case(Some(vec!["s1", "s2"]), Some("https://bigquery.googleapis.com"), Target::Scopes("s1 s2".to_string()); "explicit scopes")]
    #[test_case(Some(vec![]), None, Target::Scopes(DEFAULT_SCOPE.to_string()); "empty scopes")]
    fn jwt_target(scopes: Option<Vec<&str>>, endpoint: Option<&str>, want: Target) {
        let scopes = scopes.map(|v| v.into_iter().map(str::to_string).collect());
        assert_eq!(target(scopes, endpoint), want);
    }

    #[tokio::test(start_paused = true)]
    async fn self_signed_jwt_expiration() -> TestResult {
        let key = ServiceAccountKey::from_json(key_json(&generate_pkcs8_private_key()))?;
        let provider = ServiceAccountTokenProvider {
            key,
            target: Target::Scopes(DEFAULT_SCOPE.to_string()),
        };
        let token = provider.token().await?;
        assert_eq!(token.token_type, "Bearer");
        let lifetime = DEFAULT_TOKEN_TIMEOUT - CLOCK_SKEW_FUDGE;
        assert!(token.expires_within(lifetime), "{token:?}");
        assert!(
            !token.expires_within(lifetime - std::time::Duration::from_secs(1)),
            "{token:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn self_signed_jwt_with_audience() -> TestResult {
        let private_key = generate_pkcs8_private_key();
        let creds = Builder::new(key_json(&private_key))
            .with_endpoint(Some("https://bigquery.googleapis.com".to_string()))
            .build()?;
        let headers = creds.headers().await?;
        let value = headers.get(AUTHORIZATION).unwrap();
        assert!(value.is_sensitive());
        let value = value.to_str()?;
        let token = value.strip_prefix("Bearer ").unwrap();
        let (header, claims) = decode_token(token);
        assert_eq!(header["alg"], "RS256");
        assert_eq!(header["typ"], "JWT");
        assert_eq!(header["kid"], "test-private-key-id");
        assert_eq!(claims["iss"], "test-sa@test-project.iam.gserviceaccount.com");
        assert_eq!(claims["sub"], "test-sa@test-project.iam.gserviceaccount.com");
        assert_eq!(claims["aud"], "https://bigquery.googleapis.com/");
        assert!(claims.get("scope").is_none(), "{claims:?}");
        let iat = claims["iat"].as_i64().unwrap();
        let exp = claims["exp"].as_i64().unwrap();
        assert_eq!(exp - iat, 3600);
        Ok(())
    }

    #[tokio::test]
    async fn self_signed_jwt_with_scopes() -> TestResult {
        let private_key = generate_pkcs8_private_key();
        let creds = Builder::new(key_json(&private_key))
            .with_scopes(Some(vec!["scope1".to_string(), "scope2".to_string()]))
            .with_endpoint(Some("https://bigquery.googleapis.com".to_string()))
            .build()?;
        let headers = creds.headers().await?;
        let token = headers.get(AUTHORIZATION).unwrap().to_str()?;
        let (_, claims) = decode_token(token.strip_prefix("Bearer ").unwrap());
        assert_eq!(claims["scope"], "scope1 scope2");
        assert!(claims.get("aud").is_none(), "{claims:?}");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_private_key() -> TestResult {
        let creds = Builder::new(key_json("not a PEM key")).build()?;
        let err = creds.headers().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        Ok(())
    }

    #[test]
    fn issuer_and_quota_project() -> TestResult {
        let mut json = key_json("test-only");
        json["quota_project_id"] = json!("file-quota");
        let creds = Builder::new(json.clone()).build()?;
        assert_eq!(
            creds.issuer().as_deref(),
            Some("test-sa@test-project.iam.gserviceaccount.com")
        );
        assert_eq!(creds.quota_project_id().as_deref(), Some("file-quota"));

        let creds = Builder::new(json)
            .with_quota_project_id(Some("override".to_string()))
            .build()?;
        assert_eq!(creds.quota_project_id().as_deref(), Some("override"));
        Ok(())
    }

    #[tokio::test]
    async fn headers_use_token_provider() -> TestResult {
        let mut mock = MockTokenProvider::new();
        mock.expect_token().times(1).return_once(|| {
            Ok(Token::bearer("test-token", None))
        });
        let creds = ServiceAccountCredentials {
            token_provider: mock,
            quota_project_id: None,
            client_email: "test-only".into(),
        };
        let headers = creds.headers().await?;
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-token");
        Ok(())
    }

    #[tokio::test]
    async fn headers_propagate_errors() {
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .return_once(|| Err(errors::non_retryable_from_str("test-only")));
        let creds = ServiceAccountCredentials {
            token_provider: mock,
            quota_project_id: None,
            client_email: "test-only".into(),
        };
        let err = creds.headers().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
    }
}
