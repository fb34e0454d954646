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

//! [Metadata Service] credentials.
//!
//! Google Cloud environments such as [Compute Engine], [Cloud Run], and
//! [Google Kubernetes Engine] expose a metadata server. These credentials
//! fetch access tokens for the default service account of the environment.
//!
//! The server address is `metadata.google.internal`, overridden by the
//! `GCE_METADATA_HOST` environment variable.
//!
//! ```
//! # use google_cloud_auth::credentials::mds::Builder;
//! let credentials = Builder::default()
//!     .with_scopes(["https://www.googleapis.com/auth/bigquery"])
//!     .with_quota_project_id("my-project")
//!     .build();
//! assert_eq!(credentials.quota_project_id().as_deref(), Some("my-project"));
//! ```
//!
//! [Metadata Service]: https://cloud.google.com/compute/docs/metadata/overview
//! [Compute Engine]: https://cloud.google.com/products/compute
//! [Cloud Run]: https://cloud.google.com/run
//! [Google Kubernetes Engine]: https://cloud.google.com/kubernetes-engine

use crate::Result;
use crate::constants::{GCE_METADATA_HOST, METADATA_ROOT};
use crate::credentials::{Credentials, CredentialsProvider};
use crate::errors;
use crate::headers_util::build_bearer_headers;
use crate::token::{Token, TokenProvider, TokenResponse};
use crate::token_cache::TokenCache;
use http::HeaderMap;
use http::header::HeaderValue;

const METADATA_FLAVOR: &str = "metadata-flavor";
const METADATA_FLAVOR_VALUE: &str = "Google";
const MDS_TOKEN_PATH: &str = "/computeMetadata/v1/instance/service-accounts/default/token";

/// Creates credentials backed by the metadata server.
#[derive(Debug, Default)]
pub struct Builder {
    endpoint: Option<String>,
    scopes: Option<Vec<String>>,
    quota_project_id: Option<String>,
}

impl Builder {
    /// Sets the metadata server endpoint, e.g. `http://169.254.169.254`.
    ///
    /// Defaults to `http://${GCE_METADATA_HOST}`, or
    /// `http://metadata.google.internal` if the variable is not set.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the scopes requested for the access tokens.
    ///
    /// The metadata server ignores scopes on some platforms; the token scopes
    /// are those of the service account.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<S: Into<String>>(mut self, quota_project_id: S) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Returns a [Credentials] instance.
    pub fn build(self) -> Credentials {
        let endpoint = self.endpoint.unwrap_or_else(default_endpoint);
        let token_provider = MdsTokenProvider {
            endpoint,
            scopes: self.scopes.filter(|s| !s.is_empty()).map(|s| s.join(",")),
            client: reqwest::Client::new(),
        };
        Credentials::from(MdsCredentials {
            token_provider: TokenCache::new(token_provider),
            quota_project_id: self.quota_project_id,
        })
    }
}

fn default_endpoint() -> String {
    let host = std::env::var(GCE_METADATA_HOST)
        .ok()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| METADATA_ROOT.to_string());
    format!("http://{host}")
}

#[derive(Debug)]
struct MdsCredentials<T> {
    token_provider: T,
    quota_project_id: Option<String>,
}

impl<T> CredentialsProvider for MdsCredentials<T>
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

#[derive(Debug)]
struct MdsTokenProvider {
    endpoint: String,
    scopes: Option<String>,
    client: reqwest::Client,
}

#[async_trait::async_trait]
impl TokenProvider for MdsTokenProvider {
    async fn token(&self) -> Result<Token> {
        let mut request = self
            .client
            .get(format!("{}{MDS_TOKEN_PATH}", self.endpoint))
            .header(
                METADATA_FLAVOR,
                HeaderValue::from_static(METADATA_FLAVOR_VALUE),
            );
        if let Some(scopes) = &self.scopes {
            request = request.query(&[("scopes", scopes.as_str())]);
        }
        let response = request.send().await.map_err(errors::retryable)?;
        if !response.status().is_success() {
            return Err(errors::from_http_response(response, "metadata server token").await);
        }
        let response = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| errors::CredentialsError::new(!e.is_decode(), e))?;
        Ok(Token::from(response))
    }
}
