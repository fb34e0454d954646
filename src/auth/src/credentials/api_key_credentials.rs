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

//! Create [API Key] credentials.
//!
//! API keys identify the calling project for quota and billing. Only a few
//! services accept them; most require a principal.
//!
//! ```
//! # use google_cloud_auth::credentials::api_key_credentials::Builder;
//! # tokio_test::block_on(async {
//! let credentials = Builder::new("my-api-key").build();
//! let headers = credentials.headers().await?;
//! assert_eq!(headers.get("x-goog-api-key").map(|v| v.is_sensitive()), Some(true));
//! # Ok::<(), anyhow::Error>(())
//! # });
//! ```
//!
//! [API Key]: https://cloud.google.com/docs/authentication/api-keys-use

use crate::Result;
use crate::credentials::{Credentials, CredentialsProvider};
use crate::headers_util::build_api_key_headers;
use http::HeaderMap;

struct ApiKeyCredentials {
    api_key: String,
    quota_project_id: Option<String>,
}

impl std::fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("api_key", &"[censored]")
            .field("quota_project_id", &self.quota_project_id)
            .finish()
    }
}

impl CredentialsProvider for ApiKeyCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        build_api_key_headers(&self.api_key)
    }

    fn quota_project_id(&self) -> Option<String> {
        self.quota_project_id.clone()
    }
}

/// A builder for creating credentials that authenticate using an [API key].
///
/// [API key]: https://cloud.google.com/docs/authentication/api-keys-use
#[derive(Debug)]
pub struct Builder {
    api_key: String,
    quota_project_id: Option<String>,
}

impl Builder {
    /// Creates a new builder with the given API key.
    pub fn new<T: Into<String>>(api_key: T) -> Self {
        Self {
            api_key: api_key.into(),
            quota_project_id: None,
        }
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<T: Into<String>>(mut self, quota_project_id: T) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Returns a [Credentials] instance.
    pub fn build(self) -> Credentials {
        Credentials::from(ApiKeyCredentials {
            api_key: self.api_key,
            quota_project_id: self.quota_project_id,
        })
    }
}
