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

//! Client configuration helpers shared by the transports.

use auth::credentials::Builder as CredentialsBuilder;
use gax::client_builder::Error as BuilderError;
use gax::config::EffectiveOptions;
use gax::error::Error;
use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};

pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;
pub type Credentials = auth::credentials::Credentials;

pub(crate) const API_CLIENT_HEADER: &str = "x-goog-api-client";
pub(crate) const QUOTA_PROJECT_HEADER: &str = "x-goog-user-project";

/// Returns the endpoint for the client, before any per-call overrides.
///
/// The instance endpoint wins over the process-wide defaults, which win over
/// the service default.
pub fn endpoint(
    config: &ClientConfig,
    service: &gax::config::ServiceDefaults,
) -> gax::client_builder::Result<String> {
    config
        .endpoint
        .as_deref()
        .or_else(|| config.defaults.as_deref().and_then(|d| d.endpoint()))
        .or_else(|| service.endpoint())
        .map(str::to_string)
        .ok_or_else(|| BuilderError::configuration("no endpoint configured for the client"))
}

/// Returns the configured credentials, or creates the default credentials.
pub fn make_credentials(
    config: &ClientConfig,
    endpoint: &str,
) -> gax::client_builder::Result<Credentials> {
    if let Some(c) = config.credentials() {
        return Ok(c.clone());
    }
    let mut builder = CredentialsBuilder::default().with_endpoint(endpoint);
    if let Some(scopes) = config.scopes.clone() {
        builder = builder.with_scopes(scopes);
    }
    builder.build().map_err(BuilderError::cred)
}

/// Computes the headers sent with each attempt of a call.
///
/// These do not include the authentication headers, which may change between
/// attempts. Custom metadata cannot replace the `x-goog-api-client` header.
pub fn request_headers(
    api_client_header: &str,
    options: &EffectiveOptions,
    credentials: &Credentials,
) -> gax::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(API_CLIENT_HEADER),
        HeaderValue::from_str(api_client_header).map_err(Error::validation)?,
    );
    let quota_project = options
        .quota_project
        .clone()
        .or_else(|| credentials.quota_project_id());
    if let Some(project) = quota_project {
        headers.insert(
            HeaderName::from_static(QUOTA_PROJECT_HEADER),
            HeaderValue::from_str(&project).map_err(Error::validation)?,
        );
    }
    for (key, value) in &options.metadata {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(Error::validation)?;
        if name.as_str() == API_CLIENT_HEADER {
            continue;
        }
        let value = HeaderValue::from_str(value).map_err(Error::validation)?;
        headers.insert(name, value);
    }
    Ok(headers)
}
