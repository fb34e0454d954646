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

//! Implements the common features of all REST-based clients.

use crate::options::{ClientConfig, make_credentials, request_headers};
use auth::credentials::Credentials;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::config::ServiceDefaults;
use gax::error::Error;
use gax::options::RequestOptions;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    credentials: Credentials,
    config: Arc<ClientConfig>,
    service: Arc<ServiceDefaults>,
    endpoint: String,
    tracing: bool,
}

impl ReqwestClient {
    pub async fn new(
        config: ClientConfig,
        service: ServiceDefaults,
    ) -> gax::client_builder::Result<Self> {
        let endpoint = crate::options::endpoint(&config, &service)?;
        let credentials = make_credentials(&config, &endpoint)?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.transport.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(keepalive) = config.transport.tcp_keepalive {
            builder = builder.tcp_keepalive(keepalive);
        }
        let inner = builder.build().map_err(BuilderError::transport)?;
        let tracing = gax::config::tracing_enabled(&config);
        Ok(Self {
            inner,
            credentials,
            config: Arc::new(config),
            service: Arc::new(service),
            endpoint,
            tracing,
        })
    }

    /// The credentials used by this client.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Starts a request for `path`, relative to the client endpoint.
    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends a request, retrying as configured for `rpc`.
    ///
    /// `rpc` names the method in the per-RPC configuration scopes.
    pub async fn execute<I, O>(
        &self,
        rpc: &str,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
        api_client_header: &'static str,
    ) -> Result<O>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default + Send + 'static,
    {
        let effective = gax::config::resolve(&self.service, &self.config, rpc, &options)?;
        let headers = request_headers(api_client_header, &effective, &self.credentials)?;
        builder = builder.headers(headers);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        if self.tracing {
            tracing::info!(rpc, endpoint = %effective.endpoint, "sending request");
        }
        let this = self.clone();
        let inner = move |remaining: Option<Duration>| {
            let this = this.clone();
            let builder = builder.try_clone();
            async move {
                let builder =
                    builder.ok_or_else(|| Error::io("the request body cannot be cloned"))?;
                this.request_attempt::<O>(builder, remaining).await
            }
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        let result = gax::retry_loop_internal::retry_loop(
            inner,
            sleep,
            effective.timeout,
            effective.idempotent,
            effective.retry_policy,
        )
        .await;
        if self.tracing {
            if let Err(e) = &result {
                tracing::warn!(rpc, "request failed: {e}");
            }
        }
        result
    }

    async fn request_attempt<O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        remaining_time: Option<Duration>,
    ) -> Result<O> {
        builder = remaining_time
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let auth_headers = self
            .credentials
            .headers()
            .await
            .map_err(Error::authentication)?;
        builder = builder.headers(auth_headers);
        let response = builder.send().await.map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_connect() => Error::connect(e),
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    // 204 No Content has no body.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let response = http::Response::from(response);
    let (_, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?;

    match body.to_bytes() {
        content if content.is_empty() && no_content_status => Ok(O::default()),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser),
    }
}
