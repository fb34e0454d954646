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

//! Implements the common features of all gRPC-based clients.

use crate::options::{ClientConfig, make_credentials, request_headers};
use auth::credentials::Credentials;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::config::ServiceDefaults;
use gax::error::Error;
use gax::options::RequestOptions;
use http::HeaderMap;
use std::sync::Arc;
use std::time::Duration;

mod from_status;
pub use from_status::to_gax_error;

#[doc(hidden)]
pub type InnerClient = tonic::client::Grpc<tonic::transport::Channel>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct Client {
    inner: InnerClient,
    credentials: Credentials,
    config: Arc<ClientConfig>,
    service: Arc<ServiceDefaults>,
}

impl Client {
    /// Create a new client.
    ///
    /// The channel connects lazily, on the first request.
    pub async fn new(
        config: ClientConfig,
        service: ServiceDefaults,
    ) -> gax::client_builder::Result<Self> {
        let endpoint = crate::options::endpoint(&config, &service)?;
        let credentials = make_credentials(&config, &endpoint)?;
        let inner = Self::make_inner(&config, endpoint)?;
        Ok(Self {
            inner,
            credentials,
            config: Arc::new(config),
            service: Arc::new(service),
        })
    }

    /// Sends a request.
    pub async fn execute<Request, Response>(
        &self,
        method: tonic::GrpcMethod<'static>,
        path: http::uri::PathAndQuery,
        request: Request,
        options: RequestOptions,
        api_client_header: &'static str,
    ) -> Result<Response>
    where
        Request: prost::Message + Clone + 'static,
        Response: prost::Message + Default + 'static,
    {
        let effective =
            gax::config::resolve(&self.service, &self.config, method.method(), &options)?;
        let headers = request_headers(api_client_header, &effective, &self.credentials)?;
        let client = self.inner.clone();
        let credentials = self.credentials.clone();
        // Capture the method inside `Extensions`, which has no lifetime
        // parameters.
        let mut extensions = tonic::Extensions::new();
        extensions.insert(method);
        let inner = move |remaining_time: Option<Duration>| {
            let mut client = client.clone();
            let credentials = credentials.clone();
            let extensions = extensions.clone();
            let path = path.clone();
            let request = request.clone();
            let headers = headers.clone();
            async move {
                Self::request_attempt::<Request, Response>(
                    &mut client,
                    &credentials,
                    extensions,
                    path,
                    request,
                    remaining_time,
                    headers,
                )
                .await
            }
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        gax::retry_loop_internal::retry_loop(
            inner,
            sleep,
            effective.timeout,
            effective.idempotent,
            effective.retry_policy,
        )
        .await
    }

    /// Makes a single request attempt.
    async fn request_attempt<Request, Response>(
        inner: &mut InnerClient,
        credentials: &Credentials,
        extensions: tonic::Extensions,
        path: http::uri::PathAndQuery,
        request: Request,
        remaining_time: Option<Duration>,
        headers: HeaderMap,
    ) -> Result<Response>
    where
        Request: prost::Message + 'static,
        Response: prost::Message + Default + 'static,
    {
        let mut headers = headers;
        let auth_headers = credentials.headers().await.map_err(Error::authentication)?;
        for (key, value) in auth_headers.into_iter() {
            if let Some(key) = key {
                headers.append(key, value);
            }
        }
        let metadata = tonic::metadata::MetadataMap::from_headers(headers);
        let mut request = tonic::Request::from_parts(metadata, extensions, request);
        if let Some(timeout) = remaining_time {
            request.set_timeout(timeout);
        }
        let codec = tonic_prost::ProstCodec::<Request, Response>::default();
        inner.ready().await.map_err(Error::connect)?;
        let response: tonic::Response<Response> = inner
            .unary(request, path, codec)
            .await
            .map_err(to_gax_error)?;
        Ok(response.into_inner())
    }

    fn make_inner(
        config: &ClientConfig,
        endpoint: String,
    ) -> gax::client_builder::Result<InnerClient> {
        use tonic::transport::{ClientTlsConfig, Endpoint};
        let use_tls = endpoint.starts_with("https://");
        let mut channel = Endpoint::from_shared(endpoint).map_err(BuilderError::configuration)?;
        if use_tls {
            channel = channel
                .tls_config(ClientTlsConfig::new().with_enabled_roots())
                .map_err(BuilderError::transport)?;
        }
        if let Some(timeout) = config.transport.connect_timeout {
            channel = channel.connect_timeout(timeout);
        }
        channel = channel.tcp_keepalive(config.transport.tcp_keepalive);
        // tonic does not resolve service configs from DNS.
        tracing::debug!(
            disable_service_config_resolution = config.transport.disable_service_config_resolution,
            "creating gRPC channel"
        );
        Ok(tonic::client::Grpc::new(channel.connect_lazy()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::credentials::anonymous;
    use gax::config::Settings;

    fn config(endpoint: &str) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.endpoint = Some(endpoint.to_string());
        config.cred = Some(anonymous::Builder::new().build());
        config
    }

    #[tokio::test]
    async fn lazy_channel() -> anyhow::Result<()> {
        let service = ServiceDefaults::new("https://test.googleapis.com");
        let client = Client::new(config("http://127.0.0.1:1"), service).await?;
        assert_eq!(client.service.endpoint(), Some("https://test.googleapis.com"));
        Ok(())
    }

    #[tokio::test]
    async fn bad_endpoint() {
        let service = ServiceDefaults::new("https://test.googleapis.com");
        let got = Client::new(config("not a uri"), service).await;
        assert!(matches!(&got, Err(e) if e.is_configuration()), "{got:?}");
    }

    #[tokio::test]
    async fn connection_refused_is_retried() -> anyhow::Result<()> {
        use gax::error::rpc::Code;
        use gax::retry_policy::RetryPolicy;
        use std::error::Error as _;

        let policy = RetryPolicy::builder()
            .with_initial_delay(Duration::from_millis(1))
            .with_max_delay(Duration::from_millis(1))
            .with_retry_codes([Code::Unavailable])
            .build()?;
        let service = ServiceDefaults::new("https://test.googleapis.com").with_settings(
            Settings::new()
                .with_timeout(Duration::from_millis(200))
                .with_retry_policy(policy),
        );
        let client = Client::new(config("http://127.0.0.1:1"), service).await?;
        let err = client
            .execute::<(), ()>(
                tonic::GrpcMethod::new("test.v1.Service", "Get"),
                http::uri::PathAndQuery::from_static("/test.v1.Service/Get"),
                (),
                RequestOptions::default(),
                "gl-rust/test",
            )
            .await
            .expect_err("nothing listens on the endpoint");
        // Without retries the connection error would be returned right away.
        assert!(err.is_timeout(), "{err:?}");
        if let Some(last) = err.source().and_then(|e| e.downcast_ref::<Error>()) {
            assert!(last.is_connect(), "{err:?}");
            assert_eq!(last.code(), Some(Code::Unavailable));
        }
        Ok(())
    }

    #[tokio::test]
    async fn connection_refused_without_policy() -> anyhow::Result<()> {
        let service = ServiceDefaults::new("https://test.googleapis.com")
            .with_settings(Settings::new().with_timeout(Duration::from_secs(5)));
        let client = Client::new(config("http://127.0.0.1:1"), service).await?;
        let err = client
            .execute::<(), ()>(
                tonic::GrpcMethod::new("test.v1.Service", "Get"),
                http::uri::PathAndQuery::from_static("/test.v1.Service/Get"),
                (),
                RequestOptions::default(),
                "gl-rust/test",
            )
            .await
            .expect_err("nothing listens on the endpoint");
        assert!(err.is_connect(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }
}
