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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the Web Security Scanner API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_cloud_websecurityscanner_v1beta::client::WebSecurityScanner;
/// let client = WebSecurityScanner::builder().build().await?;
/// // use `client` to make requests to the Web Security Scanner API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Cloud Web Security Scanner Service identifies security vulnerabilities in web
/// applications hosted on Google Cloud Platform. It crawls your application, and
/// attempts to exercise as many user inputs and event handlers as possible.
///
/// # Configuration
///
/// To configure `WebSecurityScanner` use the `with_*` methods in the type returned
/// by [builder()][WebSecurityScanner::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://websecurityscanner.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::web_security_scanner::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::web_security_scanner::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `WebSecurityScanner` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `WebSecurityScanner` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct WebSecurityScanner {
    inner: std::sync::Arc<dyn super::stub::dynamic::WebSecurityScanner>,
}

impl WebSecurityScanner {
    /// Returns a builder for [WebSecurityScanner].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_websecurityscanner_v1beta::client::WebSecurityScanner;
    /// let client = WebSecurityScanner::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::web_security_scanner::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::web_security_scanner::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::WebSecurityScanner + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::WebSecurityScanner>> {
        if gax::config::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::WebSecurityScanner> {
        super::transport::WebSecurityScanner::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::WebSecurityScanner> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::WebSecurityScanner::new)
    }

    /// Gets a ScanRun.
    pub fn get_scan_run(&self) -> super::builder::web_security_scanner::GetScanRun {
        super::builder::web_security_scanner::GetScanRun::new(self.inner.clone())
    }

    /// Lists ScanRuns under a given ScanConfig, in descending order of ScanRun
    /// stop time.
    pub fn list_scan_runs(&self) -> super::builder::web_security_scanner::ListScanRuns {
        super::builder::web_security_scanner::ListScanRuns::new(self.inner.clone())
    }
}
