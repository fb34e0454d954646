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

/// Implements a client for the Cloud Billing API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_cloud_billing_v1::client::CloudCatalog;
/// let client = CloudCatalog::builder().build().await?;
/// // use `client` to make requests to the Cloud Billing API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// A catalog of Google Cloud Platform services and SKUs.
/// Provides pricing information and metadata on Google Cloud Platform services
/// and SKUs.
///
/// # Configuration
///
/// To configure `CloudCatalog` use the `with_*` methods in the type returned
/// by [builder()][CloudCatalog::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://cloudbilling.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::cloud_catalog::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::cloud_catalog::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `CloudCatalog` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `CloudCatalog` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct CloudCatalog {
    inner: std::sync::Arc<dyn super::stub::dynamic::CloudCatalog>,
}

impl CloudCatalog {
    /// Returns a builder for [CloudCatalog].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_billing_v1::client::CloudCatalog;
    /// let client = CloudCatalog::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::cloud_catalog::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::cloud_catalog::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::CloudCatalog + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::CloudCatalog>> {
        if gax::config::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CloudCatalog> {
        super::transport::CloudCatalog::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CloudCatalog> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::CloudCatalog::new)
    }

    /// Lists all public cloud services.
    pub fn list_services(&self) -> super::builder::cloud_catalog::ListServices {
        super::builder::cloud_catalog::ListServices::new(self.inner.clone())
    }

    /// Lists all publicly available SKUs for a given cloud service.
    pub fn list_skus(&self) -> super::builder::cloud_catalog::ListSkus {
        super::builder::cloud_catalog::ListSkus::new(self.inner.clone())
    }
}
