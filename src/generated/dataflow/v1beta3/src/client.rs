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

/// Implements a client for the Dataflow API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_cloud_dataflow_v1beta3::client::MessagesV1Beta3;
/// let client = MessagesV1Beta3::builder().build().await?;
/// // use `client` to make requests to the Dataflow API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// The Dataflow Messages API is used for monitoring the progress of
/// Dataflow jobs.
///
/// # Configuration
///
/// To configure `MessagesV1Beta3` use the `with_*` methods in the type returned
/// by [builder()][MessagesV1Beta3::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://dataflow.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::messages_v_1_beta_3::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::messages_v_1_beta_3::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `MessagesV1Beta3` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `MessagesV1Beta3` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct MessagesV1Beta3 {
    inner: std::sync::Arc<dyn super::stub::dynamic::MessagesV1Beta3>,
}

impl MessagesV1Beta3 {
    /// Returns a builder for [MessagesV1Beta3].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_dataflow_v1beta3::client::MessagesV1Beta3;
    /// let client = MessagesV1Beta3::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::messages_v_1_beta_3::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::messages_v_1_beta_3::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::MessagesV1Beta3 + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::MessagesV1Beta3>> {
        if gax::config::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::MessagesV1Beta3> {
        super::transport::MessagesV1Beta3::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::MessagesV1Beta3> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::MessagesV1Beta3::new)
    }

    /// Request the job status.
    ///
    /// To request the status of a job, we recommend using
    /// `projects.locations.jobs.messages.list` with a [regional endpoint]. Using
    /// `projects.jobs.messages.list` is not recommended, as you can only request
    /// the status of jobs that are running in `us-central1`.
    ///
    /// [regional endpoint]: https://cloud.google.com/dataflow/docs/concepts/regional-endpoints
    pub fn list_job_messages(&self) -> super::builder::messages_v_1_beta_3::ListJobMessages {
        super::builder::messages_v_1_beta_3::ListJobMessages::new(self.inner.clone())
    }
}
