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

/// Implements a client for the Cloud Trace API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_cloud_trace_v1::client::TraceService;
/// let client = TraceService::builder().build().await?;
/// // use `client` to make requests to the Cloud Trace API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// This file describes an API for collecting and viewing traces and spans
/// within a trace.  A Trace is a collection of spans corresponding to a single
/// operation or set of operations for an application. A span is an individual
/// timed event which forms a node of the trace tree. Spans for a single trace
/// may span multiple services.
///
/// # Configuration
///
/// To configure `TraceService` use the `with_*` methods in the type returned
/// by [builder()][TraceService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://cloudtrace.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::trace_service::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::trace_service::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `TraceService` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `TraceService` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct TraceService {
    inner: std::sync::Arc<dyn super::stub::dynamic::TraceService>,
}

impl TraceService {
    /// Returns a builder for [TraceService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_trace_v1::client::TraceService;
    /// let client = TraceService::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::trace_service::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::trace_service::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::TraceService + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::TraceService>> {
        if gax::config::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::TraceService> {
        super::transport::TraceService::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::TraceService> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::TraceService::new)
    }

    /// Returns of a list of traces that match the specified filter conditions.
    pub fn list_traces(&self) -> super::builder::trace_service::ListTraces {
        super::builder::trace_service::ListTraces::new(self.inner.clone())
    }

    /// Gets a single trace by its ID.
    pub fn get_trace(&self) -> super::builder::trace_service::GetTrace {
        super::builder::trace_service::GetTrace::new(self.inner.clone())
    }

    /// Sends new traces to Cloud Trace or updates existing traces. If the ID
    /// of a trace that you send matches that of an existing trace, any fields
    /// in the existing trace and its spans are overwritten by the provided values,
    /// and any new fields provided are merged with the existing trace data. If the
    /// ID does not match, a new trace is created.
    pub fn patch_traces(&self) -> super::builder::trace_service::PatchTraces {
        super::builder::trace_service::PatchTraces::new(self.inner.clone())
    }
}
