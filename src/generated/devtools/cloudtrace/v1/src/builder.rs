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

pub mod trace_service {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [TraceService][crate::client::TraceService].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_trace_v1::*;
    /// # use builder::trace_service::ClientBuilder;
    /// # use client::TraceService;
    /// let builder : ClientBuilder = TraceService::builder();
    /// let client = builder
    ///     .with_endpoint("https://cloudtrace.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::TraceService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = TraceService;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::TraceService] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::TraceService>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::TraceService>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [TraceService::list_traces][crate::client::TraceService::list_traces] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_trace_v1::builder;
    /// use builder::trace_service::ListTraces;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListTraces {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListTraces(RequestBuilder<crate::model::ListTracesRequest>);

    impl ListTraces {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::TraceService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListTracesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListTracesResponse> {
            let options = self.0.options;
            (*self.0.stub)
                .list_traces(self.0.request, options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListTracesResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page_token = token;
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::ListTracesResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListTracesRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [view][crate::model::ListTracesRequest::view].
        pub fn set_view<T: Into<crate::model::list_traces_request::ViewType>>(mut self, v: T) -> Self {
            let v: crate::model::list_traces_request::ViewType = v.into();
            self.0.request.view = v as i32;
            self
        }

        /// Sets the value of [page_size][crate::model::ListTracesRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListTracesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [start_time][crate::model::ListTracesRequest::start_time].
        pub fn set_start_time<T: Into<prost_types::Timestamp>>(mut self, v: T) -> Self {
            self.0.request.start_time = Some(v.into());
            self
        }

        /// Sets or clears the value of [start_time][crate::model::ListTracesRequest::start_time].
        pub fn set_or_clear_start_time<T: Into<prost_types::Timestamp>>(mut self, v: Option<T>) -> Self {
            self.0.request.start_time = v.map(|v| v.into());
            self
        }

        /// Sets the value of [end_time][crate::model::ListTracesRequest::end_time].
        pub fn set_end_time<T: Into<prost_types::Timestamp>>(mut self, v: T) -> Self {
            self.0.request.end_time = Some(v.into());
            self
        }

        /// Sets or clears the value of [end_time][crate::model::ListTracesRequest::end_time].
        pub fn set_or_clear_end_time<T: Into<prost_types::Timestamp>>(mut self, v: Option<T>) -> Self {
            self.0.request.end_time = v.map(|v| v.into());
            self
        }

        /// Sets the value of [filter][crate::model::ListTracesRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [order_by][crate::model::ListTracesRequest::order_by].
        pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListTraces {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TraceService::get_trace][crate::client::TraceService::get_trace] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_trace_v1::builder;
    /// use builder::trace_service::GetTrace;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetTrace {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetTrace(RequestBuilder<crate::model::GetTraceRequest>);

    impl GetTrace {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::TraceService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetTraceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Trace> {
            let options = self.0.options;
            (*self.0.stub)
                .get_trace(self.0.request, options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetTraceRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [trace_id][crate::model::GetTraceRequest::trace_id].
        pub fn set_trace_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.trace_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetTrace {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [TraceService::patch_traces][crate::client::TraceService::patch_traces] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_trace_v1::builder;
    /// use builder::trace_service::PatchTraces;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> PatchTraces {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct PatchTraces(RequestBuilder<crate::model::PatchTracesRequest>);

    impl PatchTraces {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::TraceService>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PatchTracesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let options = self.0.options;
            (*self.0.stub)
                .patch_traces(self.0.request, options)
                .await
        }

        /// Sets the value of [project_id][crate::model::PatchTracesRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [traces][crate::model::PatchTracesRequest::traces].
        pub fn set_traces<T: Into<crate::model::Traces>>(mut self, v: T) -> Self {
            self.0.request.traces = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PatchTraces {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
