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

pub mod messages_v_1_beta_3 {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [MessagesV1Beta3][crate::client::MessagesV1Beta3].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_dataflow_v1beta3::*;
    /// # use builder::messages_v_1_beta_3::ClientBuilder;
    /// # use client::MessagesV1Beta3;
    /// let builder : ClientBuilder = MessagesV1Beta3::builder();
    /// let client = builder
    ///     .with_endpoint("https://dataflow.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::MessagesV1Beta3;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = MessagesV1Beta3;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::MessagesV1Beta3] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::MessagesV1Beta3>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::MessagesV1Beta3>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [MessagesV1Beta3::list_job_messages][crate::client::MessagesV1Beta3::list_job_messages] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_dataflow_v1beta3::builder;
    /// use builder::messages_v_1_beta_3::ListJobMessages;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListJobMessages {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListJobMessages(RequestBuilder<crate::model::ListJobMessagesRequest>);

    impl ListJobMessages {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::MessagesV1Beta3>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListJobMessagesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListJobMessagesResponse> {
            let options = self.0.options;
            (*self.0.stub)
                .list_job_messages(self.0.request, options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListJobMessagesResponse, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::ListJobMessagesResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListJobMessagesRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [job_id][crate::model::ListJobMessagesRequest::job_id].
        pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }

        /// Sets the value of [minimum_importance][crate::model::ListJobMessagesRequest::minimum_importance].
        pub fn set_minimum_importance<T: Into<crate::model::JobMessageImportance>>(mut self, v: T) -> Self {
            let v: crate::model::JobMessageImportance = v.into();
            self.0.request.minimum_importance = v as i32;
            self
        }

        /// Sets the value of [page_size][crate::model::ListJobMessagesRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListJobMessagesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [start_time][crate::model::ListJobMessagesRequest::start_time].
        pub fn set_start_time<T: Into<prost_types::Timestamp>>(mut self, v: T) -> Self {
            self.0.request.start_time = Some(v.into());
            self
        }

        /// Sets or clears the value of [start_time][crate::model::ListJobMessagesRequest::start_time].
        pub fn set_or_clear_start_time<T: Into<prost_types::Timestamp>>(mut self, v: Option<T>) -> Self {
            self.0.request.start_time = v.map(|v| v.into());
            self
        }

        /// Sets the value of [end_time][crate::model::ListJobMessagesRequest::end_time].
        pub fn set_end_time<T: Into<prost_types::Timestamp>>(mut self, v: T) -> Self {
            self.0.request.end_time = Some(v.into());
            self
        }

        /// Sets or clears the value of [end_time][crate::model::ListJobMessagesRequest::end_time].
        pub fn set_or_clear_end_time<T: Into<prost_types::Timestamp>>(mut self, v: Option<T>) -> Self {
            self.0.request.end_time = v.map(|v| v.into());
            self
        }

        /// Sets the value of [location][crate::model::ListJobMessagesRequest::location].
        pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.location = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListJobMessages {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
