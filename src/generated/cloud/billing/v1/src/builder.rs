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

pub mod cloud_catalog {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [CloudCatalog][crate::client::CloudCatalog].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_billing_v1::*;
    /// # use builder::cloud_catalog::ClientBuilder;
    /// # use client::CloudCatalog;
    /// let builder : ClientBuilder = CloudCatalog::builder();
    /// let client = builder
    ///     .with_endpoint("https://cloudbilling.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::CloudCatalog;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = CloudCatalog;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::CloudCatalog] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::CloudCatalog>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudCatalog>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [CloudCatalog::list_services][crate::client::CloudCatalog::list_services] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_billing_v1::builder;
    /// use builder::cloud_catalog::ListServices;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListServices {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListServices(RequestBuilder<crate::model::ListServicesRequest>);

    impl ListServices {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudCatalog>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListServicesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListServicesResponse> {
            let options = self.0.options;
            (*self.0.stub)
                .list_services(self.0.request, options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListServicesResponse, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::ListServicesResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [page_size][crate::model::ListServicesRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListServicesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListServices {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudCatalog::list_skus][crate::client::CloudCatalog::list_skus] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_billing_v1::builder;
    /// use builder::cloud_catalog::ListSkus;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListSkus {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListSkus(RequestBuilder<crate::model::ListSkusRequest>);

    impl ListSkus {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudCatalog>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSkusRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListSkusResponse> {
            let options = self.0.options;
            (*self.0.stub)
                .list_skus(self.0.request, options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListSkusResponse, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::ListSkusResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListSkusRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [start_time][crate::model::ListSkusRequest::start_time].
        pub fn set_start_time<T: Into<prost_types::Timestamp>>(mut self, v: T) -> Self {
            self.0.request.start_time = Some(v.into());
            self
        }

        /// Sets or clears the value of [start_time][crate::model::ListSkusRequest::start_time].
        pub fn set_or_clear_start_time<T: Into<prost_types::Timestamp>>(mut self, v: Option<T>) -> Self {
            self.0.request.start_time = v.map(|v| v.into());
            self
        }

        /// Sets the value of [end_time][crate::model::ListSkusRequest::end_time].
        pub fn set_end_time<T: Into<prost_types::Timestamp>>(mut self, v: T) -> Self {
            self.0.request.end_time = Some(v.into());
            self
        }

        /// Sets or clears the value of [end_time][crate::model::ListSkusRequest::end_time].
        pub fn set_or_clear_end_time<T: Into<prost_types::Timestamp>>(mut self, v: Option<T>) -> Self {
            self.0.request.end_time = v.map(|v| v.into());
            self
        }

        /// Sets the value of [currency_code][crate::model::ListSkusRequest::currency_code].
        pub fn set_currency_code<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.currency_code = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListSkusRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListSkusRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSkus {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
