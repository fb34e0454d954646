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

/// A dyn-compatible, crate-private version of [super::CloudCatalog].
#[async_trait::async_trait]
pub trait CloudCatalog: std::fmt::Debug + Send + Sync {
    async fn list_services(
        &self,
        req: crate::model::ListServicesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListServicesResponse>;

    async fn list_skus(
        &self,
        req: crate::model::ListSkusRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListSkusResponse>;
}

/// All implementations of [super::CloudCatalog] also implement [CloudCatalog].
#[async_trait::async_trait]
impl<T: super::CloudCatalog> CloudCatalog for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_services(
        &self,
        req: crate::model::ListServicesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListServicesResponse> {
        T::list_services(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_skus(
        &self,
        req: crate::model::ListSkusRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListSkusResponse> {
        T::list_skus(self, req, options).await
    }
}
