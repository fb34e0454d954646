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

/// A dyn-compatible, crate-private version of [super::TraceService].
#[async_trait::async_trait]
pub trait TraceService: std::fmt::Debug + Send + Sync {
    async fn list_traces(
        &self,
        req: crate::model::ListTracesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListTracesResponse>;

    async fn get_trace(
        &self,
        req: crate::model::GetTraceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Trace>;

    async fn patch_traces(
        &self,
        req: crate::model::PatchTracesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<()>;
}

/// All implementations of [super::TraceService] also implement [TraceService].
#[async_trait::async_trait]
impl<T: super::TraceService> TraceService for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_traces(
        &self,
        req: crate::model::ListTracesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListTracesResponse> {
        T::list_traces(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_trace(
        &self,
        req: crate::model::GetTraceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::Trace> {
        T::get_trace(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn patch_traces(
        &self,
        req: crate::model::PatchTracesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<()> {
        T::patch_traces(self, req, options).await
    }
}
