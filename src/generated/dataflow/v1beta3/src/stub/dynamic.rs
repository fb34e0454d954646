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

/// A dyn-compatible, crate-private version of [super::MessagesV1Beta3].
#[async_trait::async_trait]
pub trait MessagesV1Beta3: std::fmt::Debug + Send + Sync {
    async fn list_job_messages(
        &self,
        req: crate::model::ListJobMessagesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListJobMessagesResponse>;
}

/// All implementations of [super::MessagesV1Beta3] also implement [MessagesV1Beta3].
#[async_trait::async_trait]
impl<T: super::MessagesV1Beta3> MessagesV1Beta3 for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_job_messages(
        &self,
        req: crate::model::ListJobMessagesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<crate::model::ListJobMessagesResponse> {
        T::list_job_messages(self, req, options).await
    }
}
