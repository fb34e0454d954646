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

use crate::Result;

/// Implements a [MessagesV1Beta3](super::stub::MessagesV1Beta3) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct MessagesV1Beta3<T>
where
    T: super::stub::MessagesV1Beta3 + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> MessagesV1Beta3<T>
where
    T: super::stub::MessagesV1Beta3 + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::MessagesV1Beta3 for MessagesV1Beta3<T>
where
    T: super::stub::MessagesV1Beta3 + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn list_job_messages(
        &self,
        req: crate::model::ListJobMessagesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<crate::model::ListJobMessagesResponse> {
        self.inner.list_job_messages(req, options).await
    }
}
