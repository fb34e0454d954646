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
use gax::options::RequestOptions;

const SERVICE: &str = "google.dataflow.v1beta3.MessagesV1Beta3";

/// The defaults for every [MessagesV1Beta3] call.
pub(crate) fn service_defaults() -> gax::config::ServiceDefaults {
    gax::config::ServiceDefaults::new(crate::DEFAULT_HOST).with_settings(
        gax::config::Settings::new().with_timeout(std::time::Duration::from_secs(60)),
    )
}

/// Implements [MessagesV1Beta3](super::stub::MessagesV1Beta3) using a [gaxi::grpc::Client].
#[derive(Clone, Debug)]
pub struct MessagesV1Beta3 {
    inner: gaxi::grpc::Client,
}

impl MessagesV1Beta3 {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::grpc::Client::new(config, service_defaults()).await?;
        Ok(Self { inner })
    }
}

impl super::stub::MessagesV1Beta3 for MessagesV1Beta3 {
    async fn list_job_messages(
        &self,
        req: crate::model::ListJobMessagesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListJobMessagesResponse> {
        self.inner
            .execute(
                tonic::GrpcMethod::new(SERVICE, "ListJobMessages"),
                http::uri::PathAndQuery::from_static("/google.dataflow.v1beta3.MessagesV1Beta3/ListJobMessages"),
                req,
                options,
                &crate::info::X_GOOG_API_CLIENT_HEADER,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let defaults = service_defaults();
        assert_eq!(defaults.endpoint(), Some(crate::DEFAULT_HOST));
        assert_eq!(defaults.settings().timeout(), Some(std::time::Duration::from_secs(60)));
    }
}
