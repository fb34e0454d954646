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

//! Verify the configuration cascade through the public client builder API.

#[cfg(test)]
mod tests {
    use google_cloud_gax as gax;
    use gax::client_builder::examples::Client;
    use gax::client_builder::internal::{ClientConfig, ClientFactory, new_builder};
    use gax::config::{ClientDefaults, ServiceDefaults, Settings, resolve};
    use gax::options::RequestOptions;
    use std::sync::Arc;
    use std::time::Duration;

    // A factory that returns the configuration, the tests inspect it.
    struct Capture;
    impl ClientFactory for Capture {
        type Client = ClientConfig<()>;
        type Credentials = ();
        async fn build(
            self,
            config: ClientConfig<()>,
        ) -> gax::client_builder::Result<Self::Client> {
            Ok(config)
        }
    }

    fn service() -> ServiceDefaults {
        ServiceDefaults::new("https://cloudbilling.googleapis.com").with_rpc(
            "ListSkus",
            Settings::new().with_timeout(Duration::from_secs(60)),
        )
    }

    #[tokio::test]
    async fn broadest_scope_fallback() -> anyhow::Result<()> {
        let config = new_builder(Capture).build().await?;
        let got = resolve(&service(), &config, "ListSkus", &RequestOptions::default())?;
        assert_eq!(got.endpoint, "https://cloudbilling.googleapis.com");
        assert_eq!(got.timeout, Some(Duration::from_secs(60)));
        Ok(())
    }

    #[tokio::test]
    async fn instance_beats_class_wide() -> anyhow::Result<()> {
        let defaults = Arc::new(
            ClientDefaults::new()
                .with_settings(Settings::new().with_timeout(Duration::from_secs(30)))
                .with_rpc(
                    "ListSkus",
                    Settings::new().with_timeout(Duration::from_secs(45)),
                ),
        );

        let shared = new_builder(Capture)
            .with_defaults(defaults.clone())
            .build()
            .await?;
        let got = resolve(&service(), &shared, "ListSkus", &RequestOptions::default())?;
        assert_eq!(got.timeout, Some(Duration::from_secs(45)));
        let got = resolve(&service(), &shared, "ListServices", &RequestOptions::default())?;
        assert_eq!(got.timeout, Some(Duration::from_secs(30)));

        let custom = new_builder(Capture)
            .with_defaults(defaults)
            .with_timeout(Duration::from_secs(5))
            .build()
            .await?;
        let got = resolve(&service(), &custom, "ListSkus", &RequestOptions::default())?;
        assert_eq!(got.timeout, Some(Duration::from_secs(5)));

        // Building the second client did not change the first.
        let got = resolve(&service(), &shared, "ListSkus", &RequestOptions::default())?;
        assert_eq!(got.timeout, Some(Duration::from_secs(45)));
        Ok(())
    }

    #[tokio::test]
    async fn quota_project_per_call() -> anyhow::Result<()> {
        let config = new_builder(Capture)
            .with_quota_project("instance-project")
            .build()
            .await?;
        let mut call = RequestOptions::default();
        let got = resolve(&service(), &config, "ListSkus", &call)?;
        assert_eq!(got.quota_project.as_deref(), Some("instance-project"));
        call.set_quota_project("call-project");
        let got = resolve(&service(), &config, "ListSkus", &call)?;
        assert_eq!(got.quota_project.as_deref(), Some("call-project"));
        Ok(())
    }

    #[tokio::test]
    async fn example_client_builds() -> anyhow::Result<()> {
        let _client = Client::builder()
            .with_endpoint("https://private.googleapis.com")
            .build()
            .await?;
        Ok(())
    }
}
