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

#[cfg(test)]
mod tests {
    use google_cloud_auth::credentials::{Builder, Credentials, Source, anonymous, api_key_credentials};
    use http::header::AUTHORIZATION;
    use rsa::RsaPrivateKey;
    use rsa::pkcs8::{EncodePrivateKey, LineEnding};
    use serde_json::json;

    type Result = anyhow::Result<()>;

    #[tokio::test]
    async fn service_account_from_file() -> Result {
        let key = RsaPrivateKey::new(&mut rsa::rand_core::OsRng, 2048)?;
        let pem = key.to_pkcs8_pem(LineEnding::LF)?.to_string();
        let contents = json!({
            "type": "service_account",
            "client_email": "test-sa@test-project.iam.gserviceaccount.com",
            "private_key_id": "test-key-id",
            "private_key": pem,
        });
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("key.json");
        std::fs::write(&path, contents.to_string())?;

        let credentials = Builder::new(Source::FilePath(path))
            .with_endpoint("https://cloudtrace.googleapis.com")
            .build()?;
        assert_eq!(
            credentials.issuer().as_deref(),
            Some("test-sa@test-project.iam.gserviceaccount.com")
        );
        let first = credentials.headers().await?;
        let value = first.get(AUTHORIZATION).expect("authorization header");
        assert!(value.to_str()?.starts_with("Bearer "), "{value:?}");

        // Clones share the token cache.
        let clone = credentials.clone();
        let second = clone.headers().await?;
        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn prebuilt_sources() -> Result {
        let anonymous = anonymous::Builder::new().build();
        let got = Builder::new(Source::Prebuilt(anonymous)).build()?;
        assert!(got.headers().await?.is_empty());

        let api_key: Credentials = api_key_credentials::Builder::new("test-api-key")
            .with_quota_project_id("test-project")
            .build();
        let got = Builder::new(api_key.into()).build()?;
        assert_eq!(got.quota_project_id().as_deref(), Some("test-project"));
        Ok(())
    }
}
