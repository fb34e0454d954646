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

/// The scope used when the application does not request any.
pub(crate) const DEFAULT_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// The OAuth 2.0 token endpoint for authorized user credentials.
pub(crate) const OAUTH2_TOKEN_SERVER_URL: &str = "https://oauth2.googleapis.com/token";

pub(crate) const GOOGLE_APPLICATION_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub(crate) const GCE_METADATA_HOST: &str = "GCE_METADATA_HOST";
pub(crate) const CLOUDSDK_CONFIG: &str = "CLOUDSDK_CONFIG";

pub(crate) const METADATA_ROOT: &str = "metadata.google.internal";
pub(crate) const ADC_FILE_NAME: &str = "application_default_credentials.json";
