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

//! The configuration cascade.
//!
//! Each RPC runs with a set of effective options: the endpoint, the overall
//! timeout, the retry policy, the metadata sent as headers, and the quota
//! project. These values come from several configuration scopes. From the
//! most specific to the broadest:
//!
//! 1. the per-call [RequestOptions],
//! 2. the per-RPC settings of the client instance,
//! 3. the settings of the client instance,
//! 4. the per-RPC settings in the process-wide [ClientDefaults],
//! 5. the process-wide [ClientDefaults],
//! 6. the per-RPC defaults of the service,
//! 7. the service defaults, see [ServiceDefaults],
//! 8. the library defaults, see [Settings::library].
//!
//! For each field the most specific scope that sets a value wins. Metadata
//! maps are merged key by key, with the same precedence for each key.

use crate::Result;
use crate::client_builder::internal::ClientConfig;
use crate::error::Error;
use crate::options::RequestOptions;
use crate::retry_policy::RetryPolicy;
use std::collections::BTreeMap;
use std::time::Duration;

const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

/// The overridable settings at one configuration scope.
///
/// All fields are optional. An absent field falls through to the next broader
/// scope.
///
/// # Example
/// ```
/// # use google_cloud_gax::config::Settings;
/// use std::time::Duration;
/// let settings = Settings::new()
///     .with_timeout(Duration::from_secs(20))
///     .with_metadata("x-goog-request-reason", "nightly-batch");
/// assert_eq!(settings.timeout(), Some(Duration::from_secs(20)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settings {
    timeout: Option<Duration>,
    metadata: BTreeMap<String, String>,
    retry_policy: Option<RetryPolicy>,
    quota_project: Option<String>,
}

impl Settings {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// The library-wide defaults, the broadest scope.
    ///
    /// No timeout, no retries, no metadata, and no quota project.
    pub fn library() -> Self {
        Self::default()
    }

    pub fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.set_timeout(v);
        self
    }

    pub fn with_retry_policy<V: Into<RetryPolicy>>(mut self, v: V) -> Self {
        self.set_retry_policy(v);
        self
    }

    pub fn with_metadata<K: Into<String>, V: Into<String>>(mut self, k: K, v: V) -> Self {
        self.insert_metadata(k, v);
        self
    }

    pub fn with_quota_project<V: Into<String>>(mut self, v: V) -> Self {
        self.set_quota_project(v);
        self
    }

    pub fn set_timeout<V: Into<Duration>>(&mut self, v: V) {
        self.timeout = Some(v.into());
    }

    pub fn set_retry_policy<V: Into<RetryPolicy>>(&mut self, v: V) {
        self.retry_policy = Some(v.into());
    }

    pub fn insert_metadata<K: Into<String>, V: Into<String>>(&mut self, k: K, v: V) {
        self.metadata.insert(k.into(), v.into());
    }

    pub fn set_quota_project<V: Into<String>>(&mut self, v: V) {
        self.quota_project = Some(v.into());
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.retry_policy.as_ref()
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn quota_project(&self) -> Option<&str> {
        self.quota_project.as_deref()
    }
}

/// The defaults for a service, provided by its client library.
///
/// These include the default endpoint and any per-RPC timeouts or retry
/// policies recommended for the service.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceDefaults {
    endpoint: Option<String>,
    settings: Settings,
    rpcs: BTreeMap<String, Settings>,
}

impl ServiceDefaults {
    /// Creates the defaults for a service hosted at `endpoint`.
    pub fn new<V: Into<String>>(endpoint: V) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Default::default()
        }
    }

    /// Sets the service-wide settings.
    pub fn with_settings(mut self, v: Settings) -> Self {
        self.settings = v;
        self
    }

    /// Sets the defaults for one RPC, identified by its method name.
    pub fn with_rpc<K: Into<String>>(mut self, method: K, v: Settings) -> Self {
        self.rpcs.insert(method.into(), v);
        self
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rpc(&self, method: &str) -> Option<&Settings> {
        self.rpcs.get(method)
    }
}

/// Process-wide defaults shared by many clients.
///
/// Applications create this snapshot once and give it to each client builder
/// with [with_defaults][crate::client_builder::ClientBuilder::with_defaults].
/// The snapshot is immutable; clients built before and after a change never
/// observe each other's configuration.
///
/// # Example
/// ```
/// # use google_cloud_gax::config::{ClientDefaults, Settings};
/// use std::time::Duration;
/// let defaults = ClientDefaults::<()>::new()
///     .with_settings(Settings::new().with_timeout(Duration::from_secs(30)))
///     .with_rpc("ListSkus", Settings::new().with_timeout(Duration::from_secs(90)));
/// assert_eq!(defaults.settings().timeout(), Some(Duration::from_secs(30)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClientDefaults<Cr> {
    endpoint: Option<String>,
    credentials: Option<Cr>,
    settings: Settings,
    rpcs: BTreeMap<String, Settings>,
}

impl<Cr> Default for ClientDefaults<Cr> {
    fn default() -> Self {
        Self {
            endpoint: None,
            credentials: None,
            settings: Settings::default(),
            rpcs: BTreeMap::new(),
        }
    }
}

impl<Cr> ClientDefaults<Cr> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    pub fn with_credentials<V: Into<Cr>>(mut self, v: V) -> Self {
        self.credentials = Some(v.into());
        self
    }

    pub fn with_settings(mut self, v: Settings) -> Self {
        self.settings = v;
        self
    }

    pub fn with_rpc<K: Into<String>>(mut self, method: K, v: Settings) -> Self {
        self.rpcs.insert(method.into(), v);
        self
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn credentials(&self) -> Option<&Cr> {
        self.credentials.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rpc(&self, method: &str) -> Option<&Settings> {
        self.rpcs.get(method)
    }
}

/// Arguments for the underlying transport channel.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportArgs {
    /// The timeout to establish a connection.
    pub connect_timeout: Option<Duration>,
    /// The TCP keepalive interval.
    pub tcp_keepalive: Option<Duration>,
    /// Ignore service configs published in DNS.
    pub disable_service_config_resolution: bool,
}

impl Default for TransportArgs {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            tcp_keepalive: None,
            disable_service_config_resolution: true,
        }
    }
}

/// The options for one RPC after resolving the configuration cascade.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveOptions {
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub metadata: BTreeMap<String, String>,
    pub retry_policy: Option<RetryPolicy>,
    pub quota_project: Option<String>,
    /// False only when the call opted out of retries with
    /// [RequestOptions::set_idempotency].
    pub idempotent: bool,
}

/// Resolves the effective options for one call of `method`.
///
/// Fails with a configuration error if no scope defines an endpoint. The
/// resolution does not consult any global state.
pub fn resolve<Cr>(
    service: &ServiceDefaults,
    config: &ClientConfig<Cr>,
    method: &str,
    call: &RequestOptions,
) -> Result<EffectiveOptions> {
    let defaults = config.defaults.as_deref();
    let library = Settings::library();
    let scopes = [
        Some(call.settings()),
        config.rpcs.get(method),
        Some(&config.settings),
        defaults.and_then(|d| d.rpc(method)),
        defaults.map(|d| d.settings()),
        service.rpc(method),
        Some(service.settings()),
        Some(&library),
    ];
    let scopes = scopes.into_iter().flatten().collect::<Vec<_>>();

    let endpoint = config
        .endpoint
        .as_deref()
        .or_else(|| defaults.and_then(|d| d.endpoint()))
        .or_else(|| service.endpoint())
        .ok_or_else(|| {
            Error::configuration(format!("no endpoint configured for {method}"))
        })?;

    let timeout = scopes.iter().find_map(|s| s.timeout());
    let retry_policy = scopes.iter().find_map(|s| s.retry_policy()).cloned();
    let quota_project = scopes
        .iter()
        .find_map(|s| s.quota_project())
        .map(str::to_string);
    let metadata = scopes
        .iter()
        .rev()
        .flat_map(|s| s.metadata().iter())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    Ok(EffectiveOptions {
        endpoint: endpoint.to_string(),
        timeout,
        metadata,
        retry_policy,
        quota_project,
        idempotent: call.idempotent().unwrap_or(true),
    })
}

/// Returns true if tracing is enabled by the configuration or the environment.
pub fn tracing_enabled<Cr>(config: &ClientConfig<Cr>) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Code;
    use pretty_assertions::assert_eq;
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use std::sync::Arc;

    const METHOD: &str = "ListJobMessages";

    fn service() -> ServiceDefaults {
        ServiceDefaults::new("https://dataflow.googleapis.com")
            .with_settings(Settings::new().with_timeout(Duration::from_secs(60)))
    }

    #[test]
    fn fallback_to_broadest_scope() -> anyhow::Result<()> {
        let config = ClientConfig::<()>::default();
        let got = resolve(&service(), &config, METHOD, &RequestOptions::default())?;
        assert_eq!(got.endpoint, "https://dataflow.googleapis.com");
        assert_eq!(got.timeout, Some(Duration::from_secs(60)));
        assert_eq!(got.retry_policy, None);
        assert_eq!(got.quota_project, None);
        assert!(got.metadata.is_empty(), "{got:?}");
        assert!(got.idempotent, "{got:?}");
        Ok(())
    }

    #[test]
    fn instance_overrides_class_wide() -> anyhow::Result<()> {
        let defaults = ClientDefaults::new()
            .with_endpoint("https://class.example.com")
            .with_settings(
                Settings::new()
                    .with_timeout(Duration::from_secs(30))
                    .with_quota_project("class-project"),
            );
        let mut config = ClientConfig::<()>::default();
        config.defaults = Some(Arc::new(defaults));
        let got = resolve(&service(), &config, METHOD, &RequestOptions::default())?;
        assert_eq!(got.endpoint, "https://class.example.com");
        assert_eq!(got.timeout, Some(Duration::from_secs(30)));
        assert_eq!(got.quota_project.as_deref(), Some("class-project"));

        config.endpoint = Some("https://instance.example.com".into());
        config.settings.set_timeout(Duration::from_secs(10));
        let got = resolve(&service(), &config, METHOD, &RequestOptions::default())?;
        assert_eq!(got.endpoint, "https://instance.example.com");
        assert_eq!(got.timeout, Some(Duration::from_secs(10)));
        assert_eq!(got.quota_project.as_deref(), Some("class-project"));
        Ok(())
    }

    #[test]
    fn full_precedence() -> anyhow::Result<()> {
        let at = |secs| Settings::new().with_timeout(Duration::from_secs(secs));
        let service = ServiceDefaults::new("https://service.example.com")
            .with_settings(at(7))
            .with_rpc(METHOD, at(6));
        let defaults = ClientDefaults::<()>::new()
            .with_settings(at(5))
            .with_rpc(METHOD, at(4));
        let mut config = ClientConfig::<()>::default();
        config.defaults = Some(Arc::new(defaults));
        config.settings = at(3);
        config.rpcs.insert(METHOD.to_string(), at(2));
        let mut call = RequestOptions::default();

        let got = resolve(&service, &config, METHOD, &call)?;
        assert_eq!(got.timeout, Some(Duration::from_secs(2)));
        call.set_timeout(Duration::from_secs(1));
        let got = resolve(&service, &config, METHOD, &call)?;
        assert_eq!(got.timeout, Some(Duration::from_secs(1)));

        // Per-RPC scopes do not apply to other methods.
        let got = resolve(&service, &config, "OtherMethod", &RequestOptions::default())?;
        assert_eq!(got.timeout, Some(Duration::from_secs(3)));
        config.settings = Settings::new();
        let got = resolve(&service, &config, "OtherMethod", &RequestOptions::default())?;
        assert_eq!(got.timeout, Some(Duration::from_secs(5)));
        config.defaults = None;
        let got = resolve(&service, &config, "OtherMethod", &RequestOptions::default())?;
        assert_eq!(got.timeout, Some(Duration::from_secs(7)));
        let got = resolve(&service, &config, METHOD, &RequestOptions::default())?;
        assert_eq!(got.timeout, Some(Duration::from_secs(2)));
        Ok(())
    }

    #[test]
    fn metadata_merges_per_key() -> anyhow::Result<()> {
        let service = service().with_settings(
            Settings::new()
                .with_metadata("a", "service")
                .with_metadata("b", "service"),
        );
        let mut config = ClientConfig::<()>::default();
        config.settings = Settings::new()
            .with_metadata("b", "instance")
            .with_metadata("c", "instance");
        let mut call = RequestOptions::default();
        call.insert_metadata("c", "call");
        let got = resolve(&service, &config, METHOD, &call)?;
        let want = BTreeMap::from([
            ("a".to_string(), "service".to_string()),
            ("b".to_string(), "instance".to_string()),
            ("c".to_string(), "call".to_string()),
        ]);
        assert_eq!(got.metadata, want);
        Ok(())
    }

    #[test]
    fn retry_policy_and_idempotency() -> anyhow::Result<()> {
        let policy = RetryPolicy::builder()
            .with_retry_codes([Code::Unavailable])
            .build()?;
        let service = service().with_rpc(METHOD, Settings::new().with_retry_policy(policy.clone()));
        let config = ClientConfig::<()>::default();
        let got = resolve(&service, &config, METHOD, &RequestOptions::default())?;
        assert_eq!(got.retry_policy, Some(policy.clone()));
        assert!(got.idempotent, "{got:?}");

        let mut call = RequestOptions::default();
        call.set_idempotency(false);
        let got = resolve(&service, &config, METHOD, &call)?;
        assert_eq!(got.retry_policy, Some(policy));
        assert!(!got.idempotent, "{got:?}");
        Ok(())
    }

    #[test]
    fn missing_endpoint() {
        let config = ClientConfig::<()>::default();
        let got = resolve(
            &ServiceDefaults::default(),
            &config,
            METHOD,
            &RequestOptions::default(),
        );
        assert!(matches!(&got, Err(e) if e.is_configuration()), "{got:?}");
    }

    #[test]
    fn transport_args_default() {
        let args = TransportArgs::default();
        assert!(args.disable_service_config_resolution, "{args:?}");
        assert_eq!(args.connect_timeout, None);
    }

    #[test]
    #[serial]
    fn tracing_from_env() {
        let mut config = ClientConfig::<()>::default();
        {
            let _e = ScopedEnv::remove(LOGGING_VAR);
            assert!(!tracing_enabled(&config));
        }
        {
            let _e = ScopedEnv::set(LOGGING_VAR, "true");
            assert!(tracing_enabled(&config));
        }
        {
            let _e = ScopedEnv::set(LOGGING_VAR, "false");
            assert!(!tracing_enabled(&config));
            config.tracing = true;
            assert!(tracing_enabled(&config));
        }
    }
}
