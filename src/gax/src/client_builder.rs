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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint, the authentication
//! credentials, or the timeouts. The client libraries use a generic builder
//! type to provide such functionality. The types in this module implement the
//! client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use google_cloud_gax::client_builder::examples;
//! # use google_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: share process-wide defaults between clients
//!
//! ```
//! # use google_cloud_gax::client_builder::examples;
//! # use google_cloud_gax::client_builder::Result;
//! # use google_cloud_gax::config::{ClientDefaults, Settings};
//! # use std::time::Duration;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let defaults = std::sync::Arc::new(ClientDefaults::new()
//!     .with_settings(Settings::new().with_timeout(Duration::from_secs(30))));
//! let c1 = Client::builder().with_defaults(defaults.clone()).build().await?;
//! let c2 = Client::builder()
//!     .with_defaults(defaults)
//!     .with_timeout(Duration::from_secs(10))
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::config::{ClientDefaults, Settings, TransportArgs};
use crate::retry_policy::RetryPolicy;
use std::sync::Arc;
use std::time::Duration;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use google_cloud_gax::client_builder::examples;
/// use google_cloud_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_default_credentials() => {
///         println!("error during client initialization: {e}");
///         println!("troubleshoot using https://cloud.google.com/docs/authentication/client-libraries");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, the client configuration is invalid, e.g. a malformed endpoint.
    pub fn is_configuration(&self) -> bool {
        matches!(&self.0, ErrorKind::Configuration(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Configuration(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("invalid client configuration")]
    Configuration(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the client libraries a "client" represents a connection to a specific
/// service. All the clients are initialized using a `ClientBuilder`.
///
/// Settings on the builder form the instance scope of the configuration
/// cascade, see [crate::config]. Once the client is built its configuration
/// never changes.
///
/// ```
/// # use google_cloud_gax::client_builder::examples;
/// # use google_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_endpoint("http://private.googleapis.com")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    /// Tracing can also be enabled with the `GOOGLE_CLOUD_RUST_LOGGING`
    /// environment variable.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Without explicit credentials the client resolves the ambient default
    /// credentials when it is built.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Configure the OAuth2 scopes used with the default credentials.
    pub fn with_scopes<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.config.scopes = Some(v.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Sets the overall timeout for every RPC, including retries.
    pub fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.config.settings.set_timeout(v);
        self
    }

    /// Configure the retry policy for every RPC.
    pub fn with_retry_policy<V: Into<RetryPolicy>>(mut self, v: V) -> Self {
        self.config.settings.set_retry_policy(v);
        self
    }

    /// Adds a metadata entry sent with every RPC.
    pub fn with_metadata<K: Into<String>, V: Into<String>>(mut self, k: K, v: V) -> Self {
        self.config.settings.insert_metadata(k, v);
        self
    }

    /// Sets the project billed for every RPC.
    pub fn with_quota_project<V: Into<String>>(mut self, v: V) -> Self {
        self.config.settings.set_quota_project(v);
        self
    }

    /// Overrides the settings for a single RPC, identified by its method name.
    ///
    /// ```
    /// # use google_cloud_gax::client_builder::examples;
    /// # use google_cloud_gax::client_builder::Result;
    /// # use google_cloud_gax::config::Settings;
    /// # use std::time::Duration;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_timeout(Duration::from_secs(10))
    ///     .with_rpc_settings("ListJobMessages", Settings::new().with_timeout(Duration::from_secs(20)))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_rpc_settings<K: Into<String>>(mut self, method: K, v: Settings) -> Self {
        self.config.rpcs.insert(method.into(), v);
        self
    }

    /// Configure the transport channel.
    pub fn with_transport_args(mut self, v: TransportArgs) -> Self {
        self.config.transport = v;
        self
    }

    /// Use a process-wide defaults snapshot.
    ///
    /// Instance settings take precedence over the snapshot.
    pub fn with_defaults(mut self, v: Arc<ClientDefaults<Cr>>) -> Self {
        self.config.defaults = Some(v);
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;
    use std::collections::BTreeMap;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// The instance scope of the configuration cascade.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub scopes: Option<Vec<String>>,
        pub tracing: bool,
        pub settings: Settings,
        pub rpcs: BTreeMap<String, Settings>,
        pub transport: TransportArgs,
        pub defaults: Option<Arc<ClientDefaults<Cr>>>,
    }

    impl<Cr> ClientConfig<Cr> {
        /// The explicit credentials, from the instance or the process-wide defaults.
        pub fn credentials(&self) -> Option<&Cr> {
            self.cred
                .as_ref()
                .or_else(|| self.defaults.as_deref().and_then(|d| d.credentials()))
        }
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                scopes: None,
                tracing: false,
                settings: Settings::default(),
                rpcs: BTreeMap::new(),
                transport: TransportArgs::default(),
                defaults: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: super::internal::ClientConfig<Credentials>) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub name: String,
    }

    impl From<&str> for Credentials {
        fn from(value: &str) -> Self {
            Self { name: value.into() }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn error_credentials() {
        let error = Error::cred(std::io::Error::other("no key file"));
        assert!(error.is_default_credentials(), "{error:?}");
        assert!(error.to_string().contains("default credentials"), "{error}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(got.is_some(), "{error:?}");
    }

    #[test]
    fn transport() {
        let error = Error::transport("cannot connect");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("transport client"), "{error}");
    }

    #[test]
    fn configuration() {
        let error = Error::configuration("bad endpoint");
        assert!(error.is_configuration(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
    }
}
