//! Builder pattern for configuring SCIM server instances.
//!
//! The configuration decides how `meta.location` URLs and `Location` headers
//! are rendered, so it has to describe the externally visible address of the
//! service.

use crate::error::ScimError;
use crate::resource::ResourceKind;
use crate::scim_server::ScimServer;
use crate::storage::StorageProvider;

/// Configuration for the externally visible service address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScimServerConfig {
    /// URL scheme, `http` or `https`.
    pub scheme: String,

    /// Host name or address clients use to reach the service.
    pub host: String,

    /// Port clients use to reach the service.
    pub port: u16,

    /// SCIM protocol version segment used in URLs. Defaults to "v2".
    pub scim_version: String,
}

impl Default for ScimServerConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 8080,
            scim_version: "v2".to_string(),
        }
    }
}

impl ScimServerConfig {
    /// `{scheme}://{host}:{port}/{version}`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}/{}",
            self.scheme, self.host, self.port, self.scim_version
        )
    }

    /// Canonical location of a resource.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scim_directory::ScimServerConfig;
    /// use scim_directory::resource::ResourceKind;
    ///
    /// let config = ScimServerConfig::default();
    /// assert_eq!(
    ///     config.location(ResourceKind::User, "123"),
    ///     "http://localhost:8080/v2/Users/123"
    /// );
    /// ```
    pub fn location(&self, kind: ResourceKind, id: &str) -> String {
        format!("{}/{}/{}", self.base_url(), kind.endpoint(), id)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ScimError> {
        if self.scheme != "http" && self.scheme != "https" {
            return Err(ScimError::internal("Scheme must be http or https"));
        }

        if self.host.is_empty() {
            return Err(ScimError::internal("Host cannot be empty"));
        }

        if self.port == 0 {
            return Err(ScimError::internal("Port cannot be zero"));
        }

        if self.scim_version.is_empty() || self.scim_version.contains('/') {
            return Err(ScimError::internal(
                "SCIM version must be a single non-empty path segment",
            ));
        }

        Ok(())
    }
}

/// Builder for configuring and creating SCIM server instances.
///
/// # Examples
///
/// ```rust
/// use scim_directory::ScimServerBuilder;
/// use scim_directory::storage::InMemoryStorage;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let server = ScimServerBuilder::new(InMemoryStorage::new())
///     .with_scheme("https")
///     .with_host("scim.example.com")
///     .with_port(443)
///     .build()?;
/// assert_eq!(server.config().base_url(), "https://scim.example.com:443/v2");
/// # Ok(())
/// # }
/// ```
pub struct ScimServerBuilder<S> {
    storage: S,
    config: ScimServerConfig,
}

impl<S: StorageProvider> ScimServerBuilder<S> {
    /// Create a new builder around the store the server will use.
    ///
    /// Starts with default configuration (`http://localhost:8080`, `v2`).
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            config: ScimServerConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ScimServerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.config.scheme = scheme.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the SCIM protocol version to use in URLs.
    ///
    /// Defaults to "v2" if not specified.
    pub fn with_scim_version(mut self, version: impl Into<String>) -> Self {
        self.config.scim_version = version.into();
        self
    }

    /// Build the configured SCIM server.
    ///
    /// # Errors
    ///
    /// Returns a `ScimError` if the configuration is invalid.
    pub fn build(self) -> Result<ScimServer<S>, ScimError> {
        self.config.validate()?;
        Ok(ScimServer::with_config(self.storage, self.config))
    }
}
