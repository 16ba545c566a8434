//! Request options and transport settings.

use std::time::Duration;

/// Default origin of the card API.
pub const DEFAULT_API_ORIGIN: &str = "https://api.scryfall.com";

/// Environment variable overriding [`DEFAULT_API_ORIGIN`].
pub const API_ORIGIN_ENV: &str = "SCRYFALL_API_ORIGIN";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The four query options every card request carries.
///
/// All four are serialized on every request, empty ones included, in the
/// order `format`, `face`, `version`, `pretty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    /// Serialization format of the response (e.g., "json", "text", "image").
    pub format: String,
    /// Which face of a double-faced card to target when `format` is "image".
    pub face: String,
    /// Image size variant (e.g., "small", "normal", "large").
    pub version: String,
    /// Ask for human-formatted output.
    pub pretty: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            face: String::new(),
            version: String::new(),
            pretty: String::new(),
        }
    }
}

impl RequestConfig {
    /// Builds a config from loose key/value pairs. Unrecognized keys are ignored.
    pub fn from_options<I, K, V>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (key, value) in options {
            match key.as_ref() {
                "format" => config.format = value.into(),
                "face" => config.face = value.into(),
                "version" => config.version = value.into(),
                "pretty" => config.pretty = value.into(),
                _ => {}
            }
        }
        config
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_face(mut self, face: impl Into<String>) -> Self {
        self.face = face.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_pretty(mut self, pretty: impl Into<String>) -> Self {
        self.pretty = pretty.into();
        self
    }

    /// Query pairs in wire order.
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("format", self.format.as_str()),
            ("face", self.face.as_str()),
            ("version", self.version.as_str()),
            ("pretty", self.pretty.as_str()),
        ]
    }

    /// Percent-encoded query string, without a leading separator.
    pub fn query_string(&self) -> String {
        self.pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Settings for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host the request path is appended to.
    pub origin: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_API_ORIGIN.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("scry-cards/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the origin taken from `SCRYFALL_API_ORIGIN` when set and non-empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(origin) = std::env::var(API_ORIGIN_ENV)
            && !origin.trim().is_empty()
        {
            config.origin = origin.trim().to_string();
        }
        config
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
