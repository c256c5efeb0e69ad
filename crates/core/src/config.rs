use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::Error;

/// Catalog endpoint used when nothing else is configured.
pub const DEFAULT_SOURCE_URL: &str = "https://dummyjson.com/products?limit=100";

/// Environment variable that overrides the catalog endpoint.
pub const SOURCE_URL_ENV: &str = "SCROLL_INDICATOR_URL";

/// Absolute http(s) URL the widget fetches its product list from.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SourceUrl(Url);

impl SourceUrl {
    /// Parses and validates a source URL.
    ///
    /// # Errors
    ///
    /// Returns `Error` when the input is blank, not an absolute URL, or uses a
    /// scheme other than http/https.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, Error> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::EmptySourceUrl);
        }
        let url = Url::parse(trimmed).map_err(|err| Error::InvalidSourceUrl {
            raw: trimmed.to_string(),
            reason: err.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(Error::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl Default for SourceUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_SOURCE_URL).expect("default source url is valid"))
    }
}

impl FromStr for SourceUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceUrl({})", self.as_str())
    }
}

/// Resolved application configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    source_url: SourceUrl,
}

impl AppConfig {
    #[must_use]
    pub fn new(source_url: SourceUrl) -> Self {
        Self { source_url }
    }

    /// Resolves the configuration from the available layers.
    ///
    /// Precedence: explicit override (e.g. a CLI flag), then the runtime
    /// environment, then the value baked in at build time, then the default.
    /// The runtime environment is empty on `wasm32`, so browser builds are
    /// configured at build time.
    ///
    /// # Errors
    ///
    /// Returns `Error` if the winning layer holds an invalid URL.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, Error> {
        let runtime = std::env::var(SOURCE_URL_ENV).ok();
        let raw = explicit
            .map(str::to_string)
            .or(runtime)
            .or_else(|| option_env!("SCROLL_INDICATOR_URL").map(str::to_string));

        let source_url = match raw {
            Some(value) => SourceUrl::parse(value)?,
            None => SourceUrl::default(),
        };
        Ok(Self { source_url })
    }

    #[must_use]
    pub fn source_url(&self) -> &SourceUrl {
        &self.source_url
    }
}
