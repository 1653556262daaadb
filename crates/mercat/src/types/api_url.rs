//! API base address type.

use std::fmt;

use url::Url;

use crate::error::{Error, InvalidInputError};

/// The base address of the storefront API, resolved once at startup.
///
/// Accepts HTTPS anywhere and plain HTTP only for loopback hosts, and
/// normalizes away a trailing slash so endpoint paths join cleanly.
///
/// # Example
///
/// ```
/// use mercat::ApiUrl;
///
/// let api = ApiUrl::new("https://shop.example.com/").unwrap();
/// assert_eq!(api.endpoint("/orders/"), "https://shop.example.com/orders/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: Url,
}

impl ApiUrl {
    /// Parse and validate a base address.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` when the value is not an absolute URL
    /// with a host, or uses plain HTTP for a non-loopback host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let raw = s.as_ref();
        let invalid = |reason: String| -> Error {
            InvalidInputError::ApiUrl {
                value: raw.to_string(),
                reason,
            }
            .into()
        };

        let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;

        let loopback = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");
        if url.host_str().is_none() {
            return Err(invalid("must have a host".to_string()));
        }
        match url.scheme() {
            "https" => {}
            "http" if loopback => {}
            _ => {
                return Err(invalid(
                    "must use HTTPS (HTTP allowed only for localhost)".to_string(),
                ));
            }
        }

        // A bare origin parses with path "/"; drop it so endpoint paths
        // join without a double slash
        if url.path() == "/" {
            url.set_path("");
        }

        Ok(Self { url })
    }

    /// Join an endpoint path onto the base address.
    ///
    /// The path is expected to start with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.url.as_str().trim_end_matches('/'), path)
    }

    /// Returns the base address as a string.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_and_loopback_http_only() {
        assert!(ApiUrl::new("https://shop.example.com").is_ok());
        assert!(ApiUrl::new("http://localhost:8080").is_ok());
        assert!(ApiUrl::new("http://127.0.0.1:8080").is_ok());
        assert!(ApiUrl::new("http://shop.example.com").is_err());
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["/orders/", "shop.example.com", "mailto:sales@example.com"] {
            assert!(ApiUrl::new(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn endpoint_joins_regardless_of_trailing_slash() {
        let plain = ApiUrl::new("http://localhost:8080").unwrap();
        let slashed = ApiUrl::new("http://localhost:8080/").unwrap();
        assert_eq!(plain.endpoint("/tasks"), "http://localhost:8080/tasks");
        assert_eq!(slashed.endpoint("/tasks"), "http://localhost:8080/tasks");
    }

    #[test]
    fn display_round_trips() {
        let api = ApiUrl::new("https://shop.example.com").unwrap();
        assert!(ApiUrl::new(api.to_string()).is_ok());
    }
}
