use ::http::HeaderName;
use ::http::HeaderValue;

use crate::Charset;
use crate::RequestConfig;
use crate::Result;
use crate::internals::check_boundary;

/// This is for easing the building of [`RequestConfig`](crate::RequestConfig).
///
/// For full documentation see there.
///
/// ```rust
/// use ::fluent_http::Charset;
/// use ::fluent_http::RequestConfig;
///
/// let config = RequestConfig::builder()
///     .charset(Charset::UsAscii)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestConfigBuilder {
    config: RequestConfig,
}

impl RequestConfigBuilder {
    pub fn charset(mut self, charset: Charset) -> Self {
        self.config.charset = charset;
        self
    }

    /// Fixes the multipart boundary.
    ///
    /// Returns [`Error::InvalidBoundary`](crate::Error::InvalidBoundary)
    /// if it is not a valid RFC 2046 boundary.
    pub fn boundary(mut self, boundary: &str) -> Result<Self> {
        check_boundary(boundary)?;
        self.config.boundary = Some(boundary.to_string());
        Ok(self)
    }

    pub fn random_boundary(mut self) -> Self {
        self.config.boundary = None;
        self
    }

    pub fn default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.config.default_headers.push((name, value));
        self
    }

    pub fn build(self) -> RequestConfig {
        self.config
    }
}

#[cfg(test)]
mod test_build {
    use super::*;
    use crate::Error;
    use ::http::header;

    #[test]
    fn it_should_build_default_config_by_default() {
        let config = RequestConfig::builder().build();
        let expected = RequestConfig::default();

        assert_eq!(config, expected);
    }

    #[test]
    fn it_should_set_charset() {
        let config = RequestConfig::builder().charset(Charset::Iso8859_1).build();

        assert_eq!(config.charset, Charset::Iso8859_1);
    }

    #[test]
    fn it_should_set_boundary_and_clear_it_again() {
        let config = RequestConfig::builder().boundary("abc123").unwrap().build();
        assert_eq!(config.boundary, Some("abc123".to_string()));

        let config = RequestConfig::builder()
            .boundary("abc123")
            .unwrap()
            .random_boundary()
            .build();
        assert_eq!(config.boundary, None);
    }

    #[test]
    fn it_should_reject_invalid_boundaries() {
        let result = RequestConfig::builder().boundary("bad\r\nboundary");

        assert!(matches!(result, Err(Error::InvalidBoundary { boundary }) if boundary == "bad\r\nboundary"));
    }

    #[test]
    fn it_should_keep_default_headers_in_order() {
        let config = RequestConfig::builder()
            .default_header(header::USER_AGENT, HeaderValue::from_static("fluent-http"))
            .default_header(header::ACCEPT, HeaderValue::from_static("*/*"))
            .build();

        let names: Vec<_> = config
            .default_headers
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["user-agent", "accept"]);
    }
}
