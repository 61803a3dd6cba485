use ::http::HeaderName;
use ::http::HeaderValue;
use ::mime::Mime;

use crate::Charset;
use crate::Error;
use crate::RequestConfigBuilder;
use crate::Result;

/// Settings shared by every [`HttpRequest`](crate::HttpRequest) built with it.
///
/// ```rust
/// # fn run() -> ::fluent_http::Result<()> {
/// use ::fluent_http::Charset;
/// use ::fluent_http::RequestConfig;
///
/// let config = RequestConfig::builder()
///     .charset(Charset::Iso8859_1)
///     .boundary("my-fixed-boundary")?
///     .build();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    /// The charset text form values are written in.
    ///
    /// It is named on text form parts, and on url encoded bodies.
    ///
    /// **Defaults** to `UTF-8`.
    pub charset: Charset,

    /// A fixed boundary for multipart bodies.
    ///
    /// When unset, each `MultipartBody` picks a random boundary when it is created.
    /// A boundary set here is checked when an `HttpRequest` is created with this config.
    ///
    /// **Defaults** to None.
    pub boundary: Option<String>,

    /// Headers added to every request, before any set on the request itself.
    pub default_headers: Vec<(HeaderName, HeaderValue)>,
}

impl RequestConfig {
    pub fn builder() -> RequestConfigBuilder {
        RequestConfigBuilder::default()
    }

    /// The content type given to text fields added without one.
    pub(crate) fn form_content_type(&self) -> Result<Mime> {
        let raw = format!(
            "{}; charset={}",
            ::mime::APPLICATION_WWW_FORM_URLENCODED,
            self.charset
        );

        raw.parse()
            .map_err(|source| Error::InvalidContentType {
                content_type: raw,
                source,
            })
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            charset: Charset::default(),
            boundary: None,
            default_headers: Vec::new(),
        }
    }
}
