use ::base64::Engine;
use ::base64::engine::general_purpose::STANDARD;
use ::bytes::Bytes;
use ::http::HeaderName;
use ::http::HeaderValue;
use ::http::Method;
use ::http::Request;
use ::http::header;
use ::mime::Mime;
use ::serde::Serialize;
use ::std::path::Path;
use ::tracing::debug;
use ::url::Url;

use crate::Error;
use crate::FileResponse;
use crate::RawResponse;
use crate::RequestConfig;
use crate::Result;
use crate::Transport;
use crate::internals::QueryParamsStore;
use crate::internals::RequestPathFormatter;
use crate::internals::check_boundary;
use crate::multipart::MultipartBody;
use crate::multipart::RequestEntity;

/// An outgoing request: the method, url, headers, and credentials to send.
///
/// Bodies are attached by turning the request into a body builder,
/// such as [`HttpRequest::multipart()`].
///
/// ```rust
/// # fn run() -> ::fluent_http::Result<()> {
/// use ::fluent_http::HttpRequest;
///
/// let mut request = HttpRequest::post("http://localhost:8080/upload")?;
/// request
///     .header("x-request-id", "abc-123")?
///     .basic_auth("joe", "hunter2");
///
/// let mut body = request.multipart();
/// body.field("name", "Joe");
///
/// let built = body.build_request()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: Method,
    url: Url,
    headers: Vec<(HeaderName, HeaderValue)>,
    query_params: QueryParamsStore,
    basic_auth: Option<BasicAuth>,
    config: RequestConfig,
    form_content_type: Mime,
}

#[derive(Clone)]
struct BasicAuth {
    username: String,
    password: String,
}

impl ::std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

impl HttpRequest {
    pub fn new(method: Method, url: &str) -> Result<Self> {
        Self::with_config(method, url, RequestConfig::default())
    }

    pub fn with_config(method: Method, url: &str, config: RequestConfig) -> Result<Self> {
        let parsed_url = Url::parse(url).map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        if let Some(boundary) = &config.boundary {
            check_boundary(boundary)?;
        }
        let form_content_type = config.form_content_type()?;

        Ok(Self {
            method,
            url: parsed_url,
            headers: Vec::new(),
            query_params: QueryParamsStore::default(),
            basic_auth: None,
            config,
            form_content_type,
        })
    }

    pub fn get(url: &str) -> Result<Self> {
        Self::new(Method::GET, url)
    }

    pub fn post(url: &str) -> Result<Self> {
        Self::new(Method::POST, url)
    }

    pub fn put(url: &str) -> Result<Self> {
        Self::new(Method::PUT, url)
    }

    pub fn patch(url: &str) -> Result<Self> {
        Self::new(Method::PATCH, url)
    }

    pub fn delete(url: &str) -> Result<Self> {
        Self::new(Method::DELETE, url)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Adds a header to be sent. Repeated names are all sent.
    pub fn header(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        let invalid_header = || Error::InvalidHeader {
            name: name.to_string(),
        };
        let header_name = HeaderName::try_from(name).map_err(|_| invalid_header())?;
        let header_value = HeaderValue::try_from(value).map_err(|_| invalid_header())?;

        self.headers.push((header_name, header_value));
        Ok(self)
    }

    /// Sends the credentials given using HTTP Basic authentication.
    ///
    /// Calling this again replaces the earlier credentials.
    pub fn basic_auth(&mut self, username: &str, password: &str) -> &mut Self {
        self.basic_auth = Some(BasicAuth {
            username: username.to_string(),
            password: password.to_string(),
        });
        self
    }

    /// Adds query parameters, serialized using `serde_urlencoded`.
    ///
    /// This takes anything that serializes to key-value pairs,
    /// such as a struct, a map, or a slice of tuples.
    pub fn query_params<V>(&mut self, query_params: V) -> Result<&mut Self>
    where
        V: Serialize,
    {
        self.query_params.add(query_params)?;
        Ok(self)
    }

    /// Adds a query fragment exactly as given, without any encoding.
    pub fn raw_query_param(&mut self, query_param: &str) -> &mut Self {
        self.query_params.add_raw(query_param);
        self
    }

    /// Turns this into a form body builder.
    pub fn multipart(self) -> MultipartBody {
        MultipartBody::new(self)
    }

    /// Builds the request to hand to a transport, carrying the entity given as its body.
    pub fn build_request(&self, entity: Option<&RequestEntity>) -> Result<Request<Bytes>> {
        let mut url = self.url.clone();
        self.query_params.apply_to(&mut url);

        let mut request_builder = Request::builder()
            .method(self.method.clone())
            .uri(url.as_str());

        for (header_name, header_value) in self.config.default_headers.iter().chain(&self.headers) {
            request_builder = request_builder.header(header_name, header_value);
        }

        if let Some(basic_auth) = &self.basic_auth {
            request_builder =
                request_builder.header(header::AUTHORIZATION, build_basic_auth_header(basic_auth)?);
        }

        let body = match entity {
            Some(entity) => {
                request_builder = request_builder.header(header::CONTENT_TYPE, entity.content_type());
                entity.as_bytes().clone()
            }
            None => Bytes::new(),
        };

        Ok(request_builder.body(body)?)
    }

    /// Sends this request without a body,
    /// and writes the response to a new file at `path`.
    pub fn as_file<T, P>(&self, transport: &T, path: P) -> Result<FileResponse>
    where
        T: Transport + ?Sized,
        P: AsRef<Path>,
    {
        let request = self.build_request(None)?;
        let raw_response = self.send(transport, request)?;

        FileResponse::new(raw_response, path)
    }

    pub(crate) fn send<T>(&self, transport: &T, request: Request<Bytes>) -> Result<RawResponse>
    where
        T: Transport + ?Sized,
    {
        let request_format = self.debug_request_format().to_string();
        debug!(request = %request_format, "sending request");

        transport.send(request).map_err(|source| Error::Transport {
            request: request_format,
            source,
        })
    }

    pub(crate) fn form_content_type(&self) -> &Mime {
        &self.form_content_type
    }

    pub(crate) fn debug_request_format(&self) -> RequestPathFormatter<'_> {
        RequestPathFormatter::new(&self.method, &self.url)
    }
}

fn build_basic_auth_header(basic_auth: &BasicAuth) -> Result<HeaderValue> {
    let credentials = format!("{}:{}", basic_auth.username, basic_auth.password);
    let mut header_value = HeaderValue::try_from(format!("Basic {}", STANDARD.encode(credentials)))
        .map_err(|_| Error::InvalidHeader {
            name: header::AUTHORIZATION.to_string(),
        })?;
    header_value.set_sensitive(true);

    Ok(header_value)
}

#[cfg(test)]
mod test_new {
    use super::*;

    #[test]
    fn it_should_error_on_invalid_url() {
        let result = HttpRequest::get("not a url");

        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }

    #[test]
    fn it_should_keep_method_and_url() {
        let request = HttpRequest::put("http://localhost/items/1").unwrap();

        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url().as_str(), "http://localhost/items/1");
    }

    #[test]
    fn it_should_error_on_invalid_configured_boundary() {
        let config = RequestConfig {
            boundary: Some("ends with space ".to_string()),
            ..RequestConfig::default()
        };

        let result = HttpRequest::with_config(Method::POST, "http://localhost/", config);

        assert!(matches!(result, Err(Error::InvalidBoundary { .. })));
    }
}

#[cfg(test)]
mod test_header {
    use super::*;

    #[test]
    fn it_should_send_headers_added() {
        let mut request = HttpRequest::get("http://localhost/").unwrap();
        request.header("x-first", "1").unwrap().header("x-second", "2").unwrap();

        let built = request.build_request(None).unwrap();

        assert_eq!(built.headers()["x-first"], "1");
        assert_eq!(built.headers()["x-second"], "2");
    }

    #[test]
    fn it_should_error_on_invalid_header_name() {
        let mut request = HttpRequest::get("http://localhost/").unwrap();

        let result = request.header("not a header", "1");
        assert!(matches!(result, Err(Error::InvalidHeader { name }) if name == "not a header"));
    }

    #[test]
    fn it_should_send_default_headers_first() {
        let config = RequestConfig::builder()
            .default_header(HeaderName::from_static("x-order"), HeaderValue::from_static("default"))
            .build();
        let mut request = HttpRequest::with_config(Method::GET, "http://localhost/", config).unwrap();
        request.header("x-order", "request").unwrap();

        let built = request.build_request(None).unwrap();
        let values: Vec<_> = built.headers().get_all("x-order").iter().collect();

        assert_eq!(values, vec!["default", "request"]);
    }
}
