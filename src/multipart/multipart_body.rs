use ::bytes::Bytes;
use ::http::Request;
use ::mime::Mime;
use ::std::io::Read;
use ::std::path::Path;
use ::std::path::PathBuf;
use ::std::str::FromStr;
use ::tracing::debug;

use crate::Error;
use crate::FileResponse;
use crate::HttpRequest;
use crate::Result;
use crate::Transport;
use crate::internals::generate_boundary;
use crate::multipart::FieldValue;
use crate::multipart::FormPart;
use crate::multipart::FormPartCollection;
use crate::multipart::MultipartMode;
use crate::multipart::RequestEntity;
use crate::multipart::encode_multipart;
use crate::multipart::encode_url_encoded;

///
/// Builds a form body for an [`HttpRequest`].
///
/// Fields are added one at a time. Once a file-like field has been added
/// (a file, byte array, or stream), the body is sent as `multipart/form-data`.
/// Until then it is sent as `application/x-www-form-urlencoded`.
///
/// A `MultipartBody` is built for one request, and is not shared across threads.
///
/// ```rust
/// # fn run() -> ::fluent_http::Result<()> {
/// use ::fluent_http::HttpRequest;
///
/// let mut body = HttpRequest::post("http://localhost:8080/upload")?.multipart();
/// body.field("name", "Joe")
///     .bytes("avatar", vec![0x89u8, 0x50, 0x4e, 0x47], "avatar.png");
///
/// let entity = body.entity()?;
/// assert!(entity.is_multipart());
/// # Ok(())
/// # }
/// ```
///
#[derive(Debug)]
pub struct MultipartBody {
    request: HttpRequest,
    parameters: FormPartCollection,
    has_file: bool,
    mode: Option<MultipartMode>,
    boundary: String,
}

impl MultipartBody {
    pub fn new(request: HttpRequest) -> Self {
        let boundary = request
            .config()
            .boundary
            .clone()
            .unwrap_or_else(generate_boundary);

        Self {
            request,
            parameters: FormPartCollection::new(),
            has_file: false,
            mode: None,
            boundary,
        }
    }

    /// Adds a text field, sent as `application/x-www-form-urlencoded`
    /// with the configured charset.
    pub fn field<V>(&mut self, name: &str, value: V) -> &mut Self
    where
        V: ToString,
    {
        let content_type = self.request.form_content_type().clone();
        self.push(name, FieldValue::Text(value.to_string()), false, content_type)
    }

    /// Adds a text field with the content type given.
    ///
    /// An empty content type falls back to the default used by [`MultipartBody::field()`].
    pub fn field_with_content_type<V>(
        &mut self,
        name: &str,
        value: V,
        content_type: &str,
    ) -> Result<&mut Self>
    where
        V: ToString,
    {
        self.add(name, FieldValue::Text(value.to_string()), false, content_type)
    }

    /// Adds one part per value, all under the same name.
    ///
    /// File-like values are sent as `application/octet-stream`,
    /// and text values as they are by [`MultipartBody::field()`].
    pub fn field_collection<I, V>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        for value in values {
            let value = value.into();
            let is_file = value.is_file_like();
            let content_type = if is_file {
                ::mime::APPLICATION_OCTET_STREAM
            } else {
                self.request.form_content_type().clone()
            };

            self.push(name, value, is_file, content_type);
        }

        self
    }

    /// Adds a part with the content type given, and always marks the body as holding a file.
    ///
    /// An empty content type falls back to `application/octet-stream`.
    pub fn field_part<V>(&mut self, name: &str, value: V, content_type: &str) -> Result<&mut Self>
    where
        V: Into<FieldValue>,
    {
        self.add(name, value.into(), true, content_type)
    }

    /// Adds a file from disk, sent as `application/octet-stream`.
    ///
    /// The file is read when the body is encoded, not now.
    pub fn file<P>(&mut self, name: &str, path: P) -> &mut Self
    where
        P: Into<PathBuf>,
    {
        self.push(
            name,
            FieldValue::File(path.into()),
            true,
            ::mime::APPLICATION_OCTET_STREAM,
        )
    }

    /// Adds a file from disk with the content type given.
    ///
    /// An empty content type falls back to `application/octet-stream`.
    pub fn file_with_content_type<P>(
        &mut self,
        name: &str,
        path: P,
        content_type: &str,
    ) -> Result<&mut Self>
    where
        P: Into<PathBuf>,
    {
        self.add(name, FieldValue::File(path.into()), true, content_type)
    }

    /// Adds a stream, uploaded as a file with the file name given.
    pub fn stream<R, F>(&mut self, name: &str, reader: R, file_name: F) -> &mut Self
    where
        R: Read + Send + 'static,
        F: Into<String>,
    {
        self.stream_with_content_type(name, reader, ::mime::APPLICATION_OCTET_STREAM, file_name)
    }

    pub fn stream_with_content_type<R, F>(
        &mut self,
        name: &str,
        reader: R,
        content_type: Mime,
        file_name: F,
    ) -> &mut Self
    where
        R: Read + Send + 'static,
        F: Into<String>,
    {
        self.push(name, FieldValue::stream(reader, file_name), true, content_type)
    }

    /// Adds raw bytes, uploaded as a file with the file name given.
    pub fn bytes<B, F>(&mut self, name: &str, bytes: B, file_name: F) -> &mut Self
    where
        B: Into<Bytes>,
        F: Into<String>,
    {
        self.bytes_with_content_type(name, bytes, ::mime::APPLICATION_OCTET_STREAM, file_name)
    }

    pub fn bytes_with_content_type<B, F>(
        &mut self,
        name: &str,
        bytes: B,
        content_type: Mime,
        file_name: F,
    ) -> &mut Self
    where
        B: Into<Bytes>,
        F: Into<String>,
    {
        self.push(name, FieldValue::bytes(bytes, file_name), true, content_type)
    }

    /// Sets the credentials on the underlying request.
    pub fn basic_auth(&mut self, username: &str, password: &str) -> &mut Self {
        self.request.basic_auth(username, password);
        self
    }

    /// Sets the multipart mode by name, such as `"STRICT"` or `"BROWSER_COMPATIBLE"`.
    ///
    /// Unknown names are an error, and leave this body as it was.
    pub fn mode(&mut self, name: &str) -> Result<&mut Self> {
        let mode = MultipartMode::from_str(name).map_err(|_| Error::InvalidMode {
            name: name.to_string(),
        })?;

        self.mode = Some(mode);
        Ok(self)
    }

    /// The mode last set with [`MultipartBody::mode()`].
    pub fn requested_mode(&self) -> Option<MultipartMode> {
        self.mode
    }

    /// The mode multipart bodies are encoded with.
    ///
    /// Setting any mode encodes as [`MultipartMode::BrowserCompatible`],
    /// whichever mode was named. With no mode set this is [`MultipartMode::Strict`].
    pub fn applied_mode(&self) -> MultipartMode {
        match self.mode {
            Some(_) => MultipartMode::BrowserCompatible,
            None => MultipartMode::Strict,
        }
    }

    /// True once a file-like part has been added.
    pub fn has_file(&self) -> bool {
        self.has_file
    }

    pub fn parts(&self) -> &FormPartCollection {
        &self.parameters
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Encodes every part added so far.
    ///
    /// This does not change the body, and can be called again.
    /// Streams are read on the first call, and their bytes reused after that.
    pub fn entity(&self) -> Result<RequestEntity> {
        let entity = if self.has_file {
            encode_multipart(&self.parameters, &self.boundary, self.applied_mode())?
        } else {
            encode_url_encoded(&self.parameters, self.request.config().charset)?
        };

        debug!(
            request = %self.request.debug_request_format(),
            kind = ?entity.kind(),
            parts = self.parameters.len(),
            bytes = entity.len(),
            "encoded request entity"
        );

        Ok(entity)
    }

    /// Builds the request to hand to a transport, with this as its body.
    pub fn build_request(&self) -> Result<Request<Bytes>> {
        let entity = self.entity()?;
        self.request.build_request(Some(&entity))
    }

    /// Sends this body, and writes the response to a new file at `path`.
    pub fn as_file<T, P>(&self, transport: &T, path: P) -> Result<FileResponse>
    where
        T: Transport + ?Sized,
        P: AsRef<Path>,
    {
        let request = self.build_request()?;
        let raw_response = self.request.send(transport, request)?;

        FileResponse::new(raw_response, path)
    }

    fn add(
        &mut self,
        name: &str,
        value: FieldValue,
        is_file: bool,
        content_type: &str,
    ) -> Result<&mut Self> {
        let content_type = if !content_type.is_empty() {
            parse_content_type(content_type)?
        } else if is_file {
            ::mime::APPLICATION_OCTET_STREAM
        } else {
            self.request.form_content_type().clone()
        };

        Ok(self.push(name, value, is_file, content_type))
    }

    fn push(
        &mut self,
        name: &str,
        value: FieldValue,
        is_file: bool,
        content_type: Mime,
    ) -> &mut Self {
        self.parameters
            .push(FormPart::new(name.to_string(), value, content_type));
        self.has_file |= is_file;

        self
    }
}

fn parse_content_type(content_type: &str) -> Result<Mime> {
    content_type
        .parse()
        .map_err(|source| Error::InvalidContentType {
            content_type: content_type.to_string(),
            source,
        })
}

#[cfg(test)]
mod test_field {
    use super::*;

    fn new_body() -> MultipartBody {
        HttpRequest::post("http://localhost/form")
            .unwrap()
            .multipart()
    }

    #[test]
    fn it_should_default_text_fields_to_form_content_type() {
        let mut body = new_body();
        body.field("name", "Joe");

        let part = body.parts().iter().next().unwrap();
        assert_eq!(part.content_type().essence_str(), "application/x-www-form-urlencoded");
        let charset = part.content_type().get_param(::mime::CHARSET).unwrap();
        assert!(charset.as_str().eq_ignore_ascii_case("UTF-8"));
        assert!(!body.has_file());
    }

    #[test]
    fn it_should_use_content_type_given() {
        let mut body = new_body();
        body.field_with_content_type("meta", "{}", "application/json")
            .unwrap();

        let part = body.parts().iter().next().unwrap();
        assert_eq!(part.content_type(), &::mime::APPLICATION_JSON);
        assert!(!body.has_file());
    }

    #[test]
    fn it_should_fall_back_to_default_for_empty_content_type() {
        let mut body = new_body();
        body.field_with_content_type("meta", "{}", "").unwrap();

        let part = body.parts().iter().next().unwrap();
        assert_eq!(part.content_type(), body.request().form_content_type());
    }

    #[test]
    fn it_should_error_for_unparseable_content_type() {
        let mut body = new_body();

        let result = body.field_with_content_type("meta", "{}", "not a mime type");

        assert!(matches!(result, Err(Error::InvalidContentType { .. })));
        assert!(body.parts().is_empty());
    }

    #[test]
    fn it_should_use_configured_charset() {
        let config = crate::RequestConfig::builder()
            .charset(crate::Charset::Iso8859_1)
            .build();
        let mut body = HttpRequest::with_config(::http::Method::POST, "http://localhost/", config)
            .unwrap()
            .multipart();
        body.field("name", "Joe");

        let part = body.parts().iter().next().unwrap();
        let charset = part.content_type().get_param(::mime::CHARSET).unwrap();
        assert!(charset.as_str().eq_ignore_ascii_case("ISO-8859-1"));
    }
}






#[cfg(test)]
mod test_entity {
    use super::*;
    use crate::RequestConfig;
    use crate::multipart::EntityKind;

    fn new_body_with_boundary(boundary: &str) -> MultipartBody {
        let config = RequestConfig::builder().boundary(boundary).unwrap().build();
        HttpRequest::with_config(::http::Method::POST, "http://localhost/", config)
            .unwrap()
            .multipart()
    }

    #[test]
    fn it_should_build_url_encoded_without_files() {
        let mut body = new_body_with_boundary("XyZ");
        body.field("b", "2").field("a", "1");

        let entity = body.entity().unwrap();

        assert_eq!(entity.kind(), EntityKind::UrlEncoded);
        assert_eq!(
            entity.content_type(),
            "application/x-www-form-urlencoded; charset=UTF-8"
        );
        assert_eq!(&entity.as_bytes()[..], b"a=1&b=2".as_slice());
    }

    #[test]
    fn it_should_url_encode_text_in_the_configured_charset() {
        let config = RequestConfig::builder()
            .charset(crate::Charset::Iso8859_1)
            .build();
        let mut body = HttpRequest::with_config(::http::Method::POST, "http://localhost/", config)
            .unwrap()
            .multipart();
        body.field("name", "é");

        let entity = body.entity().unwrap();

        assert_eq!(
            entity.content_type(),
            "application/x-www-form-urlencoded; charset=ISO-8859-1"
        );
        assert_eq!(&entity.as_bytes()[..], b"name=%E9".as_slice());
    }

    #[test]
    fn it_should_build_multipart_with_files() {
        let mut body = new_body_with_boundary("XyZ");
        body.field("a", "1").bytes("b", vec![0x01u8], "b.bin");

        let entity = body.entity().unwrap();

        assert_eq!(entity.kind(), EntityKind::Multipart);
        assert_eq!(entity.content_type(), "multipart/form-data; boundary=XyZ");
    }

    #[test]
    fn it_should_use_configured_boundary() {
        let body = new_body_with_boundary("fixed-boundary");

        assert_eq!(body.boundary(), "fixed-boundary");
    }

    #[test]
    fn it_should_generate_a_boundary_when_none_is_configured() {
        let body = HttpRequest::post("http://localhost/").unwrap().multipart();

        assert!(!body.boundary().is_empty());
    }

    #[test]
    fn it_should_encode_identically_when_called_twice() {
        let mut body = HttpRequest::post("http://localhost/").unwrap().multipart();
        body.field("a", "1")
            .stream("s", ::std::io::Cursor::new(b"streamed".to_vec()), "s.txt");

        let first = body.entity().unwrap();
        let second = body.entity().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn it_should_error_when_file_part_is_missing() {
        let mut body = new_body_with_boundary("XyZ");
        body.file("upload", "/definitely/not/here.bin");

        let result = body.entity();

        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
