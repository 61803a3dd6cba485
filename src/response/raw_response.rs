use ::http::HeaderMap;
use ::http::HeaderValue;
use ::http::Response;
use ::http::StatusCode;
use ::http::response::Parts;
use ::std::fmt;
use ::std::io::Read;

/// A response as it comes off the wire: status, headers,
/// and a body that has not been read yet.
pub struct RawResponse {
    status_code: StatusCode,
    headers: HeaderMap<HeaderValue>,
    content: Box<dyn Read + Send>,
}

impl RawResponse {
    pub fn new<R>(parts: Parts, content: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            status_code: parts.status,
            headers: parts.headers,
            content: Box::new(content),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// The canonical reason phrase for the status code, or an empty string for unknown codes.
    pub fn status_text(&self) -> &'static str {
        self.status_code.canonical_reason().unwrap_or_default()
    }

    pub fn headers(&self) -> &HeaderMap<HeaderValue> {
        &self.headers
    }

    /// The unread response body.
    pub fn content(&mut self) -> &mut (dyn Read + Send) {
        self.content.as_mut()
    }

    pub(crate) fn into_parts(self) -> (StatusCode, HeaderMap<HeaderValue>, Box<dyn Read + Send>) {
        (self.status_code, self.headers, self.content)
    }
}

impl<R> From<Response<R>> for RawResponse
where
    R: Read + Send + 'static,
{
    fn from(response: Response<R>) -> Self {
        let (parts, content) = response.into_parts();
        Self::new(parts, content)
    }
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawResponse")
            .field("status_code", &self.status_code)
            .field("headers", &self.headers)
            .field("content", &"{unread}")
            .finish()
    }
}

#[cfg(test)]
mod test_from_response {
    use super::*;
    use ::std::io::Cursor;

    #[test]
    fn it_should_keep_status_and_headers() {
        let response = Response::builder()
            .status(StatusCode::CREATED)
            .header("x-id", "42")
            .body(Cursor::new(b"hello".to_vec()))
            .unwrap();

        let raw: RawResponse = response.into();

        assert_eq!(raw.status_code(), StatusCode::CREATED);
        assert_eq!(raw.status_text(), "Created");
        assert_eq!(raw.headers()["x-id"], "42");
    }

    #[test]
    fn it_should_read_content() {
        let mut raw: RawResponse = Response::new(Cursor::new(b"hello".to_vec())).into();

        let mut content = String::new();
        raw.content().read_to_string(&mut content).unwrap();

        assert_eq!(content, "hello");
    }

    #[test]
    fn it_should_have_empty_status_text_for_unknown_codes() {
        let response = Response::builder()
            .status(599)
            .body(Cursor::new(Vec::new()))
            .unwrap();
        let raw: RawResponse = response.into();

        assert_eq!(raw.status_text(), "");
    }
}
