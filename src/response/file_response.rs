use ::http::HeaderMap;
use ::http::HeaderValue;
use ::http::StatusCode;
use ::http::header::AsHeaderName;
use ::std::fs::OpenOptions;
use ::std::io;
use ::std::path::Path;
use ::std::path::PathBuf;
use ::tracing::debug;
use ::tracing::warn;

use crate::Error;
use crate::RawResponse;
use crate::Result;

///
/// A response whose body has been written to a file on disk.
///
/// The whole body is copied when this is built, so reading it back
/// means reading the file at [`FileResponse::body()`].
///
/// ```rust
/// # fn run() -> ::fluent_http::Result<()> {
/// use ::fluent_http::FileResponse;
/// use ::fluent_http::RawResponse;
/// use ::http::Response;
/// use ::std::io::Cursor;
///
/// let raw: RawResponse = Response::new(Cursor::new(vec![1u8, 2, 3])).into();
/// let response = FileResponse::new(raw, "/tmp/download.bin")?;
///
/// let bytes = ::std::fs::read(response.body()).unwrap();
/// # Ok(())
/// # }
/// ```
///
#[derive(Debug, Clone)]
pub struct FileResponse {
    status_code: StatusCode,
    headers: HeaderMap<HeaderValue>,
    body: PathBuf,
}

impl FileResponse {
    /// Copies the body of the response into a new file at `path`.
    ///
    /// The file must not already exist. If the copy fails part way through,
    /// whatever was written so far is left on disk.
    pub fn new<P>(raw_response: RawResponse, path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let target = path.as_ref();
        let (status_code, headers, mut content) = raw_response.into_parts();

        let written = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(target)
            .and_then(|mut file| io::copy(&mut content, &mut file))
            .map_err(|err| {
                warn!(path = %target.display(), error = %err, "failed writing response to file");
                Error::io(target, err)
            })?;

        debug!(path = %target.display(), bytes = written, "wrote response to file");

        Ok(Self {
            status_code,
            headers,
            body: target.to_path_buf(),
        })
    }

    /// The path of the file holding the response body.
    pub fn body(&self) -> &Path {
        &self.body
    }

    pub fn into_body(self) -> PathBuf {
        self.body
    }

    /// The raw body has already been copied into the file,
    /// so this is always empty.
    pub fn raw_body(&self) -> io::Empty {
        io::empty()
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn status_text(&self) -> &'static str {
        self.status_code.canonical_reason().unwrap_or_default()
    }

    pub fn headers(&self) -> &HeaderMap<HeaderValue> {
        &self.headers
    }

    /// Finds a header with the given name.
    /// If there are multiple headers with the same name,
    /// then only the first will be returned.
    pub fn maybe_header<N>(&self, name: N) -> Option<&HeaderValue>
    where
        N: AsHeaderName,
    {
        self.headers.get(name)
    }
}
