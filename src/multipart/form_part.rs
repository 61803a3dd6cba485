use ::bytes::Bytes;
use ::mime::Mime;
use ::std::borrow::Cow;
use ::std::cell::RefCell;
use ::std::fmt;
use ::std::io;
use ::std::io::Read;
use ::std::path::Path;
use ::std::path::PathBuf;

use crate::Charset;
use crate::Error;
use crate::Result;

/// One named field of a form, with the content type it is sent as.
#[derive(Debug)]
pub struct FormPart {
    name: String,
    value: FieldValue,
    content_type: Mime,
}

impl FormPart {
    pub(crate) fn new(name: String, value: FieldValue, content_type: Mime) -> Self {
        Self {
            name,
            value,
            content_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn content_type(&self) -> &Mime {
        &self.content_type
    }
}

/// The value held by a [`FormPart`].
#[derive(Debug)]
pub enum FieldValue {
    Text(String),

    /// A file on disk. It is read when the body is encoded.
    File(PathBuf),

    Bytes { bytes: Bytes, file_name: String },

    /// A reader, drained the first time the body is encoded.
    Stream {
        source: StreamSource,
        file_name: String,
    },
}

impl FieldValue {
    pub fn stream<R, F>(reader: R, file_name: F) -> Self
    where
        R: Read + Send + 'static,
        F: Into<String>,
    {
        Self::Stream {
            source: StreamSource::new(reader),
            file_name: file_name.into(),
        }
    }

    pub fn bytes<B, F>(bytes: B, file_name: F) -> Self
    where
        B: Into<Bytes>,
        F: Into<String>,
    {
        Self::Bytes {
            bytes: bytes.into(),
            file_name: file_name.into(),
        }
    }

    /// Files, byte arrays, and streams are file-like. Text is not.
    pub fn is_file_like(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    /// The file name sent in `Content-Disposition`, if this value has one.
    pub fn file_name(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(_) => None,
            Self::File(path) => Some(
                path.file_name()
                    .map(|name| name.to_string_lossy())
                    .unwrap_or_else(|| path.to_string_lossy()),
            ),
            Self::Bytes { file_name, .. } | Self::Stream { file_name, .. } => {
                Some(Cow::Borrowed(file_name.as_str()))
            }
        }
    }

    /// The bytes to send for this value. Text is written in `charset`.
    pub(crate) fn content(&self, charset: Charset) -> Result<Bytes> {
        match self {
            Self::Text(text) => Ok(Bytes::copy_from_slice(&charset.encode(text))),
            Self::File(path) => ::std::fs::read(path)
                .map(Bytes::from)
                .map_err(|err| Error::io(path, err)),
            Self::Bytes { bytes, .. } => Ok(bytes.clone()),
            Self::Stream { source, file_name } => {
                source.read_all().map_err(|source| Error::StreamRead {
                    file_name: file_name.clone(),
                    source,
                })
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&Path> for FieldValue {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl From<PathBuf> for FieldValue {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

/// A reader for a stream part.
///
/// Reading happens once. The bytes are kept afterwards,
/// so encoding the same body again sends the same content.
/// A reader that fails keeps failing, with the same error kind and message.
pub struct StreamSource {
    state: RefCell<StreamState>,
}

enum StreamState {
    Pending(Box<dyn Read + Send>),
    Buffered(Bytes),
    Failed { kind: io::ErrorKind, message: String },
}

impl StreamSource {
    pub fn new<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            state: RefCell::new(StreamState::Pending(Box::new(reader))),
        }
    }

    pub(crate) fn read_all(&self) -> io::Result<Bytes> {
        let mut state = self.state.borrow_mut();

        if let StreamState::Pending(reader) = &mut *state {
            let mut buffer = Vec::new();
            if let Err(err) = reader.read_to_end(&mut buffer) {
                *state = StreamState::Failed {
                    kind: err.kind(),
                    message: err.to_string(),
                };
                return Err(err);
            }

            *state = StreamState::Buffered(Bytes::from(buffer));
        }

        match &*state {
            StreamState::Buffered(bytes) => Ok(bytes.clone()),
            StreamState::Failed { kind, message } => Err(io::Error::new(*kind, message.clone())),
            StreamState::Pending(_) => Ok(Bytes::new()),
        }
    }
}

impl fmt::Debug for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            StreamState::Pending(_) => write!(f, "StreamSource {{ pending }}"),
            StreamState::Buffered(bytes) => {
                write!(f, "StreamSource {{ buffered: {} bytes }}", bytes.len())
            }
            StreamState::Failed { message, .. } => {
                write!(f, "StreamSource {{ failed: {message} }}")
            }
        }
    }
}
