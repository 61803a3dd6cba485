use ::std::path::PathBuf;
use ::thiserror::Error;

/// The result type used throughout this crate.
pub type Result<T, E = Error> = ::std::result::Result<T, E>;

/// Every failure this library reports.
///
/// Validation problems (an unknown multipart mode, a content type that will
/// not parse) are returned straight from the builder call that caused them.
/// I/O and transport failures are caught once, at the point they happen,
/// and wrapped here.
#[derive(Debug, Error)]
pub enum Error {
    /// The name given to [`MultipartBody::mode()`](crate::multipart::MultipartBody::mode())
    /// is not a known multipart mode.
    #[error("unknown multipart mode '{name}', expected one of STRICT, BROWSER_COMPATIBLE, RFC6532")]
    InvalidMode { name: String },

    #[error("failed to parse '{content_type}' as a content type")]
    InvalidContentType {
        content_type: String,
        #[source]
        source: ::mime::FromStrError,
    },

    #[error("failed to parse '{url}' as a url")]
    InvalidUrl {
        url: String,
        #[source]
        source: ::url::ParseError,
    },

    /// A multipart boundary must be 1 to 70 characters from RFC 2046's
    /// boundary alphabet, and must not end with a space.
    #[error("invalid multipart boundary '{boundary}'")]
    InvalidBoundary { boundary: String },

    #[error("invalid header '{name}'")]
    InvalidHeader { name: String },

    /// Query parameters or form fields could not be url encoded.
    #[error("failed to url encode values")]
    UrlEncoding(#[from] ::serde_urlencoded::ser::Error),

    /// Reading a stream part failed.
    #[error("failed to read stream part '{file_name}'")]
    StreamRead {
        file_name: String,
        #[source]
        source: ::std::io::Error,
    },

    /// Reading a file or stream part, or writing a response to disk, failed.
    #[error("I/O error for {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: ::std::io::Error,
    },

    #[error("failed to build request")]
    Http(#[from] ::http::Error),

    #[error("transport failed sending request {request}")]
    Transport {
        request: String,
        #[source]
        source: ::anyhow::Error,
    },
}

impl Error {
    pub(crate) fn io<P>(path: P, source: ::std::io::Error) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod test_display {
    use super::*;

    #[test]
    fn it_should_list_known_modes_for_invalid_mode() {
        let error = Error::InvalidMode {
            name: "NOT_A_MODE".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "unknown multipart mode 'NOT_A_MODE', expected one of STRICT, BROWSER_COMPATIBLE, RFC6532"
        );
    }

    #[test]
    fn it_should_include_path_for_io_errors() {
        let source = ::std::io::Error::new(::std::io::ErrorKind::NotFound, "missing");
        let error = Error::io("/tmp/missing.bin", source);

        assert_eq!(error.to_string(), "I/O error for /tmp/missing.bin");
    }
}
