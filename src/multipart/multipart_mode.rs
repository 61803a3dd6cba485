use ::strum::AsRefStr;
use ::strum::Display;
use ::strum::EnumIter;
use ::strum::EnumString;

/// How part headers are written in a multipart body.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
pub enum MultipartMode {
    /// Every part carries `Content-Disposition` and `Content-Type`.
    /// Header text is restricted to ASCII.
    #[default]
    #[strum(serialize = "STRICT")]
    Strict,

    /// Only parts with a file name carry a `Content-Type`.
    /// Names and file names are written as UTF-8.
    #[strum(serialize = "BROWSER_COMPATIBLE")]
    BrowserCompatible,

    /// As `Strict`, but names and file names are written as UTF-8.
    #[strum(serialize = "RFC6532")]
    Rfc6532,
}

impl MultipartMode {
    pub(crate) fn writes_content_type(self, has_file_name: bool) -> bool {
        match self {
            Self::BrowserCompatible => has_file_name,
            Self::Strict | Self::Rfc6532 => true,
        }
    }

    pub(crate) fn allows_utf8_headers(self) -> bool {
        !matches!(self, Self::Strict)
    }
}
