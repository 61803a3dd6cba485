use ::mime::Mime;
use ::std::borrow::Cow;
use ::strum::AsRefStr;
use ::strum::Display;
use ::strum::EnumIter;
use ::strum::EnumString;

/// The character sets text form values can be written in.
///
/// Text is converted into the charset's bytes before it is sent,
/// so the charset named in a content type always matches the body.
/// Characters the charset cannot hold are written as `?`.
///
/// Names parse case insensitively:
///
/// ```rust
/// use ::fluent_http::Charset;
///
/// let charset: Charset = "iso-8859-1".parse().unwrap();
/// assert_eq!(charset, Charset::Iso8859_1);
/// assert_eq!(charset.to_string(), "ISO-8859-1");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Charset {
    #[default]
    #[strum(serialize = "UTF-8")]
    Utf8,

    /// Latin-1. Every character up to `U+00FF` is one byte.
    #[strum(serialize = "ISO-8859-1")]
    Iso8859_1,

    #[strum(serialize = "US-ASCII")]
    UsAscii,
}

impl Charset {
    /// The charset named by a content type's `charset` parameter.
    ///
    /// Returns `None` when there is no parameter, or it names a charset
    /// this library cannot write.
    pub fn from_mime(content_type: &Mime) -> Option<Self> {
        content_type
            .get_param(::mime::CHARSET)
            .and_then(|name| name.as_str().parse().ok())
    }

    /// The bytes of `text` in this charset.
    pub fn encode(self, text: &str) -> Cow<'_, [u8]> {
        if self == Self::Utf8 || text.is_ascii() {
            return Cow::Borrowed(text.as_bytes());
        }

        let bytes = text
            .chars()
            .map(|c| match self {
                Self::Iso8859_1 => u8::try_from(c).unwrap_or(b'?'),
                Self::UsAscii | Self::Utf8 if c.is_ascii() => c as u8,
                Self::UsAscii | Self::Utf8 => b'?',
            })
            .collect();

        Cow::Owned(bytes)
    }
}


#[cfg(test)]
mod test_from_mime {
    use super::*;

    #[test]
    fn it_should_read_charset_parameter() {
        assert_eq!(Charset::from_mime(&::mime::TEXT_PLAIN_UTF_8), Some(Charset::Utf8));

        let latin1: Mime = "text/plain; charset=ISO-8859-1".parse().unwrap();
        assert_eq!(Charset::from_mime(&latin1), Some(Charset::Iso8859_1));
    }

    #[test]
    fn it_should_be_none_without_a_known_charset() {
        assert_eq!(Charset::from_mime(&::mime::TEXT_PLAIN), None);

        let unknown: Mime = "text/plain; charset=KOI8-R".parse().unwrap();
        assert_eq!(Charset::from_mime(&unknown), None);
    }
}
