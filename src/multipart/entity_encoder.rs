//! Body writers for form entities.
//!
//! Multipart bodies are written here, and not with `rust-multipart-rfc7578_2`,
//! as its `Form` writes `Content-Type` on every part and streams asynchronously.

use ::bytes::BufMut;
use ::bytes::BytesMut;
use ::std::borrow::Cow;
use ::url::form_urlencoded::byte_serialize;

use crate::Charset;
use crate::Result;
use crate::internals::boundary_param;
use crate::multipart::FieldValue;
use crate::multipart::EntityKind;
use crate::multipart::FormPartCollection;
use crate::multipart::MultipartMode;
use crate::multipart::RequestEntity;

const CRLF: &[u8] = b"\r\n";
const DASHES: &[u8] = b"--";

/// Writes every part as `multipart/form-data`, in collection order.
///
/// Text parts are written in the charset named by their content type,
/// or UTF-8 when it names none this library can write.
pub fn encode_multipart(
    parts: &FormPartCollection,
    boundary: &str,
    mode: MultipartMode,
) -> Result<RequestEntity> {
    let mut buffer = BytesMut::new();

    for part in parts {
        let charset = Charset::from_mime(part.content_type()).unwrap_or_default();
        let content = part.value().content(charset)?;
        let file_name = part.value().file_name();

        buffer.put_slice(DASHES);
        buffer.put_slice(boundary.as_bytes());
        buffer.put_slice(CRLF);

        buffer.put_slice(b"Content-Disposition: form-data; name=\"");
        buffer.put_slice(header_text(part.name(), mode).as_bytes());
        buffer.put_slice(b"\"");
        if let Some(file_name) = &file_name {
            buffer.put_slice(b"; filename=\"");
            buffer.put_slice(header_text(file_name, mode).as_bytes());
            buffer.put_slice(b"\"");
        }
        buffer.put_slice(CRLF);

        if mode.writes_content_type(file_name.is_some()) {
            buffer.put_slice(b"Content-Type: ");
            buffer.put_slice(part.content_type().as_ref().as_bytes());
            buffer.put_slice(CRLF);
        }

        buffer.put_slice(CRLF);
        buffer.put_slice(&content);
        buffer.put_slice(CRLF);
    }

    buffer.put_slice(DASHES);
    buffer.put_slice(boundary.as_bytes());
    buffer.put_slice(DASHES);
    buffer.put_slice(CRLF);

    let content_type = format!(
        "{}; boundary={}",
        ::mime::MULTIPART_FORM_DATA,
        boundary_param(boundary)
    );
    Ok(RequestEntity::new(
        EntityKind::Multipart,
        content_type,
        buffer.freeze(),
    ))
}

/// Writes every part as a `key=value` pair, in collection order.
///
/// Names and text are converted to `charset` before being percent encoded.
/// Per-part content types are not sent in this encoding.
pub fn encode_url_encoded(parts: &FormPartCollection, charset: Charset) -> Result<RequestEntity> {
    let mut body = String::new();
    for part in parts {
        if !body.is_empty() {
            body.push('&');
        }

        body.extend(byte_serialize(&charset.encode(part.name())));
        body.push('=');
        match part.value() {
            FieldValue::Text(text) => body.extend(byte_serialize(&charset.encode(text))),
            value => body.extend(byte_serialize(&value.content(charset)?)),
        }
    }

    let content_type = format!(
        "{}; charset={charset}",
        ::mime::APPLICATION_WWW_FORM_URLENCODED
    );

    Ok(RequestEntity::new(
        EntityKind::UrlEncoded,
        content_type,
        body.into(),
    ))
}

/// Escapes a name or file name for a quoted `Content-Disposition` parameter.
///
/// Quotes and line breaks are percent encoded. Strict mode replaces
/// anything outside ASCII with `?`.
fn header_text(raw: &str, mode: MultipartMode) -> Cow<'_, str> {
    let needs_ascii = !mode.allows_utf8_headers() && !raw.is_ascii();
    let needs_escape = raw.contains(['"', '\r', '\n']);
    if !needs_ascii && !needs_escape {
        return Cow::Borrowed(raw);
    }

    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '"' => escaped.push_str("%22"),
            '\r' => escaped.push_str("%0D"),
            '\n' => escaped.push_str("%0A"),
            c if needs_ascii && !c.is_ascii() => escaped.push('?'),
            c => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}
