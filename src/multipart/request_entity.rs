use ::bytes::Bytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A `multipart/form-data` body.
    Multipart,

    /// An `application/x-www-form-urlencoded` body.
    UrlEncoded,
}

/// An encoded request body, and the content type to send it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEntity {
    kind: EntityKind,
    content_type: String,
    body: Bytes,
}

impl RequestEntity {
    pub(crate) fn new(kind: EntityKind, content_type: String, body: Bytes) -> Self {
        Self {
            kind,
            content_type,
            body,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn is_multipart(&self) -> bool {
        self.kind == EntityKind::Multipart
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn as_bytes(&self) -> &Bytes {
        &self.body
    }

    pub fn into_bytes(self) -> Bytes {
        self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
