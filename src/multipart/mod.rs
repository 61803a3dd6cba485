//!
//! Form bodies for requests, built using [`MultipartBody`].
//!
//! A body holds simple text fields and file-like fields (files, byte arrays,
//! and streams). If every field is text, the body is sent
//! `application/x-www-form-urlencoded`. As soon as one file-like field is
//! added, it is sent as `multipart/form-data` instead.
//!
//! # Simple example
//!
//! ```rust
//! # fn run() -> ::fluent_http::Result<()> {
//! use ::fluent_http::HttpRequest;
//!
//! let mut body = HttpRequest::post("http://localhost:8080/my-form")?.multipart();
//! body.field("name", "Joe")
//!     .field("animals", "foxes");
//!
//! let entity = body.entity()?;
//! assert_eq!(&entity.as_bytes()[..], b"animals=foxes&name=Joe");
//! # Ok(())
//! # }
//! ```
//!
//! # Sending files
//!
//! ```rust
//! # fn run() -> ::fluent_http::Result<()> {
//! use ::fluent_http::HttpRequest;
//!
//! let mut body = HttpRequest::post("http://localhost:8080/my-form")?.multipart();
//! body.field("title", "Quarterly report")
//!     .file("report", "reports/q3.pdf")
//!     .bytes_with_content_type("cover", vec![0xffu8, 0xd8], ::mime::IMAGE_JPEG, "cover.jpg");
//! body.mode("BROWSER_COMPATIBLE")?;
//!
//! let request = body.build_request()?;
//! # Ok(())
//! # }
//! ```
//!
//! Parts are encoded ordered by name. Parts sharing a name keep the order
//! they were added in.
//!

mod entity_encoder;
pub(crate) use self::entity_encoder::*;

mod form_part;
pub use self::form_part::*;

mod form_part_collection;
pub use self::form_part_collection::*;

mod multipart_body;
pub use self::multipart_body::*;

mod multipart_mode;
pub use self::multipart_mode::*;

mod request_entity;
pub use self::request_entity::*;
