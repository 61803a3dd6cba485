//!
//! Fluent HTTP is a library for building HTTP requests, and handling their responses:
//!
//!  * You create an [`HttpRequest`] for a method and url,
//!  * attach a form body to it using [`MultipartBody`](crate::multipart::MultipartBody),
//!  * hand the built request to your own [`Transport`],
//!  * then receive back a response, such as a [`FileResponse`] written straight to disk.
//!
//! The library does no networking itself. It builds `http::Request` values,
//! and wraps what the transport returns.
//!
//! ## Getting Started
//!
//! Create an [`HttpRequest`], and turn it into a form body:
//!
//! ```rust
//! # fn run() -> ::fluent_http::Result<()> {
//! use ::fluent_http::HttpRequest;
//!
//! let mut body = HttpRequest::post("http://localhost:8080/users")?.multipart();
//! body.field("username", "Terrance Pencilworth")
//!     .field("role", "admin");
//!
//! let request = body.build_request()?;
//! # Ok(())
//! # }
//! ```
//!
//! Text fields alone are sent as `application/x-www-form-urlencoded`.
//! Adding a file, bytes, or a stream switches the body to `multipart/form-data`:
//!
//! ```rust
//! # fn run() -> ::fluent_http::Result<()> {
//! use ::fluent_http::HttpRequest;
//!
//! let mut body = HttpRequest::post("http://localhost:8080/avatars")?.multipart();
//! body.field("username", "Terrance Pencilworth")
//!     .file("avatar", "avatars/terrance.png");
//!
//! let entity = body.entity()?;
//! assert!(entity.is_multipart());
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Settings shared across requests live in a [`RequestConfig`].
//! This includes the charset text form values are written in, and an optional fixed multipart boundary.
//!
//! ```rust
//! # fn run() -> ::fluent_http::Result<()> {
//! use ::fluent_http::Charset;
//! use ::fluent_http::HttpRequest;
//! use ::fluent_http::RequestConfig;
//! use ::http::Method;
//!
//! let config = RequestConfig::builder()
//!     .charset(Charset::Iso8859_1)
//!     .boundary("my-fixed-boundary")?
//!     .build();
//!
//! let request = HttpRequest::with_config(Method::POST, "http://localhost:8080/form", config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Downloading to a file
//!
//! Any [`Transport`] can be used to send a request, and have the response
//! body written to a new file:
//!
//! ```rust
//! # fn run<T: ::fluent_http::Transport>(transport: T) -> ::fluent_http::Result<()> {
//! use ::fluent_http::HttpRequest;
//!
//! let request = HttpRequest::get("http://localhost:8080/reports/q3.pdf")?;
//! let response = request.as_file(&transport, "downloads/q3.pdf")?;
//!
//! println!("saved to {}", response.body().display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Events are emitted using [`tracing`](https://crates.io/crates/tracing).
//! Install a subscriber in your application to see them.
//!

mod error;
pub use self::error::*;

pub(crate) mod internals;

mod charset;
pub use self::charset::*;

pub mod multipart;

mod http_request;
pub use self::http_request::*;

mod request_config;
pub use self::request_config::*;

mod request_config_builder;
pub use self::request_config_builder::*;

mod response;
pub use self::response::*;

mod transport;
pub use self::transport::*;

pub use ::http;
pub use ::mime;
