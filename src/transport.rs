use ::anyhow::Result;
use ::bytes::Bytes;
use ::http::Request;

use crate::RawResponse;

/// Sends fully built requests, and hands back the raw response.
///
/// This crate does no networking of its own. Connection handling, TLS,
/// timeouts, and retries all belong to the implementation behind this trait.
///
/// ```rust
/// use ::bytes::Bytes;
/// use ::fluent_http::RawResponse;
/// use ::fluent_http::Transport;
/// use ::http::Request;
/// use ::http::Response;
///
/// struct Echo;
///
/// impl Transport for Echo {
///     fn send(&self, request: Request<Bytes>) -> ::anyhow::Result<RawResponse> {
///         let body = ::std::io::Cursor::new(request.into_body());
///         Ok(Response::new(body).into())
///     }
/// }
/// ```
pub trait Transport {
    fn send(&self, request: Request<Bytes>) -> Result<RawResponse>;
}

impl<T> Transport for &T
where
    T: Transport + ?Sized,
{
    fn send(&self, request: Request<Bytes>) -> Result<RawResponse> {
        (**self).send(request)
    }
}
