use ::http::Method;
use ::std::fmt;
use ::url::Url;

/// Formats a request as `METHOD url`, for errors and log lines.
#[derive(Debug, Clone, Copy)]
pub struct RequestPathFormatter<'a> {
    method: &'a Method,
    url: &'a Url,
}

impl<'a> RequestPathFormatter<'a> {
    pub fn new(method: &'a Method, url: &'a Url) -> Self {
        Self { method, url }
    }
}

impl fmt::Display for RequestPathFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = self.method;
        let url = self.url;

        write!(f, "{method} {url}")
    }
}

#[cfg(test)]
mod test_fmt {
    use super::*;

    #[test]
    fn it_should_format_method_and_url() {
        let url = Url::parse("http://localhost:8080/upload").unwrap();
        let output = RequestPathFormatter::new(&Method::POST, &url).to_string();

        assert_eq!(output, "POST http://localhost:8080/upload");
    }
}
