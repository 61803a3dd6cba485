use ::rand::Rng;
use ::rand::distr::Alphanumeric;
use ::std::borrow::Cow;

use crate::Error;
use crate::Result;

const BOUNDARY_LEN: usize = 30;
const MAX_BOUNDARY_LEN: usize = 70;

/// A fresh multipart boundary of ASCII letters and digits.
pub fn generate_boundary() -> String {
    ::rand::rng()
        .sample_iter(Alphanumeric)
        .take(BOUNDARY_LEN)
        .map(char::from)
        .collect()
}

/// Checks a boundary against RFC 2046's `bchars`, its length limit,
/// and the rule that it does not end with a space.
pub fn check_boundary(boundary: &str) -> Result<()> {
    let is_valid = !boundary.is_empty()
        && boundary.len() <= MAX_BOUNDARY_LEN
        && !boundary.ends_with(' ')
        && boundary.chars().all(is_boundary_char);

    if !is_valid {
        return Err(Error::InvalidBoundary {
            boundary: boundary.to_string(),
        });
    }

    Ok(())
}

/// The boundary as a `Content-Type` parameter value.
///
/// Boundaries holding characters outside a header token are quoted.
pub fn boundary_param(boundary: &str) -> Cow<'_, str> {
    if boundary.chars().all(is_token_char) {
        Cow::Borrowed(boundary)
    } else {
        Cow::Owned(format!("\"{boundary}\""))
    }
}

fn is_boundary_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "'()+_,-./:=? ".contains(c)
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "'+_-.".contains(c)
}


#[cfg(test)]
mod test_check_boundary {
    use super::*;

    #[test]
    fn it_should_accept_boundaries_with_spaces_and_specials_inside() {
        assert!(check_boundary("simple-boundary").is_ok());
        assert!(check_boundary("gc0p4Jq0M2Yt08j34c0p (a:b=c?)").is_ok());
    }

    #[test]
    fn it_should_reject_empty_and_overlong_boundaries() {
        assert!(check_boundary("").is_err());
        assert!(check_boundary(&"a".repeat(71)).is_err());
        assert!(check_boundary(&"a".repeat(70)).is_ok());
    }

    #[test]
    fn it_should_reject_trailing_space() {
        assert!(check_boundary("boundary ").is_err());
    }

    #[test]
    fn it_should_reject_characters_outside_the_boundary_alphabet() {
        assert!(check_boundary("line\r\nbreak").is_err());
        assert!(check_boundary("semi;colon").is_err());
        assert!(check_boundary("quo\"te").is_err());
        assert!(check_boundary("grenzé").is_err());
    }
}

#[cfg(test)]
mod test_boundary_param {
    use super::*;

    #[test]
    fn it_should_leave_token_boundaries_unquoted() {
        assert_eq!(boundary_param("abc-123_x.y"), "abc-123_x.y");
    }

    #[test]
    fn it_should_quote_boundaries_with_spaces_or_specials() {
        assert_eq!(boundary_param("a b"), "\"a b\"");
        assert_eq!(boundary_param("a:b=c"), "\"a:b=c\"");
    }
}
