use super::{Result, UrlError};

/// Characters a URI component may carry unescaped beyond `A-Z a-z 0-9 - _ . ~`.
const COMPONENT_SAFE: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Encodes `s` for use as a form-style URL parameter.
///
/// Escaped slashes (`\/`) are dropped, the rest is percent-encoded as a URI
/// component and spaces become `+`.
///
/// # Examples
///
/// ```
/// use nice_utils_core::url::url_encode;
///
/// assert_eq!(url_encode("a b&c"), "a+b%26c");
/// assert_eq!(url_encode(r"x\/y"), "xy");
/// ```
pub fn url_encode(s: &str) -> String {
    let cleaned = s.replace("\\/", "");
    let mut encoded = urlencoding::encode(&cleaned).into_owned();
    for (escaped, literal) in COMPONENT_SAFE {
        encoded = encoded.replace(escaped, literal);
    }
    encoded.replace("%20", "+")
}

/// Decodes a form-style URL parameter: `+` means space.
///
/// # Examples
///
/// ```
/// use nice_utils_core::url::url_decode;
///
/// assert_eq!(url_decode("a+b%26c").unwrap(), "a b&c");
/// assert!(url_decode("%FF").is_err());
/// ```
pub fn url_decode(s: &str) -> Result<String> {
    let spaced = s.replace('+', "%20");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| UrlError::InvalidEncoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_leaves_component_safe_characters() {
        assert_eq!(url_encode("it's (fun)!*"), "it's+(fun)!*");
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        assert_eq!(url_encode("a/b?c=d#e"), "a%2Fb%3Fc%3Dd%23e");
    }

    #[test]
    fn encode_handles_unicode() {
        assert_eq!(url_encode("ü"), "%C3%BC");
    }

    #[test]
    fn decode_reverses_encode() {
        let original = "name=Jürgen & co (ltd)";
        assert_eq!(url_decode(&url_encode(original)).unwrap(), original);
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert!(matches!(
            url_decode("%C3%28"),
            Err(UrlError::InvalidEncoding(_))
        ));
    }
}
