use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Query-string escaping: only the unreserved characters of
// https://tools.ietf.org/html/rfc3986.html#section-2.3 stay as they are.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escapes the text so it can be placed inside a URL query
///
/// ASCII letters, digits and `-_.~` are kept, a space becomes `+`, and every other byte of the
/// UTF-8 encoding is written as `%XX`.
///
/// ```
/// assert_eq!(
///     filtrate::filters::urlencode("http://www.example.org/foo?a=b&c=d"),
///     "http%3A%2F%2Fwww.example.org%2Ffoo%3Fa%3Db%26c%3Dd",
/// );
/// ```
pub fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (idx, part) in s.split(' ').enumerate() {
        if idx > 0 {
            out.push('+');
        }
        out.extend(utf8_percent_encode(part, QUERY_SET));
    }
    out
}
