use crate::value::Value;
use crate::{Error, Result};

/// Appended by [`truncatechars()`] when it shortens a text.
pub const ELLIPSIS: &str = "...";

/// Removes every occurrence of `needle` from `haystack`
///
/// This is a deletion, not a substitution; the match is literal.
///
/// ```
/// assert_eq!(
///     filtrate::filters::replace(" ", "The Go Programming Language"),
///     "TheGoProgrammingLanguage",
/// );
/// ```
pub fn replace(needle: &str, haystack: &str) -> String {
    match needle.is_empty() {
        true => haystack.to_owned(),
        false => haystack.replace(needle, ""),
    }
}

/// Converts to lowercase
#[inline]
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Converts to uppercase
#[inline]
pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

/// Strip leading and trailing whitespace
#[inline]
pub fn trim(s: &str) -> String {
    s.trim().to_owned()
}

/// Uppercases the first character and leaves the rest untouched.
///
/// An empty input yields an empty output.
pub fn capfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Return a title cased version of the value. Words will start with uppercase letters, all
/// remaining characters are lowercase.
pub fn title(s: &str) -> String {
    let mut need_capitalization = true;

    let mut output = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_whitespace() {
            output.push(c);
            need_capitalization = true;
        } else if need_capitalization {
            match c.is_uppercase() {
                true => output.push(c),
                false => output.extend(c.to_uppercase()),
            }
            need_capitalization = false;
        } else {
            match c.is_lowercase() {
                true => output.push(c),
                false => output.extend(c.to_lowercase()),
            }
        }
    }
    output
}

/// Count the words in that string.
#[inline]
pub fn wordcount(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Limits a text to `n` characters, replacing the tail with `"..."` if there is room for it
///
/// * a negative `n`, or an `n` at least as long as the text, returns the text unchanged;
/// * if both `n` and the text are longer than three characters, the first `n - 3` characters
///   are kept and [`ELLIPSIS`] is appended;
/// * otherwise the first `n` characters are kept verbatim.
///
/// Characters are Unicode scalar values, a character is never split.
///
/// ```
/// # use filtrate::filters::truncatechars;
/// assert_eq!(truncatechars(12, "안녕하세요. 반갑습니다."), "안녕하세요. 반갑...");
/// assert_eq!(truncatechars(3, "The Go Programming Language"), "The");
/// ```
pub fn truncatechars(n: i64, s: &str) -> String {
    let Ok(n) = usize::try_from(n) else {
        return s.to_owned();
    };
    let len = s.chars().count();
    if n >= len {
        return s.to_owned();
    }

    let ellipsis = ELLIPSIS.chars().count();
    if n > ellipsis && len > ellipsis {
        let mut truncated = String::with_capacity(s.len());
        truncated.push_str(prefix(s, n - ellipsis));
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        prefix(s, n).to_owned()
    }
}

/// Right-aligns the text in a field of `width` characters
pub fn rjust(width: i64, s: &str) -> Result<String> {
    justify(width, s, |pad| pad)
}

/// Left-aligns the text in a field of `width` characters
pub fn ljust(width: i64, s: &str) -> Result<String> {
    justify(width, s, |_| 0)
}

/// Centers the value in a field of a given width
///
/// If the padding cannot be split evenly, the extra space goes to the right.
pub fn center(width: i64, s: &str) -> Result<String> {
    justify(width, s, |pad| pad / 2)
}

/// Selects `yes` or `no`
#[inline]
pub fn yesno<'a>(yes: &'a str, no: &'a str, value: bool) -> &'a str {
    match value {
        true => yes,
        false => no,
    }
}

/// Joins the elements of a sequence, separated by `separator`
pub fn join(separator: &str, items: &[Value]) -> String {
    let mut out = String::new();
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push_str(separator);
        }
        out.push_str(&item.to_string());
    }
    out
}

/// The first `n` characters of `s`, or all of `s` if it is shorter
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Widens `s` to `width` characters, `left(pad)` of the added spaces go in front
///
/// Only a field that cannot be allocated is an error.
fn justify(width: i64, s: &str, left: impl FnOnce(usize) -> usize) -> Result<String> {
    let width = usize::try_from(width.max(0)).unwrap_or(usize::MAX);
    let pad = width.saturating_sub(s.chars().count());

    let mut out = String::new();
    out.try_reserve(pad.saturating_add(s.len())).map_err(|err| {
        Error::OutOfRange(format!("cannot pad to a width of {width}: {err}").into())
    })?;
    let left = left(pad);
    out.extend(spaces(left));
    out.push_str(s);
    out.extend(spaces(pad - left));
    Ok(out)
}

#[inline]
fn spaces(n: usize) -> impl Iterator<Item = char> {
    std::iter::repeat(' ').take(n)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_replace() {
        assert_eq!(
            replace(" ", "The Go Programming Language"),
            "TheGoProgrammingLanguage"
        );
        assert_eq!(replace("ab", "abcabc"), "cc");
        assert_eq!(replace("", "abc"), "abc");
        assert_eq!(replace("안녕", "안녕하세요"), "하세요");
    }

    #[test]
    fn test_lower() {
        assert_eq!(lower("Foo"), "foo");
        assert_eq!(lower("FOO"), "foo");
        assert_eq!(lower("FooBar"), "foobar");
        assert_eq!(
            lower("The Go Programming Language"),
            "the go programming language"
        );
        assert_eq!(lower("ÄÖÜ"), "äöü");
    }

    #[test]
    fn test_upper() {
        assert_eq!(upper("Foo"), "FOO");
        assert_eq!(upper("foo"), "FOO");
        assert_eq!(
            upper("The Go Programming Language"),
            "THE GO PROGRAMMING LANGUAGE"
        );
        assert_eq!(upper("ß"), "SS");
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim(" Hello\tworld\t"), "Hello\tworld");
        assert_eq!(
            trim("       The Go Programming Language     "),
            "The Go Programming Language"
        );
        assert_eq!(trim("\u{3000}x\u{3000}"), "x");
    }

    #[test]
    fn test_capfirst() {
        assert_eq!(
            capfirst("the go programming language"),
            "The go programming language"
        );
        assert_eq!(capfirst("fOO"), "FOO");
        assert_eq!(capfirst(""), "");
        assert_eq!(capfirst("éa"), "Éa");
        assert_eq!(capfirst("ßa"), "SSa");
        assert_eq!(capfirst("안녕"), "안녕");
    }

    #[test]
    fn test_title() {
        assert_eq!(&title(""), "");
        assert_eq!(&title(" \n\t"), " \n\t");
        assert_eq!(&title("foo"), "Foo");
        assert_eq!(&title(" foo"), " Foo");
        assert_eq!(&title("foo bar"), "Foo Bar");
        assert_eq!(&title("foo  bar "), "Foo  Bar ");
        assert_eq!(&title("fOO"), "Foo");
        assert_eq!(&title("fOo BaR"), "Foo Bar");
    }

    #[test]
    fn test_wordcount() {
        assert_eq!(wordcount(""), 0);
        assert_eq!(wordcount(" \n\t"), 0);
        assert_eq!(wordcount("foo"), 1);
        assert_eq!(wordcount("foo bar"), 2);
        assert_eq!(wordcount("foo  bar"), 2);
        assert_eq!(
            wordcount("      The      Go       Programming      Language        "),
            4
        );
    }

    #[test]
    fn test_truncatechars() {
        assert_eq!(
            truncatechars(12, "안녕하세요. 반갑습니다."),
            "안녕하세요. 반갑..."
        );
        assert_eq!(
            truncatechars(12, "The Go Programming Language"),
            "The Go Pr..."
        );
        assert_eq!(
            truncatechars(30, "안녕하세요. The Go Programming Language"),
            "안녕하세요. The Go Programming L..."
        );
        assert_eq!(truncatechars(30, "The"), "The");
        assert_eq!(truncatechars(3, "The Go Programming Language"), "The");
        assert_eq!(truncatechars(6, "The Go"), "The Go");
        assert_eq!(truncatechars(30, "The Go"), "The Go");
        assert_eq!(truncatechars(0, "The Go"), "");
        assert_eq!(truncatechars(-1, "The Go"), "The Go");
        assert_eq!(truncatechars(i64::MIN, "The Go"), "The Go");
        assert_eq!(truncatechars(4, "The Go"), "T...");
        assert_eq!(truncatechars(2, "🤚a🤚"), "🤚a");
        assert_eq!(truncatechars(1, "🤚a🤚"), "🤚");
        assert_eq!(truncatechars(4, "🤚a🤚🤚a"), "🤚...");
    }

    #[test]
    fn test_rjust() {
        assert_eq!(rjust(5, "ab").unwrap(), "   ab");
        assert_eq!(rjust(2, "ab").unwrap(), "ab");
        assert_eq!(rjust(1, "abc").unwrap(), "abc");
        assert_eq!(rjust(-4, "abc").unwrap(), "abc");
        assert_eq!(rjust(4, "안녕").unwrap(), "  안녕");
    }

    #[test]
    fn test_ljust() {
        assert_eq!(ljust(5, "ab").unwrap(), "ab   ");
        assert_eq!(ljust(0, "ab").unwrap(), "ab");
        assert_eq!(ljust(4, "안녕").unwrap(), "안녕  ");
    }

    #[test]
    fn test_center() {
        assert_eq!(center(3, "f").unwrap(), " f ");
        assert_eq!(center(4, "f").unwrap(), " f  ");
        assert_eq!(center(1, "foo").unwrap(), "foo");
        assert_eq!(center(8, "foo bar").unwrap(), "foo bar ");
        assert_eq!(center(6, "안녕").unwrap(), "  안녕  ");
    }

    #[test]
    fn padding_has_no_width_limit() {
        assert_eq!(rjust(10_000, "a").unwrap().chars().count(), 10_000);
        assert_eq!(ljust(100_000, "").unwrap().len(), 100_000);
        let centered = center(10_001, "abc").unwrap();
        assert_eq!(centered.len(), 10_001);
        assert_eq!(centered.trim(), "abc");
        assert_eq!(centered.find('a'), Some(4_999));
    }

    #[test]
    fn unallocatable_widths_are_out_of_range() {
        assert_matches!(rjust(i64::MAX, "foo"), Err(Error::OutOfRange(_)));
        assert_matches!(ljust(i64::MAX, "foo"), Err(Error::OutOfRange(_)));
        assert_matches!(center(i64::MAX, "foo"), Err(Error::OutOfRange(_)));
        // more bytes than characters, the field exceeds `isize::MAX` bytes
        assert_matches!(rjust(i64::MAX, "안녕"), Err(Error::OutOfRange(_)));
    }

    #[test]
    fn test_yesno() {
        assert_eq!(yesno("yes~", "no~", true), "yes~");
        assert_eq!(yesno("yes~", "no~", false), "no~");
    }

    #[test]
    fn test_join() {
        let items = [Value::from("hello"), Value::from("world")];
        assert_eq!(join(", ", &items), "hello, world");
        assert_eq!(join(", ", &items[..1]), "hello");
        assert_eq!(join(", ", &[]), "");
        assert_eq!(
            join(":", &[Value::from(1), Value::from(true), Value::from(2.5)]),
            "1:true:2.5"
        );
    }
}
