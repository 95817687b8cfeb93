//! Decoding of string and file-name literals.

/// Decodes the escapes of a string literal in one left-to-right pass.
///
/// `\\`, `\"`, `\r`, `\n` and `\t` are decoded; any other backslash is kept
/// verbatim along with the character after it.
///
/// ```
/// use mathx_parser::decode_string;
///
/// assert_eq!(decode_string(r#"say \"hi\"\n"#), "say \"hi\"\n");
/// assert_eq!(decode_string(r"\d"), r"\d");
/// ```
#[must_use]
pub fn decode_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('r') => out.push('\r'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Turns a file-name literal into the text of a string holding that name.
///
/// One surrounding pair of double quotes is removed, escapes are decoded,
/// then every backslash is doubled again.
#[must_use]
pub fn decode_filename(raw: &str) -> String {
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    decode_string(unquoted).replace('\\', "\\\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_escapes() {
        assert_eq!(decode_string(r"a\tb"), "a\tb");
        assert_eq!(decode_string(r"line\r\n"), "line\r\n");
        assert_eq!(decode_string(r"\r"), "\r");
        assert_eq!(decode_string(r#"\""#), "\"");
    }

    #[test]
    fn test_escaped_backslash_is_not_reused() {
        // `\\n` is a backslash followed by `n`, not a newline
        assert_eq!(decode_string(r"\\n"), "\\n");
        assert_eq!(decode_string(r"\\\\"), "\\\\");
        assert_eq!(decode_string(r#"\\""#), "\\\"");
    }

    #[test]
    fn test_unknown_and_trailing_escapes() {
        assert_eq!(decode_string(r"\x41"), r"\x41");
        assert_eq!(decode_string("end\\"), "end\\");
        assert_eq!(decode_string(""), "");
    }

    #[test]
    fn test_filenames() {
        assert_eq!(decode_filename(r#""data.m""#), "data.m");
        assert_eq!(decode_filename("plain.m"), "plain.m");
        assert_eq!(decode_filename(r#""C:\\dir\\f.m""#), r"C:\\dir\\f.m");
        assert_eq!(decode_filename(r"a\b"), r"a\\b");
        // a lone quote is not a pair
        assert_eq!(decode_filename("\""), "\"");
    }
}
