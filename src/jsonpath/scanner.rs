//! Character-level scanning primitives used by the path compiler.
//!
//! All functions work on the path as a slice of `char` and take/return
//! character positions, so error positions line up with what a user sees.

use super::error::{CompileError, CompileErrorKind};

/// Longest hex run accepted inside `\u{...}`.
const MAX_BRACED_HEX_DIGITS: usize = 6;

/// Whitespace or control character; skipped between tokens.
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ch.is_control()
}

/// Character allowed in a bare (unquoted) name.
///
/// Digits, ASCII letters and every non-ASCII character qualify. ASCII
/// punctuation (including `_` and `-`) does not.
pub fn is_name_char(ch: char) -> bool {
    !is_space(ch) && !ch.is_ascii_punctuation()
}

/// Advances past whitespace and control characters.
///
/// Returns `src.len()` if the run reaches the end of input.
pub fn skip_spaces(src: &[char], start: usize) -> usize {
    src.iter()
        .skip(start)
        .position(|&ch| !is_space(ch))
        .map_or(src.len().max(start), |offset| start + offset)
}

/// Reads a maximal run of name characters.
pub fn parse_bare_name(src: &[char], start: usize) -> Result<(String, usize), CompileError> {
    let end = scan_while(src, start, is_name_char);
    if end == start {
        return Err(CompileError::at(CompileErrorKind::EmptyName, src, start));
    }
    Ok((src[start..end].iter().collect(), end))
}

/// Reads an optional `-` followed by one or more decimal digits.
///
/// Returns the end position and whether the run is negative.
pub fn parse_decimal_run(src: &[char], start: usize) -> Result<(usize, bool), CompileError> {
    let negative = src.get(start) == Some(&'-');
    let digits_start = if negative { start + 1 } else { start };
    let end = scan_while(src, digits_start, |ch| ch.is_ascii_digit());
    if end == digits_start {
        return Err(CompileError::at(CompileErrorKind::BadNumber, src, start));
    }
    Ok((end, negative))
}

/// Reads one or more hexadecimal digits (either case).
pub fn parse_hex_run(src: &[char], start: usize) -> Result<usize, CompileError> {
    let end = scan_while(src, start, |ch| ch.is_ascii_hexdigit());
    if end == start {
        return Err(CompileError::at(
            CompileErrorKind::BadEscape {
                message: "expected hex digits",
            },
            src,
            start,
        ));
    }
    Ok(end)
}

/// Reads a quoted name, decoding escapes.
///
/// `start` is the position just after the opening `quote`. On success the
/// returned position is just past the closing quote.
pub fn parse_quoted_name(
    src: &[char],
    quote: char,
    start: usize,
) -> Result<(String, usize), CompileError> {
    let unterminated = || {
        CompileError::at(
            CompileErrorKind::UnterminatedQuote { quote },
            src,
            start.saturating_sub(1),
        )
    };

    let mut name = String::new();
    let mut i = start;
    while i < src.len() {
        let ch = src[i];
        if ch == quote {
            if name.is_empty() {
                return Err(CompileError::at(
                    CompileErrorKind::EmptyName,
                    src,
                    start.saturating_sub(1),
                ));
            }
            return Ok((name, i + 1));
        }
        if ch != '\\' {
            name.push(ch);
            i += 1;
            continue;
        }

        let escape = *src.get(i + 1).ok_or_else(unterminated)?;
        let (decoded, next) = match escape {
            '\\' | '"' | '\'' | '`' => (escape, i + 2),
            'n' | 'N' => ('\n', i + 2),
            'r' | 'R' => ('\r', i + 2),
            'v' | 'V' => ('\u{0B}', i + 2),
            't' | 'T' => ('\t', i + 2),
            'b' | 'B' => ('\u{08}', i + 2),
            'f' | 'F' => ('\u{0C}', i + 2),
            'x' | 'X' => decode_byte_escape(src, i)?,
            'u' | 'U' if src.get(i + 2) == Some(&'{') => decode_braced_escape(src, i)?,
            'u' | 'U' => decode_unicode_escape(src, i)?,
            _ => {
                return Err(bad_escape("unknown escape character", src, i));
            }
        };
        name.push(decoded);
        i = next;
    }

    Err(unterminated())
}

/// `\xHH`: exactly two hex digits; anything after them is ordinary text.
fn decode_byte_escape(src: &[char], backslash: usize) -> Result<(char, usize), CompileError> {
    let digits = backslash + 2;
    let end = digits + 2;
    let hex = src
        .get(digits..end)
        .filter(|run| run.iter().all(char::is_ascii_hexdigit))
        .ok_or_else(|| bad_escape("\\x needs exactly 2 hex digits", src, backslash))?;
    // Two hex digits never exceed U+00FF.
    Ok((char::from(hex_value(hex) as u8), end))
}

/// `\uHHHH`: a run of exactly four hex digits.
fn decode_unicode_escape(src: &[char], backslash: usize) -> Result<(char, usize), CompileError> {
    let digits = backslash + 2;
    let end = parse_hex_run(src, digits)
        .map_err(|_| bad_escape("\\u needs exactly 4 hex digits", src, backslash))?;
    if end - digits != 4 {
        return Err(bad_escape("\\u needs exactly 4 hex digits", src, backslash));
    }
    let ch = char::from_u32(hex_value(&src[digits..end]))
        .ok_or_else(|| bad_escape("not a Unicode scalar value", src, backslash))?;
    Ok((ch, end))
}

/// `\u{H...H}`: one to six hex digits closed by `}`.
fn decode_braced_escape(src: &[char], backslash: usize) -> Result<(char, usize), CompileError> {
    let digits = backslash + 3;
    let end = parse_hex_run(src, digits)
        .map_err(|_| bad_escape("\\u{...} needs 1 to 6 hex digits", src, backslash))?;
    if end - digits > MAX_BRACED_HEX_DIGITS {
        return Err(bad_escape(
            "\\u{...} needs 1 to 6 hex digits",
            src,
            backslash,
        ));
    }
    if src.get(end) != Some(&'}') {
        return Err(bad_escape("\\u{...} is not closed by '}'", src, backslash));
    }
    let ch = char::from_u32(hex_value(&src[digits..end]))
        .ok_or_else(|| bad_escape("not a Unicode scalar value", src, backslash))?;
    Ok((ch, end + 1))
}

fn bad_escape(message: &'static str, src: &[char], position: usize) -> CompileError {
    CompileError::at(CompileErrorKind::BadEscape { message }, src, position)
}

/// Value of a run of at most six hex digits.
fn hex_value(digits: &[char]) -> u32 {
    digits
        .iter()
        .filter_map(|ch| ch.to_digit(16))
        .fold(0, |acc, digit| acc * 16 + digit)
}

fn scan_while(src: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut end = start;
    while end < src.len() && pred(src[end]) {
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn quoted(s: &str) -> Result<(String, usize), CompileError> {
        let src = chars(s);
        parse_quoted_name(&src, src[0], 1)
    }

    #[test]
    fn test_skip_spaces() {
        let src = chars("  \t\u{1}x ");
        assert_eq!(skip_spaces(&src, 0), 4);
        assert_eq!(skip_spaces(&src, 4), 4);
        assert_eq!(skip_spaces(&src, 5), src.len());
        assert_eq!(skip_spaces(&src, src.len()), src.len());
    }

    #[test]
    fn test_bare_name_stops_at_punctuation_and_space() {
        let src = chars("abc9[0]");
        assert_eq!(parse_bare_name(&src, 0).unwrap(), ("abc9".to_string(), 4));

        let src = chars("ab cd");
        assert_eq!(parse_bare_name(&src, 0).unwrap(), ("ab".to_string(), 2));

        let src = chars("snake_case");
        assert_eq!(parse_bare_name(&src, 0).unwrap(), ("snake".to_string(), 5));
    }

    #[test]
    fn test_bare_name_accepts_non_ascii() {
        let src = chars("名前.x");
        assert_eq!(parse_bare_name(&src, 0).unwrap(), ("名前".to_string(), 2));
    }

    #[test]
    fn test_bare_name_empty_fails() {
        let src = chars("-abc");
        let err = parse_bare_name(&src, 0).unwrap_err();
        assert_eq!(err.kind, CompileErrorKind::EmptyName);
        assert_eq!(err.position, 0);
        assert_eq!(err.excerpt, "-abc");
    }

    #[test]
    fn test_decimal_run() {
        let src = chars("[12]");
        assert_eq!(parse_decimal_run(&src, 1).unwrap(), (3, false));

        // minus sign is recognised wherever the run starts
        let src = chars("$[-3]");
        assert_eq!(parse_decimal_run(&src, 2).unwrap(), (4, true));
    }

    #[test]
    fn test_decimal_run_needs_digit() {
        let src = chars("-]");
        assert_eq!(
            parse_decimal_run(&src, 0).unwrap_err().kind,
            CompileErrorKind::BadNumber
        );
        let src = chars("x");
        assert!(parse_decimal_run(&src, 0).is_err());
    }

    #[test]
    fn test_hex_run() {
        let src = chars("0aFg");
        assert_eq!(parse_hex_run(&src, 0).unwrap(), 3);
        assert!(parse_hex_run(&src, 3).is_err());
    }

    #[test]
    fn test_quoted_name_plain() {
        assert_eq!(quoted("'abc'").unwrap(), ("abc".to_string(), 5));
        assert_eq!(quoted("\"a b\" ]").unwrap(), ("a b".to_string(), 5));
        assert_eq!(quoted("\"it's\"").unwrap(), ("it's".to_string(), 6));
    }

    #[test]
    fn test_quoted_name_simple_escapes() {
        assert_eq!(quoted(r#""\\\"\'\`""#).unwrap().0, "\\\"'`");
        assert_eq!(quoted(r#""\n\N\r\t\b\f\v""#).unwrap().0, "\n\n\r\t\u{08}\u{0C}\u{0B}");
    }

    #[test]
    fn test_quoted_name_hex_escapes() {
        assert_eq!(quoted(r#""\x61\X62\x63""#).unwrap().0, "abc");
        assert_eq!(quoted(r#""\xff""#).unwrap().0, "\u{ff}");
        // only two digits belong to the escape
        assert_eq!(quoted(r#""\x414""#).unwrap().0, "A4");
    }

    #[test]
    fn test_quoted_name_unicode_escapes() {
        assert_eq!(quoted(r#""\u0061\U0062\u0063""#).unwrap().0, "abc");
        assert_eq!(quoted(r#""\u{61}\u{062}\u{0063}""#).unwrap().0, "abc");
        assert_eq!(quoted(r#""\u{1F600}""#).unwrap().0, "\u{1F600}");
        assert_eq!(quoted(r#""\u{00000a}""#).unwrap().0, "\n");
    }

    #[test]
    fn test_quoted_name_bad_escapes() {
        for src in [
            r#""\q""#,
            r#""\x6""#,
            r#""\x6g""#,
            r#""\u061""#,
            r#""\u61""#,
            r#""\u00612""#,
            r#""\u{}""#,
            r#""\u{0000061}""#,
            r#""\u{61""#,
            r#""\u{110000}""#,
            r#""\uD800""#,
        ] {
            let err = quoted(src).unwrap_err();
            assert!(
                matches!(err.kind, CompileErrorKind::BadEscape { .. }),
                "{} gave {:?}",
                src,
                err
            );
        }
    }

    #[test]
    fn test_quoted_name_unterminated() {
        let err = quoted("'abc").unwrap_err();
        assert_eq!(err.kind, CompileErrorKind::UnterminatedQuote { quote: '\'' });
        assert_eq!(err.position, 0);

        let err = quoted("'abc\\").unwrap_err();
        assert_eq!(err.kind, CompileErrorKind::UnterminatedQuote { quote: '\'' });
    }

    #[test]
    fn test_quoted_name_empty_fails() {
        assert_eq!(quoted("''").unwrap_err().kind, CompileErrorKind::EmptyName);
    }
}
