//! Line parser for `key=value` translation files.
//!
//! A line contributes an entry only when it is non-blank and contains `=`.
//! The key is everything before the first `=`, the value everything after.
//! Both are trimmed; the value then loses one trailing `,` and every `"`.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`.

use crate::catalog::TranslationSet;
use std::io::{self, BufRead};

const DELIMITER: char = '=';
const TRAILING_SEPARATOR: char = ',';
const QUOTE: char = '"';
const BYTE_ORDER_MARK: char = '\u{feff}';
const LINE_ENDINGS: [char; 2] = ['\n', '\r'];

/// Outcome of parsing one file: everything read before a failure, plus the failure.
#[derive(Debug, Default)]
pub struct ParsedFile {
    /// Entries parsed before reading stopped
    pub entries: TranslationSet,
    /// I/O failure that stopped reading early, if any
    pub error: Option<io::Error>,
}

/// Parse a single line into a `(key, value)` pair.
///
/// Returns `None` for blank lines and lines without a `=`.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    if line.trim().is_empty() {
        return None;
    }

    let (key, value) = line.split_once(DELIMITER)?;
    let key = key.trim();
    let value = value.trim();
    let value = value.strip_suffix(TRAILING_SEPARATOR).unwrap_or(value);
    let value = value.replace(QUOTE, "");

    Some((key.to_string(), value))
}

/// Parse in-memory text into a translation set.
pub fn parse_str(text: &str) -> TranslationSet {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    text.split(LINE_ENDINGS).filter_map(parse_line).collect()
}

/// Parse a reader line by line, keeping whatever was read before an I/O failure.
///
/// Invalid UTF-8 is decoded lossily rather than treated as a failure.
pub fn parse_reader<R: BufRead>(mut reader: R) -> ParsedFile {
    let mut parsed = ParsedFile::default();
    let mut buf = Vec::new();
    let mut first_line = true;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                // `read_until` only stops at `\n`; a lone `\r` ends a line too.
                for segment in buf.split(|&b| b == b'\n' || b == b'\r') {
                    let line = String::from_utf8_lossy(segment);
                    let line = if first_line {
                        first_line = false;
                        line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&*line).to_string()
                    } else {
                        line.into_owned()
                    };

                    if let Some((key, value)) = parse_line(&line) {
                        parsed.entries.insert(key, value);
                    }
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                parsed.error = Some(e);
                break;
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn entry(key: &str, value: &str) -> Option<(String, String)> {
        Some((key.to_string(), value.to_string()))
    }

    #[test]
    fn test_parse_line_basic() {
        assert_eq!(parse_line("hello=Hi"), entry("hello", "Hi"));
        assert_eq!(parse_line("  hello  =  Hi there  "), entry("hello", "Hi there"));
    }

    #[test]
    fn test_parse_line_skips_blank_and_undelimited() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t "), None);
        assert_eq!(parse_line("just some words"), None);
        assert_eq!(parse_line("# comment without delimiter"), None);
    }

    #[test]
    fn test_parse_line_splits_on_first_delimiter() {
        assert_eq!(parse_line("greeting=a=b"), entry("greeting", "a=b"));
    }

    #[test]
    fn test_parse_line_strips_one_trailing_comma() {
        assert_eq!(parse_line("list=a,b,"), entry("list", "a,b"));
        assert_eq!(parse_line("double=x,,"), entry("double", "x,"));
    }

    #[test]
    fn test_parse_line_removes_quotes() {
        assert_eq!(parse_line("farewell = \"Goodbye\","), entry("farewell", "Goodbye"));
        assert_eq!(parse_line("said=He \"said\" hi"), entry("said", "He said hi"));
    }

    #[test]
    fn test_parse_line_quote_before_comma_keeps_comma() {
        // The comma is checked before quotes are removed.
        assert_eq!(parse_line("x=\"a,\""), entry("x", "a,"));
    }

    #[test]
    fn test_parse_line_empty_key_and_value() {
        assert_eq!(parse_line("=value"), entry("", "value"));
        assert_eq!(parse_line("key="), entry("key", ""));
        assert_eq!(parse_line("key=,"), entry("key", ""));
    }

    #[test]
    fn test_parse_str_last_write_wins() {
        let set = parse_str("a=1\nb=2\na=3\n");
        assert_eq!(set.get("a"), Some("3"));
        assert_eq!(set.get("b"), Some("2"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_str_handles_crlf_and_bom() {
        let set = parse_str("\u{feff}hello=Hi\r\nbye=Bye\r\n");
        assert_eq!(set.get("hello"), Some("Hi"));
        assert_eq!(set.get("bye"), Some("Bye"));
    }

    #[test]
    fn test_parse_str_handles_lone_carriage_returns() {
        let set = parse_str("a=1\rb=2\r");
        assert_eq!(set.get("a"), Some("1"));
        assert_eq!(set.get("b"), Some("2"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_reader_handles_mixed_line_endings() {
        let text = "\u{feff}a=1\rb=2\r\nc=3\nd=4\r";
        let parsed = parse_reader(Cursor::new(text));

        assert!(parsed.error.is_none());
        assert_eq!(parsed.entries.get("a"), Some("1"));
        assert_eq!(parsed.entries.get("b"), Some("2"));
        assert_eq!(parsed.entries.get("c"), Some("3"));
        assert_eq!(parsed.entries.get("d"), Some("4"));
        assert_eq!(parsed.entries, parse_str(text));
    }

    #[test]
    fn test_parse_reader_matches_parse_str() {
        let text = "hello=Hi {name}!,\nno delimiter\n\nhelp=a<br>b\n";
        let parsed = parse_reader(Cursor::new(text));

        assert!(parsed.error.is_none());
        assert_eq!(parsed.entries, parse_str(text));
    }

    #[test]
    fn test_parse_reader_lossy_utf8() {
        let bytes = b"bad=caf\xff\nok=fine\n".to_vec();
        let parsed = parse_reader(Cursor::new(bytes));

        assert!(parsed.error.is_none());
        assert_eq!(parsed.entries.get("bad"), Some("caf\u{fffd}"));
        assert_eq!(parsed.entries.get("ok"), Some("fine"));
    }

    /// Yields its data, then fails on the next read.
    struct FailingReader {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "disk on fire")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_parse_reader_keeps_entries_before_failure() {
        let reader = FailingReader {
            data: Cursor::new(b"first=1\nsecond=2\n".to_vec()),
        };
        let parsed = parse_reader(BufReader::new(reader));

        let error = parsed.error.expect("read failure should be reported");
        assert_eq!(error.to_string(), "disk on fire");
        assert_eq!(parsed.entries.get("first"), Some("1"));
        assert_eq!(parsed.entries.get("second"), Some("2"));
    }
}
