//! Template-literal encoding for the embedded artifact module
//!
//! The inlined document is stored in a JavaScript template literal. The
//! backslash, the backtick and `${` would end or interpolate inside that
//! literal, and a raw carriage return would be read back as a line feed, so
//! all four are escaped. [`decode`] is the exact inverse of [`encode`] and
//! agrees with how a JavaScript engine evaluates the literal.

use crate::error::{self, Result};

/// Escape `text` for use between backticks
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '\r' => out.push_str("\\r"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            _ => out.push(c),
        }
    }

    out
}

/// Reverse [`encode`].
///
/// Only the escapes `encode` produces are accepted; anything else means
/// the literal was not written by this module.
pub fn decode(literal: &str) -> Result<String> {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, escaped @ ('\\' | '`' | '$'))) => out.push(escaped),
                Some((_, 'r')) => out.push('\r'),
                Some((_, other)) => {
                    return Err(error::bundle::artifact_malformed(format!(
                        "unexpected escape '\\{other}' at byte {pos}"
                    )));
                }
                None => {
                    return Err(error::bundle::artifact_malformed(
                        "literal ends with a lone backslash",
                    ));
                }
            },
            '`' => {
                return Err(error::bundle::artifact_malformed(format!(
                    "unescaped backtick at byte {pos}"
                )));
            }
            '$' if matches!(chars.peek(), Some((_, '{'))) => {
                return Err(error::bundle::artifact_malformed(format!(
                    "unescaped interpolation at byte {pos}"
                )));
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Render the artifact module exporting `document` as `export_name`
pub fn render_module(export_name: &str, document: &str) -> String {
    format!("export const {export_name} = `{}`;\n", encode(document))
}

/// Recover the export name and document from module text
pub fn parse_module(module: &str) -> Result<(String, String)> {
    let rest = module
        .strip_prefix("export const ")
        .ok_or_else(|| error::bundle::artifact_malformed("missing 'export const' header"))?;

    let (name, rest) = rest
        .split_once(" = `")
        .ok_or_else(|| error::bundle::artifact_malformed("missing template literal"))?;

    let literal = rest
        .trim_end()
        .strip_suffix("`;")
        .ok_or_else(|| error::bundle::artifact_malformed("template literal is not terminated"))?;

    Ok((name.to_string(), decode(literal)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_escapes_literal_terminators() {
        assert_eq!(encode("a`b"), "a\\`b");
        assert_eq!(encode("${x}"), "\\${x}");
        assert_eq!(encode("C:\\path"), "C:\\\\path");
    }

    #[test]
    fn test_encode_keeps_carriage_returns_out_of_the_literal() {
        let document = "<html>\r\n<script>var s = 1;\r\n</script>\r\n</html>";
        let encoded = encode(document);
        assert!(!encoded.contains('\r'));
        assert_eq!(
            encoded,
            "<html>\\r\n<script>var s = 1;\\r\n</script>\\r\n</html>"
        );

        let (_, decoded) = parse_module(&render_module("GAME_HTML", document)).unwrap();
        assert_eq!(decoded.as_bytes(), document.as_bytes());
    }

    #[test]
    fn test_encode_leaves_plain_dollars() {
        assert_eq!(encode("$ 5 and $x"), "$ 5 and $x");
        assert_eq!(encode("$"), "$");
    }

    #[test]
    fn test_encoded_text_has_no_raw_terminators() {
        let encoded = encode("const s = `hi ${name}`; const re = /\\`/;");
        let mut prev = None;
        for c in encoded.chars() {
            if c == '`' {
                assert_eq!(prev, Some('\\'));
            }
            prev = Some(c);
        }
    }

    #[test]
    fn test_decode_reverses_encode() {
        let samples = [
            "",
            "plain <html></html>",
            "const s = `a ${b} c`;",
            "\\`already escaped\\`",
            "trailing backslash \\",
            "$${{}}$",
            "unicode \u{1F3C0} hoops",
            "\\\\${",
            "lone\rcarriage\r\nreturns\\r",
        ];
        for sample in samples {
            assert_eq!(decode(&encode(sample)).unwrap(), sample, "{sample:?}");
        }
    }

    #[test]
    fn test_decode_rejects_foreign_literals() {
        assert!(decode("a`b").is_err());
        assert!(decode("${x}").is_err());
        assert!(decode("\\n").is_err());
        assert!(decode("ends with \\").is_err());
    }

    #[test]
    fn test_module_round_trip() {
        let document = "<script>let t = `x${1}`;</script>";
        let module = render_module("GAME_HTML", document);
        assert!(module.starts_with("export const GAME_HTML = `"));
        assert!(module.ends_with("`;\n"));

        let (name, decoded) = parse_module(&module).unwrap();
        assert_eq!(name, "GAME_HTML");
        assert_eq!(decoded, document);
    }

    #[test]
    fn test_parse_module_rejects_other_text() {
        assert!(parse_module("module.exports = ''").is_err());
        assert!(parse_module("export const X = `unterminated").is_err());
    }
}
