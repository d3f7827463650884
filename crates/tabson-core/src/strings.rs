//! Printable rendering of Lua strings.
//!
//! Lua strings are byte arrays. Most are UTF-8 text, but nothing stops a
//! program from storing binary data in them, so the renderer falls back to a
//! `\xHH` escape of every byte when the bytes do not decode cleanly.
//!
//! Decoding is judged by looking for U+FFFD in the lossy decode. A string that
//! is valid UTF-8 and genuinely contains U+FFFD is therefore also escaped.

/// Render raw string bytes as printable text.
///
/// ```rust
/// use tabson_core::strings::printable_string;
///
/// assert_eq!(printable_string("héllo".as_bytes()), "héllo");
/// assert_eq!(printable_string(&[0xff, 0x00]), "\\xff\\x00");
/// ```
#[must_use]
pub fn printable_string(bytes: &[u8]) -> String
{
    let text = String::from_utf8_lossy(bytes);
    if text.contains(char::REPLACEMENT_CHARACTER) {
        hex_escape(bytes)
    } else {
        text.into_owned()
    }
}

/// Escape every byte as `\xHH` (lowercase hex).
#[must_use]
pub fn hex_escape(bytes: &[u8]) -> String
{
    let digits = hex::encode(bytes);
    let mut out = String::with_capacity(digits.len() * 2);
    for (i, digit) in digits.chars().enumerate() {
        if i % 2 == 0 {
            out.push_str("\\x");
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_empty_string()
    {
        assert_eq!(printable_string(b""), "");
        assert_eq!(hex_escape(b""), "");
    }

    #[test]
    fn test_escape_is_lowercase_and_ordered()
    {
        assert_eq!(hex_escape(&[0xAB, 0x01, 0x7f]), "\\xab\\x01\\x7f");
    }

    #[test]
    fn test_escape_covers_every_byte_value()
    {
        let bytes: Vec<u8> = (0..=u8::MAX).collect();
        let escaped = hex_escape(&bytes);
        assert_eq!(escaped.len(), 256 * 4);
        assert!(escaped.starts_with("\\x00\\x01\\x02"));
        assert!(escaped.ends_with("\\xfe\\xff"));
    }

    #[test]
    fn test_truncated_multibyte_sequence()
    {
        // First two bytes of a three-byte sequence
        assert_eq!(printable_string(&[b'a', 0xe2, 0x82]), "\\x61\\xe2\\x82");
    }
}
