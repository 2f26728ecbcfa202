//! Base64 encode/decode with the standard, padded alphabet.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use ck_core::{ensure, Error, Result};

/// Encode the UTF-8 bytes of `text`.
pub fn encode_base64(text: &str) -> Result<String> {
    ensure!(!text.is_empty(), "Enter text to encode");
    Ok(STANDARD.encode(text.as_bytes()))
}

/// Decode `encoded` into UTF-8 text. Surrounding whitespace is ignored.
pub fn decode_base64(encoded: &str) -> Result<String> {
    let s = encoded.trim();
    ensure!(!s.is_empty(), "Enter Base64 to decode");
    let bytes = STANDARD
        .decode(s)
        .map_err(|e| Error::invalid_input(format!("Invalid Base64 input: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|_| Error::invalid_input("Decoded data is not valid UTF-8 text"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_with_padding() {
        assert_eq!(encode_base64("hello").unwrap(), "aGVsbG8=");
        assert_eq!(encode_base64("héllo").unwrap(), "aMOpbGxv");
    }

    #[test]
    fn decodes() {
        assert_eq!(decode_base64(" aGVsbG8= ").unwrap(), "hello");
        assert_eq!(decode_base64("aMOpbGxv").unwrap(), "héllo");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(decode_base64("@@@"), Err(Error::InvalidInput(_))));
        // 0xFF 0xFE is not UTF-8.
        assert!(decode_base64("//4=").is_err());
        assert!(encode_base64("").is_err());
    }
}
