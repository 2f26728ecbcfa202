//! Text ↔ binary.
//!
//! Text is rendered as the space-separated 8-bit groups of its UTF-8 bytes.

use ck_core::{ensure, Error, Result};

/// `"Hi"` → `"01001000 01101001"`.
pub fn text_to_binary(text: &str) -> Result<String> {
    ensure!(!text.is_empty(), "Enter text to convert");
    let groups: Vec<String> = text.bytes().map(|b| format!("{b:08b}")).collect();
    Ok(groups.join(" "))
}

/// Decode 8-bit groups back into text. Whitespace between digits is ignored.
pub fn binary_to_text(binary: &str) -> Result<String> {
    let digits: String = binary.chars().filter(|c| !c.is_whitespace()).collect();
    ensure!(!digits.is_empty(), "Enter binary to convert");
    ensure!(
        digits.chars().all(|c| c == '0' || c == '1'),
        "Binary input may only contain 0 and 1"
    );
    ensure!(
        digits.len() % 8 == 0,
        "Binary input must be a whole number of 8-bit groups"
    );
    let bytes = digits
        .as_bytes()
        .chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u8, |acc, &bit| (acc << 1) | (bit - b'0'))
        })
        .collect::<Vec<u8>>();
    String::from_utf8(bytes)
        .map_err(|_| Error::invalid_input("Binary input is not valid UTF-8 text"))
}
