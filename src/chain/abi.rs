// SPDX-License-Identifier: MPL-2.0
//! Minimal ABI encoding/decoding for the single contract call this
//! application makes: `tokenURI(uint256) -> string`.
//!
//! Return data for a dynamic string is three parts: a 32-byte offset word,
//! a 32-byte length word at that offset, then the UTF-8 bytes padded to a
//! 32-byte boundary.

use crate::error::{Error, Result};

/// Function selector for `tokenURI(uint256)`.
const TOKEN_URI_SELECTOR: [u8; 4] = [0xc8, 0x7b, 0x56, 0xdd];

/// Builds the `0x`-prefixed calldata for `tokenURI(token_id)`.
pub fn token_uri_calldata(token_id: u64) -> String {
    let mut data = Vec::with_capacity(36);
    data.extend_from_slice(&TOKEN_URI_SELECTOR);
    data.extend_from_slice(&[0u8; 24]);
    data.extend_from_slice(&token_id.to_be_bytes());
    format!("0x{}", hex::encode(data))
}

/// Decodes a single ABI-encoded string from `eth_call` return data.
///
/// # Errors
///
/// Returns [`Error::Abi`] when the payload is not valid hex, is truncated,
/// or does not hold valid UTF-8.
pub fn decode_string(raw: &str) -> Result<String> {
    let hex_body = raw.strip_prefix("0x").unwrap_or(raw);
    let bytes = hex::decode(hex_body)
        .map_err(|e| Error::Abi(format!("invalid hex in return data: {e}")))?;

    let offset = read_word(&bytes, 0)?;
    let len = read_word(&bytes, offset)?;
    let start = offset + 32;
    let end = start
        .checked_add(len)
        .filter(|&end| end <= bytes.len())
        .ok_or_else(|| Error::Abi("string length exceeds return data".to_string()))?;

    String::from_utf8(bytes[start..end].to_vec())
        .map_err(|e| Error::Abi(format!("string is not valid UTF-8: {e}")))
}

/// Reads the 32-byte word at `at` as a `usize`.
fn read_word(bytes: &[u8], at: usize) -> Result<usize> {
    let end = at
        .checked_add(32)
        .filter(|&end| end <= bytes.len())
        .ok_or_else(|| Error::Abi("return data too short".to_string()))?;
    let word = &bytes[at..end];
    if word[..24].iter().any(|&b| b != 0) {
        return Err(Error::Abi("word value out of range".to_string()));
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&word[24..]);
    Ok(u64::from_be_bytes(buf) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ABI-encodes a string return payload the way a node would.
    fn encode_string_return(s: &str) -> String {
        let mut bytes = vec![0u8; 32];
        bytes[31] = 0x20;
        let mut len_word = [0u8; 32];
        len_word[24..].copy_from_slice(&(s.len() as u64).to_be_bytes());
        bytes.extend_from_slice(&len_word);
        bytes.extend_from_slice(s.as_bytes());
        let pad = (32 - s.len() % 32) % 32;
        bytes.extend(std::iter::repeat(0u8).take(pad));
        format!("0x{}", hex::encode(bytes))
    }

    #[test]
    fn calldata_is_selector_plus_padded_id() {
        let data = token_uri_calldata(3);
        assert_eq!(data.len(), 2 + 8 + 64);
        assert!(data.starts_with("0xc87b56dd"));
        assert!(data.ends_with(
            "0000000000000000000000000000000000000000000000000000000000000003"
        ));
    }

    #[test]
    fn calldata_encodes_large_ids() {
        let data = token_uri_calldata(u64::MAX);
        assert!(data.ends_with("ffffffffffffffff"));
    }

    #[test]
    fn decode_string_round_trips_a_token_uri() {
        let raw = encode_string_return("ipfs://QmYx3n/3.json");
        assert_eq!(decode_string(&raw).unwrap(), "ipfs://QmYx3n/3.json");
    }

    #[test]
    fn decode_string_handles_multi_word_payloads() {
        let long = "ipfs://QmSomeVeryLongContentHashThatSpansSeveralWords/metadata/7.json";
        let raw = encode_string_return(long);
        assert_eq!(decode_string(&raw).unwrap(), long);
    }

    #[test]
    fn decode_string_rejects_truncated_data() {
        let err = decode_string("0x0000000000000000000000000000000000000000000000000000000000000020")
            .unwrap_err();
        assert!(matches!(err, Error::Abi(_)));
    }

    #[test]
    fn decode_string_rejects_invalid_hex() {
        let err = decode_string("0xzz").unwrap_err();
        assert!(matches!(err, Error::Abi(_)));
    }

    #[test]
    fn decode_string_rejects_length_past_end() {
        // Offset word points at a length word claiming more bytes than exist.
        let mut bytes = vec![0u8; 32];
        bytes[31] = 0x20;
        let mut len_word = [0u8; 32];
        len_word[31] = 0xff;
        bytes.extend_from_slice(&len_word);
        let raw = format!("0x{}", hex::encode(bytes));
        let err = decode_string(&raw).unwrap_err();
        assert!(matches!(err, Error::Abi(_)));
    }
}
