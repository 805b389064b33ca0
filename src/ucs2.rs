//! UCS-2 big-endian string codec
//!
//! BMPString payloads are sequences of 16-bit code units, big-endian, one
//! unit per character. Only the Basic Multilingual Plane (U+0000-U+FFFF)
//! is representable; there are no surrogate pairs in this encoding, so a
//! unit in the surrogate range 0xd800-0xdfff is invalid on decode and a
//! codepoint above U+FFFF is rejected on encode.
//!
//! PKCS#12 password handling (RFC 7292 appendix B.1) appends a two-byte
//! null terminator after a non-empty string but encodes the empty string
//! as zero bytes. `encode` reproduces that asymmetry bit-for-bit and
//! `decode` strips the terminator back off.

use crate::error::{BmpError, BmpResult};

/// Encode text as big-endian UCS-2 code units
///
/// Non-empty input gets a trailing `0x00 0x00` terminator pair; empty
/// input encodes to an empty buffer.
///
/// # Error Handling
/// Fails with `NonBmpCharacter` on any codepoint above U+FFFF. Failure is
/// atomic: no partial buffer escapes.
pub fn encode(text: &str) -> BmpResult<Vec<u8>> {
    let mut payload = Vec::with_capacity(text.len() * 2 + 2);

    for c in text.chars() {
        let value = u32::from(c);
        if value > 0xffff {
            return Err(BmpError::NonBmpCharacter(c));
        }
        payload.extend_from_slice(&(value as u16).to_be_bytes());
    }

    if !text.is_empty() {
        payload.extend_from_slice(&[0x00, 0x00]);
    }

    Ok(payload)
}

/// Decode big-endian UCS-2 code units back into text
///
/// A trailing `0x0000` unit on a non-empty payload is the terminator
/// written by [`encode`] and is dropped before decoding.
///
/// # Error Handling
/// Returns error if:
/// - the payload has an odd byte count (`OddPayloadLength`)
/// - a unit falls in the surrogate range (`InvalidCodeUnit`)
pub fn decode(payload: &[u8]) -> BmpResult<String> {
    if payload.len() % 2 != 0 {
        return Err(BmpError::OddPayloadLength(payload.len()));
    }

    let units = if payload.len() >= 2 && payload[payload.len() - 2..] == [0x00, 0x00] {
        &payload[..payload.len() - 2]
    } else {
        payload
    };

    let mut text = String::with_capacity(units.len() / 2);
    for pair in units.chunks_exact(2) {
        let unit = u16::from_be_bytes([pair[0], pair[1]]);
        if (0xd800..=0xdfff).contains(&unit) {
            return Err(BmpError::InvalidCodeUnit(unit));
        }
        // Never fails for a non-surrogate 16-bit value
        let c = char::from_u32(u32::from(unit)).ok_or(BmpError::InvalidCodeUnit(unit))?;
        text.push(c);
    }

    Ok(text)
}
