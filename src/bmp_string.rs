//! BMPString value marshalling
//!
//! A complete DER BMPString value is a TLV triplet:
//!
//! ```text
//! [Tag 0x1e] [Length header, 1-5 bytes] [UCS-2 BE payload]
//! ```
//!
//! `marshal` builds the triplet from text; `unmarshal` takes exactly one
//! triplet (as sliced out of a PKCS#12 structure by the caller) and gives
//! the text back. The declared length must match the bytes present to the
//! byte; trailing garbage is an error, not ignored.

use crate::der::DerLength;
use crate::error::{BmpError, BmpResult};
use crate::ucs2;

/// ASN.1 universal primitive tag for BMPString (X.680 table 8, tag 30)
pub const BMP_STRING_TAG: u8 = 0x1e;

/// Marshal text into a complete DER BMPString value
///
/// # Encoding Process
/// 1. Encode the text as UCS-2 BE (terminator included for non-empty text)
/// 2. Encode the length header for the payload byte count
/// 3. Concatenate tag, header, payload
///
/// # Error Handling
/// Fails with `NonBmpCharacter` if the text contains a codepoint above
/// U+FFFF; no bytes are produced in that case.
pub fn marshal(text: &str) -> BmpResult<Vec<u8>> {
    let payload = ucs2::encode(text)?;
    let header = DerLength::new(payload.len()).encode();

    let mut value = Vec::with_capacity(1 + header.len() + payload.len());
    value.push(BMP_STRING_TAG);
    value.extend_from_slice(&header);
    value.extend_from_slice(&payload);
    Ok(value)
}

/// Unmarshal a complete DER BMPString value back into text
///
/// # Decoding Process
/// 1. Verify the tag byte
/// 2. Parse the length header
/// 3. Check the declared payload length is even and matches the bytes
///    actually present, exactly
/// 4. Decode the payload as UCS-2 BE
///
/// # Error Handling
/// Returns error if:
/// - the buffer is empty or does not start with the BMPString tag (`WrongTag`)
/// - the length header is malformed (`Truncated`,
///   `UnsupportedIndefiniteLength`, `LengthOverflow`)
/// - the declared length is odd (`OddPayloadLength`)
/// - fewer bytes follow the header than declared (`Truncated`) or more
///   (`LengthMismatch`)
/// - the payload contains a lone surrogate unit (`InvalidCodeUnit`)
pub fn unmarshal(data: &[u8]) -> BmpResult<String> {
    if data.first() != Some(&BMP_STRING_TAG) {
        return Err(BmpError::WrongTag);
    }

    let (length, header_len) = DerLength::decode(&data[1..])?;
    let declared = length.value();
    if declared % 2 != 0 {
        return Err(BmpError::OddPayloadLength(declared));
    }

    let payload = &data[1 + header_len..];
    if payload.len() < declared {
        return Err(BmpError::Truncated {
            needed: declared,
            available: payload.len(),
        });
    }
    if payload.len() > declared {
        return Err(BmpError::LengthMismatch {
            declared,
            actual: payload.len(),
        });
    }

    ucs2::decode(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marshal_empty_string() {
        assert_eq!(marshal("").unwrap(), vec![0x1e, 0x00]);
    }

    #[test]
    fn test_unmarshal_empty_string() {
        assert_eq!(unmarshal(&[0x1e, 0x00]).unwrap(), "");
    }

    #[test]
    fn test_marshal_beavis_vector() {
        // Tag, short-form length 14, UCS-2 BE payload with terminator
        assert_eq!(
            marshal("Beavis").unwrap(),
            vec![
                0x1e, 0x0e, 0x00, 0x42, 0x00, 0x65, 0x00, 0x61, 0x00, 0x76, 0x00, 0x69, 0x00,
                0x73, 0x00, 0x00
            ]
        );
    }

    #[test]
    fn test_marshal_rejects_non_bmp() {
        assert_eq!(
            marshal("\u{1f000} East wind"),
            Err(BmpError::NonBmpCharacter('\u{1f000}'))
        );
    }

    #[test]
    fn test_short_long_form_boundary() {
        // 62 chars -> 126 payload bytes, still short form
        let short = marshal(&"t".repeat(62)).unwrap();
        assert_eq!(&short[..2], &[0x1e, 126]);
        assert_eq!(short.len(), 2 + 126);

        // 63 chars -> 128 payload bytes, flips to long form
        let long = marshal(&"t".repeat(63)).unwrap();
        assert_eq!(&long[..3], &[0x1e, 0x81, 0x80]);
        assert_eq!(long.len(), 3 + 128);
    }

    #[test]
    fn test_marshal_long_form_multi_byte() {
        // 70000 chars -> 140002 payload bytes -> 3-byte length-of-length
        let value = marshal(&"t".repeat(70_000)).unwrap();
        assert_eq!(&value[..5], &[0x1e, 0x83, 0x02, 0x22, 0xe2]);
        assert_eq!(value.len(), 5 + 140_002);
    }

    #[test]
    fn test_round_trip() {
        let inputs = [
            "",
            "Beavis",
            "short string",
            "\u{2115} - Double-struck N",
            "password with spaces and ümläuts",
            "\u{ffff}\u{0001}",
        ];
        for input in inputs {
            let value = marshal(input).unwrap();
            assert_eq!(unmarshal(&value).unwrap(), input, "input {input:?}");
        }
    }

    #[test]
    fn test_round_trip_137_char_string() {
        let input = "137 character long string - ".repeat(4) + "137 character long string";
        let value = marshal(&input).unwrap();
        // 137 chars -> 276 payload bytes -> long form [0x82, 0x01, 0x14]
        assert_eq!(&value[..4], &[0x1e, 0x82, 0x01, 0x14]);
        assert_eq!(unmarshal(&value).unwrap(), input);
    }

    #[test]
    fn test_unmarshal_empty_buffer() {
        assert_eq!(unmarshal(&[]), Err(BmpError::WrongTag));
    }

    #[test]
    fn test_unmarshal_wrong_tag() {
        // OCTET STRING tag instead of BMPString
        assert_eq!(unmarshal(&[0x04, 0x02, 0x00, 0x41]), Err(BmpError::WrongTag));
    }

    #[test]
    fn test_unmarshal_truncated_payload() {
        // Declares 4 payload bytes, only 3 present
        assert_eq!(
            unmarshal(&[0x1e, 0x04, 0x00, 0x00, 0x00]),
            Err(BmpError::Truncated {
                needed: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_unmarshal_missing_length_header() {
        assert_eq!(
            unmarshal(&[0x1e]),
            Err(BmpError::Truncated {
                needed: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_unmarshal_odd_declared_length() {
        assert_eq!(
            unmarshal(&[0x1e, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00]),
            Err(BmpError::OddPayloadLength(5))
        );
    }

    #[test]
    fn test_unmarshal_indefinite_length() {
        assert_eq!(
            unmarshal(&[0x1e, 0x80, 0x00, 0x00]),
            Err(BmpError::UnsupportedIndefiniteLength)
        );
    }

    #[test]
    fn test_unmarshal_trailing_bytes() {
        // Declares 2 payload bytes but 4 follow the header
        assert_eq!(
            unmarshal(&[0x1e, 0x02, 0x00, 0x41, 0x00, 0x42]),
            Err(BmpError::LengthMismatch {
                declared: 2,
                actual: 4
            })
        );
    }

    #[test]
    fn test_unmarshal_lone_surrogate() {
        assert_eq!(
            unmarshal(&[0x1e, 0x02, 0xd8, 0x34]),
            Err(BmpError::InvalidCodeUnit(0xd834))
        );
    }

    #[test]
    fn test_unmarshal_long_form_300_byte_payload() {
        let mut data = vec![0x1e, 0x82, 0x01, 0x2c];
        data.extend_from_slice(&[0x00; 300]);
        let text = unmarshal(&data).unwrap();
        // 150 NUL units minus the trailing terminator unit
        assert_eq!(text.chars().count(), 149);
        assert!(text.chars().all(|c| c == '\u{0}'));
    }

    #[test]
    fn test_unmarshal_long_form_declared_length_off_by_two() {
        let mut data = vec![0x1e, 0x82, 0x01, 0x2a];
        data.extend_from_slice(&[0x00; 300]);
        assert_eq!(
            unmarshal(&data),
            Err(BmpError::LengthMismatch {
                declared: 298,
                actual: 300
            })
        );
    }
}
