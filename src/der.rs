//! DER length octets (ITU-T X.690 §8.1.3)
//!
//! A DER length header takes one of two forms, distinguished by the top bit
//! of the first byte:
//!
//! Short form (lengths 0-127):
//! ```text
//! Byte: 0 L L L L L L L
//! ```
//!
//! Long form (lengths >= 128):
//! ```text
//! First byte:      1 N N N N N N N  (N = number of length bytes, >= 1)
//! Following bytes: big-endian length value, no leading zero byte
//! ```
//!
//! A first byte of `0x80` (N = 0) signals BER indefinite-length encoding,
//! which DER forbids; decoding rejects it. There is no upper bound on N
//! other than what `usize` can hold, so a 4-byte length-of-length decodes
//! fine on every supported platform.

use crate::error::{BmpError, BmpResult};

/// DER length header
///
/// Lengths below 128 use the short form; everything else uses the long
/// form with a minimal big-endian byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerLength {
    /// Short form: length 0-127
    Short(u8),
    /// Long form: length >= 128, encoded with length-of-length
    Long(usize),
}

impl DerLength {
    /// Create a length header for a payload of `length` bytes
    ///
    /// Automatically chooses short or long form.
    pub fn new(length: usize) -> Self {
        if length < 128 {
            DerLength::Short(length as u8)
        } else {
            DerLength::Long(length)
        }
    }

    /// Get the payload length this header declares
    pub fn value(&self) -> usize {
        match self {
            DerLength::Short(l) => *l as usize,
            DerLength::Long(l) => *l,
        }
    }

    /// Encode the length header to bytes
    ///
    /// Short form produces a single byte equal to the length. Long form
    /// produces `0x80 | n` followed by the `n` big-endian bytes of the
    /// length, with no leading zero byte.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            DerLength::Short(length) => vec![*length],
            DerLength::Long(length) => {
                // Minimal number of bytes for the value (>= 1 since
                // long form only holds lengths >= 128)
                let mut num_bytes = 0;
                let mut temp = *length;
                while temp > 0 {
                    num_bytes += 1;
                    temp >>= 8;
                }

                let mut result = Vec::with_capacity(1 + num_bytes);
                result.push(0x80 | num_bytes as u8);
                for i in (0..num_bytes).rev() {
                    result.push((*length >> (i * 8)) as u8);
                }
                result
            }
        }
    }

    /// Decode a length header from the front of `data`
    ///
    /// # Returns
    /// Returns `Ok((DerLength, bytes_consumed))` where `bytes_consumed` is
    /// the header size (1 for short form, `1 + n` for long form).
    ///
    /// # Error Handling
    /// Returns error if:
    /// - `data` ends before the header is complete (`Truncated`)
    /// - the length-of-length byte is zero (`UnsupportedIndefiniteLength`)
    /// - the declared length cannot fit in `usize` (`LengthOverflow`)
    pub fn decode(data: &[u8]) -> BmpResult<(Self, usize)> {
        let Some(&first) = data.first() else {
            return Err(BmpError::Truncated {
                needed: 1,
                available: 0,
            });
        };

        if first & 0x80 == 0 {
            // Short form: the byte is the length
            return Ok((DerLength::Short(first), 1));
        }

        // Long form: bits 6-0 give the number of length bytes
        let num_bytes = (first & 0x7f) as usize;
        if num_bytes == 0 {
            return Err(BmpError::UnsupportedIndefiniteLength);
        }
        if num_bytes > size_of::<usize>() {
            return Err(BmpError::LengthOverflow(num_bytes));
        }

        let rest = &data[1..];
        if rest.len() < num_bytes {
            return Err(BmpError::Truncated {
                needed: num_bytes,
                available: rest.len(),
            });
        }

        let mut length = 0usize;
        for &byte in &rest[..num_bytes] {
            length = (length << 8) | byte as usize;
        }

        Ok((DerLength::Long(length), 1 + num_bytes))
    }
}
