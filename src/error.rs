use thiserror::Error;

/// Main error type for BMPString codec operations
///
/// Every encode/decode function returns exactly one of these kinds; nothing
/// is retried or corrected internally. The caller (typically a PKCS#12
/// structure parser or builder) decides whether to abort or report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BmpError {
    /// Encode-time: a codepoint above U+FFFF cannot be represented as a
    /// single UCS-2 unit, and BMPString disallows surrogate-pair splitting.
    #[error("character U+{:04X} is outside the Basic Multilingual Plane", u32::from(*.0))]
    NonBmpCharacter(char),

    /// Decode-time: buffer is empty or its leading byte is not the
    /// BMPString tag (0x1e).
    #[error("leading byte is not the BMPString tag (0x1e)")]
    WrongTag,

    /// Decode-time: buffer ends before the length header or the declared
    /// payload is fully present.
    #[error("truncated buffer: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    /// Decode-time: length-of-length byte of zero signals BER
    /// indefinite-length encoding, which DER forbids.
    #[error("indefinite-length encoding is not supported (DER requires definite lengths)")]
    UnsupportedIndefiniteLength,

    /// Decode-time: a long-form length header declares more length bytes
    /// than the platform size type can hold.
    #[error("length-of-length {0} exceeds the platform size type")]
    LengthOverflow(usize),

    /// Payload byte count is not a multiple of 2 (UCS-2 requires whole
    /// 16-bit units).
    #[error("payload length {0} is odd, UCS-2 requires whole 16-bit units")]
    OddPayloadLength(usize),

    /// Decode-time: bytes remaining after the header do not match the
    /// declared payload length.
    #[error("declared payload length {declared} but {actual} bytes follow the header")]
    LengthMismatch { declared: usize, actual: usize },

    /// Decode-time: a lone surrogate code unit (0xd800-0xdfff) appears in
    /// the payload.
    #[error("lone surrogate code unit 0x{0:04x} in UCS-2 payload")]
    InvalidCodeUnit(u16),
}

/// Result type alias for BMPString codec operations
pub type BmpResult<T> = Result<T, BmpError>;
