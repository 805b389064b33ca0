//! ASN.1 DER BMPString codec for PKCS#12 (RFC 7292)
//!
//! PKCS#12 archives store passwords and friendly names as the ASN.1
//! `BMPString` type: big-endian UCS-2 code units wrapped in a DER
//! Tag-Length-Value triplet. This crate converts between Rust strings and
//! that wire form, in both directions, and nothing more — the surrounding
//! PKCS#12 structure (bags, MACs, encryption envelopes) is the caller's
//! business. A structure parser slices the tag+length+payload byte range
//! out of the larger document and hands exactly that range to
//! [`unmarshal`]; a structure builder embeds the [`marshal`] output
//! verbatim.
//!
//! # Wire Format
//!
//! ```text
//! [Tag]     1 byte        0x1e, universal primitive tag 30
//! [Length]  1-5 bytes     DER short or long form, see `der`
//! [Payload] even length   UCS-2 BE code units; non-empty text carries a
//!                         trailing 0x0000 terminator pair, empty text
//!                         encodes to zero payload bytes
//! ```
//!
//! Only Basic Multilingual Plane text (every codepoint <= U+FFFF) is
//! representable; surrogate pairs are not part of this encoding.
//!
//! # Usage Example
//!
//! ```rust
//! use pkcs12_bmpstring::{marshal, unmarshal};
//!
//! let value = marshal("Beavis")?;
//! assert_eq!(value[0], 0x1e);
//! assert_eq!(unmarshal(&value)?, "Beavis");
//! # Ok::<(), pkcs12_bmpstring::BmpError>(())
//! ```
//!
//! All operations are pure functions over caller-owned buffers: no shared
//! state, no I/O, safe to call from any number of threads.

pub mod bmp_string;
pub mod der;
pub mod error;
pub mod ucs2;

pub use bmp_string::{BMP_STRING_TAG, marshal, unmarshal};
pub use der::DerLength;
pub use error::{BmpError, BmpResult};
