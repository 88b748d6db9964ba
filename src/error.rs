//! # Error Types
//!
//! This module defines the error type returned by every decoding operation.
//!
//! Errors borrow the offending piece of input (an unrecognized sentence code
//! or a malformed field token) from the sentence being decoded, so no
//! allocation is needed to report them.

use nom::error::{ErrorKind, ParseError};

use crate::nmea_content::SentenceType;

/// Result of a decoding operation.
pub type Result<'a, T> = core::result::Result<T, Error<'a>>;

/// Represents all possible errors that can occur while decoding an NMEA sentence.
///
/// A decode either yields a complete record or exactly one of these errors;
/// a partially populated record is never returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error<'a> {
    /// The sentence is longer than the configured maximum length.
    ///
    /// This check runs before any other inspection of the input.
    #[error("sentence is {length} bytes long, the maximum is {max_length}")]
    OversizeSentence {
        /// Length of the rejected input in bytes
        length: usize,
        /// Configured upper bound
        max_length: usize,
    },

    /// The provided input contains non-ASCII characters.
    ///
    /// NMEA messages must be ASCII-only for proper parsing and checksum calculation.
    #[error("sentence contains non-ASCII characters")]
    NonAscii,

    /// The sentence does not start with `$`.
    #[error("sentence does not start with '$'")]
    InvalidFraming,

    /// The framing around the sentence body could not be parsed,
    /// for example a line ending that the configured mode does not allow.
    #[error("malformed sentence framing ({0:?})")]
    Malformed(ErrorKind),

    /// The sentence carries no `*hh` checksum but the decoder requires one.
    #[error("sentence has no checksum")]
    MissingChecksum,

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// `found` is `None` when the characters after `*` are not two hex digits.
    #[error("checksum mismatch: calculated {calculated:02X}, found {}", DisplayChecksum(.found))]
    ChecksumMismatch {
        /// The checksum calculated from the sentence body
        calculated: u8,
        /// The checksum carried by the sentence
        found: Option<u8>,
    },

    /// The talker + sentence type code is not one this crate decodes.
    #[error("unsupported sentence type {code:?}")]
    UnsupportedSentenceType {
        /// The code as it appears in the sentence
        code: &'a str,
    },

    /// A field was requested past the last token of the sentence.
    #[error("{sentence_type} sentence ends before field {expected_index}")]
    TruncatedSentence {
        /// Type of the sentence being decoded
        sentence_type: SentenceType,
        /// 1-based index of the missing field
        expected_index: usize,
    },

    /// A non-empty token could not be parsed as the type its position requires.
    #[error("{sentence_type} field {field_index} has invalid value {raw_token:?}")]
    FieldParseError {
        /// Type of the sentence being decoded
        sentence_type: SentenceType,
        /// 1-based index of the offending field
        field_index: usize,
        /// The token exactly as it appears in the sentence
        raw_token: &'a str,
    },
}

struct DisplayChecksum<'c>(&'c Option<u8>);

impl core::fmt::Display for DisplayChecksum<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(cc) => write!(f, "{cc:02X}"),
            None => f.write_str("an unreadable value"),
        }
    }
}

impl<'a> ParseError<&'a str> for Error<'a> {
    fn from_error_kind(_: &'a str, kind: ErrorKind) -> Self {
        Error::Malformed(kind)
    }

    fn append(_: &'a str, _: ErrorKind, other: Self) -> Self {
        other
    }
}
