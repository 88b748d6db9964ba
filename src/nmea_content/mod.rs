//! # NMEA 0183 Sentence Content
//!
//! Everything that happens after framing: reading the talker + type code,
//! splitting the body into fields and decoding them into typed records.
//!
//! ```text
//!  $GPGGA,123519,4807.038,N,...*47
//!   ^^      ^^^^^^^^^^^^^^^^^^^^^
//!   ||      fields, decoded by the type decoder
//!   |sentence type (GGA)
//!   talker ID (GP)
//! ```

pub mod parse;
pub mod sentences;

use core::fmt;

use nom::{
    Parser,
    bytes::complete::{take, take_till},
    combinator::all_consuming,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use parse::{NmeaDate, UtcTime};
use sentences::DecodedRecord;

use crate::{Error, Fields, Result};

/// Two-character identifier of the device that emitted a sentence,
/// such as `GP` (GPS), `GL` (GLONASS) or `GN` (combined GNSS).
///
/// The talker is carried along but not interpreted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TalkerId([u8; 2]);

impl TalkerId {
    /// Creates a talker ID from its two ASCII characters.
    pub const fn new(id: [u8; 2]) -> Self {
        Self(id)
    }

    /// The talker ID as text.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for TalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! sentence_types {
    ($($(#[$meta:meta])* $variant:ident),* $(,)?) => {
        /// The sentence types this crate decodes.
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SentenceType {
            $($(#[$meta])* $variant,)*
        }

        impl SentenceType {
            /// The three-letter code of this type.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }

            /// Looks up a three-letter code, exact match only.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $(stringify!($variant) => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

sentence_types! {
    /// Global Positioning System Fix Data
    GGA,
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// GPS DOP and active satellites
    GSA,
    /// Satellites in View
    GSV,
    /// MSK Receiver Signal Status
    MSS,
    /// Recommended Minimum Navigation Information
    RMC,
    /// Track made good and Ground speed
    VTG,
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA,
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully decoded sentence: who sent it and what it says.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSentence {
    /// Talker ID of the emitting device
    pub talker: TalkerId,
    /// The decoded fields
    pub record: DecodedRecord,
}

/// Reads the talker + type code at the start of a sentence body.
///
/// The body is the text between `$` and `*`. Its first comma-separated token
/// must be exactly two talker characters followed by one of the supported
/// three-letter types. On success the returned [`Fields`] start right after
/// the code.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Error, nmea_content::{SentenceType, classify}};
///
/// let (talker, sentence_type, mut fields) = classify("GNRMC,123519,A").unwrap();
/// assert_eq!(talker.as_str(), "GN");
/// assert_eq!(sentence_type, SentenceType::RMC);
/// assert_eq!(fields.next(), Some("123519"));
///
/// assert_eq!(
///     classify("PGRME,15.0,M").unwrap_err(),
///     Error::UnsupportedSentenceType { code: "PGRME" },
/// );
/// ```
pub fn classify(body: &str) -> Result<'_, (TalkerId, SentenceType, Fields<'_>)> {
    let split: nom::IResult<&str, &str> = take_till(|c| c == ',').parse(body);
    let (rest, code) = split.unwrap_or(("", body));
    let unsupported = Error::UnsupportedSentenceType { code };

    let parts: nom::IResult<&str, (&str, &str)> =
        all_consuming((take(2u8), take(3u8))).parse(code);
    let (_, (talker, sentence_type)) = parts.map_err(|_| unsupported.clone())?;
    let sentence_type = SentenceType::from_code(sentence_type).ok_or(unsupported)?;

    let talker = TalkerId::new([talker.as_bytes()[0], talker.as_bytes()[1]]);

    Ok((talker, sentence_type, Fields::new(sentence_type, rest)))
}
