//! # NMEA 0183 Sentence Framing
//!
//! This module handles everything around the sentence body:
//! `$HHHHH,D1,D2,...,Dn*CC\r\n`
//!
//! Before a single field is looked at, the decoder:
//! - rejects inputs longer than the configured maximum length,
//! - rejects non-ASCII input and input that does not start with `$`,
//! - checks the line ending against the configured [`LineEndingMode`],
//! - validates the `*CC` checksum whenever one is present.
//!
//! Only then is the body handed to the sentence classifier and the matching
//! type decoder.

use nom::{
    Parser,
    branch::alt,
    bytes::complete::{tag, take_until},
    character::complete::{char, hex_digit1},
    combinator::{all_consuming, opt, rest, verify},
    error::ErrorKind,
    number::complete::hex_u32,
    sequence::preceded,
};

use crate::{
    Error, Result,
    nmea_content::{self, DecodedSentence, sentences::DecodedRecord},
};

type IResult<'a, O> = nom::IResult<&'a str, O, Error<'a>>;

/// Maximum sentence length allowed by NMEA 0183, including `$` and `\r\n`.
pub const DEFAULT_MAX_LENGTH: usize = 82;

/// Defines how the decoder should handle sentences without a checksum.
///
/// A checksum that *is* present is validated in every mode; there is no way
/// to decode a sentence whose checksum does not match its body.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    /// Checksum is required and must be present.
    ///
    /// Sentences without `*CC` are rejected with [`Error::MissingChecksum`].
    /// Use this mode for strict NMEA 0183 compliance.
    Required,

    #[default]
    /// Checksum is optional but will be validated if present.
    ///
    /// Use this mode when working with mixed sources or legacy equipment
    /// that may not always include checksums.
    Optional,
}

/// Defines how the decoder should handle CRLF line endings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    /// The sentence must end with `\r\n`.
    ///
    /// Use this mode when decoding raw serial port data or NMEA log files.
    Required,

    #[default]
    /// A single trailing `\r\n` is accepted but not required.
    Optional,

    /// The sentence must not contain `\r\n`.
    ///
    /// Use this mode when sentences come from APIs, databases, or other
    /// sources where line endings have been removed.
    Forbidden,
}

/// Outcome of comparing a sentence's `*CC` field with the XOR of its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumStatus {
    /// The checksum is present and matches the body.
    Valid,
    /// The checksum is present but does not match the body.
    Mismatch {
        /// The checksum calculated from the body
        calculated: u8,
        /// The checksum carried by the sentence, `None` when it is not two hex digits
        found: Option<u8>,
    },
    /// The sentence carries no `*` checksum delimiter.
    Absent,
}

/// Calculates the NMEA 0183 checksum for the given sentence body.
///
/// The checksum is the XOR of every byte between the `$` prefix and the `*`
/// delimiter, excluding both.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(body: &str) -> u8 {
    body.as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Validates the checksum of a raw sentence.
///
/// The leading `$` and a trailing `\r\n` are not part of the checksummed
/// body. The two characters after `*` must be the uppercase hexadecimal
/// rendering of the checksum; anything else is a mismatch.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{ChecksumStatus, validate_checksum};
///
/// assert_eq!(
///     validate_checksum("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A"),
///     ChecksumStatus::Valid,
/// );
/// assert_eq!(validate_checksum("$GPGGA,123456,data"), ChecksumStatus::Absent);
/// assert_eq!(
///     validate_checksum("$GPGGA,123456,data*40"),
///     ChecksumStatus::Mismatch { calculated: 0x41, found: Some(0x40) },
/// );
/// ```
pub fn validate_checksum(sentence: &str) -> ChecksumStatus {
    let sentence = sentence.strip_prefix('$').unwrap_or(sentence);
    let sentence = sentence.strip_suffix("\r\n").unwrap_or(sentence);
    let (body, cc) = split_checksum(sentence);

    checksum_status(body, cc)
}

/// Splits `body*CC` into the body and the text following `*`.
fn split_checksum(i: &str) -> (&str, Option<&str>) {
    let split: nom::IResult<&str, (&str, Option<&str>)> =
        (alt((take_until("*"), rest)), opt(preceded(char('*'), rest))).parse(i);

    match split {
        Ok((_, parts)) => parts,
        Err(_) => (i, None),
    }
}

fn checksum_status(body: &str, cc: Option<&str>) -> ChecksumStatus {
    let Some(cc) = cc else {
        return ChecksumStatus::Absent;
    };

    let calculated = checksum(body);
    let found = checksum_digits(cc);

    if found == Some(calculated) {
        ChecksumStatus::Valid
    } else {
        ChecksumStatus::Mismatch { calculated, found }
    }
}

/// Reads exactly two uppercase hex digits.
fn checksum_digits(cc: &str) -> Option<u8> {
    let digits: nom::IResult<&str, &str> = all_consuming(verify(hex_digit1, |digits: &str| {
        digits.len() == 2 && !digits.bytes().any(|byte| byte.is_ascii_lowercase())
    }))
    .parse(cc);
    let (_, digits) = digits.ok()?;
    let value: nom::IResult<&str, u32> = hex_u32(digits);

    value.ok().map(|(_, value)| value as u8)
}

/// Strips the line ending according to the configured mode.
///
/// Returns the sentence without its `\r\n`, which must be the very last
/// two characters when present. A lone trailing `\r` or `\n` is malformed.
fn line_ending<'a>(mode: LineEndingMode) -> impl Fn(&'a str) -> IResult<'a, &'a str> {
    move |i: &'a str| {
        let crlf_error = || nom::Err::Error(Error::Malformed(ErrorKind::CrLf));
        let (tail, data) = opt(take_until::<_, _, Error<'a>>("\r\n")).parse(i)?;

        match (mode, data) {
            (LineEndingMode::Required, None) | (LineEndingMode::Forbidden, Some(_)) => {
                Err(crlf_error())
            }
            (_, Some(data)) => {
                let _: (&str, &str) = all_consuming(tag("\r\n"))
                    .parse(tail)
                    .map_err(|_: nom::Err<Error<'a>>| crlf_error())?;
                Ok(("", data))
            }
            (_, None) if i.ends_with(['\r', '\n']) => Err(crlf_error()),
            (_, None) => Ok(("", i)),
        }
    }
}

/// Configures and creates a [`Decoder`].
///
/// The default settings are:
/// - Checksum mode: [`ChecksumMode::Optional`]
/// - Line ending mode: [`LineEndingMode::Optional`]
/// - Maximum length: [`DEFAULT_MAX_LENGTH`]
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{ChecksumMode, DecoderBuilder, Error, LineEndingMode};
///
/// let strict = DecoderBuilder::new()
///     .checksum_mode(ChecksumMode::Required)
///     .line_ending_mode(LineEndingMode::Required)
///     .build();
///
/// assert!(strict.decode("$GPZDA,201530.00,04,07,2002,00,00*60\r\n").is_ok());
/// assert!(strict.decode("$GPZDA,201530.00,04,07,2002,00,00*60").is_err()); // (missing CRLF)
/// assert_eq!(
///     strict.decode("$GPZDA,201530.00,04,07,2002,00,00\r\n"),
///     Err(Error::MissingChecksum),
/// );
///
/// let lenient = DecoderBuilder::new()
///     .line_ending_mode(LineEndingMode::Forbidden)
///     .build();
///
/// assert!(lenient.decode("$GPZDA,201530.00,04,07,2002,00,00").is_ok());
/// assert!(lenient.decode("$GPZDA,201530.00,04,07,2002,00,00*61").is_err()); // (bad checksum)
/// ```
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct DecoderBuilder {
    /// Checksum mode for the decoder.
    checksum_mode: ChecksumMode,

    /// Line ending mode for the decoder.
    line_ending_mode: LineEndingMode,

    /// Longest accepted input, in bytes.
    max_length: usize,
}

impl DecoderBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        DecoderBuilder {
            checksum_mode: ChecksumMode::default(),
            line_ending_mode: LineEndingMode::default(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Sets the checksum mode.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    /// Sets the line ending mode.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Sets the longest accepted input in bytes, counting `$` and any `\r\n`.
    ///
    /// Longer inputs are rejected with [`Error::OversizeSentence`].
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Builds the decoder with the configured settings.
    pub fn build(self) -> Decoder {
        Decoder {
            checksum_mode: self.checksum_mode,
            line_ending_mode: self.line_ending_mode,
            max_length: self.max_length,
        }
    }
}

impl Default for DecoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes complete NMEA 0183 sentences into [`DecodedSentence`] records.
///
/// A `Decoder` holds configuration only. Decoding is a pure computation over
/// the input, so one decoder can be shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    checksum_mode: ChecksumMode,
    line_ending_mode: LineEndingMode,
    max_length: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        DecoderBuilder::new().build()
    }
}

impl Decoder {
    /// Returns a builder for a custom decoder.
    pub fn builder() -> DecoderBuilder {
        DecoderBuilder::new()
    }

    /// Decodes one complete sentence.
    ///
    /// The checks run in this order: length, ASCII, `$`, line ending,
    /// checksum, sentence type, fields. The first failure is returned and
    /// no record is produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_decoder::{Decoder, nmea_content::sentences::DecodedRecord};
    ///
    /// let decoder = Decoder::default();
    /// let sentence = decoder
    ///     .decode("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47")
    ///     .unwrap();
    ///
    /// assert_eq!(sentence.talker.as_str(), "GP");
    /// match sentence.record {
    ///     DecodedRecord::GGA(gga) => {
    ///         assert_eq!(gga.latitude, Some(4807.038));
    ///         assert_eq!(gga.latitude_hemisphere, Some('N'));
    ///         assert_eq!(gga.satellites_used, Some(8));
    ///         assert_eq!(gga.geoid_height, Some(46.9));
    ///         assert_eq!(gga.age, None);
    ///     }
    ///     other => panic!("unexpected record {other:?}"),
    /// }
    /// ```
    pub fn decode<'a>(&self, sentence: &'a str) -> Result<'a, DecodedSentence> {
        let decoded = self.decode_sentence(sentence);

        if let Err(err) = &decoded {
            log::debug!("rejected sentence {sentence:?}: {err}");
        }

        decoded
    }

    fn decode_sentence<'a>(&self, sentence: &'a str) -> Result<'a, DecodedSentence> {
        if sentence.len() > self.max_length {
            return Err(Error::OversizeSentence {
                length: sentence.len(),
                max_length: self.max_length,
            });
        }

        if !sentence.is_ascii() {
            return Err(Error::NonAscii);
        }

        let (i, _) = char::<&str, Error<'a>>('$')
            .parse(sentence)
            .map_err(|_| Error::InvalidFraming)?;
        let (_, data) = line_ending(self.line_ending_mode)
            .parse(i)
            .map_err(|err| match err {
                nom::Err::Error(err) | nom::Err::Failure(err) => err,
                nom::Err::Incomplete(_) => Error::Malformed(ErrorKind::Complete),
            })?;

        let (body, cc) = split_checksum(data);
        match checksum_status(body, cc) {
            ChecksumStatus::Valid => {}
            ChecksumStatus::Absent if self.checksum_mode == ChecksumMode::Optional => {}
            ChecksumStatus::Absent => return Err(Error::MissingChecksum),
            ChecksumStatus::Mismatch { calculated, found } => {
                return Err(Error::ChecksumMismatch { calculated, found });
            }
        }

        let (talker, sentence_type, mut fields) = nmea_content::classify(body)?;
        log::trace!("decoding {sentence_type} sentence from talker {talker}");

        let record = DecodedRecord::decode(sentence_type, &mut fields)?;

        Ok(DecodedSentence { talker, record })
    }
}

/// Decodes one sentence with the default [`Decoder`] settings.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Error, decode};
///
/// assert!(decode("$GPZDA,201530.00,04,07,2002,00,00*60").is_ok());
/// assert_eq!(
///     decode("$GPXYZ,1,2,3"),
///     Err(Error::UnsupportedSentenceType { code: "GPXYZ" }),
/// );
/// ```
pub fn decode(sentence: &str) -> Result<'_, DecodedSentence> {
    Decoder::default().decode(sentence)
}
