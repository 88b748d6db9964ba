//! # NMEA 0183 Decoder
//!
//! This library decodes the NMEA 0183 sentences emitted by GPS receivers:
//! `$HHHHH,D1,D2,...,Dn*CC\r\n`
//!
//! Each call takes one complete sentence and returns either a typed record or
//! a single [`Error`]:
//! - framing and the `*CC` checksum are validated before any field is read,
//! - the talker + type code selects one of the GGA, GLL, GSA, GSV, MSS, RMC,
//!   VTG and ZDA decoders,
//! - fields are positional, so an empty field is reported as absent and
//!   never shifts the fields after it.
//!
//! Multi-sentence GSV groups are merged by a caller-owned [`GsvAccumulator`].
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{ChecksumMode, Decoder, GsvAccumulator, nmea_content::sentences::DecodedRecord};
//!
//! let decoder = Decoder::builder()
//!     .checksum_mode(ChecksumMode::Required)
//!     .build();
//! let mut accumulator = GsvAccumulator::new();
//!
//! let sentence = decoder
//!     .decode("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A")
//!     .unwrap();
//!
//! if let DecodedRecord::RMC(rmc) = &sentence.record {
//!     assert!(rmc.is_valid());
//!     assert_eq!(rmc.speed, Some(22.4));
//! }
//! assert_eq!(accumulator.observe(&sentence), None);
//! ```

pub mod accumulator;
pub mod error;
mod nmea0183;
pub mod nmea_content;
mod parse;

pub use accumulator::{GsvAccumulator, GsvSession, SatelliteView};
pub use error::{Error, Result};
pub use nmea0183::*;
pub use nmea0183_decoder_derive::Decode;
pub use parse::{Decode, Fields, FromField};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
