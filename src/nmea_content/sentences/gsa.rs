#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Decode, Fields, Result,
    nmea_content::sentences::{FixMode, SelectionMode, SystemId},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         |  |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// NMEA 4.11:
/// ```text
///         1 2 3                        14 15  16  17  18
///         | | |                         |  |   |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x,h*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
pub struct GSA {
    /// Selection mode, A = automatic, M = manual
    pub mode: Option<char>,
    /// Fix type, 1 = no fix, 2 = 2D, 3 = 3D
    pub fix_type: Option<u8>,
    #[nmea(with(satellite_slots))]
    /// IDs of the satellites used for the fix, in slot order
    pub satellites: heapless::Vec<u8, 12>,
    /// Position Dilution of Precision
    pub pdop: Option<f32>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Vertical Dilution of Precision
    pub vdop: Option<f32>,
    #[nmea(trailing)]
    /// NMEA 4.11 System ID
    pub system_id: Option<u8>,
}

impl GSA {
    /// Interprets [`GSA::mode`].
    pub fn selection_mode(&self) -> Option<SelectionMode> {
        self.mode.and_then(|mode| SelectionMode::try_from(mode).ok())
    }

    /// Interprets [`GSA::fix_type`].
    pub fn fix_mode(&self) -> Option<FixMode> {
        self.fix_type
            .and_then(|fix_type| FixMode::try_from(fix_type).ok())
    }

    /// Interprets [`GSA::system_id`].
    pub fn system(&self) -> Option<SystemId> {
        self.system_id.and_then(|id| SystemId::try_from(id).ok())
    }
}

/// Reads the twelve satellite slots, keeping the IDs of the occupied ones.
///
/// Empty slots and slots holding zero are unused.
fn satellite_slots<'a>(fields: &mut Fields<'a>) -> Result<'a, heapless::Vec<u8, 12>> {
    let mut satellites = heapless::Vec::new();

    for _ in 0..12 {
        if let Some(id) = fields.decode::<Option<u8>>()?.filter(|&id| id != 0) {
            // at most one push per slot
            let _ = satellites.push(id);
        }
    }

    Ok(satellites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, nmea_content::SentenceType};

    fn decode(rest: &str) -> crate::Result<'_, GSA> {
        GSA::decode(&mut Fields::new(SentenceType::GSA, rest))
    }

    #[test]
    fn test_gsa_parsing() {
        let cases = [
            ",A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1",
            ",A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1,1",
            ",M,1,,,,,,,,,,,,,,,",
            ",,,,,,,,,,,,,,,,,",
            ",A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.0,1.0,1.0,",
        ];

        for &input in &cases {
            let result = decode(input);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");
        }

        let cases = [
            ",A,3,04,05,,09,12,,,24,,,,,2.5,1.3",
            ",A,3,04,05,,09,12,,,24,,,,",
            ",A,3",
        ];

        for &input in &cases {
            let result = decode(input);
            assert!(
                matches!(result, Err(Error::TruncatedSentence { .. })),
                "Failed: {input:?}\n\t{result:?}"
            );
        }
    }

    #[test]
    fn test_gsa_sparse_slots() {
        let gsa = decode(",A,3,,19,,,00,28,,,,,14,,1.8,1.0,1.5").unwrap();

        assert_eq!(gsa.mode, Some('A'));
        assert_eq!(gsa.selection_mode(), Some(SelectionMode::Automatic));
        assert_eq!(gsa.fix_type, Some(3));
        assert_eq!(gsa.fix_mode(), Some(FixMode::Fix3D));
        assert_eq!(gsa.satellites.as_slice(), &[19, 28, 14]);
        assert_eq!(gsa.pdop, Some(1.8));
        assert_eq!(gsa.hdop, Some(1.0));
        assert_eq!(gsa.vdop, Some(1.5));
        assert_eq!(gsa.system_id, None);
    }

    #[test]
    fn test_gsa_system_id() {
        let gsa = decode(",A,3,65,66,,,,,,,,,,,1.8,1.0,1.5,2").unwrap();
        assert_eq!(gsa.satellites.as_slice(), &[65, 66]);
        assert_eq!(gsa.system(), Some(SystemId::Glonass));
    }

    #[test]
    fn test_gsa_bad_slot() {
        assert_eq!(
            decode(",A,3,04,x5,,09,12,,,24,,,,,2.5,1.3,2.1"),
            Err(Error::FieldParseError {
                sentence_type: SentenceType::GSA,
                field_index: 4,
                raw_token: "x5",
            })
        );
    }
}
