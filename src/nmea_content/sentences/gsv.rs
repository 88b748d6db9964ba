use nom::{Parser, combinator::all_consuming, number::complete::hex_u32};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Decode, FromField, Fields, Result, nmea_content::sentences::Satellite};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Fields 4 to 7 describe one satellite and repeat for up to four
/// satellites. NMEA 4.11 appends a single signal ID after the last group.
///
/// One GSV sentence is only part of a group; [`GsvAccumulator`] merges a
/// whole group into a single list.
///
/// [`GsvAccumulator`]: crate::GsvAccumulator
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    /// Total number of GSV sentences to be transmitted in this group
    pub total_messages: Option<u8>,
    /// Sentence number of this GSV message within current group
    pub message_number: Option<u8>,
    /// Total number of satellites in view
    pub satellites_in_view: Option<u8>,
    /// Satellites carried by this sentence
    pub satellites: heapless::Vec<Satellite, 4>,
    /// NMEA 4.11 Signal ID
    pub signal_id: Option<u8>,
}

impl Decode for GSV {
    fn decode<'a>(fields: &mut Fields<'a>) -> Result<'a, Self> {
        let total_messages = fields.decode()?;
        let message_number = fields.decode()?;
        let satellites_in_view = fields.decode()?;

        let mut satellites = heapless::Vec::new();
        let mut signal_id = None;

        while let Some(token) = fields.next() {
            if fields.is_exhausted() {
                signal_id = fields.parse_token::<Option<Hex>>(token)?.map(|Hex(id)| id);
                break;
            }

            if satellites.is_full() {
                break;
            }

            let satellite = Satellite {
                id: fields.parse_token(token)?,
                elevation: fields.decode()?,
                azimuth: fields.decode()?,
                snr: fields.decode()?,
            };

            // all four fields empty is padding
            if satellite != Satellite::default() {
                let _ = satellites.push(satellite);
            }
        }

        Ok(GSV {
            total_messages,
            message_number,
            satellites_in_view,
            satellites,
            signal_id,
        })
    }
}

/// One or two hexadecimal digits.
struct Hex(u8);

impl FromField for Hex {
    fn from_field(token: &str) -> Option<Self> {
        if token.len() > 2 {
            return None;
        }

        let parsed: nom::IResult<&str, u32> = all_consuming(hex_u32).parse(token);
        parsed.ok().map(|(_, id)| Hex(id as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, nmea_content::SentenceType};

    fn decode(rest: &str) -> crate::Result<'_, GSV> {
        GSV::decode(&mut Fields::new(SentenceType::GSV, rest))
    }

    #[test]
    fn test_gsv_parsing() {
        let cases = [
            ",1,1,00",
            ",1,1,00,",
            ",1,1,00,F",
            ",1,1,01,05,45,120,38",
            ",1,1,01,05,45,120,38,",
            ",1,1,04,01,60,150,45,02,30,090,30,03,70,270,50,04,10,010,20",
            ",1,1,04,01,60,150,45,02,30,090,30,03,70,270,50,04,10,010,20,1",
            ",1,1,01,05,45,120,,",
            ",1,1,01,06,30,,40,",
            ",1,1,01,07,,070,35,",
            ",1,1,01,08,,,30,",
            ",1,1,01,09,,180,,",
            ",1,1,01,10,50,,,",
            ",1,1,01,11,,,,",
            ",1,1,03,01,60,150,45,02,30,,30,03,,270,,",
        ];

        for &input in &cases {
            let result = decode(input);
            assert!(result.is_ok(), "Failed: {input:?}\n\t{result:?}");
        }

        let cases = [
            (",1,1,01,05,45", 6),
            (",1,1,01,05,45,120", 7),
            (",1,1,02,05,45,120,38,06,10", 10),
            (",1", 2),
        ];

        for (input, expected_index) in cases {
            assert_eq!(
                decode(input),
                Err(Error::TruncatedSentence {
                    sentence_type: SentenceType::GSV,
                    expected_index,
                }),
                "Failed: {input:?}"
            );
        }
    }

    #[test]
    fn test_gsv_fields() {
        let gsv = decode(",3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00").unwrap();

        assert_eq!(gsv.total_messages, Some(3));
        assert_eq!(gsv.message_number, Some(1));
        assert_eq!(gsv.satellites_in_view, Some(11));
        assert_eq!(gsv.satellites.len(), 4);
        assert_eq!(
            gsv.satellites[1],
            Satellite {
                id: Some(4),
                elevation: Some(15),
                azimuth: Some(270),
                snr: Some(0),
            }
        );
        assert_eq!(gsv.signal_id, None);

        let gsv = decode(",3,3,11,22,42,067,42,24,14,311,43,27,05,244,00,,,,").unwrap();
        assert_eq!(gsv.satellites.len(), 3);
        assert_eq!(gsv.satellites[2].id, Some(27));

        let gsv = decode(",1,1,01,09,,180,").unwrap();
        assert_eq!(
            gsv.satellites.as_slice(),
            &[Satellite {
                id: Some(9),
                elevation: None,
                azimuth: Some(180),
                snr: None,
            }]
        );
    }

    #[test]
    fn test_gsv_signal_id() {
        assert_eq!(decode(",1,1,00,F").unwrap().signal_id, Some(0x0F));
        assert_eq!(decode(",1,1,01,05,45,120,38,7").unwrap().signal_id, Some(7));
        assert_eq!(decode(",1,1,01,05,45,120,38,").unwrap().signal_id, None);
        assert_eq!(
            decode(",1,1,01,05,45,120,38,G"),
            Err(Error::FieldParseError {
                sentence_type: SentenceType::GSV,
                field_index: 8,
                raw_token: "G",
            })
        );
    }

    #[test]
    fn test_gsv_empty_header_is_absent() {
        let gsv = decode(",,1,04,01,60,150,45").unwrap();
        assert_eq!(gsv.total_messages, None);
        assert_eq!(gsv.message_number, Some(1));
        assert_eq!(gsv.satellites_in_view, Some(4));
        assert_eq!(gsv.satellites.len(), 1);

        let gsv = decode(",,,").unwrap();
        assert_eq!(
            (gsv.total_messages, gsv.message_number, gsv.satellites_in_view),
            (None, None, None)
        );
        assert!(gsv.satellites.is_empty());

        assert_eq!(
            decode(",x,1,04"),
            Err(Error::FieldParseError {
                sentence_type: SentenceType::GSV,
                field_index: 1,
                raw_token: "x",
            })
        );
    }
}
