#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Decode,
    nmea_content::{
        NmeaDate, UtcTime,
        sentences::{FaaMode, NavStatus, Status},
    },
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// NMEA 4.1:
/// ```text
///         1         2 3       4 5        6  7   8   9    10 111213
///         |         | |       | |        |  |   |   |    |  | | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m,s*hh<CR><LF>
/// ```
///
/// Receivers older than NMEA 2.3 stop after field 11, so `mode` and
/// `nav_status` may be missing altogether.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
pub struct RMC {
    /// Fix time in UTC
    pub time: Option<UtcTime>,
    /// Status, A = valid, V = receiver warning
    pub status: Option<char>,
    /// Latitude, `ddmm.mmmm`
    pub latitude: Option<f64>,
    /// N or S
    pub latitude_hemisphere: Option<char>,
    /// Longitude, `dddmm.mmmm`
    pub longitude: Option<f64>,
    /// E or W
    pub longitude_hemisphere: Option<char>,
    /// Speed over ground in knots
    pub speed: Option<f32>,
    /// Course over ground in degrees true
    pub heading: Option<f32>,
    /// Fix date in UTC
    pub date: Option<NmeaDate>,
    /// Magnetic variation in degrees
    pub magnetic_variation: Option<f32>,
    /// E or W
    pub variation_direction: Option<char>,
    #[nmea(trailing)]
    /// FAA Mode Indicator
    pub mode: Option<char>,
    #[nmea(trailing)]
    /// Navigation status
    pub nav_status: Option<char>,
}

impl RMC {
    /// `true` if the receiver flagged the fix as valid.
    pub fn is_valid(&self) -> bool {
        self.status.and_then(|status| Status::try_from(status).ok()) == Some(Status::Valid)
    }

    /// Interprets [`RMC::mode`].
    pub fn faa_mode(&self) -> Option<FaaMode> {
        self.mode.and_then(|mode| FaaMode::try_from(mode).ok())
    }

    /// Interprets [`RMC::nav_status`].
    pub fn navigation_status(&self) -> Option<NavStatus> {
        self.nav_status
            .and_then(|status| NavStatus::try_from(status).ok())
    }

    /// Combines date and time, `None` if either is absent or out of range.
    #[cfg(feature = "time")]
    pub fn to_primitive_date_time(&self) -> Option<time::PrimitiveDateTime> {
        let date = self.date?.to_date()?;
        let time = self.time?.to_time()?;

        Some(time::PrimitiveDateTime::new(date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Fields, nmea_content::SentenceType};

    fn decode(rest: &str) -> crate::Result<'_, RMC> {
        RMC::decode(&mut Fields::new(SentenceType::RMC, rest))
    }

    #[test]
    fn test_rmc_parsing() {
        let rmc = decode(",123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W").unwrap();

        assert_eq!(rmc.time, Some(UtcTime(123519.0)));
        assert_eq!(rmc.status, Some('A'));
        assert!(rmc.is_valid());
        assert_eq!(rmc.latitude, Some(4807.038));
        assert_eq!(rmc.latitude_hemisphere, Some('N'));
        assert_eq!(rmc.longitude, Some(1131.0));
        assert_eq!(rmc.longitude_hemisphere, Some('E'));
        assert_eq!(rmc.speed, Some(22.4));
        assert_eq!(rmc.heading, Some(84.4));
        assert_eq!(rmc.date, Some(NmeaDate(230394)));
        assert_eq!(rmc.magnetic_variation, Some(3.1));
        assert_eq!(rmc.variation_direction, Some('W'));
        assert_eq!(rmc.mode, None);
        assert_eq!(rmc.nav_status, None);
    }

    #[test]
    fn test_rmc_revisions() {
        let cases = [
            (",A", Some('A'), None),
            (",D,", Some('D'), None),
            (",A,V", Some('A'), Some('V')),
            (",,", None, None),
        ];

        for (tail, mode, nav_status) in cases {
            let i = format!(",081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E{tail}");
            let rmc = decode(&i).unwrap();
            assert_eq!(rmc.mode, mode, "Failed: {tail:?}");
            assert_eq!(rmc.nav_status, nav_status, "Failed: {tail:?}");
        }

        let rmc = decode(",081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E,R,S").unwrap();
        assert_eq!(rmc.faa_mode(), Some(FaaMode::FixedRtk));
        assert_eq!(rmc.navigation_status(), Some(NavStatus::Simulator));
    }

    #[test]
    fn test_rmc_date_is_not_validated() {
        let rmc = decode(",123519,V,,,,,,,321399,,").unwrap();
        assert!(!rmc.is_valid());
        assert_eq!(rmc.date.map(|date| date.day()), Some(32));
        assert_eq!(rmc.date.map(|date| date.month()), Some(13));
        assert_eq!(rmc.latitude, None);
        assert_eq!(rmc.speed, None);
    }

    #[test]
    fn test_rmc_field_errors() {
        assert_eq!(
            decode(",123519,A,4807.038,N,01131.000,E,fast,084.4,230394,003.1,W"),
            Err(Error::FieldParseError {
                sentence_type: SentenceType::RMC,
                field_index: 7,
                raw_token: "fast",
            })
        );
        assert_eq!(
            decode(",123519,A,4807.038,N,01131.000,E,022.4,084.4,230394"),
            Err(Error::TruncatedSentence {
                sentence_type: SentenceType::RMC,
                expected_index: 10,
            })
        );
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_rmc_date_time() {
        let rmc = decode(",123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W").unwrap();
        let date_time = rmc.to_primitive_date_time().unwrap();

        assert_eq!(date_time.year(), 1994);
        assert_eq!(date_time.month(), time::Month::March);
        assert_eq!(date_time.day(), 23);
        assert_eq!(date_time.hour(), 12);
        assert_eq!(date_time.minute(), 35);
        assert_eq!(date_time.second(), 19);

        let rmc = decode(",123519,V,,,,,,,321399,,").unwrap();
        assert_eq!(rmc.to_primitive_date_time(), None);
    }
}
