#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Decode,
    nmea_content::{
        UtcTime,
        sentences::{FaaMode, Status},
    },
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
pub struct GLL {
    /// Latitude, `ddmm.mmmm`
    pub latitude: Option<f64>,
    /// N or S
    pub latitude_hemisphere: Option<char>,
    /// Longitude, `dddmm.mmmm`
    pub longitude: Option<f64>,
    /// E or W
    pub longitude_hemisphere: Option<char>,
    /// Fix time in UTC
    pub time: Option<UtcTime>,
    /// Status, A = valid, V = invalid
    pub status: Option<char>,
    #[nmea(trailing)]
    /// FAA Mode Indicator, NMEA 2.3 and later
    pub mode: Option<char>,
}

impl GLL {
    /// `true` if the receiver flagged the position as valid.
    pub fn is_valid(&self) -> bool {
        self.status.and_then(|status| Status::try_from(status).ok()) == Some(Status::Valid)
    }

    /// Interprets [`GLL::mode`].
    pub fn faa_mode(&self) -> Option<FaaMode> {
        self.mode.and_then(|mode| FaaMode::try_from(mode).ok())
    }
}
