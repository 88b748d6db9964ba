#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Decode,
    nmea_content::{UtcTime, sentences::Quality},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
pub struct GGA {
    /// Fix time in UTC
    pub time: Option<UtcTime>,
    /// Latitude, `ddmm.mmmm`
    pub latitude: Option<f64>,
    /// N or S
    pub latitude_hemisphere: Option<char>,
    /// Longitude, `dddmm.mmmm`
    pub longitude: Option<f64>,
    /// E or W
    pub longitude_hemisphere: Option<char>,
    /// GPS Quality Indicator, see [`GGA::quality`]
    pub fix_quality: Option<u8>,
    /// Number of satellites in use
    pub satellites_used: Option<u8>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Antenna altitude above/below mean sea level (geoid)
    pub altitude: Option<f32>,
    /// Units of antenna altitude, normally M (meters)
    pub altitude_unit: Option<char>,
    /// Geoidal separation, the difference between the WGS-84 earth ellipsoid and mean sea level (geoid),
    /// negative values indicate that the geoid is below the ellipsoid
    pub geoid_height: Option<f32>,
    /// Units of geoidal separation, normally M (meters)
    pub geoid_unit: Option<char>,
    /// Age of Differential GPS data in seconds, null field when DGPS is not used
    pub age: Option<f32>,
    /// Differential reference station ID
    pub station_id: Option<u16>,
}

impl GGA {
    /// Interprets [`GGA::fix_quality`], `None` when absent or undefined.
    pub fn quality(&self) -> Option<Quality> {
        self.fix_quality.and_then(|quality| Quality::try_from(quality).ok())
    }
}
