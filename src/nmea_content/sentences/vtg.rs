#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Decode, nmea_content::sentences::FaaMode};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// The reference and unit letters are kept as sent; receivers normally
/// write `T`, `M`, `N` and `K` in that order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
pub struct VTG {
    /// Course over ground in degrees true
    pub true_course: Option<f32>,
    /// T = true
    pub true_reference: Option<char>,
    /// Course over ground in degrees magnetic
    pub magnetic_course: Option<f32>,
    /// M = magnetic
    pub magnetic_reference: Option<char>,
    /// Speed over ground in knots
    pub speed_knots: Option<f32>,
    /// N = knots
    pub speed_knots_unit: Option<char>,
    /// Speed over ground in km/h
    pub speed_kph: Option<f32>,
    /// K = kilometers per hour
    pub speed_kph_unit: Option<char>,
    #[nmea(trailing)]
    /// FAA Mode Indicator
    pub mode: Option<char>,
}

impl VTG {
    /// Interprets [`VTG::mode`].
    pub fn faa_mode(&self) -> Option<FaaMode> {
        self.mode.and_then(|mode| FaaMode::try_from(mode).ok())
    }
}
