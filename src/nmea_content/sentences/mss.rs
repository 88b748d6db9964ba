#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Decode};

/// MSS - MSK Receiver Signal Status
///
/// Signal-to-noise ratio, signal strength, frequency and bit rate from a
/// radio-beacon receiver.
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mss_msk_receiver_signal>
///
/// ```text
///         1  2  3   4   5
///         |  |  |   |   |
///  $--MSS,x.x,x.x,x.x,x,x*hh<CR><LF>
/// ```
///
/// Field 5 was added by NMEA 2.3.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
pub struct MSS {
    /// Signal strength in dB re 1 uV/m
    pub signal_strength: Option<f32>,
    /// Signal-to-noise ratio in dB
    pub snr: Option<f32>,
    /// Beacon frequency in kHz
    pub beacon_frequency: Option<f32>,
    /// Beacon bit rate in bits per second
    pub beacon_bitrate: Option<u16>,
    #[nmea(trailing)]
    /// Channel number
    pub channel: Option<u16>,
}
