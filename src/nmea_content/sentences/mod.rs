mod gga;
mod gll;
mod gsa;
mod gsv;
mod mss;
mod rmc;
mod vtg;
mod zda;

pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use gsv::GSV;
pub use mss::MSS;
pub use rmc::RMC;
pub use vtg::VTG;
pub use zda::ZDA;

use crate::{Decode, Fields, Result, nmea_content::SentenceType};

/// A decoded sentence body, one variant per supported sentence type.
///
/// Each variant wraps a record holding exactly the fields its sentence type
/// carries. Every field keeps the value the receiver sent:
/// - an empty field is `None`, never zero,
/// - single-character indicators (hemispheres, status, units, modes) are
///   stored verbatim, including characters NMEA does not define,
/// - coordinates stay `(magnitude, hemisphere)` pairs in `ddmm.mmmm` form.
///
/// Interpretation is left to the caller, helped by accessors such as
/// [`GGA::quality`] or [`RMC::is_valid`].
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                                           | Description                      |
/// |--------------|---------------------------------------------------------|----------------------------------|
/// | GGA([`GGA`]) | Global Positioning System Fix Data                      | GPS position and fix quality     |
/// | GLL([`GLL`]) | Geographic Position - Latitude/Longitude                | Latitude/longitude with time     |
/// | GSA([`GSA`]) | GPS DOP and active satellites                           | Satellite constellation info     |
/// | GSV([`GSV`]) | Satellites in View                                      | Individual satellite details     |
/// | MSS([`MSS`]) | MSK Receiver Signal Status                              | Radio-beacon signal quality      |
/// | RMC([`RMC`]) | Recommended Minimum Navigation Information              | Essential navigation data        |
/// | VTG([`VTG`]) | Track made good and Ground speed                        | Velocity information             |
/// | ZDA([`ZDA`]) | Time & Date - UTC, day, month, year and local time zone | UTC time and date with time zone |
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_decoder::{decode, nmea_content::sentences::DecodedRecord};
///
/// let sentence = decode("$GPZDA,201530.00,04,07,2002,00,00*60").unwrap();
/// match sentence.record {
///     DecodedRecord::ZDA(zda) => {
///         assert_eq!(zda.day, Some(4));
///         assert_eq!(zda.month, Some(7));
///         assert_eq!(zda.year, Some(2002));
///     }
///     _ => println!("Other NMEA sentence decoded"),
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedRecord {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// GPS DOP and active satellites
    GSA(GSA),
    /// Satellites in View
    GSV(GSV),
    /// MSK Receiver Signal Status
    MSS(MSS),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Track made good and Ground speed
    VTG(VTG),
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA(ZDA),
}

impl DecodedRecord {
    /// Decodes the fields of a sentence of the given type.
    ///
    /// Tokens left over after the record's last field are ignored, since
    /// newer NMEA revisions append fields to existing sentence types.
    pub fn decode<'a>(sentence_type: SentenceType, fields: &mut Fields<'a>) -> Result<'a, Self> {
        let record = match sentence_type {
            SentenceType::GGA => GGA::decode(fields).map(Self::GGA),
            SentenceType::GLL => GLL::decode(fields).map(Self::GLL),
            SentenceType::GSA => GSA::decode(fields).map(Self::GSA),
            SentenceType::GSV => GSV::decode(fields).map(Self::GSV),
            SentenceType::MSS => MSS::decode(fields).map(Self::MSS),
            SentenceType::RMC => RMC::decode(fields).map(Self::RMC),
            SentenceType::VTG => VTG::decode(fields).map(Self::VTG),
            SentenceType::ZDA => ZDA::decode(fields).map(Self::ZDA),
        }?;

        let ignored = fields.by_ref().count();
        if ignored > 0 {
            log::trace!("ignoring {ignored} trailing field(s) of {sentence_type} sentence");
        }

        Ok(record)
    }

    /// Type of the sentence this record was decoded from.
    pub fn sentence_type(&self) -> SentenceType {
        match self {
            Self::GGA(_) => SentenceType::GGA,
            Self::GLL(_) => SentenceType::GLL,
            Self::GSA(_) => SentenceType::GSA,
            Self::GSV(_) => SentenceType::GSV,
            Self::MSS(_) => SentenceType::MSS,
            Self::RMC(_) => SentenceType::RMC,
            Self::VTG(_) => SentenceType::VTG,
            Self::ZDA(_) => SentenceType::ZDA,
        }
    }
}

macro_rules! indicator_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ty {
            $(
                $(#[$variant_meta:meta])*
                $value:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl TryFrom<$repr> for $name {
            /// The value, when it is not one NMEA defines
            type Error = $repr;

            fn try_from(value: $repr) -> core::result::Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)*
                    other => Err(other),
                }
            }
        }
    };
}

indicator_enum! {
    /// Status Mode Indicator
    pub enum Status: char {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid
        'V' => Invalid,
    }
}

indicator_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode: char {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// C - Quectel Querk, "Caution"
        'C' => Caution,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// F - RTK Float mode
        'F' => FloatRtk,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Data Not Valid
        'N' => DataNotValid,
        /// P - Precise
        'P' => Precise,
        /// R - RTK Integer mode
        'R' => FixedRtk,
        /// S - Simulated Mode
        'S' => Simulator,
        /// U - Quectel Querk, "Unsafe"
        'U' => Unsafe,
    }
}

indicator_enum! {
    /// Navigation Status, added to RMC by NMEA 4.1
    pub enum NavStatus: char {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Not Valid
        'N' => NotValid,
        /// S - Simulated Mode
        'S' => Simulator,
        /// V - Valid
        'V' => Valid,
    }
}

indicator_enum! {
    /// Quality of the GPS fix
    pub enum Quality: u8 {
        /// 0 - Fix not available
        0 => NoFix,
        /// 1 - GPS fix
        1 => GPSFix,
        /// 2 - Differential GPS fix
        2 => DGPSFix,
        /// 3 - PPS fix
        3 => PPSFix,
        /// 4 - Real Time Kinematic
        4 => RTK,
        /// 5 - Float RTK
        5 => FloatRTK,
        /// 6 - estimated (dead reckoning)
        6 => Estimated,
        /// 7 - Manual input mode
        7 => Manual,
        /// 8 - Simulation mode
        8 => Simulation,
    }
}

indicator_enum! {
    /// Selection Mode
    pub enum SelectionMode: char {
        /// A - Automatic, 2D/3D
        'A' => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        'M' => Manual,
    }
}

indicator_enum! {
    /// Fix Mode
    pub enum FixMode: u8 {
        /// 1 - No fix
        1 => NoFix,
        /// 2 - 2D Fix
        2 => Fix2D,
        /// 3 - 3D Fix
        3 => Fix3D,
    }
}

indicator_enum! {
    /// NMEA 4.11 System ID
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_nmea_4_11_system_id_and_signal_id>
    pub enum SystemId: u8 {
        /// 1 - GPS (GP)
        1 => Gps,
        /// 2 - GLONASS (GL)
        2 => Glonass,
        /// 3 - Galileo (GA)
        3 => Galileo,
        /// 4 - BeiDou (GB/BD)
        4 => Beidou,
        /// 5 - QZSS (GQ)
        5 => Qzss,
        /// 6 - NavIC (GI)
        6 => Navic,
    }
}

/// One satellite observation carried by a [`GSV`] sentence.
///
/// Every value is optional: receivers leave out elevation and azimuth for
/// satellites they have not located yet, and the SNR for satellites they
/// are not tracking.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Satellite {
    /// Satellite ID (PRN number)
    pub id: Option<u8>,
    /// Elevation in degrees, 90 maximum
    pub elevation: Option<u8>,
    /// Azimuth in degrees from true north, 000 to 359
    pub azimuth: Option<u16>,
    /// Signal-to-noise ratio in dB, 00-99, empty when not tracking
    pub snr: Option<u8>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(Status::try_from('A'), Ok(Status::Valid));
        assert_eq!(Status::try_from('V'), Ok(Status::Invalid));
        assert_eq!(Status::try_from('K'), Err('K'));
    }

    #[test]
    fn test_faa_mode() {
        let cases = [
            ('A', FaaMode::Autonomous),
            ('C', FaaMode::Caution),
            ('D', FaaMode::Differential),
            ('E', FaaMode::Estimated),
            ('F', FaaMode::FloatRtk),
            ('M', FaaMode::Manual),
            ('N', FaaMode::DataNotValid),
            ('P', FaaMode::Precise),
            ('R', FaaMode::FixedRtk),
            ('S', FaaMode::Simulator),
            ('U', FaaMode::Unsafe),
        ];

        for (value, expected) in cases {
            assert_eq!(FaaMode::try_from(value), Ok(expected), "Failed: {value:?}");
        }
        assert_eq!(FaaMode::try_from('X'), Err('X'));
    }

    #[test]
    fn test_quality() {
        assert_eq!(Quality::try_from(0u8), Ok(Quality::NoFix));
        assert_eq!(Quality::try_from(1u8), Ok(Quality::GPSFix));
        assert_eq!(Quality::try_from(2u8), Ok(Quality::DGPSFix));
        assert_eq!(Quality::try_from(4u8), Ok(Quality::RTK));
        assert_eq!(Quality::try_from(8u8), Ok(Quality::Simulation));
        assert_eq!(Quality::try_from(9u8), Err(9u8));
    }

    #[test]
    fn test_gsa_modes() {
        assert_eq!(SelectionMode::try_from('A'), Ok(SelectionMode::Automatic));
        assert_eq!(SelectionMode::try_from('M'), Ok(SelectionMode::Manual));
        assert_eq!(SelectionMode::try_from('X'), Err('X'));

        assert_eq!(FixMode::try_from(1u8), Ok(FixMode::NoFix));
        assert_eq!(FixMode::try_from(2u8), Ok(FixMode::Fix2D));
        assert_eq!(FixMode::try_from(3u8), Ok(FixMode::Fix3D));
        assert_eq!(FixMode::try_from(0u8), Err(0u8));
    }

    #[test]
    fn test_trailing_tokens_are_ignored() {
        let mut fields = Fields::new(SentenceType::ZDA, ",201530.00,04,07,2002,00,00,extra,,");
        let record = DecodedRecord::decode(SentenceType::ZDA, &mut fields).unwrap();

        assert_eq!(record.sentence_type(), SentenceType::ZDA);
        assert_eq!(fields.next(), None);
    }
}
