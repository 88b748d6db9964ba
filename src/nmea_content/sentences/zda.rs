#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, Decode, nmea_content::UtcTime};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, Decode)]
pub struct ZDA {
    /// Time in UTC
    pub time: Option<UtcTime>,
    /// Day, 01 to 31
    pub day: Option<u8>,
    /// Month, 01 to 12
    pub month: Option<u8>,
    /// Year, four digits
    pub year: Option<u16>,
    /// Local zone description, hours offset from UTC, -13 to 13
    pub zone_hours: Option<i8>,
    /// Local zone description, minutes offset from UTC
    pub zone_minutes: Option<i8>,
}

impl ZDA {
    /// Combines every field into a [`time::OffsetDateTime`].
    ///
    /// The zone minutes take the sign of the zone hours. `None` if a field is
    /// absent or the values do not form a real date, time and offset.
    #[cfg(feature = "time")]
    pub fn to_offset_date_time(&self) -> Option<time::OffsetDateTime> {
        let time = self.time?.to_time()?;
        let month = time::Month::try_from(self.month?).ok()?;
        let date = time::Date::from_calendar_date(self.year?.into(), month, self.day?).ok()?;

        let hours = self.zone_hours?;
        let minutes = self.zone_minutes?;
        let magnitude = minutes.checked_abs().filter(|&magnitude| magnitude <= 59)?;
        let minutes = if hours < 0 { -magnitude } else { minutes };
        let utc_offset = time::UtcOffset::from_hms(hours, minutes, 0).ok()?;

        Some(time::OffsetDateTime::new_in_offset(date, time, utc_offset))
    }
}
