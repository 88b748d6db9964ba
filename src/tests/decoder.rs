use crate::{
    Decoder, Error, decode,
    nmea_content::{
        NmeaDate, SentenceType, UtcTime,
        sentences::{DecodedRecord, FaaMode, NavStatus, Quality},
    },
};

fn record(sentence: &str) -> DecodedRecord {
    match decode(sentence) {
        Ok(decoded) => decoded.record,
        Err(err) => panic!("Failed: {sentence:?}\n\t{err}"),
    }
}

#[test]
fn test_gga_fix() {
    let decoded =
        decode("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47").unwrap();
    assert_eq!(decoded.talker.as_str(), "GP");

    let DecodedRecord::GGA(gga) = decoded.record else {
        panic!("expected GGA");
    };
    assert_eq!(gga.time, Some(UtcTime(123519.0)));
    assert_eq!(gga.latitude, Some(4807.038));
    assert_eq!(gga.latitude_hemisphere, Some('N'));
    assert_eq!(gga.longitude, Some(1131.0));
    assert_eq!(gga.longitude_hemisphere, Some('E'));
    assert_eq!(gga.fix_quality, Some(1));
    assert_eq!(gga.quality(), Some(Quality::GPSFix));
    assert_eq!(gga.satellites_used, Some(8));
    assert_eq!(gga.hdop, Some(0.9));
    assert_eq!(gga.altitude, Some(545.4));
    assert_eq!(gga.altitude_unit, Some('M'));
    assert_eq!(gga.geoid_height, Some(46.9));
    assert_eq!(gga.age, None);
    assert_eq!(gga.station_id, None);
}

#[test]
fn test_rmc_fix() {
    let DecodedRecord::RMC(rmc) =
        record("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A")
    else {
        panic!("expected RMC");
    };

    assert_eq!(rmc.status, Some('A'));
    assert!(rmc.is_valid());
    assert_eq!(rmc.speed, Some(22.4));
    assert_eq!(rmc.heading, Some(84.4));
    assert_eq!(rmc.date, Some(NmeaDate(230394)));
    assert_eq!(rmc.mode, None);

    let DecodedRecord::RMC(rmc) = record(
        "$GNRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A,V*63",
    ) else {
        panic!("expected RMC");
    };
    assert_eq!(rmc.faa_mode(), Some(FaaMode::Autonomous));
    assert_eq!(rmc.navigation_status(), Some(NavStatus::Valid));
}

#[test]
fn test_gsa_sparse_slots() {
    let DecodedRecord::GSA(gsa) = record("$GPGSA,A,3,04,05,,09,,,,,,,,,2.5,1.3,2.1*3C") else {
        panic!("expected GSA");
    };

    assert_eq!(gsa.satellites.as_slice(), &[4, 5, 9]);
    assert_eq!(gsa.pdop, Some(2.5));
    assert_eq!(gsa.hdop, Some(1.3));
    assert_eq!(gsa.vdop, Some(2.1));
}

#[test]
fn test_every_sentence_type() {
    let cases = [
        ("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47", SentenceType::GGA),
        ("$GPGLL,4916.45,N,12311.12,W,225444,A*31", SentenceType::GLL),
        ("$GPGSA,A,3,04,05,,09,,,,,,,,,2.5,1.3,2.1*3C", SentenceType::GSA),
        ("$GPGSV,3,3,09,27,05,244,00*42", SentenceType::GSV),
        ("$GPMSS,55,27,318.0,100,1*57", SentenceType::MSS),
        (
            "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
            SentenceType::RMC,
        ),
        ("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48", SentenceType::VTG),
        ("$GPZDA,201530.00,04,07,2002,00,00*60", SentenceType::ZDA),
    ];

    for (sentence, expected) in cases {
        assert_eq!(record(sentence).sentence_type(), expected, "Failed: {sentence:?}");
    }
}

#[test]
fn test_empty_fields_are_absent() {
    let DecodedRecord::GGA(gga) = record("$GPGGA,123519,,,,,0,00,,,M,,M,,*6B") else {
        panic!("expected GGA");
    };

    assert_eq!(gga.latitude, None);
    assert_eq!(gga.latitude_hemisphere, None);
    assert_eq!(gga.longitude, None);
    assert_eq!(gga.fix_quality, Some(0));
    assert_eq!(gga.quality(), Some(Quality::NoFix));
    assert_eq!(gga.satellites_used, Some(0));
    assert_eq!(gga.hdop, None);
    assert_eq!(gga.altitude, None);
    assert_eq!(gga.altitude_unit, Some('M'));
    assert_eq!(gga.geoid_height, None);
    assert_eq!(gga.station_id, None);
}

#[test]
fn test_unsupported_sentence_type() {
    assert_eq!(
        decode("$GPXYZ,1,2,3*50"),
        Err(Error::UnsupportedSentenceType { code: "GPXYZ" })
    );
    assert_eq!(
        decode("$GPTXT,01,01,02,ANTSTATUS=OK*3B"),
        Err(Error::UnsupportedSentenceType { code: "GPTXT" })
    );
    assert_eq!(decode("$*00"), Err(Error::UnsupportedSentenceType { code: "" }));
}

#[test]
fn test_field_errors_reject_sentence() {
    assert_eq!(
        decode("$GPGGA,123519,4807.038,N,01131.000,E,1,eight,0.9,545.4,M,46.9,M,,*38"),
        Err(Error::FieldParseError {
            sentence_type: SentenceType::GGA,
            field_index: 7,
            raw_token: "eight",
        })
    );
    assert_eq!(
        decode("$GPRMC,123519,A,4807.038,N*57"),
        Err(Error::TruncatedSentence {
            sentence_type: SentenceType::RMC,
            expected_index: 5,
        })
    );
}

#[test]
fn test_non_finite_coordinates_are_rejected() {
    assert_eq!(
        decode("$GPGGA,123519,nan,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*38"),
        Err(Error::FieldParseError {
            sentence_type: SentenceType::GGA,
            field_index: 2,
            raw_token: "nan",
        })
    );
    assert_eq!(
        decode("$GPGGA,123519,4807.038,N,inf,E,1,08,0.9,545.4,M,46.9,M,,*0A"),
        Err(Error::FieldParseError {
            sentence_type: SentenceType::GGA,
            field_index: 4,
            raw_token: "inf",
        })
    );
}

#[test]
fn test_decoder_is_shareable() {
    fn assert_send_sync<T: Send + Sync + Copy>(_: T) {}

    let decoder = Decoder::default();
    assert_send_sync(decoder);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                decoder
                    .decode("$GPZDA,201530.00,04,07,2002,00,00*60")
                    .is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
