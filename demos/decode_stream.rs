//! Decodes NMEA 0183 sentences read line by line from stdin.
//!
//! ```text
//! RUST_LOG=debug cargo run --example decode_stream < capture.nmea
//! ```

use std::io::{self, BufRead};

use nmea0183_decoder::{Decoder, GsvAccumulator};

fn main() -> io::Result<()> {
    env_logger::init();

    let decoder = Decoder::default();
    let mut accumulator = GsvAccumulator::new();

    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        let sentence = line.trim_end_matches(['\r', '\n']);
        if sentence.is_empty() {
            continue;
        }

        match decoder.decode(sentence) {
            Ok(decoded) => {
                println!("{} {:?}", decoded.talker, decoded.record);

                if let Some(view) = accumulator.observe(&decoded) {
                    println!(
                        "{} satellites in view: {}",
                        view.talker, view.total_satellites
                    );
                    for satellite in &view.satellites {
                        println!("    {satellite:?}");
                    }
                }
            }
            Err(err) => log::warn!("line {}: {err}", number + 1),
        }
    }

    Ok(())
}
