//! # GSV Group Accumulation
//!
//! A receiver reports the satellites in view as a group of GSV sentences,
//! each carrying at most four satellites:
//!
//! ```text
//!  $GPGSV,3,1,09,...   4 satellites
//!  $GPGSV,3,2,09,...   4 satellites
//!  $GPGSV,3,3,09,...   1 satellite   -> SatelliteView with 9 satellites
//! ```
//!
//! [`GsvAccumulator`] merges such a group into one [`SatelliteView`]. It is
//! the only state kept between decodes and is owned by the caller; it does no
//! locking of its own.

use std::collections::{BTreeMap, btree_map::Entry};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::nmea_content::{
    DecodedSentence, TalkerId,
    sentences::{DecodedRecord, GSV, Satellite},
};

/// Every satellite reported by one complete GSV group.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatelliteView {
    /// Talker that sent the group
    pub talker: TalkerId,
    /// Number of satellites in view, as announced by the group
    pub total_satellites: u8,
    /// Satellites in the order they were received
    pub satellites: Vec<Satellite>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Collecting,
    Broken,
    Idle,
}

/// Progress of the GSV group currently being received from one talker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GsvSession {
    total_messages: u8,
    last_message: u8,
    total_satellites: u8,
    satellites: Vec<Satellite>,
    state: SessionState,
}

/// The GSV header, once every field of it is present.
#[derive(Debug, Clone, Copy)]
struct Header {
    total_messages: u8,
    message_number: u8,
    satellites_in_view: u8,
}

impl Header {
    fn of(gsv: &GSV) -> Option<Self> {
        Some(Header {
            total_messages: gsv.total_messages?,
            message_number: gsv.message_number?,
            satellites_in_view: gsv.satellites_in_view?,
        })
    }
}

impl GsvSession {
    fn start(header: Header, satellites: &[Satellite]) -> Self {
        let state = if header.message_number == 1 {
            SessionState::Collecting
        } else {
            SessionState::Broken
        };

        GsvSession {
            total_messages: header.total_messages,
            last_message: header.message_number,
            total_satellites: header.satellites_in_view,
            satellites: satellites.to_vec(),
            state,
        }
    }

    fn append(&mut self, header: Header, satellites: &[Satellite]) {
        if self.last_message.checked_add(1) == Some(header.message_number) {
            self.satellites.extend_from_slice(satellites);
            self.total_satellites = header.satellites_in_view;
        } else {
            log::debug!(
                "GSV message {} of {} arrived after message {}, group will not complete",
                header.message_number,
                header.total_messages,
                self.last_message
            );
            self.state = SessionState::Broken;
        }

        self.last_message = self.last_message.max(header.message_number);
    }

    fn is_finished(&self) -> bool {
        self.last_message == self.total_messages
            || (self.total_satellites > 0 && self.satellites.len() >= self.total_satellites.into())
    }

    /// Number of messages in the group.
    pub fn total_messages(&self) -> u8 {
        self.total_messages
    }

    /// Highest message number received so far.
    pub fn last_message(&self) -> u8 {
        self.last_message
    }

    /// Number of satellites in view, as announced by the latest message.
    pub fn total_satellites(&self) -> u8 {
        self.total_satellites
    }

    /// Satellites collected so far.
    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    /// `true` once the group has been delivered as a [`SatelliteView`].
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Idle
    }

    /// `true` if a message was missed or arrived out of order.
    ///
    /// A broken session never completes; it is replaced when the next group
    /// starts.
    pub fn is_broken(&self) -> bool {
        self.state == SessionState::Broken
    }
}

/// Merges GSV sentences into one [`SatelliteView`] per group.
///
/// Each talker has its own session, so interleaved `GP` and `GL` groups do not
/// disturb each other. For one talker:
/// - a message numbered 1, or one whose group size differs from the current
///   session, starts a new session and discards any incomplete one,
/// - each following message must carry the next message number, otherwise
///   the session is broken and waits for the next group,
/// - the group completes on its last message or once the announced number of
///   satellites has been collected.
///
/// Abandoning a stalled session after a timeout is left to the caller, see
/// [`GsvAccumulator::reset`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{GsvAccumulator, decode};
///
/// let mut accumulator = GsvAccumulator::new();
///
/// let first = decode("$GPGSV,2,1,05,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*78").unwrap();
/// assert_eq!(accumulator.observe(&first), None);
///
/// let last = decode("$GPGSV,2,2,05,17,23,146,44*48").unwrap();
/// let view = accumulator.observe(&last).unwrap();
/// assert_eq!(view.talker.as_str(), "GP");
/// assert_eq!(view.satellites.len(), 5);
/// ```
#[derive(Debug, Default, Clone)]
pub struct GsvAccumulator {
    sessions: BTreeMap<TalkerId, GsvSession>,
}

impl GsvAccumulator {
    /// Creates an accumulator without any session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one GSV sentence from `talker`.
    ///
    /// Returns the merged view when this sentence completes its group.
    /// A sentence with an absent header field is ignored.
    pub fn push(&mut self, talker: TalkerId, gsv: &GSV) -> Option<SatelliteView> {
        let Some(header) = Header::of(gsv) else {
            log::debug!("ignoring GSV sentence from {talker} with an incomplete header");
            return None;
        };

        let session = match self.sessions.entry(talker) {
            Entry::Vacant(entry) => entry.insert(GsvSession::start(header, &gsv.satellites)),
            Entry::Occupied(entry) => {
                let session = entry.into_mut();

                if session.total_messages == header.total_messages && header.message_number != 1 {
                    match session.state {
                        SessionState::Collecting => session.append(header, &gsv.satellites),
                        SessionState::Broken | SessionState::Idle => {
                            session.last_message =
                                session.last_message.max(header.message_number);
                            return None;
                        }
                    }
                } else {
                    if !session.is_complete() {
                        log::debug!(
                            "discarding incomplete GSV group from {talker}: {} of {} messages, {} satellites",
                            session.last_message,
                            session.total_messages,
                            session.satellites.len()
                        );
                    }
                    *session = GsvSession::start(header, &gsv.satellites);
                }

                session
            }
        };

        if session.state != SessionState::Collecting || !session.is_finished() {
            return None;
        }

        session.state = SessionState::Idle;
        log::trace!(
            "GSV group from {talker} complete with {} satellites",
            session.satellites.len()
        );

        Some(SatelliteView {
            talker,
            total_satellites: session.total_satellites,
            satellites: session.satellites.clone(),
        })
    }

    /// Feeds a decoded sentence, ignoring everything but GSV.
    pub fn observe(&mut self, sentence: &DecodedSentence) -> Option<SatelliteView> {
        match &sentence.record {
            DecodedRecord::GSV(gsv) => self.push(sentence.talker, gsv),
            _ => None,
        }
    }

    /// The current session of a talker, if any.
    pub fn session(&self, talker: TalkerId) -> Option<&GsvSession> {
        self.sessions.get(&talker)
    }

    /// Drops the session of a talker, returning it.
    pub fn reset(&mut self, talker: TalkerId) -> Option<GsvSession> {
        self.sessions.remove(&talker)
    }

    /// Drops every session.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}
