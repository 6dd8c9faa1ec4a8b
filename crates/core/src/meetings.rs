//! # Meeting patterns
//!
//! Turns a section's raw meeting blocks into a map from two-letter weekday
//! abbreviation to the single start/end window the section occupies that day,
//! and answers whether two such windows overlap.
//!
//! Times are kept in the catalog's textual form inside the map. Parsing
//! happens only when a window is compared, so a malformed time surfaces as
//! [`AdvisorError::MalformedTimeFormat`] to whoever asked, never earlier.

use std::collections::BTreeMap;

use chrono::NaiveTime;

use crate::errors::{AdvisorError, AdvisorResult};
use crate::models::{Meeting, Section};

/// Raw start/end strings for one weekday of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingWindow {
    pub start: String,
    pub end: String,
}

impl MeetingWindow {
    pub fn start_time(&self) -> AdvisorResult<NaiveTime> {
        parse_time_of_day(&self.start)
    }

    pub fn end_time(&self) -> AdvisorResult<NaiveTime> {
        parse_time_of_day(&self.end)
    }

    pub fn parse(&self) -> AdvisorResult<(NaiveTime, NaiveTime)> {
        Ok((self.start_time()?, self.end_time()?))
    }
}

/// Weekday abbreviation ("Mo", "Tu", ...) to the window held on that day.
pub type MeetingMap = BTreeMap<String, MeetingWindow>;

/// Builds the meeting map for a list of meeting blocks.
///
/// Each `days` string is cut into two-character chunks. When two blocks name
/// the same weekday the later block replaces the earlier one.
// TODO: confirm with the registrar whether a repeated weekday is bad upstream
// data or should keep both blocks.
pub fn meeting_days(meetings: &[Meeting]) -> MeetingMap {
    let mut days = MeetingMap::new();
    for meeting in meetings {
        let chars: Vec<char> = meeting.days.chars().collect();
        for chunk in chars.chunks(2) {
            days.insert(
                chunk.iter().collect(),
                MeetingWindow {
                    start: meeting.start_time.clone(),
                    end: meeting.end_time.clone(),
                },
            );
        }
    }
    days
}

impl Section {
    pub fn meeting_days(&self) -> MeetingMap {
        meeting_days(&self.meetings)
    }
}

/// Parses "HH.MM.SS.ffffff-05:00" style times.
///
/// Only the first three dot-separated fields count; fraction and offset are
/// ignored. Missing minute or second fields default to zero.
pub fn parse_time_of_day(raw: &str) -> AdvisorResult<NaiveTime> {
    let malformed = || AdvisorError::MalformedTimeFormat(raw.to_string());

    let mut fields = [0u32; 3];
    for (slot, part) in fields.iter_mut().zip(raw.split('.')) {
        *slot = part.trim().parse().map_err(|_| malformed())?;
    }

    NaiveTime::from_hms_opt(fields[0], fields[1], fields[2]).ok_or_else(malformed)
}

/// Half-open overlap of `[start, end)` windows. Touching endpoints do not overlap.
pub fn intervals_overlap(first: (NaiveTime, NaiveTime), second: (NaiveTime, NaiveTime)) -> bool {
    let (start_1, end_1) = first;
    let (start_2, end_2) = second;
    (start_1 <= start_2 && start_2 < end_1) || (start_2 <= start_1 && start_1 < end_2)
}

/// True when the two sections meet at overlapping times on any shared weekday.
pub fn sections_overlap(first: &Section, second: &Section) -> AdvisorResult<bool> {
    let days_1 = first.meeting_days();
    let days_2 = second.meeting_days();

    for (day, window_1) in &days_1 {
        let Some(window_2) = days_2.get(day) else {
            continue;
        };
        if intervals_overlap(window_1.parse()?, window_2.parse()?) {
            return Ok(true);
        }
    }
    Ok(false)
}
