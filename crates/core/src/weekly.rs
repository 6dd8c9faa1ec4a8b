//! Groups a schedule's sections by the day they meet, ready for a
//! week-at-a-glance rendering.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::{Schedule, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Two-letter abbreviation used in catalog day codes.
    pub fn abbreviation(&self) -> &'static str {
        &self.name()[..2]
    }

    pub fn from_abbreviation(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.abbreviation() == code)
    }
}

/// A section placed on one day, with its parsed start time if the catalog gave one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEntry {
    pub section: Section,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

/// Sections bucketed by weekday, plus buckets for day codes that are not weekdays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyView {
    pub days: Vec<(Weekday, Vec<DayEntry>)>,
    /// Codes like "TB" (from "TBA") keep their own bucket, sorted by section name.
    pub unscheduled: Vec<(String, Vec<DayEntry>)>,
}

impl WeeklyView {
    pub fn entries_for(&self, day: Weekday) -> &[DayEntry] {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }
}

pub fn weekly_view(schedule: &Schedule) -> WeeklyView {
    let mut days: Vec<(Weekday, Vec<DayEntry>)> =
        Weekday::ALL.into_iter().map(|d| (d, Vec::new())).collect();
    let mut unscheduled: Vec<(String, Vec<DayEntry>)> = Vec::new();

    for section in schedule.sections() {
        for (code, window) in section.meeting_days() {
            let entry = DayEntry {
                section: section.clone(),
                start: window.start_time().ok(),
                end: window.end_time().ok(),
            };
            match Weekday::from_abbreviation(&code) {
                Some(day) => days[day as usize].1.push(entry),
                // Appends, so several sections on the same odd code all show up.
                // Older page renders kept only the last one.
                None => match unscheduled.iter_mut().find(|(c, _)| *c == code) {
                    Some((_, entries)) => entries.push(entry),
                    None => unscheduled.push((code, vec![entry])),
                },
            }
        }
    }

    // Unknown start times go last.
    for (_, entries) in &mut days {
        entries.sort_by_key(|e| (e.start.is_none(), e.start));
    }
    for (_, entries) in &mut unscheduled {
        entries.sort_by(|a, b| a.section.name.cmp(&b.section.name));
    }

    WeeklyView { days, unscheduled }
}
