//! # Catalog boundary
//!
//! Upstream class records arrive as loosely typed JSON: numbers sometimes come
//! as strings, optional fields go missing, and there are many fields nobody
//! here reads. This module is the one place that accepts that shape and turns
//! it into validated [`Section`] values; everything past it works with the
//! structured form only.
//!
//! It also holds the two pure pieces of catalog upkeep: working out which
//! stored sections a sync no longer lists, and filtering/sorting search
//! results.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{AdvisorError, AdvisorResult};
use crate::models::{EnrollmentStatus, Meeting, Section, SectionKey};

/// A JSON value that may be written as a number or as a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Int(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
            Scalar::Text(value) => value,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMeeting {
    pub days: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub facility_descr: Option<String>,
    pub start_dt: Option<String>,
    pub end_dt: Option<String>,
}

impl From<RawMeeting> for Meeting {
    fn from(raw: RawMeeting) -> Self {
        Meeting {
            days: raw.days.unwrap_or_default(),
            start_time: raw.start_time.unwrap_or_default(),
            end_time: raw.end_time.unwrap_or_default(),
            facility_descr: raw.facility_descr.unwrap_or_default(),
            start_dt: raw.start_dt.unwrap_or_default(),
            end_dt: raw.end_dt.unwrap_or_default(),
        }
    }
}

/// One class record as published by the student information system.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawClassRecord {
    pub strm: Option<Scalar>,
    pub class_nbr: Option<Scalar>,
    pub subject: Option<String>,
    pub catalog_nbr: Option<Scalar>,
    pub class_section: Option<Scalar>,
    pub component: Option<String>,
    pub units: Option<Scalar>,
    pub descr: Option<String>,
    pub enrl_stat: Option<String>,
    #[serde(default)]
    pub meetings: Vec<RawMeeting>,
}

fn required<T>(value: Option<T>, field: &str) -> AdvisorResult<T> {
    value.ok_or_else(|| AdvisorError::Validation(format!("Class record is missing `{field}`")))
}

impl TryFrom<RawClassRecord> for Section {
    type Error = AdvisorError;

    fn try_from(raw: RawClassRecord) -> AdvisorResult<Self> {
        let semester = required(raw.strm, "strm")?.into_text();
        if semester.trim().is_empty() {
            return Err(AdvisorError::Validation("Class record has an empty `strm`".into()));
        }

        let class_number = match required(raw.class_nbr, "class_nbr")? {
            Scalar::Int(value) => i32::try_from(value).ok(),
            Scalar::Text(text) => text.trim().parse().ok(),
            Scalar::Float(_) => None,
        }
        .ok_or_else(|| AdvisorError::Validation("`class_nbr` is not a class number".into()))?;

        let enrollment_status = EnrollmentStatus::from_code(&required(raw.enrl_stat, "enrl_stat")?)?;

        Ok(Section {
            semester,
            class_number,
            name: raw.descr.unwrap_or_default(),
            subject: required(raw.subject, "subject")?,
            catalog_number: required(raw.catalog_nbr, "catalog_nbr")?.into_text(),
            class_section: raw.class_section.map(Scalar::into_text).unwrap_or_default(),
            component: required(raw.component, "component")?,
            units: raw.units.map(Scalar::into_text).unwrap_or_default(),
            enrollment_status,
            meetings: raw.meetings.into_iter().map(Meeting::from).collect(),
        })
    }
}

/// Parses one page of catalog results (a JSON array of class records).
pub fn parse_catalog_page(json: &str) -> AdvisorResult<Vec<Section>> {
    let records: Vec<RawClassRecord> = serde_json::from_str(json)
        .map_err(|e| AdvisorError::Validation(format!("Invalid catalog payload: {e}")))?;

    records.into_iter().map(Section::try_from).collect()
}

/// Keys that are stored locally but missing from the latest sync.
pub fn stale_sections(existing: &[SectionKey], incoming: &[Section]) -> Vec<SectionKey> {
    let current: HashSet<SectionKey> = incoming.iter().map(Section::key).collect();
    existing
        .iter()
        .filter(|key| !current.contains(*key))
        .cloned()
        .collect()
}

/// Catalog search filters. Empty or absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub semester: Option<String>,
    pub subject: Option<String>,
    pub catalog_number: Option<String>,
    pub keyword: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl CatalogQuery {
    pub fn matches(&self, section: &Section) -> bool {
        if non_empty(&self.semester).is_some_and(|s| s != section.semester) {
            return false;
        }
        if non_empty(&self.subject).is_some_and(|s| s != section.subject) {
            return false;
        }
        if non_empty(&self.catalog_number).is_some_and(|c| c != section.catalog_number) {
            return false;
        }
        if let Some(keyword) = non_empty(&self.keyword) {
            let name = section.name.to_lowercase();
            return keyword
                .split_whitespace()
                .all(|word| name.contains(&word.to_lowercase()));
        }
        true
    }

    /// Filters `sections` and orders them by subject, catalog number, section, component.
    pub fn apply(&self, sections: Vec<Section>) -> Vec<Section> {
        let mut results: Vec<Section> = sections.into_iter().filter(|s| self.matches(s)).collect();
        results.sort_by(|a, b| {
            (&a.subject, &a.catalog_number, &a.class_section, &a.component).cmp(&(
                &b.subject,
                &b.catalog_number,
                &b.class_section,
                &b.component,
            ))
        });
        results
    }
}
