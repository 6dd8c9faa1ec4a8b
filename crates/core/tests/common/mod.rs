#![allow(dead_code)]

use advisor_core::models::{EnrollmentStatus, Meeting, Schedule, Section, User};
use uuid::Uuid;

pub const FALL: &str = "1228";
pub const SPRING: &str = "1232";

/// Catalog-formatted time of day, e.g. `sis_time(10, 50)` -> "10.50.00.000000-05:00".
pub fn sis_time(hour: u32, minute: u32) -> String {
    format!("{hour:02}.{minute:02}.00.000000-05:00")
}

pub fn meeting(days: &str, start: (u32, u32), end: (u32, u32)) -> Meeting {
    Meeting {
        days: days.to_string(),
        start_time: sis_time(start.0, start.1),
        end_time: sis_time(end.0, end.1),
        facility_descr: "Ruffner Hall G008".to_string(),
        start_dt: "08/23/2022".to_string(),
        end_dt: "12/06/2022".to_string(),
    }
}

pub struct SectionBuilder {
    section: Section,
}

impl SectionBuilder {
    pub fn new(class_number: i32, subject: &str, catalog_number: &str) -> Self {
        Self {
            section: Section {
                semester: FALL.to_string(),
                class_number,
                name: format!("{subject} {catalog_number}"),
                subject: subject.to_string(),
                catalog_number: catalog_number.to_string(),
                class_section: "001".to_string(),
                component: "LEC".to_string(),
                units: "3".to_string(),
                enrollment_status: EnrollmentStatus::Open,
                meetings: Vec::new(),
            },
        }
    }

    pub fn semester(mut self, semester: &str) -> Self {
        self.section.semester = semester.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.section.name = name.to_string();
        self
    }

    pub fn class_section(mut self, class_section: &str) -> Self {
        self.section.class_section = class_section.to_string();
        self
    }

    pub fn component(mut self, component: &str) -> Self {
        self.section.component = component.to_string();
        self
    }

    pub fn status(mut self, status: EnrollmentStatus) -> Self {
        self.section.enrollment_status = status;
        self
    }

    pub fn meets(mut self, days: &str, start: (u32, u32), end: (u32, u32)) -> Self {
        self.section.meetings.push(meeting(days, start, end));
        self
    }

    pub fn meeting(mut self, meeting: Meeting) -> Self {
        self.section.meetings.push(meeting);
        self
    }

    pub fn build(self) -> Section {
        self.section
    }
}

/// DANC 1400 lecture, MoWeFr 10:00-10:50.
pub fn dance_1400() -> Section {
    SectionBuilder::new(10001, "DANC", "1400")
        .name("Introduction to Modern Dance")
        .meets("MoWeFr", (10, 0), (10, 50))
        .build()
}

pub fn schedule_with(sections: Vec<Section>) -> Schedule {
    let mut schedule = Schedule::new(Uuid::new_v4());
    for section in sections {
        schedule
            .add_section(section)
            .expect("fixture section should be admissible");
    }
    schedule
}

pub fn student(advisor_id: Option<Uuid>) -> User {
    User {
        id: Uuid::new_v4(),
        username: "mst3k".to_string(),
        first_name: "Mary".to_string(),
        last_name: "Student".to_string(),
        is_advisor: false,
        advisor_id,
    }
}

pub fn advisor() -> User {
    User {
        id: Uuid::new_v4(),
        username: "adv9z".to_string(),
        first_name: "Alan".to_string(),
        last_name: "Advisor".to_string(),
        is_advisor: true,
        advisor_id: None,
    }
}
