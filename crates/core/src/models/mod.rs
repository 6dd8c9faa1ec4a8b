pub mod schedule;
pub mod section;
pub mod user;

pub use schedule::{Approval, Decision, Schedule};
pub use section::{EnrollmentStatus, Meeting, Section, SectionKey};
pub use user::User;
