pub mod schedule;
pub mod section;
pub mod user;
