//! # Schedule Advisor core
//!
//! Domain logic for building a semester course schedule and having an
//! advisor review it.
//!
//! - [`meetings`]: weekday meeting maps and time-window overlap
//! - [`conflicts`]: admissibility rules and schedule add/remove
//! - [`catalog`]: validation of upstream class records, sync diffing, search
//! - [`weekly`]: sections grouped by weekday
//! - [`service`]: the calling layer over the repository traits
//!
//! Nothing in here performs I/O directly; storage is reached only through the
//! traits in [`repository`].

pub mod catalog;
pub mod conflicts;
pub mod errors;
pub mod meetings;
pub mod models;
pub mod repository;
pub mod service;
pub mod weekly;

pub mod mock;

pub use errors::{AdvisorError, AdvisorResult, Rejection};
