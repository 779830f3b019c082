//! # range-engine
//!
//! Timezone-aware availability computation for scheduling and booking flows.
//!
//! The engine turns a participant's availability configuration -- recurring
//! weekly working hours plus single-date overrides -- into concrete date
//! ranges over a requested window, then combines range sets across
//! participants: intersection finds the time everyone shares, subtraction
//! carves busy time back out of it.
//!
//! All operations are pure, synchronous functions over in-memory values.
//! The calling layer owns persistence, sessions, and transport; this crate
//! receives plain rules and instants and returns plain ranges.
//!
//! ## Modules
//!
//! - [`rules`] — availability rule types (working hours, date overrides)
//! - [`range`] — `DateRange` / `AnnotatedRange` primitives
//! - [`expander`] — one rule → concrete ranges within a window
//! - [`builder`] — full rule set → ranges, with override precedence
//! - [`ops`] — intersection and subtraction over range sets
//! - [`dst`] — wall-clock resolution across DST transitions
//! - [`error`] — error types

pub mod builder;
pub mod dst;
pub mod error;
pub mod expander;
pub mod ops;
pub mod range;
pub mod rules;

pub use builder::{build_date_ranges, group_by_date};
pub use error::RangeError;
pub use expander::{expand_date_override, expand_working_hours};
pub use ops::{intersect, subtract, subtract_ranges};
pub use range::{AnnotatedRange, DateRange};
pub use rules::{weekday_from_sunday_index, AvailabilityRule, DateOverride, WorkingHours};
