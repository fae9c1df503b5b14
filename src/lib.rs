//! Alarmtriage - an offline triage aid for network operations staff.
//!
//! Given a dump of active alarms, the crate computes a composite urgency
//! score for each one and produces a ranked list with a human-readable
//! justification. The scoring core is a pure function over immutable
//! inputs; file loading and rendering live in thin collaborator modules.

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod scoring;
