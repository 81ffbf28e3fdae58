//! Search driver and timetable KPIs.
//!
//! # Algorithm
//!
//! `Timetabler` validates the configuration and roster, runs the genetic
//! search for a fixed number of generations, and formats the best-ever
//! assignment as a weekly table.
//!
//! # KPI
//!
//! `TimetableKpi` summarizes per-teacher loads, fill rate, and daily peaks.

mod kpi;
mod timetabler;

pub use kpi::{TeacherLoad, TimetableKpi};
pub use timetabler::{TimetableError, TimetableSolution, Timetabler, generate};
