//! Timetabling domain models.
//!
//! Provides the data types shared by the evaluator, the genetic search,
//! and the formatter.
//!
//! # Domain Mappings
//!
//! | u-timetable | u-schedule analogue |
//! |-------------|---------------------|
//! | Teacher | Task (demand) |
//! | Slot | Time window |
//! | Timetable | Schedule |
//! | PenaltyReport | Violations |

mod constraint;
mod slot;
mod teacher;
mod timetable;

pub use constraint::{MAX_DAILY_LOAD, PenaltyReport, PenaltyWeights, Rule};
pub use slot::{Slot, SlotGrid};
pub use teacher::{MAX_CREDITS, MIN_CREDITS, Teacher, TeacherId, total_credits};
pub use timetable::{Cell, Timetable, to_grid};
