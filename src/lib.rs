//! Weekly timetabling engine for the U-Engine ecosystem.
//!
//! Assigns teachers to weekly class slots so that every teacher receives
//! their requested number of classes while penalizing daily overload and
//! back-to-back periods. The search is a generational genetic algorithm
//! with tournament selection, single-point crossover, reset mutation, and
//! single-elite carry-over.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Teacher`, `Slot`, `SlotGrid`,
//!   `PenaltyWeights`, `PenaltyReport`, `Timetable`
//! - **`evaluator`**: The penalty function
//! - **`ga`**: GA framework and the slot-indexed timetable encoding
//! - **`scheduler`**: Search driver (`Timetabler`) and KPIs
//! - **`validation`**: Roster feasibility checks
//! - **`config`**: Tunable parameters with defaults
//!
//! # Example
//!
//! ```
//! use u_timetable::config::TimetableConfig;
//! use u_timetable::models::Teacher;
//! use u_timetable::scheduler::generate;
//!
//! let roster = vec![Teacher::new("Alice", "Math", 3), Teacher::new("Bob", "Physics", 2)];
//! let solution = generate(&roster, &TimetableConfig::default().with_seed(7)).unwrap();
//! println!("penalty {}\n{}", solution.penalty, solution.timetable);
//! ```
//!
//! # References
//!
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

pub mod config;
pub mod evaluator;
pub mod ga;
pub mod models;
pub mod scheduler;
pub mod validation;
