//! Genetic search for weekly timetables.
//!
//! A small generational GA framework (problem trait, runner, tournament
//! selection) plus the timetable-specific encoding on top of it.
//!
//! # Encoding
//!
//! One gene per assignable slot in the grid's priority order; each gene is a
//! roster index or empty. See [`TimetableChromosome`].
//!
//! # Submodules
//!
//! - `traits`: [`GaProblem`] and [`Individual`]
//! - `runner`: [`GaRunner`] generation loop with elitism
//! - `selection`: [`tournament_select`]
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

mod chromosome;
mod config;
mod problem;
mod runner;
mod selection;
mod traits;

pub use chromosome::{TimetableChromosome, reset_mutation, single_point_crossover};
pub use config::GaConfig;
pub use problem::{DEFAULT_MUTATION_RATE, TimetableGaProblem};
pub use runner::{GaResult, GaRunner};
pub use selection::tournament_select;
pub use traits::{GaProblem, Individual};
