//! Timetable search driver.
//!
//! # Algorithm
//!
//! 1. Validate the configuration and build the slot grid.
//! 2. Check roster feasibility; an infeasible roster fails before any search.
//! 3. Run the GA for the fixed generation budget.
//! 4. Format the best-ever assignment as a weekly table.
//!
//! A non-zero final penalty is a normal outcome for difficult rosters. It is
//! reported in the solution, never turned into an error.

use tracing::instrument;

use crate::config::{ConfigError, TimetableConfig};
use crate::ga::{GaRunner, TimetableChromosome, TimetableGaProblem};
use crate::models::{PenaltyReport, SlotGrid, Teacher, TeacherId, Timetable};
use crate::validation::{InfeasibleRosterError, validate_roster};

/// Errors surfaced to the caller. Neither kind is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimetableError {
    #[error(transparent)]
    InfeasibleRoster(#[from] InfeasibleRosterError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Best timetable found by a run.
#[derive(Debug, Clone)]
pub struct TimetableSolution {
    /// Winning assignment, one entry per assignable slot.
    pub genes: Vec<Option<TeacherId>>,
    /// Weighted penalty of `genes` (0 = perfect).
    pub penalty: f64,
    /// Per-rule breakdown of `penalty`.
    pub report: PenaltyReport,
    /// Formatted weekly table.
    pub timetable: Timetable,
    /// Generations evaluated.
    pub generations: usize,
    /// Best-ever penalty after each generation.
    pub history: Vec<f64>,
}

impl TimetableSolution {
    /// Whether every rule is satisfied.
    #[inline]
    pub fn is_perfect(&self) -> bool {
        self.report.is_perfect()
    }
}

/// Genetic timetable generator.
///
/// # Example
///
/// ```
/// use u_timetable::config::TimetableConfig;
/// use u_timetable::models::Teacher;
/// use u_timetable::scheduler::Timetabler;
///
/// let roster = vec![
///     Teacher::new("Alice", "Math", 4),
///     Teacher::new("Bob", "Physics", 4),
/// ];
/// let timetabler = Timetabler::new(TimetableConfig::default().with_seed(42));
/// let solution = timetabler.run(&roster).unwrap();
/// assert_eq!(solution.timetable.count_for("Alice"), 4);
/// assert_eq!(solution.penalty, 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Timetabler {
    config: TimetableConfig,
}

impl Timetabler {
    /// Creates a generator with the given configuration.
    pub fn new(config: TimetableConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// The slot grid this generator assigns into.
    pub fn grid(&self) -> SlotGrid {
        self.config.grid.build()
    }

    /// Searches for the lowest-penalty timetable.
    ///
    /// # Errors
    /// - [`TimetableError::Config`] if the configuration is invalid.
    /// - [`TimetableError::InfeasibleRoster`] if the roster is empty, a
    ///   credit request is outside 1..=8, or the total exceeds the slots.
    #[instrument(skip_all, fields(teachers = roster.len()))]
    pub fn run(&self, roster: &[Teacher]) -> Result<TimetableSolution, TimetableError> {
        self.config.validate()?;
        let grid = self.grid();
        validate_roster(roster, &grid)?;

        let search = &self.config.search;
        tracing::info!(
            slots = grid.len(),
            population = search.population_size,
            generations = search.generations,
            seed = ?search.seed,
            "starting timetable search"
        );

        let problem = TimetableGaProblem::new(roster, grid)
            .with_weights(self.config.weights)
            .with_mutation_rate(search.mutation_rate);
        let result = GaRunner::run(&problem, &self.config.ga_config());

        let solution = Self::finish(&problem, result.best, result.generations, result.history);
        if solution.is_perfect() {
            tracing::info!(generations = solution.generations, "found a conflict-free timetable");
        } else {
            tracing::warn!(
                penalty = solution.penalty,
                credit_mismatch = solution.report.credit_mismatch,
                daily_overload = solution.report.daily_overload,
                consecutive = solution.report.consecutive,
                "best timetable still violates rules"
            );
        }
        Ok(solution)
    }

    fn finish(
        problem: &TimetableGaProblem,
        best: TimetableChromosome,
        generations: usize,
        history: Vec<f64>,
    ) -> TimetableSolution {
        let report = problem.report(&best);
        let timetable = Timetable::from_assignment(&best.genes, &problem.roster, &problem.grid);
        TimetableSolution {
            genes: best.genes,
            penalty: report.total,
            report,
            timetable,
            generations,
            history,
        }
    }
}

/// Runs one search with `config`.
pub fn generate(roster: &[Teacher], config: &TimetableConfig) -> Result<TimetableSolution, TimetableError> {
    Timetabler::new(config.clone()).run(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RosterIssue;

    fn config() -> TimetableConfig {
        TimetableConfig::default().with_seed(42)
    }

    #[test]
    fn test_alice_bob_perfect() {
        let roster = vec![Teacher::new("Alice", "Math", 4), Teacher::new("Bob", "Physics", 4)];
        let solution = generate(&roster, &config()).unwrap();
        assert_eq!(solution.penalty, 0.0);
        assert!(solution.is_perfect());
        assert_eq!(solution.genes.len(), 35);
        assert_eq!(solution.timetable.count_for("Alice"), 4);
        assert_eq!(solution.timetable.count_for("Bob"), 4);
        assert_eq!(solution.timetable.empty_count(), 27);
        assert_eq!(solution.generations, 100);
    }

    #[test]
    fn test_nine_credits_rejected() {
        let roster = vec![Teacher::new("Carol", "Art", 9)];
        let err = generate(&roster, &config()).unwrap_err();
        match err {
            TimetableError::InfeasibleRoster(e) => {
                assert!(e.has(|i| matches!(i, RosterIssue::CreditsOutOfRange { .. })))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert!(matches!(
            generate(&[], &config()),
            Err(TimetableError::InfeasibleRoster(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let roster = vec![Teacher::new("Alice", "Math", 4)];
        let err = generate(&roster, &config().with_population_size(0)).unwrap_err();
        assert!(matches!(err, TimetableError::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn test_oversized_grid_rejected_before_build() {
        let roster = vec![Teacher::new("Alice", "Math", 4)];
        let err = generate(&roster, &config().with_grid(usize::MAX, 2, None)).unwrap_err();
        assert!(matches!(
            err,
            TimetableError::Config(ConfigError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_history_monotone() {
        let roster = vec![
            Teacher::new("A", "X", 8),
            Teacher::new("B", "Y", 8),
            Teacher::new("C", "Z", 7),
            Teacher::new("D", "W", 6),
        ];
        let solution = generate(&roster, &config().with_generations(40)).unwrap();
        assert_eq!(solution.history.len(), 40);
        assert!(solution.history.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(*solution.history.last().unwrap(), solution.penalty);
    }

    #[test]
    fn test_stop_at_zero_keeps_result() {
        let roster = vec![Teacher::new("Alice", "Math", 4), Teacher::new("Bob", "Physics", 4)];
        let full = generate(&roster, &config()).unwrap();
        let early = generate(&roster, &config().with_stop_at_zero(true)).unwrap();
        assert_eq!(early.genes, full.genes);
        assert_eq!(early.penalty, 0.0);
        assert_eq!(early.generations, 1);
    }
}
