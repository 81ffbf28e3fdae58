//! Engine configuration.
//!
//! Every tunable parameter with its default. Sections deserialize
//! independently with `#[serde(default)]`, so a caller may supply only the
//! fields it wants to override.
//!
//! # Defaults
//!
//! | Parameter | Default |
//! |-----------|---------|
//! | `grid.days` | 5 |
//! | `grid.periods_per_day` | 8 |
//! | `grid.reserved_period` | 4 (0-based; lunch) |
//! | `grid.days × grid.periods_per_day` | at most [`MAX_GRID_CELLS`] |
//! | `search.population_size` | 50 |
//! | `search.generations` | 100 |
//! | `search.mutation_rate` | 0.05 |
//! | `search.tournament_size` | 3 |
//! | `weights` | see [`PenaltyWeights`] |

use serde::{Deserialize, Serialize};

use crate::ga::GaConfig;
use crate::models::{PenaltyWeights, SlotGrid};

/// Upper bound on `days × periods_per_day`.
pub const MAX_GRID_CELLS: usize = 1024;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must have at least one day and one period (days={days}, periods_per_day={periods_per_day})")]
    EmptyGrid { days: usize, periods_per_day: usize },
    #[error("grid of {days} x {periods_per_day} exceeds {max} cells")]
    GridTooLarge {
        days: usize,
        periods_per_day: usize,
        max: usize,
    },
    #[error("reserved_period {reserved} is outside 0..{periods_per_day}")]
    ReservedPeriodOutOfRange {
        reserved: usize,
        periods_per_day: usize,
    },
    #[error("grid has no assignable slots")]
    NoAssignableSlots,
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("tournament_size must be at least 1, got {0}")]
    TournamentTooSmall(usize),
    #[error("mutation_rate must be within [0, 1], got {0}")]
    MutationRateOutOfRange(f64),
    #[error("penalty weights must be finite and non-negative: {0:?}")]
    InvalidWeights(PenaltyWeights),
}

/// Weekly grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridShape {
    /// Days per week.
    pub days: usize,
    /// Periods per day, reserved period included.
    pub periods_per_day: usize,
    /// 0-based period reserved on every day. `None` = no reserved period.
    pub reserved_period: Option<usize>,
}

impl Default for GridShape {
    fn default() -> Self {
        Self {
            days: 5,
            periods_per_day: 8,
            reserved_period: Some(4),
        }
    }
}

impl GridShape {
    /// Builds the slot grid for this shape.
    pub fn build(&self) -> SlotGrid {
        SlotGrid::build(self.days, self.periods_per_day, self.reserved_period)
    }
}

/// Genetic search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Candidates per generation.
    pub population_size: usize,
    /// Fixed generation budget.
    pub generations: usize,
    /// Per-slot mutation probability.
    pub mutation_rate: f64,
    /// Candidates sampled per tournament.
    pub tournament_size: usize,
    /// Random seed. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Evaluate each generation on the rayon thread pool.
    pub parallel: bool,
    /// Stop once a zero-penalty candidate is found.
    pub stop_at_zero: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.05,
            tournament_size: 3,
            seed: None,
            parallel: true,
            stop_at_zero: false,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Grid geometry.
    pub grid: GridShape,
    /// Search parameters.
    pub search: SearchParams,
    /// Penalty weights.
    pub weights: PenaltyWeights,
}

impl TimetableConfig {
    /// Sets the grid shape.
    pub fn with_grid(mut self, days: usize, periods_per_day: usize, reserved_period: Option<usize>) -> Self {
        self.grid = GridShape {
            days,
            periods_per_day,
            reserved_period,
        };
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.search.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.search.generations = n;
        self
    }

    /// Sets the per-slot mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.search.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.search.tournament_size = k;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.search.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.search.parallel = parallel;
        self
    }

    /// Enables or disables early exit at zero penalty.
    pub fn with_stop_at_zero(mut self, stop: bool) -> Self {
        self.search.stop_at_zero = stop;
        self
    }

    /// Sets the penalty weights.
    pub fn with_weights(mut self, weights: PenaltyWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let GridShape {
            days,
            periods_per_day,
            reserved_period,
        } = self.grid;
        if days == 0 || periods_per_day == 0 {
            return Err(ConfigError::EmptyGrid {
                days,
                periods_per_day,
            });
        }
        let within_bounds = days
            .checked_mul(periods_per_day)
            .is_some_and(|cells| cells <= MAX_GRID_CELLS);
        if !within_bounds {
            return Err(ConfigError::GridTooLarge {
                days,
                periods_per_day,
                max: MAX_GRID_CELLS,
            });
        }
        if let Some(reserved) = reserved_period {
            if reserved >= periods_per_day {
                return Err(ConfigError::ReservedPeriodOutOfRange {
                    reserved,
                    periods_per_day,
                });
            }
            if periods_per_day == 1 {
                return Err(ConfigError::NoAssignableSlots);
            }
        }

        let s = &self.search;
        if s.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(s.population_size));
        }
        if s.tournament_size == 0 {
            return Err(ConfigError::TournamentTooSmall(s.tournament_size));
        }
        if !(0.0..=1.0).contains(&s.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(s.mutation_rate));
        }
        if !self.weights.is_valid() {
            return Err(ConfigError::InvalidWeights(self.weights));
        }
        Ok(())
    }

    /// Runner configuration derived from the search section.
    pub fn ga_config(&self) -> GaConfig {
        let s = &self.search;
        let mut config = GaConfig::default()
            .with_population_size(s.population_size)
            .with_max_generations(s.generations)
            .with_tournament_size(s.tournament_size)
            .with_parallel(s.parallel)
            .with_stop_at_zero(s.stop_at_zero);
        if let Some(seed) = s.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimetableConfig::default();
        assert_eq!(config.search.population_size, 50);
        assert_eq!(config.search.generations, 100);
        assert_eq!(config.grid.build().len(), 35);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: TimetableConfig = serde_json::from_str(
            r#"{"search": {"generations": 20, "seed": 7}, "grid": {"reserved_period": null}}"#,
        )
        .unwrap();
        assert_eq!(config.search.generations, 20);
        assert_eq!(config.search.seed, Some(7));
        assert_eq!(config.search.population_size, 50);
        assert_eq!(config.grid.reserved_period, None);
        assert_eq!(config.grid.build().len(), 40);
        assert_eq!(config.weights, PenaltyWeights::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = TimetableConfig::default();
        assert_eq!(
            base.clone().with_population_size(1).validate(),
            Err(ConfigError::PopulationTooSmall(1))
        );
        assert_eq!(
            base.clone().with_tournament_size(0).validate(),
            Err(ConfigError::TournamentTooSmall(0))
        );
        assert!(matches!(
            base.clone().with_mutation_rate(1.5).validate(),
            Err(ConfigError::MutationRateOutOfRange(_))
        ));
        assert!(matches!(
            base.clone().with_grid(5, 8, Some(8)).validate(),
            Err(ConfigError::ReservedPeriodOutOfRange { .. })
        ));
        assert!(matches!(
            base.clone().with_grid(0, 8, None).validate(),
            Err(ConfigError::EmptyGrid { .. })
        ));
        assert_eq!(
            base.clone().with_grid(5, 1, Some(0)).validate(),
            Err(ConfigError::NoAssignableSlots)
        );
        assert!(matches!(
            base.with_weights(PenaltyWeights::default().with_credit_mismatch(-1.0))
                .validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        let base = TimetableConfig::default();
        assert_eq!(
            base.clone().with_grid(usize::MAX, 2, None).validate(),
            Err(ConfigError::GridTooLarge {
                days: usize::MAX,
                periods_per_day: 2,
                max: MAX_GRID_CELLS,
            })
        );
        assert!(matches!(
            base.clone().with_grid(41, 25, Some(4)).validate(),
            Err(ConfigError::GridTooLarge { .. })
        ));
        assert!(base.with_grid(32, 32, Some(4)).validate().is_ok());
    }

    #[test]
    fn test_ga_config_mapping() {
        let ga = TimetableConfig::default()
            .with_population_size(30)
            .with_generations(12)
            .with_tournament_size(4)
            .with_seed(99)
            .with_parallel(false)
            .ga_config();
        assert_eq!(ga.population_size, 30);
        assert_eq!(ga.max_generations, 12);
        assert_eq!(ga.tournament_size, 4);
        assert_eq!(ga.seed, Some(99));
        assert!(!ga.parallel);
    }
}
