//! GA runner configuration.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Configuration for [`GaRunner`](super::GaRunner).
///
/// # Examples
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(100)
///     .with_tournament_size(3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Individuals per generation.
    pub population_size: usize,

    /// Fixed generation budget.
    pub max_generations: usize,

    /// Individuals sampled per tournament.
    pub tournament_size: usize,

    /// Whether to evaluate a generation in parallel using rayon.
    pub parallel: bool,

    /// Stop as soon as an individual with fitness 0 is found.
    pub stop_at_zero: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Checked between generations; when set, the run stops early.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            tournament_size: 3,
            parallel: true,
            stop_at_zero: false,
            seed: None,
            cancel: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_stop_at_zero(mut self, stop: bool) -> Self {
        self.stop_at_zero = stop;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        Ok(())
    }
}
