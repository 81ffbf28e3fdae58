//! Timetabling GA problem definition.
//!
//! Implements [`GaProblem`] for weekly timetabling. Bridges the roster and
//! slot grid to the generic GA runner.

use rand::Rng;

use super::chromosome::{TimetableChromosome, reset_mutation, single_point_crossover};
use super::GaProblem;
use crate::evaluator::ConstraintEvaluator;
use crate::models::{PenaltyReport, PenaltyWeights, SlotGrid, Teacher};

/// Default per-slot mutation probability.
pub const DEFAULT_MUTATION_RATE: f64 = 0.05;

/// GA problem definition for timetabling.
///
/// Fitness is the weighted penalty of the assignment.
///
/// # Example
/// ```
/// use u_timetable::ga::{GaConfig, GaRunner, TimetableGaProblem};
/// use u_timetable::models::{SlotGrid, Teacher};
///
/// let roster = vec![Teacher::new("Alice", "Math", 4), Teacher::new("Bob", "Physics", 4)];
/// let grid = SlotGrid::build(5, 8, Some(4));
/// let problem = TimetableGaProblem::new(&roster, grid);
/// let config = GaConfig::default().with_max_generations(10).with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// assert_eq!(result.best.genes.len(), 35);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableGaProblem {
    /// Teacher roster snapshot.
    pub roster: Vec<Teacher>,
    /// Assignable slots.
    pub grid: SlotGrid,
    /// Penalty function.
    pub evaluator: ConstraintEvaluator,
    /// Per-slot mutation probability (default: 0.05).
    pub mutation_rate: f64,
}

impl TimetableGaProblem {
    /// Creates a problem with default weights and mutation rate.
    pub fn new(roster: &[Teacher], grid: SlotGrid) -> Self {
        let evaluator = ConstraintEvaluator::new(&grid, PenaltyWeights::default());
        Self {
            roster: roster.to_vec(),
            grid,
            evaluator,
            mutation_rate: DEFAULT_MUTATION_RATE,
        }
    }

    /// Sets the penalty weights.
    pub fn with_weights(mut self, weights: PenaltyWeights) -> Self {
        self.evaluator = ConstraintEvaluator::new(&self.grid, weights);
        self
    }

    /// Sets the mutation rate (clamped to [0, 1]; NaN disables mutation).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = if rate.is_nan() {
            0.0
        } else {
            rate.clamp(0.0, 1.0)
        };
        self
    }

    /// Per-rule penalty breakdown of a chromosome.
    pub fn report(&self, chromosome: &TimetableChromosome) -> PenaltyReport {
        self.evaluator.report(&chromosome.genes, &self.roster)
    }
}

impl GaProblem for TimetableGaProblem {
    type Individual = TimetableChromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> TimetableChromosome {
        TimetableChromosome::seeded(&self.roster, &self.grid, rng)
    }

    fn evaluate(&self, individual: &TimetableChromosome) -> f64 {
        self.evaluator.evaluate(&individual.genes, &self.roster)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &TimetableChromosome,
        parent2: &TimetableChromosome,
        rng: &mut R,
    ) -> TimetableChromosome {
        single_point_crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut TimetableChromosome, rng: &mut R) {
        reset_mutation(individual, self.roster.len(), self.mutation_rate, rng);
    }
}
