//! Core GA traits.

use rand::Rng;

/// A member of the population.
///
/// Lower fitness = better (minimization convention).
pub trait Individual: Clone + Send + Sync {
    /// Cached fitness (`f64::INFINITY` until evaluated).
    fn fitness(&self) -> f64;

    /// Stores an evaluated fitness.
    fn set_fitness(&mut self, fitness: f64);
}

/// Defines a GA optimization problem.
///
/// The runner owns the evolutionary mechanics (selection, elitism,
/// generation loop); the problem supplies encoding-specific operators.
pub trait GaProblem: Send + Sync {
    /// The chromosome type.
    type Individual: Individual;

    /// Creates one member of the initial population.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Computes fitness. Must be pure: no side effects, no randomness.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Produces one child from two parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Self::Individual;

    /// Mutates a freshly produced child in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rng: &mut R);
}
