//! Parent selection.

use rand::Rng;
use rand::seq::index;

use super::Individual;

/// Tournament selection: samples `k` individuals and returns the index of
/// the one with the lowest fitness.
///
/// Within one tournament individuals are sampled without replacement when
/// `k <= population.len()`, with replacement otherwise. Separate calls are
/// independent. Ties go to the first sampled individual.
///
/// # Panics
/// If the population is empty or `k == 0`.
pub fn tournament_select<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    assert!(!population.is_empty(), "cannot select from an empty population");
    assert!(k > 0, "tournament size must be at least 1");

    let len = population.len();
    let contenders: Vec<usize> = if k <= len {
        index::sample(rng, len, k).into_vec()
    } else {
        (0..k).map(|_| rng.random_range(0..len)).collect()
    };

    let mut best = contenders[0];
    for &idx in &contenders[1..] {
        if population[idx].fitness() < population[best].fitness() {
            best = idx;
        }
    }
    best
}
