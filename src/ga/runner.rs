//! Generational GA runner.
//!
//! # Algorithm
//!
//! 1. Create `population_size` individuals via [`GaProblem::create_individual`].
//! 2. For each of `max_generations` generations:
//!    - evaluate every individual (in parallel when enabled; the whole
//!      generation is scored before breeding starts),
//!    - update the best-ever individual,
//!    - build the next generation: the best-ever individual unchanged, then
//!      `population_size − 1` children, each from two tournament-selected
//!      parents via crossover followed by mutation.
//! 3. Return the best-ever individual.
//!
//! Because the best individual is always carried over, the best-ever fitness
//! never increases from one generation to the next.
//!
//! All randomness comes from one `ChaCha8Rng` per run, so a seeded run is
//! reproducible regardless of the `parallel` setting.

use std::sync::atomic::Ordering;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::selection::tournament_select;
use super::{GaConfig, GaProblem, Individual};

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I> {
    /// Best individual seen across all generations.
    pub best: I,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Number of generations evaluated.
    pub generations: usize,
    /// Best-ever fitness after each evaluated generation.
    pub history: Vec<f64>,
    /// Whether the run stopped on the cancel flag.
    pub cancelled: bool,
}

/// Generational GA with tournament selection and single-elite carry-over.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    ///
    /// # Panics
    /// If `config` fails [`GaConfig::validate`].
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::Individual> {
        Self::run_with_observer(problem, config, |_, _| {})
    }

    /// Runs the GA, calling `observer(generation, population)` after each
    /// generation has been evaluated.
    pub fn run_with_observer<P, F>(
        problem: &P,
        config: &GaConfig,
        mut observer: F,
    ) -> GaResult<P::Individual>
    where
        P: GaProblem,
        F: FnMut(usize, &[P::Individual]),
    {
        if let Err(e) = config.validate() {
            panic!("invalid GA configuration: {e}");
        }

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        let mut best: Option<P::Individual> = None;
        let mut history = Vec::with_capacity(config.max_generations);
        let mut cancelled = false;

        for generation in 0..config.max_generations {
            if config
                .cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
            {
                tracing::warn!(generation, "GA run cancelled");
                cancelled = true;
                break;
            }

            Self::evaluate_population(problem, &mut population, config.parallel);
            observer(generation, &population);

            let candidate = &population[Self::best_index(&population)];
            let elite = match best.take() {
                Some(b) if b.fitness() <= candidate.fitness() => b,
                _ => candidate.clone(),
            };
            let best_fitness = elite.fitness();
            history.push(best_fitness);
            tracing::debug!(generation, best_fitness, "generation evaluated");

            if config.stop_at_zero && best_fitness <= 0.0 {
                tracing::debug!(generation, "zero-penalty individual found, stopping early");
                best = Some(elite);
                break;
            }

            population = Self::next_generation(problem, &population, &elite, config, &mut rng);
            best = Some(elite);
        }

        let best = match best {
            Some(b) => b,
            None => {
                // No generation ran: pick from the initial population.
                Self::evaluate_population(problem, &mut population, config.parallel);
                population.swap_remove(Self::best_index(&population))
            }
        };

        GaResult {
            best_fitness: best.fitness(),
            best,
            generations: history.len(),
            history,
            cancelled,
        }
    }

    fn evaluate_population<P: GaProblem>(
        problem: &P,
        population: &mut [P::Individual],
        parallel: bool,
    ) {
        if parallel {
            population.par_iter_mut().for_each(|ind| {
                let fitness = problem.evaluate(ind);
                ind.set_fitness(fitness);
            });
        } else {
            for ind in population.iter_mut() {
                let fitness = problem.evaluate(ind);
                ind.set_fitness(fitness);
            }
        }
    }

    /// Index of the lowest-fitness individual; first one wins ties.
    fn best_index<I: Individual>(population: &[I]) -> usize {
        let mut best = 0;
        for (i, ind) in population.iter().enumerate().skip(1) {
            if ind.fitness() < population[best].fitness() {
                best = i;
            }
        }
        best
    }

    fn next_generation<P: GaProblem>(
        problem: &P,
        population: &[P::Individual],
        elite: &P::Individual,
        config: &GaConfig,
        rng: &mut ChaCha8Rng,
    ) -> Vec<P::Individual> {
        let mut next = Vec::with_capacity(config.population_size);
        next.push(elite.clone());
        while next.len() < config.population_size {
            let a = tournament_select(population, config.tournament_size, rng);
            let b = tournament_select(population, config.tournament_size, rng);
            let mut child = problem.crossover(&population[a], &population[b], rng);
            problem.mutate(&mut child, rng);
            next.push(child);
        }
        next
    }
}
