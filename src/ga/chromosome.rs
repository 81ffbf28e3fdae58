//! Flat slot-indexed chromosome for timetabling.
//!
//! # Encoding
//!
//! One gene per assignable slot, in the slot grid's priority order. Each
//! gene is either a roster index or `None` (empty). Crossover and mutation
//! work position-wise, so every operator is O(slot count) and never changes
//! the chromosome length.

use rand::Rng;

use super::Individual;
use crate::models::{MAX_DAILY_LOAD, SlotGrid, Teacher, TeacherId};

/// Slot-indexed timetable chromosome.
///
/// Lower fitness = better timetable (minimization convention).
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableChromosome {
    /// Teacher per slot, in priority order.
    pub genes: Vec<Option<TeacherId>>,
    /// Fitness value (lower = better).
    pub fitness: f64,
}

impl Individual for TimetableChromosome {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl TimetableChromosome {
    /// Wraps genes with an unevaluated fitness.
    pub fn from_genes(genes: Vec<Option<TeacherId>>) -> Self {
        Self {
            genes,
            fitness: f64::INFINITY,
        }
    }

    /// An all-empty chromosome.
    pub fn empty(slot_count: usize) -> Self {
        Self::from_genes(vec![None; slot_count])
    }

    /// Creates a uniformly random chromosome over {teachers, empty}.
    pub fn random<R: Rng>(teacher_count: usize, slot_count: usize, rng: &mut R) -> Self {
        let genes = (0..slot_count)
            .map(|_| random_gene(teacher_count, rng))
            .collect();
        Self::from_genes(genes)
    }

    /// Creates a round-robin seeded chromosome.
    ///
    /// # Algorithm
    /// 1. Start the round-robin at a random roster position.
    /// 2. Walk the still-empty slots in priority order. At each slot take the
    ///    next teacher (roster order, wrapping) that still needs classes and
    ///    would neither exceed the daily load nor sit next to itself.
    /// 3. If no such teacher exists, pick uniformly among the teachers with
    ///    remaining need plus the empty option.
    /// 4. Repeat passes until every need is met or a pass assigns nothing.
    pub fn seeded<R: Rng>(roster: &[Teacher], grid: &SlotGrid, rng: &mut R) -> Self {
        let n = roster.len();
        let days = grid.days();
        let mut genes: Vec<Option<TeacherId>> = vec![None; grid.len()];
        if n == 0 || grid.is_empty() {
            return Self::from_genes(genes);
        }

        let mut remaining: Vec<u32> = roster.iter().map(|t| t.credits_per_week as u32).collect();
        let mut daily = vec![0u32; n * days];
        let mut cursor = rng.random_range(0..n);

        loop {
            let mut assigned_any = false;

            for idx in 0..genes.len() {
                if genes[idx].is_some() {
                    continue;
                }
                let needy: Vec<TeacherId> = (0..n).filter(|&t| remaining[t] > 0).collect();
                if needy.is_empty() {
                    break;
                }

                let day = grid.day_of(idx);
                let preferred = (0..n).map(|offset| (cursor + offset) % n).find(|&t| {
                    remaining[t] > 0
                        && daily[t * days + day] < MAX_DAILY_LOAD
                        && !adjacent_to(grid, &genes, idx, t)
                });

                let choice = match preferred {
                    Some(t) => {
                        cursor = (t + 1) % n;
                        Some(t)
                    }
                    None => needy.get(rng.random_range(0..=needy.len())).copied(),
                };

                if let Some(t) = choice {
                    genes[idx] = Some(t);
                    remaining[t] -= 1;
                    daily[t * days + day] += 1;
                    assigned_any = true;
                }
            }

            if !assigned_any || remaining.iter().all(|&r| r == 0) {
                break;
            }
        }

        Self::from_genes(genes)
    }

    /// Number of slots assigned to a teacher.
    pub fn count_for(&self, teacher: TeacherId) -> usize {
        self.genes.iter().filter(|g| **g == Some(teacher)).count()
    }

    /// Validates length and teacher references.
    pub fn is_valid(&self, teacher_count: usize, slot_count: usize) -> bool {
        self.genes.len() == slot_count
            && self
                .genes
                .iter()
                .all(|g| g.map_or(true, |t| t < teacher_count))
    }
}

fn adjacent_to(grid: &SlotGrid, genes: &[Option<TeacherId>], idx: usize, teacher: TeacherId) -> bool {
    let (before, after) = grid.neighbors(idx);
    [before, after]
        .into_iter()
        .flatten()
        .any(|n| genes[n] == Some(teacher))
}

/// Draws uniformly from {teacher 0..teacher_count, empty}.
fn random_gene<R: Rng>(teacher_count: usize, rng: &mut R) -> Option<TeacherId> {
    let pick = rng.random_range(0..=teacher_count);
    (pick < teacher_count).then_some(pick)
}

// ======================== Crossover operators ========================

/// Single-point crossover.
///
/// Picks a cut in `1..len` and takes parent 1's genes before the cut and
/// parent 2's genes from the cut onward. No repair is applied: credit
/// mismatches are left for the penalty function to select against.
pub fn single_point_crossover<R: Rng>(
    p1: &TimetableChromosome,
    p2: &TimetableChromosome,
    rng: &mut R,
) -> TimetableChromosome {
    assert_eq!(
        p1.genes.len(),
        p2.genes.len(),
        "parents must have the same length"
    );
    let len = p1.genes.len();
    if len < 2 {
        return TimetableChromosome::from_genes(p1.genes.clone());
    }

    let cut = rng.random_range(1..len);
    let mut genes = Vec::with_capacity(len);
    genes.extend_from_slice(&p1.genes[..cut]);
    genes.extend_from_slice(&p2.genes[cut..]);
    TimetableChromosome::from_genes(genes)
}

// ======================== Mutation operators ========================

/// Reset mutation: each gene is independently replaced, with probability
/// `rate`, by a value drawn uniformly from {all teachers, empty}.
///
/// # Panics
/// If `rate` is outside `[0, 1]` or NaN.
pub fn reset_mutation<R: Rng>(
    chromosome: &mut TimetableChromosome,
    teacher_count: usize,
    rate: f64,
    rng: &mut R,
) {
    for gene in chromosome.genes.iter_mut() {
        if rng.random_bool(rate) {
            *gene = random_gene(teacher_count, rng);
        }
    }
}
