//! Constraint evaluator.
//!
//! Scores an assignment (slot index → teacher or empty) against a roster.
//! Evaluation is a pure function of `(genes, roster)`: no hidden state and
//! no randomness, so a population can be scored concurrently.
//!
//! # Complexity
//! O(S + T × D) where S = slots, T = teachers, D = days.

use crate::models::{MAX_DAILY_LOAD, PenaltyReport, PenaltyWeights, SlotGrid, Teacher, TeacherId};

/// Penalty function bound to one slot grid.
///
/// Caches the slot → day mapping and the adjacent slot pairs.
#[derive(Debug, Clone)]
pub struct ConstraintEvaluator {
    slot_days: Vec<usize>,
    days: usize,
    adjacent_pairs: Vec<(usize, usize)>,
    weights: PenaltyWeights,
}

impl ConstraintEvaluator {
    /// Creates an evaluator for a grid.
    pub fn new(grid: &SlotGrid, weights: PenaltyWeights) -> Self {
        Self {
            slot_days: grid.slots().iter().map(|s| s.day).collect(),
            days: grid.days(),
            adjacent_pairs: grid.adjacent_pairs().to_vec(),
            weights,
        }
    }

    /// The penalty weights in use.
    pub fn weights(&self) -> &PenaltyWeights {
        &self.weights
    }

    /// Number of slots an assignment must have.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slot_days.len()
    }

    /// Total weighted penalty (0 = perfect).
    pub fn evaluate(&self, genes: &[Option<TeacherId>], roster: &[Teacher]) -> f64 {
        self.report(genes, roster).total
    }

    /// Per-rule violation counts and weighted total.
    ///
    /// # Panics
    /// If `genes.len()` differs from the grid length or a gene references a
    /// teacher outside the roster.
    pub fn report(&self, genes: &[Option<TeacherId>], roster: &[Teacher]) -> PenaltyReport {
        assert_eq!(
            genes.len(),
            self.slot_days.len(),
            "assignment length must match the slot grid"
        );

        let n = roster.len();
        let mut assigned = vec![0u32; n];
        let mut daily = vec![0u32; n * self.days];

        for (idx, gene) in genes.iter().enumerate() {
            if let Some(t) = *gene {
                assert!(t < n, "gene references teacher {t} outside roster of {n}");
                assigned[t] += 1;
                daily[t * self.days + self.slot_days[idx]] += 1;
            }
        }

        let credit_mismatch: u32 = roster
            .iter()
            .zip(&assigned)
            .map(|(teacher, &count)| count.abs_diff(teacher.credits_per_week as u32))
            .sum();

        let daily_overload: u32 = daily
            .iter()
            .map(|&count| count.saturating_sub(MAX_DAILY_LOAD))
            .sum();

        let consecutive = self
            .adjacent_pairs
            .iter()
            .filter(|&&(a, b)| genes[a].is_some() && genes[a] == genes[b])
            .count() as u32;

        PenaltyReport::from_counts(credit_mismatch, daily_overload, consecutive, &self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> SlotGrid {
        SlotGrid::build(5, 8, Some(4))
    }

    fn roster() -> Vec<Teacher> {
        vec![Teacher::new("Alice", "Math", 4), Teacher::new("Bob", "Physics", 4)]
    }

    fn place(genes: &mut [Option<TeacherId>], grid: &SlotGrid, day: usize, period: usize, t: TeacherId) {
        genes[grid.index_of(day, period).unwrap()] = Some(t);
    }

    #[test]
    fn test_perfect_assignment_scores_zero() {
        let grid = grid();
        let eval = ConstraintEvaluator::new(&grid, PenaltyWeights::default());
        let mut genes = vec![None; grid.len()];
        for day in 0..4 {
            place(&mut genes, &grid, day, 0, 0);
            place(&mut genes, &grid, day, 2, 1);
        }
        let report = eval.report(&genes, &roster());
        assert!(report.is_perfect());
        assert_eq!(eval.evaluate(&genes, &roster()), 0.0);
    }

    #[test]
    fn test_empty_assignment_counts_all_credits() {
        let grid = grid();
        let eval = ConstraintEvaluator::new(&grid, PenaltyWeights::default());
        let genes = vec![None; grid.len()];
        let report = eval.report(&genes, &roster());
        assert_eq!(report.credit_mismatch, 8);
        assert!((report.total - 80.0).abs() < 1e-10);
    }

    #[test]
    fn test_surplus_counts_as_mismatch() {
        let grid = grid();
        let eval = ConstraintEvaluator::new(&grid, PenaltyWeights::default());
        let roster = vec![Teacher::new("Alice", "Math", 1)];
        let mut genes = vec![None; grid.len()];
        place(&mut genes, &grid, 0, 0, 0);
        place(&mut genes, &grid, 1, 0, 0);
        place(&mut genes, &grid, 2, 0, 0);
        assert_eq!(eval.report(&genes, &roster).credit_mismatch, 2);
    }

    #[test]
    fn test_daily_overload() {
        let grid = grid();
        let eval = ConstraintEvaluator::new(&grid, PenaltyWeights::default());
        let roster = vec![Teacher::new("Alice", "Math", 4)];
        let mut genes = vec![None; grid.len()];
        for period in [0, 2, 5, 7] {
            place(&mut genes, &grid, 0, period, 0);
        }
        let report = eval.report(&genes, &roster);
        assert_eq!(report.credit_mismatch, 0);
        assert_eq!(report.daily_overload, 2);
        assert_eq!(report.consecutive, 0);
        assert!((report.total - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_consecutive_pairs() {
        let grid = grid();
        let eval = ConstraintEvaluator::new(&grid, PenaltyWeights::default());
        let roster = vec![Teacher::new("Alice", "Math", 2), Teacher::new("Bob", "Physics", 2)];
        let mut genes = vec![None; grid.len()];
        place(&mut genes, &grid, 0, 0, 0);
        place(&mut genes, &grid, 0, 1, 0); // back-to-back
        place(&mut genes, &grid, 1, 3, 1);
        place(&mut genes, &grid, 1, 5, 1); // lunch in between
        let report = eval.report(&genes, &roster);
        assert_eq!(report.consecutive, 1);
        assert!((report.total - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_custom_weights() {
        let grid = grid();
        let weights = PenaltyWeights::default().with_credit_mismatch(1.0);
        let eval = ConstraintEvaluator::new(&grid, weights);
        let genes = vec![None; grid.len()];
        assert!((eval.evaluate(&genes, &roster()) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_evaluation_is_pure() {
        let grid = grid();
        let eval = ConstraintEvaluator::new(&grid, PenaltyWeights::default());
        let mut genes = vec![None; grid.len()];
        place(&mut genes, &grid, 2, 2, 1);
        let a = eval.report(&genes, &roster());
        let b = eval.report(&genes, &roster());
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn test_wrong_length_panics() {
        let grid = grid();
        let eval = ConstraintEvaluator::new(&grid, PenaltyWeights::default());
        eval.evaluate(&[None::<TeacherId>; 10], &roster());
    }

    #[test]
    #[should_panic]
    fn test_unknown_teacher_panics() {
        let grid = grid();
        let eval = ConstraintEvaluator::new(&grid, PenaltyWeights::default());
        let mut genes = vec![None; grid.len()];
        genes[0] = Some(7);
        eval.evaluate(&genes, &roster());
    }
}
